//! Live floatable
//!
//! Wrapper for any [`Floatable`] value without a kind of its own. Equality
//! compares the float decompositions element by element. These wrappers
//! take part in the numeric bridge but not in envelope persistence.

use super::{impl_live_common, kind_mismatch, Live};
use crate::codable::LiveCodable;
use crate::error::Result;
use crate::floatable::Floatable;
use crate::parameter::{Change, Invalidation, LiveParameter};
use crate::value::LiveValue;

/// A live value of any [`Floatable`] type
pub struct LiveFloatable<F: Floatable> {
    parameter: LiveParameter,
    value: F,
    update_resolution: bool,
}

impl<F: Floatable> LiveFloatable<F> {
    pub fn new(name: impl Into<String>, value: F) -> Self {
        Self {
            parameter: LiveParameter::new(
                None,
                name,
                Some(LiveValue::Floats(value.to_floats())),
                None,
                None,
            ),
            value,
            update_resolution: false,
        }
    }

    /// Attach advisory bounds
    pub fn with_bounds(mut self, min: &F, max: &F) -> Self {
        self.parameter.set_bounds(
            Some(LiveValue::Floats(min.to_floats())),
            Some(LiveValue::Floats(max.to_floats())),
        );
        self
    }

    /// Signal changes as resolution changes instead of plain invalidations
    pub fn updating_resolution(mut self) -> Self {
        self.update_resolution = true;
        self
    }

    pub fn value(&self) -> &F {
        &self.value
    }

    pub fn set_value(&mut self, value: F) -> Change {
        let changed = self.value.to_floats() != value.to_floats();
        self.value = value;
        let invalidation = Invalidation::when(self.update_resolution);
        let value = &self.value;
        self.parameter
            .dispatch(changed, invalidation, || LiveValue::Floats(value.to_floats()))
    }
}

impl<F: Floatable> Live for LiveFloatable<F> {
    impl_live_common!();

    fn get(&self) -> LiveValue {
        LiveValue::Floats(self.value.to_floats())
    }

    /// Any value is accepted through its float decomposition
    fn set(&mut self, value: LiveValue) -> Result<Change> {
        Ok(self.set_floats(&value.to_floats()))
    }

    fn get_floats(&self) -> Vec<f64> {
        self.value.to_floats()
    }

    fn set_floats(&mut self, floats: &[f64]) -> Change {
        self.set_value(F::from_floats(floats))
    }

    fn to_codable(&self) -> Option<LiveCodable> {
        None
    }

    fn set_codable(&mut self, codable: &LiveCodable) -> Result<Change> {
        Err(kind_mismatch(&self.parameter, Some(codable.kind())))
    }
}

impl<F: Floatable + std::fmt::Debug> std::fmt::Debug for LiveFloatable<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveFloatable")
            .field("parameter", &self.parameter)
            .field("value", &self.value)
            .field("update_resolution", &self.update_resolution)
            .finish()
    }
}
