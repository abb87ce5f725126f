//! Live enum
//!
//! Presents an [`Enumerable`] case to metadata as its raw index: default and
//! bounds are `LiveValue::Int`, and the float form is `[raw index]`. Two
//! cases with the same raw index are the same value.

use super::{impl_live_common, kind_mismatch, Live};
use crate::codable::{LiveCodable, LivePayload};
use crate::enumerable::Enumerable;
use crate::error::Result;
use crate::floatable::Floatable;
use crate::kind::LiveKind;
use crate::parameter::{Change, Invalidation, LiveParameter};
use crate::value::{EnumCase, LiveValue};

/// A live case of an [`Enumerable`] type
pub struct LiveEnum<E: Enumerable> {
    parameter: LiveParameter,
    value: E,
    update_resolution: bool,
}

impl<E: Enumerable> LiveEnum<E> {
    /// Bounds are the smallest and largest raw index of `E`
    pub fn new(name: impl Into<String>, value: E) -> Self {
        let (min, max) = E::index_range();
        Self {
            parameter: LiveParameter::new(
                Some(LiveKind::Enum),
                name,
                Some(LiveValue::Int(value.index())),
                Some(LiveValue::Int(min)),
                Some(LiveValue::Int(max)),
            ),
            value,
            update_resolution: false,
        }
    }

    /// Signal changes as resolution changes instead of plain invalidations
    pub fn updating_resolution(mut self) -> Self {
        self.update_resolution = true;
        self
    }

    pub fn updates_resolution(&self) -> bool {
        self.update_resolution
    }

    pub fn value(&self) -> E {
        self.value
    }

    /// Kebab-case names of every case, for editors
    pub fn case_names(&self) -> Vec<String> {
        E::case_names()
    }

    pub fn case_count(&self) -> usize {
        E::case_count()
    }

    pub fn set_value(&mut self, value: E) -> Change {
        let changed = self.value.index() != value.index();
        self.value = value;
        let invalidation = Invalidation::when(self.update_resolution);
        self.parameter
            .dispatch(changed, invalidation, || LiveValue::Enum(EnumCase::of(value)))
    }

    /// Select the case with `index`, or the first case when none matches
    pub fn set_raw_index(&mut self, index: i64) -> Change {
        self.set_value(E::from_raw_index(index))
    }
}

impl<E: Enumerable> Live for LiveEnum<E> {
    impl_live_common!();

    fn get(&self) -> LiveValue {
        LiveValue::Enum(EnumCase::of(self.value))
    }

    /// Accepts an enum case or a bare raw index
    fn set(&mut self, value: LiveValue) -> Result<Change> {
        match value {
            LiveValue::Enum(case) => Ok(self.set_raw_index(case.index)),
            LiveValue::Int(index) => Ok(self.set_raw_index(index)),
            other => Err(kind_mismatch(&self.parameter, other.kind())),
        }
    }

    fn get_floats(&self) -> Vec<f64> {
        self.value.index().to_floats()
    }

    /// The raw index is read like an `Int`, saturating at the ends of the
    /// `i64` range; missing or NaN input selects the first case
    fn set_floats(&mut self, floats: &[f64]) -> Change {
        let case = match floats.first() {
            Some(float) if !float.is_nan() => E::from_raw_index(i64::from_floats(floats)),
            _ => E::from_order_index(0),
        };
        self.set_value(case)
    }

    fn to_codable(&self) -> Option<LiveCodable> {
        Some(LiveCodable::new(
            self.dynamic_type_name(),
            LivePayload::Enum {
                index: self.value.index(),
            },
        ))
    }

    fn set_codable(&mut self, codable: &LiveCodable) -> Result<Change> {
        match codable.payload {
            LivePayload::Enum { index } => Ok(self.set_raw_index(index)),
            _ => Err(kind_mismatch(&self.parameter, Some(codable.kind()))),
        }
    }
}

impl<E: Enumerable + std::fmt::Debug> std::fmt::Debug for LiveEnum<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveEnum")
            .field("parameter", &self.parameter)
            .field("value", &self.value)
            .field("update_resolution", &self.update_resolution)
            .finish()
    }
}
