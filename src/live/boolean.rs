//! Live bool

use super::{impl_live_common, kind_mismatch, Live};
use crate::codable::{LiveCodable, LivePayload};
use crate::error::Result;
use crate::floatable::Floatable;
use crate::kind::LiveKind;
use crate::parameter::{Change, Invalidation, LiveParameter};
use crate::value::LiveValue;

/// A live `bool`, without bounds
#[derive(Debug)]
pub struct LiveBool {
    parameter: LiveParameter,
    value: bool,
    update_resolution: bool,
}

impl LiveBool {
    pub fn new(name: impl Into<String>, value: bool) -> Self {
        Self {
            parameter: LiveParameter::new(
                Some(LiveKind::Bool),
                name,
                Some(LiveValue::Bool(value)),
                None,
                None,
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

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, value: bool) -> Change {
        let invalidation = Invalidation::when(self.update_resolution);
        self.parameter.commit(&mut self.value, value, invalidation)
    }

    /// Flip the value
    pub fn toggle(&mut self) -> Change {
        self.set_value(!self.value)
    }
}

impl Live for LiveBool {
    impl_live_common!();

    fn get(&self) -> LiveValue {
        LiveValue::Bool(self.value)
    }

    fn set(&mut self, value: LiveValue) -> Result<Change> {
        match value {
            LiveValue::Bool(value) => Ok(self.set_value(value)),
            other => Err(kind_mismatch(&self.parameter, other.kind())),
        }
    }

    fn get_floats(&self) -> Vec<f64> {
        self.value.to_floats()
    }

    fn set_floats(&mut self, floats: &[f64]) -> Change {
        self.set_value(bool::from_floats(floats))
    }

    fn to_codable(&self) -> Option<LiveCodable> {
        Some(LiveCodable::new(
            self.dynamic_type_name(),
            LivePayload::Bool { bool: self.value },
        ))
    }

    fn set_codable(&mut self, codable: &LiveCodable) -> Result<Change> {
        match codable.payload {
            LivePayload::Bool { bool } => Ok(self.set_value(bool)),
            _ => Err(kind_mismatch(&self.parameter, Some(codable.kind()))),
        }
    }
}
