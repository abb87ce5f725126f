//! Live int

use std::ops::RangeInclusive;

use super::{impl_live_common, kind_mismatch, Live};
use crate::codable::{LiveCodable, LivePayload};
use crate::error::Result;
use crate::floatable::Floatable;
use crate::kind::LiveKind;
use crate::parameter::{Change, Invalidation, LiveParameter};
use crate::value::LiveValue;

/// Range used when none is given
pub const DEFAULT_INT_RANGE: RangeInclusive<i64> = 0..=10;

/// A live `i64`
#[derive(Debug)]
pub struct LiveInt {
    parameter: LiveParameter,
    value: i64,
    update_resolution: bool,
}

impl LiveInt {
    /// Create an int over [`DEFAULT_INT_RANGE`]
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self::with_range(name, value, DEFAULT_INT_RANGE)
    }

    pub fn with_range(name: impl Into<String>, value: i64, range: RangeInclusive<i64>) -> Self {
        let (min, max) = range.into_inner();
        Self {
            parameter: LiveParameter::new(
                Some(LiveKind::Int),
                name,
                Some(LiveValue::Int(value)),
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

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64) -> Change {
        let invalidation = Invalidation::when(self.update_resolution);
        self.parameter.commit(&mut self.value, value, invalidation)
    }
}

impl Live for LiveInt {
    impl_live_common!();

    fn get(&self) -> LiveValue {
        LiveValue::Int(self.value)
    }

    fn set(&mut self, value: LiveValue) -> Result<Change> {
        match value {
            LiveValue::Int(value) => Ok(self.set_value(value)),
            other => Err(kind_mismatch(&self.parameter, other.kind())),
        }
    }

    fn get_floats(&self) -> Vec<f64> {
        self.value.to_floats()
    }

    fn set_floats(&mut self, floats: &[f64]) -> Change {
        self.set_value(i64::from_floats(floats))
    }

    fn to_codable(&self) -> Option<LiveCodable> {
        Some(LiveCodable::new(
            self.dynamic_type_name(),
            LivePayload::Int { int: self.value },
        ))
    }

    fn set_codable(&mut self, codable: &LiveCodable) -> Result<Change> {
        match codable.payload {
            LivePayload::Int { int } => Ok(self.set_value(int)),
            _ => Err(kind_mismatch(&self.parameter, Some(codable.kind()))),
        }
    }
}
