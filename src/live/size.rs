//! Live size

use super::{impl_live_common, kind_mismatch, Live};
use crate::codable::{LiveCodable, LivePayload};
use crate::error::Result;
use crate::floatable::Floatable;
use crate::kind::LiveKind;
use crate::parameter::{Change, Invalidation, LiveParameter};
use crate::types::Size;
use crate::value::LiveValue;

/// A live [`Size`], bounded to `(0, 0)..=(2, 2)`
#[derive(Debug)]
pub struct LiveSize {
    parameter: LiveParameter,
    value: Size,
}

impl LiveSize {
    pub fn new(name: impl Into<String>, value: Size) -> Self {
        Self {
            parameter: LiveParameter::new(
                Some(LiveKind::Size),
                name,
                Some(value.into()),
                Some(Size::ZERO.into()),
                Some(Size::new(2.0, 2.0).into()),
            ),
            value,
        }
    }

    pub fn value(&self) -> Size {
        self.value
    }

    pub fn set_value(&mut self, value: Size) -> Change {
        self.parameter.commit(&mut self.value, value, Invalidation::Render)
    }
}

impl Live for LiveSize {
    impl_live_common!();

    fn get(&self) -> LiveValue {
        LiveValue::Size(self.value)
    }

    fn set(&mut self, value: LiveValue) -> Result<Change> {
        match value {
            LiveValue::Size(value) => Ok(self.set_value(value)),
            other => Err(kind_mismatch(&self.parameter, other.kind())),
        }
    }

    fn get_floats(&self) -> Vec<f64> {
        self.value.to_floats()
    }

    fn set_floats(&mut self, floats: &[f64]) -> Change {
        self.set_value(Size::from_floats(floats))
    }

    fn to_codable(&self) -> Option<LiveCodable> {
        Some(LiveCodable::new(
            self.dynamic_type_name(),
            LivePayload::Size { size: self.value },
        ))
    }

    fn set_codable(&mut self, codable: &LiveCodable) -> Result<Change> {
        match codable.payload {
            LivePayload::Size { size } => Ok(self.set_value(size)),
            _ => Err(kind_mismatch(&self.parameter, Some(codable.kind()))),
        }
    }
}
