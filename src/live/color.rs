//! Live color

use super::{impl_live_common, kind_mismatch, Live};
use crate::codable::{LiveCodable, LivePayload};
use crate::error::Result;
use crate::floatable::Floatable;
use crate::kind::LiveKind;
use crate::parameter::{Change, Invalidation, LiveParameter};
use crate::types::Color;
use crate::value::LiveValue;

/// A live [`Color`], bounded to clear..=white
#[derive(Debug)]
pub struct LiveColor {
    parameter: LiveParameter,
    value: Color,
}

impl LiveColor {
    pub fn new(name: impl Into<String>, value: Color) -> Self {
        Self {
            parameter: LiveParameter::new(
                Some(LiveKind::Color),
                name,
                Some(value.into()),
                Some(Color::CLEAR.into()),
                Some(Color::WHITE.into()),
            ),
            value,
        }
    }

    pub fn value(&self) -> Color {
        self.value
    }

    pub fn set_value(&mut self, value: Color) -> Change {
        self.parameter.commit(&mut self.value, value, Invalidation::Render)
    }
}

impl Live for LiveColor {
    impl_live_common!();

    fn get(&self) -> LiveValue {
        LiveValue::Color(self.value)
    }

    fn set(&mut self, value: LiveValue) -> Result<Change> {
        match value {
            LiveValue::Color(value) => Ok(self.set_value(value)),
            other => Err(kind_mismatch(&self.parameter, other.kind())),
        }
    }

    fn get_floats(&self) -> Vec<f64> {
        self.value.to_floats()
    }

    fn set_floats(&mut self, floats: &[f64]) -> Change {
        self.set_value(Color::from_floats(floats))
    }

    fn to_codable(&self) -> Option<LiveCodable> {
        Some(LiveCodable::new(
            self.dynamic_type_name(),
            LivePayload::Color { color: self.value },
        ))
    }

    fn set_codable(&mut self, codable: &LiveCodable) -> Result<Change> {
        match codable.payload {
            LivePayload::Color { color } => Ok(self.set_value(color)),
            _ => Err(kind_mismatch(&self.parameter, Some(codable.kind()))),
        }
    }
}
