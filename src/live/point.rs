//! Live point

use super::{impl_live_common, kind_mismatch, Live};
use crate::codable::{LiveCodable, LivePayload};
use crate::error::Result;
use crate::floatable::Floatable;
use crate::kind::LiveKind;
use crate::parameter::{Change, Invalidation, LiveParameter};
use crate::types::Point;
use crate::value::LiveValue;

/// A live [`Point`], bounded to `(-1, -1)..=(1, 1)` by default
#[derive(Debug)]
pub struct LivePoint {
    parameter: LiveParameter,
    value: Point,
}

impl LivePoint {
    pub fn new(name: impl Into<String>, value: Point) -> Self {
        Self::with_bounds(name, value, Point::new(-1.0, -1.0), Point::new(1.0, 1.0))
    }

    pub fn with_bounds(name: impl Into<String>, value: Point, min: Point, max: Point) -> Self {
        Self {
            parameter: LiveParameter::new(
                Some(LiveKind::Point),
                name,
                Some(value.into()),
                Some(min.into()),
                Some(max.into()),
            ),
            value,
        }
    }

    pub fn value(&self) -> Point {
        self.value
    }

    pub fn set_value(&mut self, value: Point) -> Change {
        self.parameter.commit(&mut self.value, value, Invalidation::Render)
    }
}

impl Live for LivePoint {
    impl_live_common!();

    fn get(&self) -> LiveValue {
        LiveValue::Point(self.value)
    }

    fn set(&mut self, value: LiveValue) -> Result<Change> {
        match value {
            LiveValue::Point(value) => Ok(self.set_value(value)),
            other => Err(kind_mismatch(&self.parameter, other.kind())),
        }
    }

    fn get_floats(&self) -> Vec<f64> {
        self.value.to_floats()
    }

    fn set_floats(&mut self, floats: &[f64]) -> Change {
        self.set_value(Point::from_floats(floats))
    }

    fn to_codable(&self) -> Option<LiveCodable> {
        Some(LiveCodable::new(
            self.dynamic_type_name(),
            LivePayload::Point { point: self.value },
        ))
    }

    fn set_codable(&mut self, codable: &LiveCodable) -> Result<Change> {
        match codable.payload {
            LivePayload::Point { point } => Ok(self.set_value(point)),
            _ => Err(kind_mismatch(&self.parameter, Some(codable.kind()))),
        }
    }
}
