//! Type-erased live values
//!
//! [`LiveValue`] is the closed variant set generic tooling reads and writes
//! through [`Live::get`](crate::Live::get) and [`Live::set`](crate::Live::set).

use serde::{Deserialize, Serialize};

use crate::enumerable::Enumerable;
use crate::floatable::Floatable;
use crate::kind::LiveKind;
use crate::types::{Color, Point, Resolution, Size};

/// An enum case as seen through the type-erased bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumCase {
    /// Raw index of the case
    pub index: i64,
    /// Display name of the case
    pub name: String,
}

impl EnumCase {
    pub fn of<E: Enumerable>(case: E) -> Self {
        Self {
            index: case.index(),
            name: case.name().to_string(),
        }
    }
}

/// A value of any live kind, or a plain float list for generic wrappers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum LiveValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Point(Point),
    Size(Size),
    Color(Color),
    Resolution(Resolution),
    Enum(EnumCase),
    Floats(Vec<f64>),
}

impl LiveValue {
    /// The kind tag of this value, `None` for a plain float list
    pub fn kind(&self) -> Option<LiveKind> {
        match self {
            LiveValue::Bool(_) => Some(LiveKind::Bool),
            LiveValue::Int(_) => Some(LiveKind::Int),
            LiveValue::Float(_) => Some(LiveKind::Float),
            LiveValue::Point(_) => Some(LiveKind::Point),
            LiveValue::Size(_) => Some(LiveKind::Size),
            LiveValue::Color(_) => Some(LiveKind::Color),
            LiveValue::Resolution(_) => Some(LiveKind::Resolution),
            LiveValue::Enum(_) => Some(LiveKind::Enum),
            LiveValue::Floats(_) => None,
        }
    }

    /// Numeric decomposition of the value; an enum case is `[raw index]`
    pub fn to_floats(&self) -> Vec<f64> {
        match self {
            LiveValue::Bool(value) => value.to_floats(),
            LiveValue::Int(value) => value.to_floats(),
            LiveValue::Float(value) => value.to_floats(),
            LiveValue::Point(value) => value.to_floats(),
            LiveValue::Size(value) => value.to_floats(),
            LiveValue::Color(value) => value.to_floats(),
            LiveValue::Resolution(value) => value.to_floats(),
            LiveValue::Enum(case) => case.index.to_floats(),
            LiveValue::Floats(floats) => floats.clone(),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LiveValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            LiveValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            LiveValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumCase> {
        match self {
            LiveValue::Enum(case) => Some(case),
            _ => None,
        }
    }
}

impl From<bool> for LiveValue {
    fn from(value: bool) -> Self {
        LiveValue::Bool(value)
    }
}

impl From<i64> for LiveValue {
    fn from(value: i64) -> Self {
        LiveValue::Int(value)
    }
}

impl From<f64> for LiveValue {
    fn from(value: f64) -> Self {
        LiveValue::Float(value)
    }
}

impl From<Point> for LiveValue {
    fn from(value: Point) -> Self {
        LiveValue::Point(value)
    }
}

impl From<Size> for LiveValue {
    fn from(value: Size) -> Self {
        LiveValue::Size(value)
    }
}

impl From<Color> for LiveValue {
    fn from(value: Color) -> Self {
        LiveValue::Color(value)
    }
}

impl From<Resolution> for LiveValue {
    fn from(value: Resolution) -> Self {
        LiveValue::Resolution(value)
    }
}

impl From<Vec<f64>> for LiveValue {
    fn from(floats: Vec<f64>) -> Self {
        LiveValue::Floats(floats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(LiveValue::from(0.5).kind(), Some(LiveKind::Float));
        assert_eq!(LiveValue::from(Resolution::HD).kind(), Some(LiveKind::Resolution));
        assert_eq!(LiveValue::from(vec![1.0, 2.0]).kind(), None);
    }

    #[test]
    fn test_enum_floats_are_raw_index() {
        let case = LiveValue::Enum(EnumCase {
            index: 5,
            name: "Five".to_string(),
        });
        assert_eq!(case.to_floats(), vec![5.0]);
        assert_eq!(case.as_enum().map(|case| case.index), Some(5));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(LiveValue::from(true).as_bool(), Some(true));
        assert_eq!(LiveValue::from(3_i64).as_int(), Some(3));
        assert_eq!(LiveValue::from(3_i64).as_float(), None);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(LiveValue::from(Point::new(1.0, 2.0))).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "point", "value": {"x": 1.0, "y": 2.0}}));
    }
}
