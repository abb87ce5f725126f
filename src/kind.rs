//! Live kinds
//!
//! The closed set of value shapes a live parameter can carry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag distinguishing the concrete value shape of a live parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveKind {
    Bool,
    Int,
    Float,
    Point,
    Size,
    Color,
    Resolution,
    Enum,
}

impl LiveKind {
    /// All kinds in declaration order
    pub const ALL: [LiveKind; 8] = [
        LiveKind::Bool,
        LiveKind::Int,
        LiveKind::Float,
        LiveKind::Point,
        LiveKind::Size,
        LiveKind::Color,
        LiveKind::Resolution,
        LiveKind::Enum,
    ];

    /// Get string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            LiveKind::Bool => "bool",
            LiveKind::Int => "int",
            LiveKind::Float => "float",
            LiveKind::Point => "point",
            LiveKind::Size => "size",
            LiveKind::Color => "color",
            LiveKind::Resolution => "resolution",
            LiveKind::Enum => "enum",
        }
    }
}

impl fmt::Display for LiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
