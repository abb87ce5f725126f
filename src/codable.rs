//! Live codable envelope
//!
//! A [`LiveCodable`] persists one parameter's value without knowing the
//! wrapper's static type. It serialises as a flat JSON object tagged by kind:
//!
//! ```json
//! {"type_name": "blur-radius", "kind": "float", "float": 0.75}
//! ```
//!
//! Applying an envelope goes through the wrapper's normal setter, so a
//! restored value notifies exactly like a live edit. An envelope whose kind
//! does not match the wrapper is rejected and the value is left alone.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::kind::LiveKind;
use crate::live::Live;
use crate::parameter::Change;
use crate::types::{Color, Point, Resolution, Size};

/// Kind-tagged payload of an envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LivePayload {
    Bool { bool: bool },
    Int { int: i64 },
    Float { float: f64 },
    Point { point: Point },
    Size { size: Size },
    Color { color: Color },
    Resolution { resolution: Resolution },
    /// Raw index of the enum case
    Enum { index: i64 },
}

impl LivePayload {
    pub fn kind(&self) -> LiveKind {
        match self {
            LivePayload::Bool { .. } => LiveKind::Bool,
            LivePayload::Int { .. } => LiveKind::Int,
            LivePayload::Float { .. } => LiveKind::Float,
            LivePayload::Point { .. } => LiveKind::Point,
            LivePayload::Size { .. } => LiveKind::Size,
            LivePayload::Color { .. } => LiveKind::Color,
            LivePayload::Resolution { .. } => LiveKind::Resolution,
            LivePayload::Enum { .. } => LiveKind::Enum,
        }
    }
}

/// Serialisation envelope for one live parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveCodable {
    /// Dynamic type name of the parameter the value came from
    pub type_name: String,
    #[serde(flatten)]
    pub payload: LivePayload,
}

impl LiveCodable {
    pub fn new(type_name: impl Into<String>, payload: LivePayload) -> Self {
        Self {
            type_name: type_name.into(),
            payload,
        }
    }

    pub fn kind(&self) -> LiveKind {
        self.payload.kind()
    }

    /// Commit this envelope's value into `live` through its setter
    pub fn apply(&self, live: &mut dyn Live) -> Result<Change> {
        live.set_codable(self)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Serialise an ordered parameter set as a pretty JSON array
pub fn codables_to_json(codables: &[LiveCodable]) -> Result<String> {
    Ok(serde_json::to_string_pretty(codables)?)
}

/// Parse an ordered parameter set from a JSON array
pub fn codables_from_json(json: &str) -> Result<Vec<LiveCodable>> {
    Ok(serde_json::from_str(json)?)
}

/// Write a parameter set to `path`
pub fn save_codables(path: &Path, codables: &[LiveCodable]) -> Result<()> {
    let content = codables_to_json(codables)?;
    fs::write(path, content)?;
    Ok(())
}

/// Read a parameter set from `path`
pub fn load_codables(path: &Path) -> Result<Vec<LiveCodable>> {
    let content = fs::read_to_string(path)?;
    codables_from_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_flat_json_shape() {
        let codable = LiveCodable::new("canvas-size", LivePayload::Size { size: Size::new(1.0, 2.0) });
        let value = serde_json::to_value(&codable).unwrap();
        assert_eq!(
            value,
            json!({
                "type_name": "canvas-size",
                "kind": "size",
                "size": {"width": 1.0, "height": 2.0}
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let codables = vec![
            LiveCodable::new("enabled", LivePayload::Bool { bool: true }),
            LiveCodable::new("tint", LivePayload::Color { color: Color::rgba(0.1, 0.2, 0.3, 0.4) }),
            LiveCodable::new("mode", LivePayload::Enum { index: 2 }),
        ];
        let json = codables_to_json(&codables).unwrap();
        assert_eq!(codables_from_json(&json).unwrap(), codables);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = LiveCodable::from_json(r#"{"type_name": "x", "kind": "vector", "vector": [1]}"#);
        assert_eq!(result.unwrap_err().error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        let codables = vec![LiveCodable::new("size", LivePayload::Resolution { resolution: Resolution::HD })];

        save_codables(&path, &codables).unwrap();
        assert_eq!(load_codables(&path).unwrap(), codables);
    }
}
