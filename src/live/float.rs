//! Live float

use std::ops::RangeInclusive;

use super::{impl_live_common, kind_mismatch, Live};
use crate::codable::{LiveCodable, LivePayload};
use crate::error::Result;
use crate::floatable::Floatable;
use crate::kind::LiveKind;
use crate::parameter::{Change, Invalidation, LiveParameter};
use crate::value::LiveValue;

/// Range used when none is given
pub const DEFAULT_FLOAT_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// A live `f64`
///
/// The range is advisory metadata for editors; values outside it are
/// stored as-is.
///
/// # Example
/// ```
/// use liveparam::{Live, LiveFloat};
///
/// let mut radius = LiveFloat::with_range("Blur Radius", 0.5, 0.0..=2.0);
/// assert_eq!(radius.dynamic_type_name(), "blur-radius");
/// radius.set_value(0.75);
/// assert_eq!(radius.get_floats(), vec![0.75]);
/// ```
#[derive(Debug)]
pub struct LiveFloat {
    parameter: LiveParameter,
    value: f64,
    update_resolution: bool,
}

impl LiveFloat {
    /// Create a float over [`DEFAULT_FLOAT_RANGE`]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self::with_range(name, value, DEFAULT_FLOAT_RANGE)
    }

    pub fn with_range(name: impl Into<String>, value: f64, range: RangeInclusive<f64>) -> Self {
        let (min, max) = range.into_inner();
        Self {
            parameter: LiveParameter::new(
                Some(LiveKind::Float),
                name,
                Some(LiveValue::Float(value)),
                Some(LiveValue::Float(min)),
                Some(LiveValue::Float(max)),
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

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) -> Change {
        let invalidation = Invalidation::when(self.update_resolution);
        self.parameter.commit(&mut self.value, value, invalidation)
    }
}

impl Live for LiveFloat {
    impl_live_common!();

    fn get(&self) -> LiveValue {
        LiveValue::Float(self.value)
    }

    fn set(&mut self, value: LiveValue) -> Result<Change> {
        match value {
            LiveValue::Float(value) => Ok(self.set_value(value)),
            other => Err(kind_mismatch(&self.parameter, other.kind())),
        }
    }

    fn get_floats(&self) -> Vec<f64> {
        self.value.to_floats()
    }

    fn set_floats(&mut self, floats: &[f64]) -> Change {
        self.set_value(f64::from_floats(floats))
    }

    fn to_codable(&self) -> Option<LiveCodable> {
        Some(LiveCodable::new(
            self.dynamic_type_name(),
            LivePayload::Float { float: self.value },
        ))
    }

    fn set_codable(&mut self, codable: &LiveCodable) -> Result<Change> {
        match codable.payload {
            LivePayload::Float { float } => Ok(self.set_value(float)),
            _ => Err(kind_mismatch(&self.parameter, Some(codable.kind()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;
    use crate::test_support::CountingNode;
    use approx::assert_relative_eq;

    #[test]
    fn test_float_metadata() {
        let float = LiveFloat::with_range("Blur Radius", 0.5, 0.0..=1.0);
        assert_eq!(float.kind(), Some(LiveKind::Float));
        assert_eq!(float.name(), "Blur Radius");
        assert_eq!(float.dynamic_type_name(), "blur-radius");
        assert_eq!(float.default_value(), Some(&LiveValue::Float(0.5)));
        assert_eq!(float.minimum_value(), Some(&LiveValue::Float(0.0)));
        assert_eq!(float.maximum_value(), Some(&LiveValue::Float(1.0)));
        assert!(!float.updates_resolution());
    }

    #[test]
    fn test_float_change_scenario() {
        let node = CountingNode::new();
        let mut float = LiveFloat::with_range("Amount", 0.5, 0.0..=1.0);
        float.link(&node);

        assert_eq!(float.set_value(0.5), Change::Unchanged);
        assert_eq!(node.invalidations(), 0);

        assert_eq!(float.set_value(0.75), Change::Invalidated);
        assert_eq!(node.invalidations(), 1);

        assert_eq!(float.set_value(0.75), Change::Unchanged);
        assert_eq!(node.invalidations(), 1);
        assert_eq!(float.get_floats(), vec![0.75]);
        assert_eq!(node.resolution_changes(), 0);
    }

    #[test]
    fn test_float_updating_resolution() {
        let node = CountingNode::new();
        let mut float = LiveFloat::new("Scale", 1.0).updating_resolution();
        float.link(&node);

        assert_eq!(float.set_floats(&[2.0]), Change::Reflowed);
        assert_eq!(node.resolution_changes(), 1);
        assert_eq!(node.invalidations(), 1);
        assert!(node.invalidated_inside_reflow());
    }

    #[test]
    fn test_float_out_of_range_is_stored() {
        let mut float = LiveFloat::new("Amount", 0.0).with_diagnostics(RecordingDiagnostics::new());
        assert_eq!(float.set_value(-3.5), Change::Unlinked);
        assert_relative_eq!(float.value(), -3.5);
    }

    #[test]
    fn test_float_rejects_wrong_kind() {
        let node = CountingNode::new();
        let mut float = LiveFloat::new("Amount", 0.25);
        float.link(&node);

        let err = float.set(LiveValue::Int(1)).unwrap_err();
        assert_eq!(err.error_code(), "KIND_MISMATCH");
        assert_relative_eq!(float.value(), 0.25);
        assert_eq!(node.invalidations(), 0);
    }

    #[test]
    fn test_float_codable() {
        let node = CountingNode::new();
        let source = LiveFloat::new("Amount", 0.9);
        let mut target = LiveFloat::new("Amount", 0.1);
        target.link(&node);

        let codable = source.to_codable().unwrap();
        assert_eq!(codable.type_name, "amount");
        assert_eq!(target.set_codable(&codable).unwrap(), Change::Invalidated);
        assert_eq!(target.get(), source.get());

        let wrong = LiveCodable::new("amount", LivePayload::Bool { bool: true });
        assert!(target.set_codable(&wrong).is_err());
        assert_relative_eq!(target.value(), 0.9);
        assert_eq!(node.invalidations(), 1);
    }

    #[test]
    fn test_float_short_floats_default_to_zero() {
        let mut float = LiveFloat::new("Amount", 0.5).with_diagnostics(RecordingDiagnostics::new());
        float.set_floats(&[]);
        assert_relative_eq!(float.value(), 0.0);
    }
}
