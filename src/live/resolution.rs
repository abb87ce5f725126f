//! Live resolution

use super::{impl_live_common, kind_mismatch, Live};
use crate::codable::{LiveCodable, LivePayload};
use crate::error::Result;
use crate::floatable::Floatable;
use crate::kind::LiveKind;
use crate::parameter::{Change, Invalidation, LiveParameter};
use crate::types::Resolution;
use crate::value::LiveValue;

/// Smallest resolution advertised to editors
pub const MIN_RESOLUTION: Resolution = Resolution::square(1);

/// Largest resolution advertised to editors
pub const MAX_RESOLUTION: Resolution = Resolution::square(16384);

/// A live [`Resolution`]
///
/// Every change is signalled as a resolution change.
#[derive(Debug)]
pub struct LiveResolution {
    parameter: LiveParameter,
    value: Resolution,
}

impl LiveResolution {
    pub fn new(name: impl Into<String>, value: Resolution) -> Self {
        Self {
            parameter: LiveParameter::new(
                Some(LiveKind::Resolution),
                name,
                Some(value.into()),
                Some(MIN_RESOLUTION.into()),
                Some(MAX_RESOLUTION.into()),
            ),
            value,
        }
    }

    pub fn value(&self) -> Resolution {
        self.value
    }

    pub fn set_value(&mut self, value: Resolution) -> Change {
        self.parameter.commit(&mut self.value, value, Invalidation::Resolution)
    }
}

impl Live for LiveResolution {
    impl_live_common!();

    fn get(&self) -> LiveValue {
        LiveValue::Resolution(self.value)
    }

    fn set(&mut self, value: LiveValue) -> Result<Change> {
        match value {
            LiveValue::Resolution(value) => Ok(self.set_value(value)),
            other => Err(kind_mismatch(&self.parameter, other.kind())),
        }
    }

    fn get_floats(&self) -> Vec<f64> {
        self.value.to_floats()
    }

    fn set_floats(&mut self, floats: &[f64]) -> Change {
        self.set_value(Resolution::from_floats(floats))
    }

    fn to_codable(&self) -> Option<LiveCodable> {
        Some(LiveCodable::new(
            self.dynamic_type_name(),
            LivePayload::Resolution {
                resolution: self.value,
            },
        ))
    }

    fn set_codable(&mut self, codable: &LiveCodable) -> Result<Change> {
        match codable.payload {
            LivePayload::Resolution { resolution } => Ok(self.set_value(resolution)),
            _ => Err(kind_mismatch(&self.parameter, Some(codable.kind()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CountingNode;

    #[test]
    fn test_resolution_always_reflows() {
        let node = CountingNode::new();
        let mut resolution = LiveResolution::new("Resolution", Resolution::FULL_HD);
        resolution.link(&node);

        assert_eq!(resolution.set_value(Resolution::FULL_HD), Change::Unchanged);
        assert_eq!(resolution.set_value(Resolution::UHD), Change::Reflowed);
        assert_eq!((node.resolution_changes(), node.invalidations()), (1, 1));
        assert!(node.invalidated_inside_reflow());
    }

    #[test]
    fn test_resolution_floats() {
        let node = CountingNode::new();
        let mut resolution = LiveResolution::new("Resolution", Resolution::HD);
        resolution.link(&node);

        assert_eq!(resolution.get_floats(), vec![1280.0, 720.0]);
        assert_eq!(resolution.set_floats(&[512.0, 512.0]), Change::Reflowed);
        assert_eq!(resolution.value(), Resolution::square(512));
    }

    #[test]
    fn test_resolution_metadata() {
        let resolution = LiveResolution::new("Resolution", Resolution::HD);
        assert_eq!(resolution.kind(), Some(LiveKind::Resolution));
        assert_eq!(resolution.minimum_value(), Some(&LiveValue::Resolution(MIN_RESOLUTION)));
        assert_eq!(resolution.maximum_value(), Some(&LiveValue::Resolution(MAX_RESOLUTION)));
    }
}
