//! Live wrappers
//!
//! Each wrapper owns one typed value plus its [`LiveParameter`], and
//! implements [`Live`], the object-safe surface generic tooling uses to read,
//! write and persist any parameter without knowing its concrete type.
//!
//! Every write path (typed setter, [`Live::set`], [`Live::set_floats`],
//! [`Live::set_codable`]) goes through the same compare, commit and notify
//! protocol.

/// Implement the accessor methods of [`Live`] for a wrapper with a
/// `parameter` field
macro_rules! impl_live_common {
    () => {
        fn parameter(&self) -> &$crate::parameter::LiveParameter {
            &self.parameter
        }

        fn parameter_mut(&mut self) -> &mut $crate::parameter::LiveParameter {
            &mut self.parameter
        }
    };
}

pub(crate) use impl_live_common;

mod boolean;
mod color;
mod enumeration;
mod float;
mod generic;
mod integer;
mod point;
mod resolution;
mod size;

pub use boolean::LiveBool;
pub use color::LiveColor;
pub use enumeration::LiveEnum;
pub use float::{LiveFloat, DEFAULT_FLOAT_RANGE};
pub use generic::LiveFloatable;
pub use integer::{LiveInt, DEFAULT_INT_RANGE};
pub use point::LivePoint;
pub use resolution::{LiveResolution, MAX_RESOLUTION, MIN_RESOLUTION};
pub use size::LiveSize;

use std::rc::Rc;

use crate::codable::LiveCodable;
use crate::diagnostics::DiagnosticSink;
use crate::error::{LiveError, Result};
use crate::kind::LiveKind;
use crate::node::Node;
use crate::parameter::{Change, LiveParameter};
use crate::value::LiveValue;

/// Type-erased access to a live wrapper
pub trait Live {
    /// Shared metadata and notification state
    fn parameter(&self) -> &LiveParameter;

    fn parameter_mut(&mut self) -> &mut LiveParameter;

    /// Current value
    fn get(&self) -> LiveValue;

    /// Write a type-erased value
    ///
    /// Fails with [`LiveError::KindMismatch`] when `value` has the wrong
    /// kind; the stored value is then left untouched.
    fn set(&mut self, value: LiveValue) -> Result<Change>;

    /// Numeric decomposition of the current value
    fn get_floats(&self) -> Vec<f64>;

    /// Write a value rebuilt from floats; short input falls back to defaults
    fn set_floats(&mut self, floats: &[f64]) -> Change;

    /// Envelope for persistence, `None` for wrappers without a kind
    fn to_codable(&self) -> Option<LiveCodable>;

    /// Commit an envelope's payload; a kind mismatch leaves the value alone
    fn set_codable(&mut self, codable: &LiveCodable) -> Result<Change>;

    fn name(&self) -> &str {
        self.parameter().name()
    }

    fn dynamic_type_name(&self) -> String {
        self.parameter().dynamic_type_name()
    }

    fn kind(&self) -> Option<LiveKind> {
        self.parameter().kind()
    }

    fn default_value(&self) -> Option<&LiveValue> {
        self.parameter().default_value()
    }

    fn minimum_value(&self) -> Option<&LiveValue> {
        self.parameter().minimum_value()
    }

    fn maximum_value(&self) -> Option<&LiveValue> {
        self.parameter().maximum_value()
    }

    fn is_linked(&self) -> bool {
        self.parameter().is_linked()
    }

    fn link_dyn(&mut self, node: &Rc<dyn Node>) {
        self.parameter_mut().link_dyn(node);
    }

    /// Point this wrapper at `node` without owning it
    fn link<N: Node + 'static>(&mut self, node: &Rc<N>)
    where
        Self: Sized,
    {
        self.parameter_mut().link(node);
    }

    /// Replace the diagnostic sink, builder style
    fn with_diagnostics(mut self, sink: Rc<dyn DiagnosticSink>) -> Self
    where
        Self: Sized,
    {
        self.parameter_mut().set_diagnostics(sink);
        self
    }

    /// Register a change observer, see [`LiveParameter::on_change`]
    fn on_change(&mut self, observer: impl FnMut(&LiveValue) + 'static)
    where
        Self: Sized,
    {
        self.parameter_mut().on_change(observer);
    }
}

/// Rejection for a value or envelope of the wrong kind
pub(crate) fn kind_mismatch(parameter: &LiveParameter, found: Option<LiveKind>) -> LiveError {
    LiveError::KindMismatch {
        parameter: parameter.name().to_string(),
        expected: parameter.kind(),
        found,
    }
}
