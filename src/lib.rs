//! liveparam - Reactive, introspectable live parameters
//!
//! A live parameter wraps a typed value (bool, int, float, point, size,
//! color, resolution or enum case), exposes metadata for editors (name,
//! kind, default and bounds) and signals its consumer node whenever the
//! value actually changes.
//!
//! # Architecture
//!
//! - [`LiveParameter`]: shared metadata, weak node link and change protocol
//! - Typed wrappers ([`LiveFloat`], [`LiveEnum`], ...): own the value and
//!   implement [`Live`], the type-erased surface used by generic tooling
//! - [`LiveCodable`]: kind-tagged envelope for persistence
//! - [`LiveHost`]: ordered parameter list of an owning object
//!
//! Everything is single-threaded and synchronous: a write compares,
//! commits and notifies before it returns.

pub mod codable;
pub mod diagnostics;
pub mod enumerable;
pub mod error;
pub mod floatable;
pub mod host;
pub mod kind;
pub mod live;
pub mod node;
pub mod parameter;
pub mod types;
pub mod value;

pub mod cli;

#[cfg(test)]
mod test_support;

pub use codable::{LiveCodable, LivePayload};
pub use diagnostics::{Diagnostic, DiagnosticSink, IgnoreDiagnostics, LogDiagnostics, RecordingDiagnostics};
pub use enumerable::Enumerable;
pub use error::{LiveError, Result};
pub use floatable::Floatable;
pub use host::{ApplyReport, LiveHost};
pub use kind::LiveKind;
pub use live::{
    Live, LiveBool, LiveColor, LiveEnum, LiveFloat, LiveFloatable, LiveInt, LivePoint,
    LiveResolution, LiveSize,
};
pub use node::{Node, NodeLink};
pub use parameter::{kebab_case, Change, Invalidation, LiveParameter};
pub use types::{Color, Point, Resolution, Size};
pub use value::{EnumCase, LiveValue};
