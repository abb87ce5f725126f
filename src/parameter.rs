//! Live parameter base
//!
//! [`LiveParameter`] carries the metadata every wrapper shares (name, kind,
//! default and bounds) together with the weak link to the consumer node, and
//! runs the change protocol:
//!
//! 1. compare the new value with the current one,
//! 2. commit the new value unconditionally,
//! 3. if it differed, signal the node (or report an unlinked diagnostic),
//! 4. then notify value observers.
//!
//! Everything runs synchronously inside the write. A parameter is not
//! thread-safe; callers sharing one across threads must synchronise
//! externally (the `Rc` handles inside keep it `!Send` anyway).

use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::diagnostics::{default_sink, Diagnostic, DiagnosticSink};
use crate::kind::LiveKind;
use crate::node::{Node, NodeLink};
use crate::value::LiveValue;

/// Lower-case `name` and replace spaces with hyphens
///
/// `"Blur Radius"` becomes `"blur-radius"`.
pub fn kebab_case(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Which signal a changed value sends to its node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Invalidation {
    /// `invalidate()` only
    #[default]
    Render,
    /// `resolution_change(|| invalidate())`
    Resolution,
}

impl Invalidation {
    /// `Resolution` when `update_resolution` is set, otherwise `Render`
    pub fn when(update_resolution: bool) -> Self {
        if update_resolution {
            Invalidation::Resolution
        } else {
            Invalidation::Render
        }
    }
}

/// Outcome of a single write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The new value equalled the old one; nothing was signalled
    Unchanged,
    /// The node received `invalidate()`
    Invalidated,
    /// The node received `resolution_change()` wrapping `invalidate()`
    Reflowed,
    /// The value changed but no node was linked; a diagnostic was reported
    Unlinked,
}

impl Change {
    /// Whether the stored value differs from before the write
    pub fn is_changed(&self) -> bool {
        !matches!(self, Change::Unchanged)
    }

    /// Whether a node received a signal
    pub fn is_signalled(&self) -> bool {
        matches!(self, Change::Invalidated | Change::Reflowed)
    }
}

type Observer = Box<dyn FnMut(&LiveValue)>;

/// Metadata and notification state shared by every live wrapper
pub struct LiveParameter {
    kind: Option<LiveKind>,
    name: String,
    default_value: Option<LiveValue>,
    minimum_value: Option<LiveValue>,
    maximum_value: Option<LiveValue>,
    node: NodeLink,
    diagnostics: Rc<dyn DiagnosticSink>,
    observers: Vec<Observer>,
}

impl LiveParameter {
    /// Create an unlinked parameter
    ///
    /// Bounds are stored as given; they describe the value for editors and
    /// are never enforced here.
    pub fn new(
        kind: Option<LiveKind>,
        name: impl Into<String>,
        default_value: Option<LiveValue>,
        minimum_value: Option<LiveValue>,
        maximum_value: Option<LiveValue>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            default_value,
            minimum_value,
            maximum_value,
            node: NodeLink::unlinked(),
            diagnostics: default_sink(),
            observers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Kebab-case slug of the current name, recomputed on every call
    pub fn dynamic_type_name(&self) -> String {
        kebab_case(&self.name)
    }

    pub fn kind(&self) -> Option<LiveKind> {
        self.kind
    }

    pub fn default_value(&self) -> Option<&LiveValue> {
        self.default_value.as_ref()
    }

    pub fn minimum_value(&self) -> Option<&LiveValue> {
        self.minimum_value.as_ref()
    }

    pub fn maximum_value(&self) -> Option<&LiveValue> {
        self.maximum_value.as_ref()
    }

    pub(crate) fn set_bounds(&mut self, minimum: Option<LiveValue>, maximum: Option<LiveValue>) {
        self.minimum_value = minimum;
        self.maximum_value = maximum;
    }

    // ------------------------------------------------------------------------
    // Node link
    // ------------------------------------------------------------------------

    /// Point this parameter at `node` without owning it
    pub fn link<N: Node + 'static>(&mut self, node: &Rc<N>) {
        self.node = NodeLink::to(node);
    }

    pub fn link_dyn(&mut self, node: &Rc<dyn Node>) {
        self.node = NodeLink::to_dyn(node);
    }

    pub fn unlink(&mut self) {
        self.node = NodeLink::unlinked();
    }

    /// The linked node, if any and still alive
    pub fn node(&self) -> Option<Rc<dyn Node>> {
        self.node.upgrade()
    }

    pub fn is_linked(&self) -> bool {
        self.node.is_linked()
    }

    // ------------------------------------------------------------------------
    // Diagnostics and observers
    // ------------------------------------------------------------------------

    pub fn set_diagnostics(&mut self, sink: Rc<dyn DiagnosticSink>) {
        self.diagnostics = sink;
    }

    /// Register a callback run after every write that changed the value
    ///
    /// Observers run whether or not a node is linked.
    pub fn on_change(&mut self, observer: impl FnMut(&LiveValue) + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ------------------------------------------------------------------------
    // Change protocol
    // ------------------------------------------------------------------------

    /// Compare, commit `value` into `slot`, then signal if it changed
    pub(crate) fn commit<T>(&mut self, slot: &mut T, value: T, invalidation: Invalidation) -> Change
    where
        T: PartialEq + Clone + Into<LiveValue>,
    {
        let changed = *slot != value;
        *slot = value;
        self.dispatch(changed, invalidation, || slot.clone().into())
    }

    /// Signal the node and observers for a write whose value was already committed
    pub(crate) fn dispatch(
        &mut self,
        changed: bool,
        invalidation: Invalidation,
        value: impl FnOnce() -> LiveValue,
    ) -> Change {
        if !changed {
            return Change::Unchanged;
        }

        let change = match self.node.upgrade() {
            None => {
                self.diagnostics.report(Diagnostic::Unlinked {
                    parameter: self.name.clone(),
                });
                Change::Unlinked
            }
            Some(node) => match invalidation {
                Invalidation::Render => {
                    node.invalidate();
                    Change::Invalidated
                }
                Invalidation::Resolution => {
                    node.resolution_change(&|| node.invalidate());
                    Change::Reflowed
                }
            },
        };
        debug!("[LIVE] '{}' changed: {:?}", self.name, change);

        if !self.observers.is_empty() {
            let value = value();
            for observer in &mut self.observers {
                observer(&value);
            }
        }

        change
    }
}

impl fmt::Debug for LiveParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveParameter")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("default_value", &self.default_value)
            .field("minimum_value", &self.minimum_value)
            .field("maximum_value", &self.maximum_value)
            .field("node", &self.node)
            .field("observers", &self.observers.len())
            .finish()
    }
}
