//! Consumer node contract
//!
//! A [`Node`] is whatever reacts to parameter changes, typically a render
//! graph node that redraws. Parameters only hold a [`NodeLink`], a weak
//! handle: the node can be torn down at any time and an absent node is a
//! normal state.

use std::fmt;
use std::rc::{Rc, Weak};

/// Receiver of parameter change signals
pub trait Node {
    /// Mark the node dirty. Must be idempotent and must not panic.
    fn invalidate(&self);

    /// Run `body` framed by the node's resolution-dependent reflow.
    ///
    /// `body` is the `invalidate` call itself. The default runs `body`
    /// directly; nodes whose output depends on resolution override this to
    /// reflow around it.
    fn resolution_change(&self, body: &dyn Fn()) {
        body();
    }
}

/// Non-owning handle from a parameter to its consumer node
#[derive(Clone, Default)]
pub struct NodeLink {
    node: Option<Weak<dyn Node>>,
}

impl NodeLink {
    /// A link that points at no node
    pub fn unlinked() -> Self {
        Self::default()
    }

    /// Link to `node` without taking ownership
    pub fn to<N: Node + 'static>(node: &Rc<N>) -> Self {
        let node: Rc<dyn Node> = node.clone();
        Self {
            node: Some(Rc::downgrade(&node)),
        }
    }

    /// Link to an already type-erased node
    pub fn to_dyn(node: &Rc<dyn Node>) -> Self {
        Self {
            node: Some(Rc::downgrade(node)),
        }
    }

    /// The node, if linked and still alive
    pub fn upgrade(&self) -> Option<Rc<dyn Node>> {
        self.node.as_ref().and_then(Weak::upgrade)
    }

    /// Whether a live node is reachable through this link
    pub fn is_linked(&self) -> bool {
        self.node
            .as_ref()
            .map(|node| node.strong_count() > 0)
            .unwrap_or(false)
    }
}

impl fmt::Debug for NodeLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeLink")
            .field("linked", &self.is_linked())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Dirty(Cell<u32>);

    impl Node for Dirty {
        fn invalidate(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_link_does_not_own() {
        let node = Rc::new(Dirty::default());
        let link = NodeLink::to(&node);
        assert!(link.is_linked());
        assert_eq!(Rc::strong_count(&node), 1);

        drop(node);
        assert!(!link.is_linked());
        assert!(link.upgrade().is_none());
    }

    #[test]
    fn test_default_resolution_change_runs_body() {
        let node = Rc::new(Dirty::default());
        let link = NodeLink::to(&node);
        let upgraded = link.upgrade().unwrap();
        upgraded.resolution_change(&|| upgraded.invalidate());
        assert_eq!(node.0.get(), 1);
    }

    #[test]
    fn test_unlinked() {
        let link = NodeLink::unlinked();
        assert!(!link.is_linked());
        assert_eq!(format!("{link:?}"), "NodeLink { linked: false }");
    }
}
