//! Shared helpers for unit tests

use std::cell::Cell;
use std::rc::Rc;

use crate::node::Node;

/// Node that counts the signals it receives
#[derive(Default)]
pub(crate) struct CountingNode {
    invalidations: Cell<u32>,
    resolution_changes: Cell<u32>,
    reflowing: Cell<bool>,
    reflowed_invalidations: Cell<u32>,
}

impl CountingNode {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub(crate) fn invalidations(&self) -> u32 {
        self.invalidations.get()
    }

    pub(crate) fn resolution_changes(&self) -> u32 {
        self.resolution_changes.get()
    }

    /// Every reflow wrapped exactly one invalidation
    pub(crate) fn invalidated_inside_reflow(&self) -> bool {
        self.resolution_changes.get() > 0
            && self.reflowed_invalidations.get() == self.resolution_changes.get()
    }
}

impl Node for CountingNode {
    fn invalidate(&self) {
        self.invalidations.set(self.invalidations.get() + 1);
        if self.reflowing.get() {
            self.reflowed_invalidations
                .set(self.reflowed_invalidations.get() + 1);
        }
    }

    fn resolution_change(&self, body: &dyn Fn()) {
        self.resolution_changes.set(self.resolution_changes.get() + 1);
        self.reflowing.set(true);
        body();
        self.reflowing.set(false);
    }
}
