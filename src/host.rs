//! Live hosts
//!
//! A host is any object that owns live wrappers as fields, such as an
//! effect or a render node. [`LiveHost`] lists them in declaration order,
//! which is also the order of the persisted parameter set.

use std::rc::Rc;

use log::{debug, warn};

use crate::codable::LiveCodable;
use crate::error::{LiveError, Result};
use crate::live::Live;
use crate::node::Node;
use crate::parameter::Change;

/// Summary of replaying a parameter set into a host
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Type names whose value changed
    pub changed: Vec<String>,
    /// Type names whose value was already equal
    pub unchanged: Vec<String>,
    /// Envelopes that were not applied, with the reason
    pub rejected: Vec<LiveError>,
}

impl ApplyReport {
    /// Whether every envelope was applied
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// An object that owns live parameters
///
/// # Example
/// ```
/// use liveparam::{Live, LiveBool, LiveFloat, LiveHost};
///
/// struct Blur {
///     radius: LiveFloat,
///     fast: LiveBool,
/// }
///
/// impl LiveHost for Blur {
///     fn live_list(&self) -> Vec<&dyn Live> {
///         vec![&self.radius, &self.fast]
///     }
///
///     fn live_list_mut(&mut self) -> Vec<&mut dyn Live> {
///         vec![&mut self.radius, &mut self.fast]
///     }
/// }
///
/// let blur = Blur {
///     radius: LiveFloat::new("Radius", 0.5),
///     fast: LiveBool::new("Fast", false),
/// };
/// assert_eq!(blur.live_codables().len(), 2);
/// ```
pub trait LiveHost {
    /// Every live parameter, in declaration order
    fn live_list(&self) -> Vec<&dyn Live>;

    fn live_list_mut(&mut self) -> Vec<&mut dyn Live>;

    /// Link every parameter to `node`
    fn link_live(&mut self, node: &Rc<dyn Node>) {
        for live in self.live_list_mut() {
            live.link_dyn(node);
        }
    }

    /// Find a parameter by its dynamic type name
    fn live(&self, type_name: &str) -> Option<&dyn Live> {
        self.live_list()
            .into_iter()
            .find(|live| live.dynamic_type_name() == type_name)
    }

    fn live_mut(&mut self, type_name: &str) -> Option<&mut dyn Live> {
        self.live_list_mut()
            .into_iter()
            .find(|live| live.dynamic_type_name() == type_name)
    }

    /// Envelopes of every persistable parameter, in declaration order
    ///
    /// Parameters without a kind are skipped.
    fn live_codables(&self) -> Vec<LiveCodable> {
        self.live_list()
            .into_iter()
            .filter_map(|live| {
                let codable = live.to_codable();
                if codable.is_none() {
                    debug!("[LIVE] skipping '{}': no kind to persist", live.name());
                }
                codable
            })
            .collect()
    }

    /// Apply one envelope to the parameter with the same type name
    fn apply_live_codable(&mut self, codable: &LiveCodable) -> Result<Change> {
        match self.live_mut(&codable.type_name) {
            Some(live) => codable.apply(live),
            None => Err(LiveError::UnknownParameter {
                type_name: codable.type_name.clone(),
            }),
        }
    }

    /// Replay a parameter set; failures are collected, never fatal
    fn apply_live_codables(&mut self, codables: &[LiveCodable]) -> ApplyReport {
        let mut report = ApplyReport::default();
        for codable in codables {
            match self.apply_live_codable(codable) {
                Ok(Change::Unchanged) => report.unchanged.push(codable.type_name.clone()),
                Ok(_) => report.changed.push(codable.type_name.clone()),
                Err(err) => {
                    warn!("[LIVE] not applied: {err}");
                    report.rejected.push(err);
                }
            }
        }
        report
    }
}
