//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;
use std::rc::Rc;

use log::{info, warn};

use super::demo::{BlurHost, LoggingNode};
use crate::codable::{codables_to_json, load_codables, save_codables};
use crate::error::{LiveError, Result};
use crate::host::LiveHost;
use crate::live::Live;
use crate::node::Node;
use crate::value::LiveValue;

/// Create the demo host linked to a fresh logging node.
fn linked_host() -> (BlurHost, Rc<LoggingNode>) {
    let node = LoggingNode::new();
    let dyn_node: Rc<dyn Node> = node.clone();
    let mut host = BlurHost::new();
    host.link_live(&dyn_node);
    (host, node)
}

fn format_floats(value: Option<&LiveValue>) -> String {
    match value {
        Some(value) => {
            let floats: Vec<String> = value.to_floats().iter().map(|f| format!("{f}")).collect();
            format!("[{}]", floats.join(", "))
        }
        None => "-".to_string(),
    }
}

/// List every parameter of the demo host.
pub fn list() -> Result<()> {
    let host = BlurHost::new();

    println!(
        "{:<14} {:<11} {:<22} {:<22} {:<22}",
        "TYPE NAME", "KIND", "VALUE", "MIN", "MAX"
    );
    println!("{:-<94}", "");

    for live in host.live_list() {
        let kind = live
            .kind()
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<14} {:<11} {:<22} {:<22} {:<22}",
            live.dynamic_type_name(),
            kind,
            format_floats(Some(&live.get())),
            format_floats(live.minimum_value()),
            format_floats(live.maximum_value()),
        );
    }

    println!("\nStyles: {}", host.style.case_names().join(", "));

    Ok(())
}

/// Print or save the demo host's parameter set.
pub fn dump(output: Option<&Path>) -> Result<()> {
    let host = BlurHost::new();
    let codables = host.live_codables();

    match output {
        Some(path) => {
            info!("Saving {} parameters to: {}", codables.len(), path.display());
            save_codables(path, &codables)?;
            println!("Saved: {}", path.display());
        }
        None => println!("{}", codables_to_json(&codables)?),
    }

    Ok(())
}

/// Replay a saved parameter set into the demo host.
pub fn apply(path: &Path) -> Result<()> {
    info!("Applying parameters from: {}", path.display());

    let codables = load_codables(path)?;
    let (mut host, node) = linked_host();
    let report = host.apply_live_codables(&codables);

    println!("Changed:   {}", report.changed.join(", "));
    println!("Unchanged: {}", report.unchanged.join(", "));
    for err in &report.rejected {
        println!("Rejected:  {} ({})", err, err.error_code());
    }
    println!("Node: {} renders, {} reflows", node.renders(), node.reflows());

    if !report.is_clean() {
        warn!("{} parameters were not applied", report.rejected.len());
    }

    Ok(())
}

/// Write one parameter of the demo host through its float bridge.
pub fn set(type_name: &str, floats: &[f64]) -> Result<()> {
    let (mut host, node) = linked_host();

    let live = host
        .live_mut(type_name)
        .ok_or_else(|| LiveError::UnknownParameter {
            type_name: type_name.to_string(),
        })?;

    let change = live.set_floats(floats);
    println!("{}: {:?}", live.name(), change);
    println!("Value: {}", format_floats(Some(&live.get())));
    println!("Node: {} renders, {} reflows", node.renders(), node.reflows());

    Ok(())
}
