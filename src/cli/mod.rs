//! CLI Module
//!
//! Command-line inspector for live parameters, run against a demo blur host.

pub mod commands;
pub mod demo;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Live parameter inspector
#[derive(Parser, Debug)]
#[command(name = "liveparam")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every parameter with its kind, value and bounds
    #[command(name = "list")]
    List,

    /// Print the parameter set as JSON envelopes
    #[command(name = "dump")]
    Dump {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replay a saved parameter set and report what changed
    #[command(name = "apply")]
    Apply {
        /// Path to a JSON envelope file
        path: PathBuf,
    },

    /// Write a parameter through its float representation
    #[command(name = "set")]
    Set {
        /// Dynamic type name of the parameter, e.g. `blur-radius`
        type_name: String,

        /// Float components of the new value
        #[arg(allow_negative_numbers = true, num_args = 0..)]
        floats: Vec<f64>,
    },
}
