//! CLI argument parsing for waypath
//!
//! Uses clap for argument parsing.
//! Supports global flags: --config, --format, --quiet, --verbose

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Waypath - route, trip and shortest-path queries over weighted directed graphs
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./waypath.toml when present)
    #[arg(long, global = true, env = "WAYPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress diagnostics for rejected command lines and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate every query in a command file against a graph
    Run {
        /// Edge list, e.g. `AB5, BC4, CD8`
        graph: PathBuf,

        /// One query per line
        commands: PathBuf,
    },

    /// Total weight of the walk through the given nodes
    Length {
        /// Edge list file
        graph: PathBuf,

        /// Node labels in walk order, e.g. `ABC`
        path: String,
    },

    /// Shortest distance between two nodes (a node to itself gives the shortest cycle)
    Shortest {
        /// Edge list file
        graph: PathBuf,

        /// Start node
        from: char,

        /// Finish node
        to: char,

        /// Also print the nodes along the shortest walk
        #[arg(long)]
        route: bool,
    },

    /// Count walks between two nodes under a hop or weight budget
    Trips {
        /// Edge list file
        graph: PathBuf,

        /// Start node
        from: char,

        /// Finish node
        to: char,

        /// Hop count (exact, or the maximum with --max) or weight allowance (--weighted)
        #[arg(allow_negative_numbers = true)]
        budget: i64,

        /// Count walks of 1 up to BUDGET hops
        #[arg(long, conflicts_with = "weighted")]
        max: bool,

        /// Treat BUDGET as a weight allowance
        #[arg(long)]
        weighted: bool,
    },
}
