//! Readers for the textual inputs: edge lists and command files

pub mod command;
pub mod edge_list;

pub use command::{parse_command, parse_commands, CommandLine, Query, QueryOutcome};
pub use edge_list::{build_graph, load_graph, parse_edge_list, EdgeSpec};
