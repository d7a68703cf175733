//! Waypath Core Library
//!
//! Weighted directed graphs with walk-length, trip-count and shortest-path
//! queries, plus the readers and ambient plumbing the `waypath` CLI needs.

pub mod config;
pub mod error;
pub mod graph;
pub mod input;
pub mod logging;

pub use graph::{Distance, Graph, NodeId, RouteLength, TripBudget};
