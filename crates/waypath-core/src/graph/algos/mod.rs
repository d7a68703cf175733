//! Query algorithms over [`Graph`](crate::graph::Graph)

mod path_length;
mod shortest_path;
mod trips;

pub use path_length::path_length;
pub use shortest_path::{shortest_path, shortest_route};
pub use trips::num_trips;
