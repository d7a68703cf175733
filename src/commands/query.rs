//! Single queries given directly on the command line

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_single, QueryReport};
use waypath_core::error::Result;
use waypath_core::input::{load_graph, Query};
use waypath_core::trace_time;

/// Load `graph_path`, answer `query` and print the result.
///
/// `with_route` adds the node sequence to shortest-path answers.
pub fn execute(
    ctx: &CommandContext,
    graph_path: &Path,
    query: &Query,
    with_route: bool,
) -> Result<()> {
    if let Some(budget) = query.budget() {
        ctx.config.check_budget(budget)?;
    }

    let graph = load_graph(graph_path, &ctx.config)?;
    let value = query.run(&graph)?;

    let route = match query {
        Query::ShortestPath(from, to) if with_route => {
            graph.shortest_route(from, to).map(|route| route.nodes)
        }
        _ => None,
    };

    trace_time!(ctx.start, "query");
    print_single(
        ctx.cli,
        &QueryReport {
            query: query.to_string(),
            value,
            route,
        },
    )
}
