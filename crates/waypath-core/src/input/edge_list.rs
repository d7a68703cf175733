//! Edge-list reader
//!
//! An edge is written as two single-character labels followed by an optional
//! decimal weight, e.g. `AB5`. Edges are separated by commas and/or
//! whitespace, so both one-edge-per-line files and `AB5, BC4, CD8` lines are
//! accepted. Blank lines and `#` comments are skipped.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::error::{Result, WaypathError};
use crate::graph::{Graph, Weight};
use crate::trace_time;

/// One parsed edge token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: char,
    pub to: char,
    pub weight: Weight,
}

fn parse_token(token: &str, default_weight: Weight) -> std::result::Result<EdgeSpec, String> {
    let mut chars = token.chars();
    let (Some(from), Some(to)) = (chars.next(), chars.next()) else {
        return Err(format!("edge `{}` needs a source and a target", token));
    };

    let rest = chars.as_str();
    let weight = if rest.is_empty() {
        default_weight
    } else {
        rest.parse::<Weight>()
            .map_err(|_| format!("edge `{}` has a non-numeric weight `{}`", token, rest))?
    };

    if weight < 0 {
        return Err(format!("edge `{}` has a negative weight", token));
    }

    Ok(EdgeSpec { from, to, weight })
}

/// Parse edge-list text; `source_name` labels error messages
pub fn parse_edge_list(
    text: &str,
    source_name: &str,
    default_weight: Weight,
) -> Result<Vec<EdgeSpec>> {
    let mut edges = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let edge = parse_token(token, default_weight)
                .map_err(|reason| WaypathError::parse(source_name, idx + 1, reason))?;
            edges.push(edge);
        }
    }

    Ok(edges)
}

/// Build a graph from edge specs in declaration order
pub fn build_graph(edges: &[EdgeSpec]) -> Graph<char> {
    let mut graph = Graph::new();
    for edge in edges {
        graph.connect(edge.from, edge.to, edge.weight);
    }
    graph
}

/// Read and build the graph stored at `path`
#[tracing::instrument(skip(config), fields(path = %path.display()))]
pub fn load_graph(path: &Path, config: &Config) -> Result<Graph<char>> {
    let start = Instant::now();
    let text = fs::read_to_string(path).map_err(|e| {
        WaypathError::not_found("graph file", format!("{} ({})", path.display(), e))
    })?;

    let edges = parse_edge_list(&text, &path.display().to_string(), config.graph.default_weight)?;
    let graph = build_graph(&edges);

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    trace_time!(start, "load_graph");
    Ok(graph)
}
