//! Batch evaluation of a command file

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_batch, LineReport};
use waypath_core::config::Config;
use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::Graph;
use waypath_core::input::{load_graph, parse_commands, CommandLine};
use waypath_core::trace_time;

/// Answer every query in `commands_path`; malformed lines are reported and
/// skipped.
pub fn execute(ctx: &CommandContext, graph_path: &Path, commands_path: &Path) -> Result<()> {
    let graph = load_graph(graph_path, &ctx.config)?;

    let text = fs::read_to_string(commands_path).map_err(|e| {
        WaypathError::not_found(
            "command file",
            format!("{} ({})", commands_path.display(), e),
        )
    })?;

    let commands = parse_commands(&text);
    debug!(count = commands.len(), "parsed command file");

    let reports: Vec<LineReport> = commands
        .into_iter()
        .map(|command| evaluate(&ctx.config, &graph, command))
        .collect();

    trace_time!(ctx.start, "run_commands");
    print_batch(ctx.cli, &reports)
}

fn evaluate(config: &Config, graph: &Graph<char>, command: CommandLine) -> LineReport {
    let answered = command.query.and_then(|query| {
        if let Some(budget) = query.budget() {
            config.check_budget(budget)?;
        }
        let value = query.run(graph)?;
        Ok((query, value))
    });

    match answered {
        Ok((query, value)) => LineReport::Answered {
            line: command.line,
            query: query.to_string(),
            value,
        },
        Err(e) => {
            warn!(line = command.line, input = %command.text, error = %e, "skipping command");
            LineReport::Rejected {
                line: command.line,
                input: command.text,
                error: e.to_string(),
            }
        }
    }
}
