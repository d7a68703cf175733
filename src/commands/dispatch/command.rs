//! Command trait and context for dispatching commands

use std::env;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{query, run};
use waypath_core::config::Config;
use waypath_core::error::Result;
use waypath_core::input::Query;

/// Resolve configuration from `--config` or the working directory
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => Config::discover(&env::current_dir()?),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn load(cli: &'a Cli, start: Instant) -> Result<Self> {
        Ok(Self {
            cli,
            config: load_config(cli)?,
            start,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waypath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Route, trip and shortest-path queries over weighted directed graphs.");
        println!();
        println!("Run `waypath --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Run { graph, commands } => run::execute(ctx, graph, commands),
            Commands::Length { graph, path } => {
                query::execute(ctx, graph, &Query::PathLength(path.chars().collect()), false)
            }
            Commands::Shortest {
                graph,
                from,
                to,
                route,
            } => query::execute(ctx, graph, &Query::ShortestPath(*from, *to), *route),
            Commands::Trips {
                graph,
                from,
                to,
                budget,
                max,
                weighted,
            } => {
                let query = if *weighted {
                    Query::WeightedTrips(*from, *to, *budget)
                } else if *max {
                    Query::MaxTrips(*from, *to, *budget)
                } else {
                    Query::ExactTrips(*from, *to, *budget)
                };
                query::execute(ctx, graph, &query, false)
            }
        }
    }
}
