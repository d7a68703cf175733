//! Waypath - route queries over small weighted directed graphs
//!
//! Measures named walks, counts trips under hop or weight budgets, and finds
//! shortest distances (including shortest return cycles) in graphs read from
//! edge-list files.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use waypath_core::error::{ExitCode as WaypathExitCode, WaypathError};
use waypath_core::logging;

const EDGE_LIST_HINT: &str =
    "hint: write each edge as two node labels and an optional weight, e.g. `AB5, BC4, CD8`";

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--format` is global, so clap can fail before `Cli.format` exists
        Err(err) if argv_requests_json() => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            let error = usage_error(&err);
            eprintln!("{}", error.to_json());
            return error.exit_code().into();
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => WaypathExitCode::Success.into(),
        Err(e) => {
            report(&cli, &e);
            e.exit_code().into()
        }
    }
}

/// Map a clap failure onto the waypath error categories
fn usage_error(err: &clap::Error) -> WaypathError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => WaypathError::UsageError(err.to_string()),
        _ => WaypathError::Other(err.to_string()),
    }
}

fn report(cli: &Cli, e: &WaypathError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
        return;
    }
    if cli.quiet {
        return;
    }

    eprintln!("error: {}", e);
    if matches!(e, WaypathError::Parse { .. }) {
        eprintln!("{}", EDGE_LIST_HINT);
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
