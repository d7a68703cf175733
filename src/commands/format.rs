//! Output formatting for query results

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use waypath_core::error::Result;
use waypath_core::input::QueryOutcome;

/// Result of one command-file line
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LineReport {
    Answered {
        line: usize,
        query: String,
        value: QueryOutcome,
    },
    Rejected {
        line: usize,
        input: String,
        error: String,
    },
}

impl LineReport {
    fn human(&self) -> String {
        match self {
            LineReport::Answered { query, value, .. } => format!("Calling {}: {}", query, value),
            LineReport::Rejected { error, .. } => error.clone(),
        }
    }
}

/// Result of a single query given on the command line
#[derive(Debug, Serialize)]
pub struct QueryReport {
    pub query: String,
    pub value: QueryOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<char>>,
}

impl QueryReport {
    fn human(&self) -> String {
        let mut out = format!("Calling {}: {}", self.query, self.value);
        if let Some(route) = &self.route {
            let walk: Vec<String> = route.iter().map(char::to_string).collect();
            out.push_str(&format!(" via {}", walk.join("-")));
        }
        out
    }
}

/// Print a batch of command-file results
pub fn print_batch(cli: &Cli, reports: &[LineReport]) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            for report in reports {
                if cli.quiet && matches!(report, LineReport::Rejected { .. }) {
                    continue;
                }
                println!("{}", report.human());
            }
        }
        OutputFormat::Json => {
            let doc = serde_json::json!({ "results": reports });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

/// Print the result of one query
pub fn print_single(cli: &Cli, report: &QueryReport) -> Result<()> {
    match cli.format {
        OutputFormat::Human => println!("{}", report.human()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
