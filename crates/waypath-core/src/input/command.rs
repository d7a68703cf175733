//! Command-file reader
//!
//! One query per line:
//!
//! | tokens               | query                                   |
//! |----------------------|-----------------------------------------|
//! | `ABC`                | length of the walk A-B-C                |
//! | `A C`                | shortest distance from A to C           |
//! | `A C 4`              | walks of exactly 4 hops                 |
//! | `A C 4 max`          | walks of 1 to 4 hops                    |
//! | `A C 30 weighted`    | walks with total weight under 30        |

use std::fmt;

use serde::Serialize;

use crate::bail_usage;
use crate::error::{Result, WaypathError};
use crate::graph::{Distance, Graph, RouteLength, TripBudget};

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    PathLength(Vec<char>),
    ShortestPath(char, char),
    ExactTrips(char, char, i64),
    MaxTrips(char, char, i64),
    WeightedTrips(char, char, i64),
}

/// The answer to a [`Query`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    Length(RouteLength),
    Distance(Distance),
    Trips(u64),
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Length(len) => write!(f, "{}", len),
            QueryOutcome::Distance(dist) => write!(f, "{}", dist),
            QueryOutcome::Trips(count) => write!(f, "{}", count),
        }
    }
}

impl Query {
    /// Budget carried by trip queries
    pub fn budget(&self) -> Option<i64> {
        match self {
            Query::ExactTrips(_, _, budget)
            | Query::MaxTrips(_, _, budget)
            | Query::WeightedTrips(_, _, budget) => Some(*budget),
            Query::PathLength(_) | Query::ShortestPath(_, _) => None,
        }
    }

    /// Evaluate against `graph`
    pub fn run(&self, graph: &Graph<char>) -> Result<QueryOutcome> {
        let outcome = match self {
            Query::PathLength(path) => QueryOutcome::Length(graph.path_length(path)),
            Query::ShortestPath(from, to) => QueryOutcome::Distance(graph.shortest_path(from, to)),
            Query::ExactTrips(from, to, hops) => {
                QueryOutcome::Trips(graph.num_trips(from, to, *hops, TripBudget::Hops)?)
            }
            Query::MaxTrips(from, to, max_hops) => {
                let mut total = 0u64;
                for hops in 1..=*max_hops {
                    total += graph.num_trips(from, to, hops, TripBudget::Hops)?;
                }
                QueryOutcome::Trips(total)
            }
            Query::WeightedTrips(from, to, budget) => {
                let mode = TripBudget::Weight {
                    first_call: from == to,
                };
                QueryOutcome::Trips(graph.num_trips(from, to, *budget, mode)?)
            }
        };
        Ok(outcome)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::PathLength(path) => {
                write!(f, "path_length({})", path.iter().collect::<String>())
            }
            Query::ShortestPath(from, to) => write!(f, "shortest_path({},{})", from, to),
            Query::ExactTrips(from, to, n) => write!(f, "exact num_trips({},{},{})", from, to, n),
            Query::MaxTrips(from, to, n) => write!(f, "max num_trips({},{},{})", from, to, n),
            Query::WeightedTrips(from, to, n) => {
                write!(f, "weighted num_trips({},{},{})", from, to, n)
            }
        }
    }
}

/// A non-blank line of a command file and its parse result
#[derive(Debug)]
pub struct CommandLine {
    /// 1-based line number
    pub line: usize,
    pub text: String,
    pub query: Result<Query>,
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parse one command line. Blank lines and `#` comments give `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Query>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if let [path] = tokens.as_slice() {
        return Ok(Some(Query::PathLength(path.chars().collect())));
    }

    let (Some(from), Some(to)) = (single_char(tokens[0]), single_char(tokens[1])) else {
        bail_usage!("Wrong input!");
    };

    let budget = match tokens.get(2) {
        Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
            WaypathError::UsageError("Need integer value as 3rd argument!".to_string())
        })?),
        None => None,
    };

    let query = match (tokens.len(), budget) {
        (2, _) => Query::ShortestPath(from, to),
        (3, Some(n)) => Query::ExactTrips(from, to, n),
        (4, Some(n)) => match tokens[3] {
            "max" => Query::MaxTrips(from, to, n),
            "weighted" => Query::WeightedTrips(from, to, n),
            _ => bail_usage!("Only 'max' and 'weighted' accepted at last index!"),
        },
        _ => bail_usage!("Line is not valid input!"),
    };

    Ok(Some(query))
}

/// Parse every non-blank line of a command file.
///
/// Malformed lines are kept with their error so callers can report them and
/// carry on with the rest of the batch.
pub fn parse_commands(text: &str) -> Vec<CommandLine> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| match parse_command(raw) {
            Ok(None) => None,
            Ok(Some(query)) => Some(CommandLine {
                line: idx + 1,
                text: raw.trim().to_string(),
                query: Ok(query),
            }),
            Err(e) => Some(CommandLine {
                line: idx + 1,
                text: raw.trim().to_string(),
                query: Err(e),
            }),
        })
        .collect()
}
