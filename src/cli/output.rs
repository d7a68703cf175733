use clap::ValueEnum;

/// Output format for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One readable line per query
    #[default]
    Human,
    /// A single JSON document
    Json,
}
