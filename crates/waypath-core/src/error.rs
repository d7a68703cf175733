//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed command line)
//! - 3: Data error (malformed edge list, unknown node handle)

mod macros;

use thiserror::Error;

/// Exit codes reported by the waypath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Errors that can occur during waypath operations
#[derive(Error, Debug)]
pub enum WaypathError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("node handle {id} does not belong to this graph")]
    UnknownNode { id: usize },

    #[error("{source_name}:{line}: {reason}")]
    Parse {
        source_name: String,
        line: usize,
        reason: String,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WaypathError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed line of an input file
    pub fn parse(source_name: &str, line: usize, reason: impl Into<String>) -> Self {
        WaypathError::Parse {
            source_name: source_name.to_string(),
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypathError::UsageError(_) | WaypathError::InvalidValue { .. } => ExitCode::Usage,

            WaypathError::NotFound { .. }
            | WaypathError::UnknownNode { .. }
            | WaypathError::Parse { .. } => ExitCode::Data,

            WaypathError::Io(_)
            | WaypathError::Json(_)
            | WaypathError::Toml(_)
            | WaypathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::InvalidValue { .. } => "invalid_value",
            WaypathError::NotFound { .. } => "not_found",
            WaypathError::UnknownNode { .. } => "unknown_node",
            WaypathError::Parse { .. } => "parse_error",
            WaypathError::Io(_) => "io_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::Toml(_) => "toml_error",
            WaypathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;
