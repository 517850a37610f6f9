//! Error types and exit codes for routefind
//!
//! Exit codes:
//! - 0: Success (including searches that find no route)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown city, inconsistent or malformed dataset)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown city, bad dataset (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a graph or searching it
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("No such city: {name}")]
    UnknownLocation { name: String },

    #[error("duplicate location: {name}")]
    DuplicateLocation { name: String },

    #[error("location {name} lists itself as a neighbor")]
    SelfLoop { name: String },

    #[error("location {from} lists unknown neighbor {to}")]
    DanglingEdge { from: String, to: String },

    #[error("location {from} lists {to} as a neighbor but {to} does not list {from}")]
    AsymmetricEdge { from: String, to: String },

    #[error("parse error in {path:?} line {line}: {reason}")]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    // Normal search outcome; callers usually turn it into a "no route" result
    #[error("no route from {from} to {to}")]
    PathNotFound { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for a name that is not a key of the graph
    pub fn unknown_location(name: impl Into<String>) -> Self {
        RouteError::UnknownLocation { name: name.into() }
    }

    /// Create the "goal unreachable" outcome
    pub fn path_not_found(from: impl Into<String>, to: impl Into<String>) -> Self {
        RouteError::PathNotFound {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create an error for malformed input at a given line
    pub fn parse(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        RouteError::Parse {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RouteError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// True for the expected "goal unreachable" outcome
    pub fn is_path_not_found(&self) -> bool {
        matches!(self, RouteError::PathNotFound { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_)
            | RouteError::UsageError(_)
            | RouteError::InvalidValue { .. } => ExitCode::Usage,

            RouteError::UnknownLocation { .. }
            | RouteError::DuplicateLocation { .. }
            | RouteError::SelfLoop { .. }
            | RouteError::DanglingEdge { .. }
            | RouteError::AsymmetricEdge { .. }
            | RouteError::Parse { .. } => ExitCode::Data,

            RouteError::PathNotFound { .. }
            | RouteError::Io(_)
            | RouteError::Json(_)
            | RouteError::Toml(_)
            | RouteError::FailedOperationWithTarget { .. }
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UsageError(_) => "usage_error",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::UnknownLocation { .. } => "unknown_location",
            RouteError::DuplicateLocation { .. } => "duplicate_location",
            RouteError::SelfLoop { .. } => "self_loop",
            RouteError::DanglingEdge { .. } => "dangling_edge",
            RouteError::AsymmetricEdge { .. } => "asymmetric_edge",
            RouteError::Parse { .. } => "parse_error",
            RouteError::PathNotFound { .. } => "path_not_found",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RouteError::Other(_) => "other",
        }
    }

    /// Structured error envelope used for `--format json`
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

/// Result type alias for routefind operations
pub type Result<T> = std::result::Result<T, RouteError>;
