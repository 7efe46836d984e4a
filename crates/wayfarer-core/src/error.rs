//! Error types and exit codes for wayfarer
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, invalid edge, malformed network)

use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, invalid edge, malformed network (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wayfarer operations
#[derive(Error, Debug)]
pub enum WayfarerError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("unknown vertex: {label}")]
    UnknownVertex { label: String },

    #[error("invalid edge {from} -- {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    #[error("invalid network: {reason}")]
    InvalidNetwork { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfarerError {
    /// Create an error for an operation referencing a vertex not in the graph
    pub fn unknown_vertex(label: impl Into<String>) -> Self {
        WayfarerError::UnknownVertex {
            label: label.into(),
        }
    }

    /// Create an error for an edge rejected at construction time
    pub fn invalid_edge(
        from: impl Into<String>,
        to: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        WayfarerError::InvalidEdge {
            from: from.into(),
            to: to.into(),
            reason: reason.into(),
        }
    }

    /// Create an error for a malformed network definition
    pub fn invalid_network(reason: impl std::fmt::Display) -> Self {
        WayfarerError::InvalidNetwork {
            reason: reason.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        WayfarerError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfarerError::UnknownFormat(_)
            | WayfarerError::UsageError(_)
            | WayfarerError::Unsupported { .. } => ExitCode::Usage,

            WayfarerError::UnknownVertex { .. }
            | WayfarerError::InvalidEdge { .. }
            | WayfarerError::InvalidNetwork { .. } => ExitCode::Data,

            WayfarerError::Io(_)
            | WayfarerError::Json(_)
            | WayfarerError::Yaml(_)
            | WayfarerError::Toml(_)
            | WayfarerError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WayfarerError::UnknownFormat(_) => "unknown_format",
            WayfarerError::UsageError(_) => "usage_error",
            WayfarerError::Unsupported { .. } => "unsupported",
            WayfarerError::UnknownVertex { .. } => "unknown_vertex",
            WayfarerError::InvalidEdge { .. } => "invalid_edge",
            WayfarerError::InvalidNetwork { .. } => "invalid_network",
            WayfarerError::Io(_) => "io_error",
            WayfarerError::Json(_) => "json_error",
            WayfarerError::Yaml(_) => "yaml_error",
            WayfarerError::Toml(_) => "toml_error",
            WayfarerError::Other(_) => "other",
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

/// Result type alias for wayfarer operations
pub type Result<T> = std::result::Result<T, WayfarerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(
            WayfarerError::UnknownFormat("csv".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WayfarerError::unknown_vertex("Nowhere").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            WayfarerError::invalid_edge("A", "B", "unknown endpoint").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            WayfarerError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_error_json_envelope() {
        let err = WayfarerError::unknown_vertex("Nowhere");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unknown_vertex");
        assert_eq!(json["error"]["message"], "unknown vertex: Nowhere");
    }

    #[test]
    fn test_display_messages() {
        let err = WayfarerError::invalid_edge("Home", "Mars", "unknown endpoint: Mars");
        assert_eq!(
            err.to_string(),
            "invalid edge Home -- Mars: unknown endpoint: Mars"
        );
    }
}
