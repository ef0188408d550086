//! Error types for tool dispatch
//!
//! Every failure a tool can report is a [`ToolError`]. Providers surface OS
//! errors through these variants without retrying; the dispatch layer turns
//! them into error envelopes.

use std::io;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while dispatching or executing a tool
#[derive(Error, Debug)]
pub enum ToolError {
    /// No tool with this name is registered
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments failed to decode or failed validation
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The OS metrics facility could not produce a value
    #[error("metric unavailable: {0}")]
    MetricUnavailable(String),

    /// No process with this pid exists
    #[error("process not found: {0}")]
    ProcessNotFound(u32),

    /// The caller lacks the rights for the operation
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The OS refused to start the process
    #[error("launch failed: {0}")]
    LaunchFailed(String),

    /// The path does not exist
    #[error("path not found: {0}")]
    PathNotFound(String),

    /// The invocation was cancelled or timed out before completing
    #[error("cancelled")]
    Cancelled,

    /// A result could not be serialized
    #[error("internal error: {0}")]
    Internal(String),
}

/// Discriminant of [`ToolError`], cheap to copy and compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnknownTool,
    InvalidArguments,
    MetricUnavailable,
    ProcessNotFound,
    PermissionDenied,
    LaunchFailed,
    PathNotFound,
    Cancelled,
    Internal,
}

impl ToolError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolError::UnknownTool(_) => ErrorKind::UnknownTool,
            ToolError::InvalidArguments(_) => ErrorKind::InvalidArguments,
            ToolError::MetricUnavailable(_) => ErrorKind::MetricUnavailable,
            ToolError::ProcessNotFound(_) => ErrorKind::ProcessNotFound,
            ToolError::PermissionDenied(_) => ErrorKind::PermissionDenied,
            ToolError::LaunchFailed(_) => ErrorKind::LaunchFailed,
            ToolError::PathNotFound(_) => ErrorKind::PathNotFound,
            ToolError::Cancelled => ErrorKind::Cancelled,
            ToolError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Map an I/O error raised while accessing `path`
    pub fn from_path_io(path: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ToolError::PathNotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => {
                ToolError::PermissionDenied(format!("{}: {}", path, err))
            }
            io::ErrorKind::NotADirectory => {
                ToolError::InvalidArguments(format!("{} is not a directory", path))
            }
            _ => ToolError::MetricUnavailable(format!("{}: {}", path, err)),
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        ToolError::Internal(err.to_string())
    }
}

/// Result type alias for tool operations
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(ToolError::Cancelled.kind(), ErrorKind::Cancelled);
        assert_eq!(ToolError::ProcessNotFound(7).kind(), ErrorKind::ProcessNotFound);
        assert_eq!(
            ToolError::UnknownTool("x".into()).kind(),
            ErrorKind::UnknownTool
        );
    }

    #[test]
    fn test_from_path_io() {
        let err = ToolError::from_path_io("/nope", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ToolError::PathNotFound(p) if p == "/nope"));

        let err = ToolError::from_path_io(
            "/root",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ToolError::ProcessNotFound(42).to_string(), "process not found: 42");
        assert_eq!(ToolError::Cancelled.to_string(), "cancelled");
    }
}
