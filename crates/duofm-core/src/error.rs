//! Error types for `duofm-core`.
//!
//! All fallible directory-service operations return [`ServiceResult<T>`],
//! which is an alias for `Result<T, ServiceError>`.

use std::path::PathBuf;

/// Unified error type for directory-service operations.
///
/// The `Display` output of each variant is the exact string shown to the
/// user, so panes can store `err.to_string()` directly in their error slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// An I/O error that doesn't fit a more specific variant.
    /// The message is displayed verbatim.
    #[error("{message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    /// The process lacks permission to access the path.
    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// The target path does not exist.
    #[error("Not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The path is malformed (embedded NUL, not a directory, etc.).
    /// The message is displayed verbatim.
    #[error("{message}")]
    InvalidPath { message: String },

    /// Handing a file to the system's default application failed.
    #[error("Failed to open {}: {}", .path.display(), .reason)]
    OpenFailed { path: PathBuf, reason: OpenReason },
}

impl ServiceError {
    /// Maps a raw I/O error to the matching typed variant.
    pub fn from_io(err: &std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => ServiceError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => ServiceError::PermissionDenied { path },
            _ => ServiceError::Io {
                message: err.to_string(),
                path: Some(path),
            },
        }
    }
}

/// Why handing a file to the default application failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenReason {
    PermissionDenied,
    NotFound,
    NoDefaultApp,
    Unknown,
}

impl OpenReason {
    /// Classifies an opener error message.
    ///
    /// Platform openers (xdg-open, `start`, `open`) only report free-form
    /// text, so this falls back to substring matching.
    #[must_use]
    pub fn from_message(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("permission") || lower.contains("access denied") {
            Self::PermissionDenied
        } else if lower.contains("not found") || lower.contains("no such file") {
            Self::NotFound
        } else if lower.contains("no application") || lower.contains("no default") {
            Self::NoDefaultApp
        } else {
            Self::Unknown
        }
    }
}

impl std::fmt::Display for OpenReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            OpenReason::PermissionDenied => "permission denied",
            OpenReason::NotFound => "not found",
            OpenReason::NoDefaultApp => "no default application",
            OpenReason::Unknown => "unknown error",
        };
        f.write_str(text)
    }
}

/// Convenience alias used throughout `duofm-core`.
pub type ServiceResult<T> = Result<T, ServiceError>;
