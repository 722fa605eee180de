//! Error types with fix suggestions
//!
//! Error code ranges:
//! - NLU-000-009: JSON serialization errors
//! - NLU-010-019: Filesystem errors
//! - NLU-020-029: Model directory validation errors
//! - NLU-030-039: Settings errors

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UtilsError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum UtilsError {
    // ─────────────────────────────────────────────────────────────
    // JSON (NLU-001 to NLU-002)
    // ─────────────────────────────────────────────────────────────
    #[error("NLU-001: Value cannot be serialized to JSON: {details}")]
    Serialization { details: String },

    #[error("NLU-002: Invalid JSON in '{}': {details}", .path.display())]
    Deserialization { path: PathBuf, details: String },

    // ─────────────────────────────────────────────────────────────
    // Filesystem (NLU-010 to NLU-012)
    // ─────────────────────────────────────────────────────────────
    #[error("NLU-010: {operation} failed for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("NLU-011: Cannot list directory '{}': {details}", .path.display())]
    DirWalk { path: PathBuf, details: String },

    #[error("NLU-012: '{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Model directories (NLU-020)
    // ─────────────────────────────────────────────────────────────
    #[error("NLU-020: Cannot remove '{}', it seems it is not a model directory", .path.display())]
    NotModelDir { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Settings (NLU-030)
    // ─────────────────────────────────────────────────────────────
    #[error("NLU-030: Settings error: {reason}")]
    Config { reason: String },
}

impl UtilsError {
    pub(crate) fn io(
        path: impl Into<PathBuf>,
        operation: &'static str,
        source: std::io::Error,
    ) -> Self {
        UtilsError::Io {
            path: path.into(),
            operation,
            source,
        }
    }

    /// Stable error code, e.g. `NLU-020`
    pub fn code(&self) -> &'static str {
        match self {
            UtilsError::Serialization { .. } => "NLU-001",
            UtilsError::Deserialization { .. } => "NLU-002",
            UtilsError::Io { .. } => "NLU-010",
            UtilsError::DirWalk { .. } => "NLU-011",
            UtilsError::NotADirectory { .. } => "NLU-012",
            UtilsError::NotModelDir { .. } => "NLU-020",
            UtilsError::Config { .. } => "NLU-030",
        }
    }
}

impl From<serde_json::Error> for UtilsError {
    fn from(err: serde_json::Error) -> Self {
        UtilsError::Serialization {
            details: err.to_string(),
        }
    }
}

impl FixSuggestion for UtilsError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            UtilsError::Serialization { .. } => {
                Some("Use string map keys and finite numbers; NaN and infinity have no JSON form")
            }
            UtilsError::Deserialization { .. } => {
                Some("Ensure the file contains valid JSON (try parsing with jq)")
            }
            UtilsError::Io { .. } => Some("Check file path and permissions"),
            UtilsError::DirWalk { .. } => Some("Check the directory exists and is readable"),
            UtilsError::NotADirectory { .. } => {
                Some("Pass the model directory, not a file inside it")
            }
            UtilsError::NotModelDir { .. } => Some(
                "A model directory is flat and only holds .json, .pkl or .dat files; \
                 remove other content by hand",
            ),
            UtilsError::Config { .. } => Some("Check YAML syntax: indentation and quoting"),
        }
    }
}
