//! Core error types for Markdown conversion
//!
//! Every failure the converter can report, from argument validation through
//! the final file write, is a [`ConvertError`] variant.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed cause carried by [`ConvertError::ConversionFailed`]
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while validating an invocation or converting a document
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No mode specified.")]
    MissingMode,

    #[error("Mode '{mode}' does not exist.\nSupported modes: {supported}")]
    UnknownMode { mode: String, supported: String },

    #[error("No input file specified.")]
    MissingInput,

    #[error("File '{}' does not exist.", path.display())]
    InputNotFound { path: PathBuf },

    #[error("The {mode} command requires {needed} arguments.")]
    InvalidArguments { mode: String, needed: usize },

    #[error("Operation cancelled.")]
    OperationCancelled,

    #[error("File not found: '{}'", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Permission denied reading or writing '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Failed to process '{}': {source}", path.display())]
    ConversionFailed {
        path: PathBuf,
        #[source]
        source: BoxedCause,
    },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ConvertError {
    /// Create an unknown-mode error listing the supported modes
    pub fn unknown_mode(mode: impl Into<String>, supported: &[&str]) -> Self {
        Self::UnknownMode {
            mode: mode.into(),
            supported: supported.join(", "),
        }
    }

    /// Create a conversion failure wrapping any error as its cause
    pub fn conversion_failed(path: impl Into<PathBuf>, source: impl Into<BoxedCause>) -> Self {
        Self::ConversionFailed {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Map an I/O error on `path` onto the taxonomy
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::conversion_failed(path, err),
        }
    }

    /// Whether the error came from checking the command line
    ///
    /// Callers re-print usage for these.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingMode
                | Self::UnknownMode { .. }
                | Self::MissingInput
                | Self::InputNotFound { .. }
                | Self::InvalidArguments { .. }
        )
    }

    /// Whether the operator chose to stop rather than something failing
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::OperationCancelled)
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_cancellation() {
            0
        } else if self.is_validation() {
            2
        } else {
            1
        }
    }
}
