// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LeadLensError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LeadLensError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, LeadLensError>;

/// Domain-layer specific errors.
///
/// `InvalidPeriod` and `MalformedTimestamp` are deterministic for a given
/// input; neither is retried, both are reported to the immediate caller. A
/// malformed timestamp is never coerced into an include/exclude decision.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Period names form a closed set; anything else is rejected where it is parsed.
    #[error("Unknown period '{name}' (expected day, week or month)")]
    InvalidPeriod { name: String },

    /// The record carries a timestamp that is not an unambiguous absolute instant.
    #[error("Malformed timestamp '{value}': {details}")]
    MalformedTimestamp { value: String, details: String },

    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: String, end: String },

    /// The requested calendar context has no valid instant at the period boundary.
    #[error("No valid period boundary at {date} in the requested calendar context")]
    NonexistentBoundary { date: NaiveDate },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record at {path}:{line}: {source}")]
    RecordParse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {format} output: {details}")]
    Serialization { format: String, details: String },

    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::Io { message: err.to_string(), source: err }
    }
}

impl From<std::io::Error> for LeadLensError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LeadLensError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LeadLensError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LeadLensError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LeadLensError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
