// src/error.rs
use leadlens_shared_kernel::{DomainError, InfrastructureError, LeadLensError, PresentationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Lens(#[from] LeadLensError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        Self::Lens(err.into())
    }
}

impl From<InfrastructureError> for AppError {
    fn from(err: InfrastructureError) -> Self {
        Self::Lens(err.into())
    }
}

impl From<PresentationError> for AppError {
    fn from(err: PresentationError) -> Self {
        Self::Lens(err.into())
    }
}
