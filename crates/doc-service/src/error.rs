use report_engine::RenderError;
use thiserror::Error;

/// Backend failure inside a store implementation.
#[derive(Debug, Error)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn backend(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

/// Errors surfaced by the document service. Missing lookups are fatal and
/// carry the normalized message callers show to the user.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A record the document depends on does not exist.
    #[error("Failed to generate PDF: {0} not found")]
    NotFound(String),

    #[error("Failed to generate PDF: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
