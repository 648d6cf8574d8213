//! Error types for the rendering pipeline.

use thiserror::Error;

/// Fatal rendering errors. Every entry point normalizes these into a single
/// `Failed to generate PDF: <detail>` message for the caller; the only
/// swallowed condition in the pipeline is a logo fetch/decode failure.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to generate PDF: company settings are incomplete: {0}")]
    InvalidSettings(#[from] site_types::SettingsError),

    #[error("Failed to generate PDF: {0} not found")]
    MissingDependency(String),

    #[error("Failed to generate PDF: document has no pages")]
    EmptyDocument,

    #[error("Failed to generate PDF: timed out after {0}ms")]
    Timeout(u64),

    #[error("Failed to generate PDF: {0}")]
    Pdf(String),

    #[error("Failed to generate PDF: {0}")]
    Io(#[from] std::io::Error),
}
