//! Rendering errors.

use std::io;

/// Failure to emit a rendered document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The output sink rejected a write or flush.
    #[error("failed to write output")]
    Write(#[from] io::Error),

    /// The model could not be serialized to JSON.
    #[error("failed to serialize the ontology model to JSON")]
    Json(#[from] serde_json::Error),
}
