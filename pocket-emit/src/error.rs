//! Error types for emitting catalogs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("emitter '{0}' not found")]
    EmitterNotFound(String),

    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),
}
