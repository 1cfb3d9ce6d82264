use thiserror::Error;

use crate::types::{ResolveError, TransformError};

/// Unified error type covering inheritance resolution, rule
/// transformation, and template parsing.
///
/// Each message is user-facing; callers surface it verbatim.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
