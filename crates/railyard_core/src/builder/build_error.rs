use crate::record::SchemaMismatch;
use thiserror::Error;

/// Errors that abort a single `build()` call tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatch),

    #[error("{kind} '{id}' could not be resolved")]
    ReferenceResolution { kind: &'static str, id: String },
}
