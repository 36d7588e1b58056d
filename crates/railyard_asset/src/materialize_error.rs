use railyard_core::record::SchemaMismatch;
use std::path::PathBuf;
use thiserror::Error;

/// Errors while materializing a character from a local image.
///
/// A missing image file is not an error; see
/// [`CharacterMaterializer::materialize`](crate::CharacterMaterializer::materialize).
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("character '{id}' is not registered")]
    UnknownCharacter { id: String },

    #[error("no fallback template available to clone for character '{id}'")]
    MissingFallbackTemplate { id: String },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatch),
}
