//! Railyard Asset Pipeline
//!
//! Turns locally stored images into objects the host can use directly,
//! bypassing the host's own asset loading.

mod materialize;
mod materialize_error;
mod settings;

pub use materialize::CharacterMaterializer;
pub use materialize_error::MaterializeError;
pub use settings::AssetSettings;
