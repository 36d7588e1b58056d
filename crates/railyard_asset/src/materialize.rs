use crate::{AssetSettings, MaterializeError};
use glam::Vec2;
use image::error::{ImageError, ParameterError, ParameterErrorKind};
use railyard_core::asset::{Prefab, Sprite, Texture};
use railyard_core::data::CharacterData;
use railyard_core::record::inject;
use railyard_core::registry::Registry;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::rc::Rc;

/// Builds character objects from images stored under the plugin root.
#[derive(Debug, Clone, Default)]
pub struct CharacterMaterializer {
    settings: AssetSettings,
}

impl CharacterMaterializer {
    pub fn new(settings: AssetSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AssetSettings {
        &self.settings
    }

    /// File backing `character`: plugin root joined with its asset GUID.
    ///
    /// `None` when the GUID is empty, absolute or climbs out of the root.
    pub fn backing_path(&self, character: &CharacterData) -> Option<PathBuf> {
        let relative = Path::new(character.character_prefab_variant_ref().asset_guid());
        let mut components = relative.components().peekable();
        components.peek()?;
        if !components.all(|component| matches!(component, Component::Normal(_))) {
            return None;
        }
        Some(self.settings.plugin_root.join(relative))
    }

    /// Create a renderable object for the registered character `id`.
    ///
    /// Clones the fallback template, attaches the decoded sprite to its state
    /// and UI, and marks the character's asset reference as already loaded so
    /// the host never tries to load it itself.
    ///
    /// Returns `Ok(None)` when the character has no backing file.
    pub fn materialize(
        &self,
        characters: &Registry<CharacterData>,
        id: &str,
    ) -> Result<Option<Rc<Prefab>>, MaterializeError> {
        let character = characters
            .get_by_id(id)
            .ok_or_else(|| MaterializeError::UnknownCharacter { id: id.to_string() })?;

        let Some(path) = self.backing_path(character) else {
            tracing::debug!(
                character = id,
                guid = character.character_prefab_variant_ref().asset_guid(),
                "asset path not under plugin root, skipping"
            );
            return Ok(None);
        };
        if !path.is_file() {
            tracing::debug!(character = id, path = %path.display(), "no local art, skipping");
            return Ok(None);
        }

        let sprite = Rc::new(self.load_sprite(&path)?);

        let template = character
            .fallback_data()
            .or_else(|| characters.fallback())
            .and_then(|fallback| fallback.default_character_prefab())
            .ok_or_else(|| MaterializeError::MissingFallbackTemplate { id: id.to_string() })?;

        let mut object = Prefab::clone(template);
        object.set_mesh_renderer_active(true);
        inject(object.state_mut(), "sprite", Some(Rc::clone(&sprite)))?;
        object.ui_mut().set_sprite(sprite);

        let object = Rc::new(object);
        character
            .character_prefab_variant_ref()
            .mark_loaded(Rc::clone(&object));

        tracing::debug!(character = id, path = %path.display(), "materialized character");
        Ok(Some(object))
    }

    /// Read and decode an image into a sprite covering the whole texture.
    pub fn load_sprite(&self, path: &Path) -> Result<Sprite, MaterializeError> {
        let bytes = fs::read(path).map_err(|source| MaterializeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let image = image::load_from_memory(&bytes)
            .map_err(|source| MaterializeError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let (width, height) = image.dimensions();
        // `into_raw` always yields width * height * 4 bytes for an RGBA8 buffer.
        let texture = Texture::from_rgba8(width, height, image.into_raw()).ok_or_else(|| {
            MaterializeError::Decode {
                path: path.to_path_buf(),
                source: ImageError::Parameter(ParameterError::from_kind(
                    ParameterErrorKind::DimensionMismatch,
                )),
            }
        })?;

        Ok(Sprite::full(
            Rc::new(texture),
            Vec2::from(self.settings.pivot),
            self.settings.pixels_per_unit,
        ))
    }
}
