//! Asset references and the visual values they resolve to.
//!
//! An [`AssetReference`] is only an identity (debug name + GUID) until the
//! host loads it. Creating one never touches the filesystem.

use crate::define_record;
use crate::record::{self, inject, SchemaMismatch};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Identity of a binary asset plus an optional already-loaded object.
#[derive(Debug, Clone, Default)]
pub struct AssetReference {
    debug_name: String,
    asset_guid: String,
    /// Set when the object was produced locally and the host must not try to
    /// load it again.
    loaded_asset: RefCell<Option<Rc<Prefab>>>,
}

define_record!(AssetReference, "AssetReference", {
    debug_name: String,
    asset_guid: String,
});

impl AssetReference {
    pub fn debug_name(&self) -> &str {
        &self.debug_name
    }

    pub fn asset_guid(&self) -> &str {
        &self.asset_guid
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_asset.borrow().is_some()
    }

    pub fn loaded_asset(&self) -> Option<Rc<Prefab>> {
        self.loaded_asset.borrow().clone()
    }

    /// Mark the reference as resolved with a locally built object.
    pub fn mark_loaded(&self, asset: Rc<Prefab>) {
        *self.loaded_asset.borrow_mut() = Some(asset);
    }
}

/// Build a reference from an explicit debug name and GUID.
pub fn create_reference(
    debug_name: &str,
    asset_guid: &str,
) -> Result<AssetReference, SchemaMismatch> {
    let mut reference = record::blank::<AssetReference>();
    inject(&mut reference, "debug_name", debug_name.to_string())?;
    inject(&mut reference, "asset_guid", asset_guid.to_string())?;
    Ok(reference)
}

/// Use `explicit` when present, otherwise synthesize a reference whose debug
/// name and GUID are both `path`.
pub fn resolve_or_create(
    explicit: Option<&AssetReference>,
    path: &str,
) -> Result<AssetReference, SchemaMismatch> {
    match explicit {
        Some(reference) => Ok(reference.clone()),
        None => create_reference(path, path),
    }
}

/// Decoded RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Texture {
    /// Returns `None` when `rgba` is not exactly `width * height * 4` bytes.
    pub fn from_rgba8(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * 4;
        (rgba.len() == expected).then_some(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Axis-aligned rectangle in texture pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }
}

/// A renderable region of a texture.
#[derive(Debug, Clone)]
pub struct Sprite {
    texture: Rc<Texture>,
    rect: Rect,
    /// Normalized pivot, (0.5, 0.5) is the center.
    pivot: Vec2,
    pixels_per_unit: f32,
}

impl Sprite {
    pub fn new(texture: Rc<Texture>, rect: Rect, pivot: Vec2, pixels_per_unit: f32) -> Self {
        Self {
            texture,
            rect,
            pivot,
            pixels_per_unit,
        }
    }

    /// Sprite covering the whole texture.
    pub fn full(texture: Rc<Texture>, pivot: Vec2, pixels_per_unit: f32) -> Self {
        let rect = Rect::new(Vec2::ZERO, texture.size());
        Self::new(texture, rect, pivot, pixels_per_unit)
    }

    pub fn texture(&self) -> &Rc<Texture> {
        &self.texture
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    /// Size in world units.
    pub fn world_size(&self) -> Vec2 {
        self.rect.size / self.pixels_per_unit
    }
}

/// Gameplay-side state of a character object. Only writable by injection.
#[derive(Debug, Clone, Default)]
pub struct CharacterState {
    sprite: Option<Rc<Sprite>>,
}

define_record!(CharacterState, "CharacterState", {
    sprite: Option<Rc<Sprite>>,
});

impl CharacterState {
    pub fn sprite(&self) -> Option<&Rc<Sprite>> {
        self.sprite.as_ref()
    }
}

/// Presentation side of a character object.
#[derive(Debug, Clone, Default)]
pub struct CharacterUi {
    sprite: Option<Rc<Sprite>>,
}

impl CharacterUi {
    pub fn sprite(&self) -> Option<&Rc<Sprite>> {
        self.sprite.as_ref()
    }

    pub fn set_sprite(&mut self, sprite: Rc<Sprite>) {
        self.sprite = Some(sprite);
    }
}

/// A clonable object template the host can instantiate.
#[derive(Debug, Clone, Default)]
pub struct Prefab {
    name: String,
    mesh_renderer_active: bool,
    state: CharacterState,
    ui: CharacterUi,
}

impl Prefab {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mesh_renderer_active(&self) -> bool {
        self.mesh_renderer_active
    }

    pub fn set_mesh_renderer_active(&mut self, active: bool) {
        self.mesh_renderer_active = active;
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CharacterState {
        &mut self.state
    }

    pub fn ui(&self) -> &CharacterUi {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut CharacterUi {
        &mut self.ui
    }
}
