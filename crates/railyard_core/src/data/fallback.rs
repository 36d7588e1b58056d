use crate::asset::Prefab;
use std::rc::Rc;

/// Default data consulted when an entity's own assets are missing.
#[derive(Debug, Clone, Default)]
pub struct FallbackData {
    default_character_prefab: Option<Rc<Prefab>>,
}

impl FallbackData {
    pub fn new(default_character_prefab: Prefab) -> Self {
        Self {
            default_character_prefab: Some(Rc::new(default_character_prefab)),
        }
    }

    /// Template cloned when materializing a character from a local image.
    pub fn default_character_prefab(&self) -> Option<&Rc<Prefab>> {
        self.default_character_prefab.as_ref()
    }
}
