//! Read access to data the host already owns.

use crate::data::{ClassData, FallbackData};
use std::collections::HashMap;
use std::rc::Rc;

/// Host lookups consulted while building.
pub trait GameData {
    /// Resolve a clan ID to its class record.
    fn find_class_data(&self, id: &str) -> Option<Rc<ClassData>>;

    /// Fallback data of the host's first built-in character.
    fn default_fallback(&self) -> Option<FallbackData>;
}

/// In-memory [`GameData`] for tools and tests.
#[derive(Debug, Default)]
pub struct GameDataStore {
    classes: HashMap<String, Rc<ClassData>>,
    default_fallback: Option<FallbackData>,
}

impl GameDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: ClassData) -> Rc<ClassData> {
        let class = Rc::new(class);
        self.classes.insert(class.id().to_string(), Rc::clone(&class));
        class
    }

    pub fn set_default_fallback(&mut self, fallback: FallbackData) {
        self.default_fallback = Some(fallback);
    }
}

impl GameData for GameDataStore {
    fn find_class_data(&self, id: &str) -> Option<Rc<ClassData>> {
        self.classes.get(id).cloned()
    }

    fn default_fallback(&self) -> Option<FallbackData> {
        self.default_fallback.clone()
    }
}
