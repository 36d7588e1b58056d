use crate::asset::AssetReference;
use crate::data::{CharacterTriggerData, FallbackData};
use crate::define_record;
use crate::registry::Registered;

/// A unit that can be spawned on the train.
#[derive(Debug, Default)]
pub struct CharacterData {
    id: String,
    name_key: String,
    attack_damage: i32,
    health: i32,
    size: i32,
    can_attack: bool,
    can_be_healed: bool,
    subtype_keys: Vec<String>,
    triggers: Vec<CharacterTriggerData>,
    character_prefab_variant_ref: AssetReference,
    fallback_data: Option<FallbackData>,
}

define_record!(CharacterData, "CharacterData", {
    id: String,
    name_key: String,
    attack_damage: i32,
    health: i32,
    size: i32,
    can_attack: bool,
    can_be_healed: bool,
    subtype_keys: Vec<String>,
    triggers: Vec<CharacterTriggerData>,
    character_prefab_variant_ref: AssetReference,
    fallback_data: Option<FallbackData>,
});

impl Registered for CharacterData {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn fallback_data(&self) -> Option<&FallbackData> {
        self.fallback_data.as_ref()
    }
}

impl CharacterData {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name_key
    }

    pub fn attack_damage(&self) -> i32 {
        self.attack_damage
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn can_attack(&self) -> bool {
        self.can_attack
    }

    pub fn can_be_healed(&self) -> bool {
        self.can_be_healed
    }

    pub fn subtype_keys(&self) -> &[String] {
        &self.subtype_keys
    }

    pub fn triggers(&self) -> &[CharacterTriggerData] {
        &self.triggers
    }

    pub fn character_prefab_variant_ref(&self) -> &AssetReference {
        &self.character_prefab_variant_ref
    }

    pub fn fallback_data(&self) -> Option<&FallbackData> {
        self.fallback_data.as_ref()
    }
}
