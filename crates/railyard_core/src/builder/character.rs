use crate::asset::{self, AssetReference};
use crate::builder::{BuildContext, BuildError, CharacterTriggerDataBuilder, EntityBuilder, Nested};
use crate::data::{CharacterData, FallbackData};
use crate::game_data::GameData;
use crate::record::{blank, inject};
use crate::registry::Registry;
use crate::Error;
use std::rc::Rc;

/// Declarative description of a character.
#[derive(Debug, Clone)]
pub struct CharacterDataBuilder {
    pub character_id: String,
    /// Pools the character is inserted into on registration.
    pub pool_ids: Vec<String>,
    pub name: String,
    pub attack_damage: i32,
    pub health: i32,
    /// Capacity the character takes up in a room.
    pub size: i32,
    pub can_attack: bool,
    pub can_be_healed: bool,
    pub subtype_keys: Vec<String>,
    pub triggers: Nested<CharacterTriggerDataBuilder>,

    /// Image path, relative to the plugin root, used for the character's sprite.
    pub asset_path: String,
    pub character_prefab_variant_ref: Option<AssetReference>,
    /// Inherits the registry's template when left empty.
    pub fallback_data: Option<FallbackData>,
}

impl Default for CharacterDataBuilder {
    fn default() -> Self {
        Self {
            character_id: String::new(),
            pool_ids: Vec::new(),
            name: String::new(),
            attack_damage: 0,
            health: 1,
            size: 1,
            can_attack: true,
            can_be_healed: true,
            subtype_keys: Vec::new(),
            triggers: Nested::new(),
            asset_path: String::new(),
            character_prefab_variant_ref: None,
            fallback_data: None,
        }
    }
}

impl CharacterDataBuilder {
    pub fn new(character_id: impl Into<String>) -> Self {
        Self {
            character_id: character_id.into(),
            ..Self::default()
        }
    }

    pub fn add_to_pool(&mut self, pool_id: impl Into<String>) {
        self.pool_ids.push(pool_id.into());
    }

    /// Build the character and register it in `registry` under `pool_ids`.
    pub fn build_and_register(
        &self,
        game_data: &dyn GameData,
        registry: &mut Registry<CharacterData>,
    ) -> Result<Rc<CharacterData>, Error> {
        let ctx = BuildContext::new(game_data).with_fallback(registry.fallback());
        let character = self.build(&ctx)?;
        tracing::debug!("Adding custom character: {}", character.name());
        registry.register(Rc::clone(&character), &self.pool_ids)?;
        Ok(character)
    }
}

impl EntityBuilder for CharacterDataBuilder {
    type Output = Rc<CharacterData>;

    fn build(&self, ctx: &BuildContext<'_>) -> Result<Rc<CharacterData>, BuildError> {
        let triggers = self.triggers.resolve(ctx)?;
        let prefab_ref =
            asset::resolve_or_create(self.character_prefab_variant_ref.as_ref(), &self.asset_path)?;
        let fallback_data = self.fallback_data.clone().or_else(|| ctx.fallback().cloned());

        let mut character = blank::<CharacterData>();
        inject(&mut character, "id", self.character_id.clone())?;
        inject(&mut character, "attack_damage", self.attack_damage)?;
        inject(&mut character, "can_attack", self.can_attack)?;
        inject(&mut character, "can_be_healed", self.can_be_healed)?;
        inject(&mut character, "character_prefab_variant_ref", prefab_ref)?;
        inject(&mut character, "fallback_data", fallback_data)?;
        inject(&mut character, "health", self.health)?;
        inject(&mut character, "name_key", self.name.clone())?;
        inject(&mut character, "size", self.size)?;
        inject(&mut character, "subtype_keys", self.subtype_keys.clone())?;
        inject(&mut character, "triggers", triggers)?;
        Ok(Rc::new(character))
    }
}
