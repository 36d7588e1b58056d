use crate::asset::{self, AssetReference, Sprite};
use crate::builder::{
    BuildContext, BuildError, CardEffectDataBuilder, CardTraitDataBuilder,
    CardTriggerEffectDataBuilder, CardUpgradeDataBuilder, CharacterTriggerDataBuilder,
    EntityBuilder, Nested,
};
use crate::data::{
    CardData, CardEffectData, CardTraitData, CardTriggerEffectData, CardType, CardUpgradeData,
    CharacterTriggerData, ClassData, CollectableRarity, CostType, FallbackData,
    EMPTY_DESCRIPTION_KEY,
};
use crate::game_data::GameData;
use crate::ids::{CardPoolId, ClanId};
use crate::record::{blank, inject, SchemaMismatch};
use crate::registry::Registry;
use crate::Error;
use std::rc::{Rc, Weak};

/// Trait state that renders free-text card descriptions.
pub const DESCRIPTION_TRAIT_STATE: &str = "CardTraitCustomDescription";

/// Spacing inserted before a custom description.
pub const DESCRIPTION_PREFIX: &str = "<size=50%><br><br></size>";

/// Declarative description of a card.
#[derive(Debug, Clone)]
pub struct CardDataBuilder {
    /// Unique string used to store and retrieve the card.
    pub card_id: String,
    /// Pools the card is inserted into on registration.
    pub card_pool_ids: Vec<String>,

    pub cost: i32,
    pub cost_type: CostType,
    /// Name displayed on the card.
    pub name: String,
    /// Clan the card belongs to. `None` for clanless.
    pub clan_id: Option<String>,
    /// Free text appended to the card as a custom description trait.
    pub description: String,
    /// Copy another card's description format by key.
    pub override_description_key: String,

    /// Path card art is loaded from when no explicit reference is given.
    pub asset_path: String,
    pub card_art_prefab_variant_ref: Option<AssetReference>,

    pub effects: Nested<CardEffectDataBuilder>,
    pub traits: Nested<CardTraitDataBuilder>,
    pub effect_triggers: Nested<CharacterTriggerDataBuilder>,
    pub triggers: Nested<CardTriggerEffectDataBuilder>,
    /// Applied to every new instance of the card.
    pub starting_upgrades: Nested<CardUpgradeDataBuilder>,

    pub card_lore_tooltip_keys: Vec<String>,
    pub targetless: bool,
    pub targets_room: bool,
    pub card_type: CardType,
    pub rarity: CollectableRarity,
    pub unlock_level: i32,
    pub shared_mastery_cards: Vec<Rc<CardData>>,
    pub linked_mastery_card: Option<Rc<CardData>>,
    pub ignore_when_counting_mastery: bool,

    /// Only injected when present.
    pub sprite_cache: Option<Rc<Sprite>>,
    /// Inherits the registry's template when left empty.
    pub fallback_data: Option<FallbackData>,
}

impl Default for CardDataBuilder {
    fn default() -> Self {
        Self {
            card_id: String::new(),
            card_pool_ids: Vec::new(),
            cost: 0,
            cost_type: CostType::default(),
            name: String::new(),
            clan_id: None,
            description: String::new(),
            override_description_key: EMPTY_DESCRIPTION_KEY.to_string(),
            asset_path: String::new(),
            card_art_prefab_variant_ref: None,
            effects: Nested::new(),
            traits: Nested::new(),
            effect_triggers: Nested::new(),
            triggers: Nested::new(),
            starting_upgrades: Nested::new(),
            card_lore_tooltip_keys: Vec::new(),
            targetless: false,
            targets_room: false,
            card_type: CardType::default(),
            rarity: CollectableRarity::default(),
            unlock_level: 0,
            shared_mastery_cards: Vec::new(),
            linked_mastery_card: None,
            ignore_when_counting_mastery: false,
            sprite_cache: None,
            fallback_data: None,
        }
    }
}

/// Everything resolved before the card is allocated.
struct CardParts {
    art: AssetReference,
    linked_class: Option<Rc<ClassData>>,
    fallback_data: Option<FallbackData>,
    effects: Vec<CardEffectData>,
    traits: Vec<CardTraitData>,
    effect_triggers: Vec<CharacterTriggerData>,
    triggers: Vec<CardTriggerEffectData>,
    starting_upgrades: Vec<CardUpgradeData>,
}

impl CardDataBuilder {
    pub fn new(card_id: impl Into<String>) -> Self {
        Self {
            card_id: card_id.into(),
            ..Self::default()
        }
    }

    pub fn set_clan(&mut self, clan_id: impl Into<String>) {
        self.clan_id = Some(clan_id.into());
    }

    pub fn set_clan_of<C: ClanId>(&mut self) {
        self.set_clan(C::ID);
    }

    pub fn add_to_card_pool(&mut self, pool_id: impl Into<String>) {
        self.card_pool_ids.push(pool_id.into());
    }

    pub fn add_to_card_pool_of<P: CardPoolId>(&mut self) {
        self.add_to_card_pool(P::ID);
    }

    /// Point the card at existing art. `asset_path` follows the GUID.
    pub fn set_card_art_ref(
        &mut self,
        debug_name: &str,
        asset_guid: &str,
    ) -> Result<(), SchemaMismatch> {
        self.card_art_prefab_variant_ref = Some(asset::create_reference(debug_name, asset_guid)?);
        self.asset_path = asset_guid.to_string();
        Ok(())
    }

    /// Build the card and register it in `registry` under `card_pool_ids`.
    pub fn build_and_register(
        &self,
        game_data: &dyn GameData,
        registry: &mut Registry<CardData>,
    ) -> Result<Rc<CardData>, Error> {
        let ctx = BuildContext::new(game_data).with_fallback(registry.fallback());
        let card = self.build(&ctx)?;
        tracing::debug!("Adding custom card: {}", card.name());
        registry.register(Rc::clone(&card), &self.card_pool_ids)?;
        Ok(card)
    }

    /// Trait builder synthesized from a non-empty `description`.
    fn description_trait(&self) -> Option<CardTraitDataBuilder> {
        if self.description.is_empty() {
            return None;
        }
        Some(CardTraitDataBuilder {
            trait_state_name: DESCRIPTION_TRAIT_STATE.to_string(),
            param_str: format!("{}{}", DESCRIPTION_PREFIX, self.description),
            ..Default::default()
        })
    }

    /// Field writes in a fixed order; the back-references go onto the traits
    /// right before the traits themselves are injected.
    fn inject_fields(
        &self,
        card: &mut CardData,
        parent: &Weak<CardData>,
        parts: CardParts,
    ) -> Result<(), SchemaMismatch> {
        let CardParts {
            art,
            linked_class,
            fallback_data,
            effects,
            mut traits,
            effect_triggers,
            triggers,
            starting_upgrades,
        } = parts;

        inject(card, "id", self.card_id.clone())?;
        inject(card, "card_art_prefab_variant_ref", art)?;
        inject(card, "card_lore_tooltip_keys", self.card_lore_tooltip_keys.clone())?;
        inject(card, "card_type", self.card_type)?;
        inject(card, "cost", self.cost)?;
        inject(card, "cost_type", self.cost_type)?;
        inject(card, "effects", effects)?;
        inject(card, "effect_triggers", effect_triggers)?;
        inject(card, "fallback_data", fallback_data)?;
        inject(card, "ignore_when_counting_mastery", self.ignore_when_counting_mastery)?;
        inject(card, "linked_class", linked_class)?;
        inject(card, "linked_mastery_card", self.linked_mastery_card.clone())?;
        inject(card, "name_key", self.name.clone())?;
        inject(card, "override_description_key", self.override_description_key.clone())?;
        inject(card, "rarity", self.rarity)?;
        inject(card, "shared_mastery_cards", self.shared_mastery_cards.clone())?;
        if let Some(sprite) = &self.sprite_cache {
            inject(card, "sprite_cache", Some(Rc::clone(sprite)))?;
        }
        inject(card, "starting_upgrades", starting_upgrades)?;
        inject(card, "targetless", self.targetless)?;
        inject(card, "targets_room", self.targets_room)?;
        for card_trait in &mut traits {
            inject(card_trait, "param_card_data", Weak::clone(parent))?;
        }
        inject(card, "traits", traits)?;
        inject(card, "triggers", triggers)?;
        inject(card, "unlock_level", self.unlock_level)?;
        Ok(())
    }
}

impl EntityBuilder for CardDataBuilder {
    type Output = Rc<CardData>;

    fn build(&self, ctx: &BuildContext<'_>) -> Result<Rc<CardData>, BuildError> {
        let description_trait = self.description_trait();

        let parts = CardParts {
            effects: self.effects.resolve(ctx)?,
            traits: self.traits.resolve_with(ctx, description_trait)?,
            effect_triggers: self.effect_triggers.resolve(ctx)?,
            triggers: self.triggers.resolve(ctx)?,
            starting_upgrades: self.starting_upgrades.resolve(ctx)?,
            linked_class: ctx.resolve_class(self.clan_id.as_deref())?,
            art: asset::resolve_or_create(
                self.card_art_prefab_variant_ref.as_ref(),
                &self.asset_path,
            )?,
            fallback_data: self.fallback_data.clone().or_else(|| ctx.fallback().cloned()),
        };

        // The traits need the card's address before the card is finished.
        let mut injected: Result<(), SchemaMismatch> = Ok(());
        let card = Rc::new_cyclic(|parent| {
            let mut card = blank::<CardData>();
            injected = self.inject_fields(&mut card, parent, parts);
            card
        });
        injected?;
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{Prefab, Texture};
    use crate::builder::ClassDataBuilder;
    use crate::data::{TargetMode, Team};
    use crate::define_id;
    use crate::game_data::GameDataStore;
    use crate::registry::RegistryError;
    use glam::Vec2;

    define_id!(ClanId for Hellhorned = "class_hellhorned");
    define_id!(CardPoolId for MegaPool = "MegaPool");

    fn game_data() -> GameDataStore {
        let mut store = GameDataStore::new();
        let class = ClassDataBuilder {
            class_id: "class_hellhorned".to_string(),
            title_key: "Hellhorned".to_string(),
        }
        .build(&BuildContext::new(&store))
        .unwrap();
        store.add_class(class);
        store
    }

    fn trait_builder(name: &str) -> CardTraitDataBuilder {
        CardTraitDataBuilder {
            trait_state_name: name.to_string(),
            ..Default::default()
        }
    }

    fn trait_names(card: &CardData) -> Vec<&str> {
        card.traits().iter().map(|t| t.trait_state_name()).collect()
    }

    #[test]
    fn test_declarative_fields_round_trip() {
        let store = game_data();
        let ctx = BuildContext::new(&store);

        let mut builder = CardDataBuilder::new("card_torch");
        builder.name = "Torch".to_string();
        builder.cost = 2;
        builder.cost_type = CostType::ConsumeRemainingEnergy;
        builder.card_type = CardType::Monster;
        builder.rarity = CollectableRarity::Rare;
        builder.unlock_level = 4;
        builder.targetless = true;
        builder.targets_room = true;
        builder.ignore_when_counting_mastery = true;
        builder.card_lore_tooltip_keys = vec!["lore_torch".to_string()];
        builder.override_description_key = "desc_key".to_string();
        builder.asset_path = "assets/torch.png".to_string();
        builder.set_clan_of::<Hellhorned>();

        let card = builder.build(&ctx).unwrap();
        assert_eq!(card.id(), "card_torch");
        assert_eq!(card.name(), "Torch");
        assert_eq!(card.cost(), 2);
        assert_eq!(card.cost_type(), CostType::ConsumeRemainingEnergy);
        assert_eq!(card.card_type(), CardType::Monster);
        assert_eq!(card.rarity(), CollectableRarity::Rare);
        assert_eq!(card.unlock_level(), 4);
        assert!(card.targetless());
        assert!(card.targets_room());
        assert!(card.ignore_when_counting_mastery());
        assert_eq!(card.card_lore_tooltip_keys(), ["lore_torch".to_string()]);
        assert_eq!(card.override_description_key(), "desc_key");
        assert_eq!(card.linked_class().unwrap().title_key(), "Hellhorned");
        assert_eq!(card.card_art_prefab_variant_ref().asset_guid(), "assets/torch.png");
        assert_eq!(card.card_art_prefab_variant_ref().debug_name(), "assets/torch.png");
    }

    #[test]
    fn test_nested_effects_keep_prebuilt_first() {
        let store = game_data();
        let ctx = BuildContext::new(&store);

        let prebuilt = CardEffectDataBuilder {
            effect_state_name: "p1".to_string(),
            ..Default::default()
        }
        .build(&ctx)
        .unwrap();

        let mut builder = CardDataBuilder::new("card_multi");
        for name in ["c1", "c2"] {
            builder.effects.push_builder(CardEffectDataBuilder {
                effect_state_name: name.to_string(),
                target_mode: TargetMode::FrontInRoom,
                target_team: Team::Heroes,
                ..Default::default()
            });
        }
        builder.effects.push_built(prebuilt);

        let card = builder.build(&ctx).unwrap();
        let names: Vec<_> = card.effects().iter().map(|e| e.effect_state_name()).collect();
        assert_eq!(names, ["p1", "c1", "c2"]);
        assert_eq!(card.effects()[1].target_mode(), TargetMode::FrontInRoom);
        assert_eq!(card.effects()[1].target_team(), Team::Heroes);
    }

    #[test]
    fn test_every_trait_points_back_at_its_card() {
        let store = game_data();
        let ctx = BuildContext::new(&store);

        let prebuilt = trait_builder("CardTraitExhaustState").build(&ctx).unwrap();
        assert!(prebuilt.param_card_data().is_none());

        let mut builder = CardDataBuilder::new("card_owner");
        builder.traits.push_built(prebuilt);
        builder.traits.push_builder(trait_builder("CardTraitIgnoreArmor"));
        builder.description = "Burns twice.".to_string();

        let card = builder.build(&ctx).unwrap();
        assert_eq!(card.traits().len(), 3);
        for card_trait in card.traits() {
            let owner = card_trait.param_card_data().unwrap();
            assert!(Rc::ptr_eq(&owner, &card));
        }
    }

    #[test]
    fn test_description_adds_trait_after_caller_traits() {
        let store = game_data();
        let ctx = BuildContext::new(&store);

        let mut builder = CardDataBuilder::new("card_described");
        builder.traits.push_builder(trait_builder("CardTraitRetain"));
        builder.description = "Gain 1 ember.".to_string();

        let card = builder.build(&ctx).unwrap();
        assert_eq!(trait_names(&card), ["CardTraitRetain", DESCRIPTION_TRAIT_STATE]);
        assert_eq!(
            card.traits()[1].param_str(),
            "<size=50%><br><br></size>Gain 1 ember."
        );
    }

    #[test]
    fn test_empty_description_adds_nothing() {
        let store = game_data();
        let ctx = BuildContext::new(&store);
        let card = CardDataBuilder::new("card_plain").build(&ctx).unwrap();
        assert!(card.traits().is_empty());
    }

    #[test]
    fn test_rebuild_is_distinct_and_does_not_duplicate_derived_traits() {
        let store = game_data();
        let ctx = BuildContext::new(&store);

        let mut builder = CardDataBuilder::new("card_twice");
        builder.description = "Twice.".to_string();
        builder.traits.push_builder(trait_builder("CardTraitRetain"));

        let first = builder.build(&ctx).unwrap();
        let second = builder.build(&ctx).unwrap();
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(trait_names(&first), trait_names(&second));
        assert_eq!(second.traits().len(), 2);
        assert!(Rc::ptr_eq(&second.traits()[0].param_card_data().unwrap(), &second));
    }

    #[test]
    fn test_unknown_clan_aborts_build() {
        let store = game_data();
        let ctx = BuildContext::new(&store);

        let mut builder = CardDataBuilder::new("card_lost");
        builder.set_clan("class_missing");
        assert_eq!(
            builder.build(&ctx).unwrap_err(),
            BuildError::ReferenceResolution {
                kind: "class",
                id: "class_missing".to_string(),
            }
        );
    }

    #[test]
    fn test_clanless_card_has_no_class() {
        let store = game_data();
        let ctx = BuildContext::new(&store);
        let card = CardDataBuilder::new("card_neutral").build(&ctx).unwrap();
        assert!(card.linked_class().is_none());
    }

    #[test]
    fn test_explicit_art_reference_wins() {
        let store = game_data();
        let ctx = BuildContext::new(&store);

        let mut builder = CardDataBuilder::new("card_art");
        builder.asset_path = "ignored.png".to_string();
        builder.set_card_art_ref("Assets/Cards/Torch", "a1b2c3").unwrap();
        assert_eq!(builder.asset_path, "a1b2c3");

        let card = builder.build(&ctx).unwrap();
        assert_eq!(card.card_art_prefab_variant_ref().debug_name(), "Assets/Cards/Torch");
        assert_eq!(card.card_art_prefab_variant_ref().asset_guid(), "a1b2c3");
    }

    #[test]
    fn test_sprite_cache_only_when_present() {
        let store = game_data();
        let ctx = BuildContext::new(&store);

        let card = CardDataBuilder::new("card_no_sprite").build(&ctx).unwrap();
        assert!(card.sprite_cache().is_none());

        let texture = Rc::new(Texture::from_rgba8(1, 1, vec![0; 4]).unwrap());
        let sprite = Rc::new(Sprite::full(texture, Vec2::splat(0.5), 128.0));
        let mut builder = CardDataBuilder::new("card_sprite");
        builder.sprite_cache = Some(Rc::clone(&sprite));
        let card = builder.build(&ctx).unwrap();
        assert!(Rc::ptr_eq(card.sprite_cache().unwrap(), &sprite));
    }

    #[test]
    fn test_nested_triggers_and_upgrades() {
        let store = game_data();
        let ctx = BuildContext::new(&store);

        let mut on_spawn = CharacterTriggerDataBuilder::default();
        on_spawn.effects.push_builder(CardEffectDataBuilder {
            effect_state_name: "CardEffectAddStatusEffect".to_string(),
            ..Default::default()
        });
        let mut builder = CardDataBuilder::new("card_unit");
        builder.effect_triggers.push_builder(on_spawn);
        builder.triggers.push_builder(CardTriggerEffectDataBuilder::default());
        builder.starting_upgrades.push_builder(CardUpgradeDataBuilder {
            bonus_damage: 10,
            bonus_hp: 5,
            ..Default::default()
        });

        let card = builder.build(&ctx).unwrap();
        assert_eq!(card.effect_triggers().len(), 1);
        assert_eq!(
            card.effect_triggers()[0].effects()[0].effect_state_name(),
            "CardEffectAddStatusEffect"
        );
        assert_eq!(card.triggers().len(), 1);
        assert_eq!(card.starting_upgrades()[0].bonus_damage(), 10);
        assert_eq!(card.starting_upgrades()[0].bonus_hp(), 5);
    }

    #[test]
    fn test_build_and_register_uses_sentinel_and_pools() {
        let store = game_data();
        let mut registry = Registry::new();

        let mut builder = CardDataBuilder::new("card_default_desc");
        builder.add_to_card_pool_of::<MegaPool>();
        let card = builder.build_and_register(&store, &mut registry).unwrap();

        let stored = registry.get_by_id("card_default_desc").unwrap();
        assert!(Rc::ptr_eq(stored, &card));
        assert_eq!(stored.override_description_key(), EMPTY_DESCRIPTION_KEY);
        assert_eq!(registry.pool_members("MegaPool"), ["card_default_desc".to_string()]);
    }

    #[test]
    fn test_duplicate_card_id_rejected() {
        let store = game_data();
        let mut registry = Registry::new();

        let mut first = CardDataBuilder::new("card_dup");
        first.name = "First".to_string();
        let mut second = CardDataBuilder::new("card_dup");
        second.name = "Second".to_string();

        first.build_and_register(&store, &mut registry).unwrap();
        let err = second.build_and_register(&store, &mut registry).unwrap_err();
        assert_eq!(
            err,
            Error::Registry(RegistryError::DuplicateId {
                kind: "CardData",
                id: "card_dup".to_string(),
            })
        );
        assert_eq!(registry.get_by_id("card_dup").unwrap().name(), "First");
    }

    #[test]
    fn test_failed_build_registers_nothing() {
        let store = game_data();
        let mut registry = Registry::new();

        let mut builder = CardDataBuilder::new("card_broken");
        builder.set_clan("nowhere");
        builder.add_to_card_pool("MegaPool");
        assert!(matches!(
            builder.build_and_register(&store, &mut registry),
            Err(Error::Build(BuildError::ReferenceResolution { .. }))
        ));
        assert!(registry.is_empty());
        assert!(registry.pool_members("MegaPool").is_empty());
    }

    #[test]
    fn test_cards_inherit_captured_fallback() {
        let store = game_data();
        let mut registry = Registry::new();

        let mut donor = CardDataBuilder::new("card_donor");
        donor.fallback_data = Some(FallbackData::new(Prefab::new("donor_template")));
        donor.build_and_register(&store, &mut registry).unwrap();

        let mut other = CardDataBuilder::new("card_other");
        other.fallback_data = Some(FallbackData::new(Prefab::new("other_template")));
        other.build_and_register(&store, &mut registry).unwrap();

        let bare = CardDataBuilder::new("card_bare")
            .build_and_register(&store, &mut registry)
            .unwrap();

        let name_of = |fallback: Option<&FallbackData>| {
            fallback
                .and_then(|f| f.default_character_prefab())
                .map(|p| p.name().to_string())
        };
        assert_eq!(name_of(registry.fallback()).as_deref(), Some("donor_template"));
        assert_eq!(name_of(bare.fallback_data()).as_deref(), Some("donor_template"));
    }
}
