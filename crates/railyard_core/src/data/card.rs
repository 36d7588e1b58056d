use crate::asset::{AssetReference, Sprite};
use crate::data::{
    CardEffectData, CardTraitData, CardTriggerEffectData, CardUpgradeData, CharacterTriggerData,
    ClassData, FallbackData,
};
use crate::define_record;
use crate::registry::Registered;
use std::rc::Rc;

/// Description key meaning "no override, use the default localization".
pub const EMPTY_DESCRIPTION_KEY: &str =
    "EmptyString-0000000000000000-00000000000000000000000000000000-v2";

/// Normal ember cost or X cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CostType {
    #[default]
    Default,
    ConsumeRemainingEnergy,
    NonPlayable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardType {
    #[default]
    Spell,
    Monster,
    Blight,
    Junk,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum CollectableRarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Champion,
    Starter,
}

/// A playable card.
#[derive(Debug, Default)]
pub struct CardData {
    id: String,
    card_art_prefab_variant_ref: AssetReference,
    card_lore_tooltip_keys: Vec<String>,
    card_type: CardType,
    cost: i32,
    cost_type: CostType,
    effects: Vec<CardEffectData>,
    effect_triggers: Vec<CharacterTriggerData>,
    fallback_data: Option<FallbackData>,
    ignore_when_counting_mastery: bool,
    linked_class: Option<Rc<ClassData>>,
    linked_mastery_card: Option<Rc<CardData>>,
    name_key: String,
    override_description_key: String,
    rarity: CollectableRarity,
    shared_mastery_cards: Vec<Rc<CardData>>,
    sprite_cache: Option<Rc<Sprite>>,
    starting_upgrades: Vec<CardUpgradeData>,
    targetless: bool,
    targets_room: bool,
    traits: Vec<CardTraitData>,
    triggers: Vec<CardTriggerEffectData>,
    unlock_level: i32,
}

define_record!(CardData, "CardData", {
    id: String,
    card_art_prefab_variant_ref: AssetReference,
    card_lore_tooltip_keys: Vec<String>,
    card_type: CardType,
    cost: i32,
    cost_type: CostType,
    effects: Vec<CardEffectData>,
    effect_triggers: Vec<CharacterTriggerData>,
    fallback_data: Option<FallbackData>,
    ignore_when_counting_mastery: bool,
    linked_class: Option<Rc<ClassData>>,
    linked_mastery_card: Option<Rc<CardData>>,
    name_key: String,
    override_description_key: String,
    rarity: CollectableRarity,
    shared_mastery_cards: Vec<Rc<CardData>>,
    sprite_cache: Option<Rc<Sprite>>,
    starting_upgrades: Vec<CardUpgradeData>,
    targetless: bool,
    targets_room: bool,
    traits: Vec<CardTraitData>,
    triggers: Vec<CardTriggerEffectData>,
    unlock_level: i32,
});

impl Registered for CardData {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn fallback_data(&self) -> Option<&FallbackData> {
        self.fallback_data.as_ref()
    }
}

impl CardData {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Localization key of the card's name.
    pub fn name(&self) -> &str {
        &self.name_key
    }

    pub fn card_art_prefab_variant_ref(&self) -> &AssetReference {
        &self.card_art_prefab_variant_ref
    }

    pub fn card_lore_tooltip_keys(&self) -> &[String] {
        &self.card_lore_tooltip_keys
    }

    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    pub fn cost(&self) -> i32 {
        self.cost
    }

    pub fn cost_type(&self) -> CostType {
        self.cost_type
    }

    pub fn effects(&self) -> &[CardEffectData] {
        &self.effects
    }

    pub fn effect_triggers(&self) -> &[CharacterTriggerData] {
        &self.effect_triggers
    }

    pub fn fallback_data(&self) -> Option<&FallbackData> {
        self.fallback_data.as_ref()
    }

    pub fn ignore_when_counting_mastery(&self) -> bool {
        self.ignore_when_counting_mastery
    }

    /// `None` for clanless cards.
    pub fn linked_class(&self) -> Option<&Rc<ClassData>> {
        self.linked_class.as_ref()
    }

    pub fn linked_mastery_card(&self) -> Option<&Rc<CardData>> {
        self.linked_mastery_card.as_ref()
    }

    pub fn override_description_key(&self) -> &str {
        &self.override_description_key
    }

    pub fn rarity(&self) -> CollectableRarity {
        self.rarity
    }

    pub fn shared_mastery_cards(&self) -> &[Rc<CardData>] {
        &self.shared_mastery_cards
    }

    pub fn sprite_cache(&self) -> Option<&Rc<Sprite>> {
        self.sprite_cache.as_ref()
    }

    pub fn starting_upgrades(&self) -> &[CardUpgradeData] {
        &self.starting_upgrades
    }

    pub fn targetless(&self) -> bool {
        self.targetless
    }

    pub fn targets_room(&self) -> bool {
        self.targets_room
    }

    pub fn traits(&self) -> &[CardTraitData] {
        &self.traits
    }

    pub fn triggers(&self) -> &[CardTriggerEffectData] {
        &self.triggers
    }

    pub fn unlock_level(&self) -> i32 {
        self.unlock_level
    }
}
