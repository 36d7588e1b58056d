use crate::data::CardEffectData;
use crate::define_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterTriggerType {
    #[default]
    OnDeath,
    OnSpawn,
    OnAttacking,
    OnHit,
    OnHeal,
    PreCombat,
    PostCombat,
    OnTurnBegin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardTriggerType {
    #[default]
    OnCast,
    OnDiscard,
    OnKill,
    OnUnplayed,
}

/// Effects fired by a character when `trigger` happens.
#[derive(Debug, Clone, Default)]
pub struct CharacterTriggerData {
    trigger: CharacterTriggerType,
    description_key: String,
    effects: Vec<CardEffectData>,
}

define_record!(CharacterTriggerData, "CharacterTriggerData", {
    trigger: CharacterTriggerType,
    description_key: String,
    effects: Vec<CardEffectData>,
});

impl CharacterTriggerData {
    pub fn trigger(&self) -> CharacterTriggerType {
        self.trigger
    }

    pub fn description_key(&self) -> &str {
        &self.description_key
    }

    pub fn effects(&self) -> &[CardEffectData] {
        &self.effects
    }
}

/// Effects fired by a card when `trigger` happens.
#[derive(Debug, Clone, Default)]
pub struct CardTriggerEffectData {
    trigger: CardTriggerType,
    description_key: String,
    card_effects: Vec<CardEffectData>,
}

define_record!(CardTriggerEffectData, "CardTriggerEffectData", {
    trigger: CardTriggerType,
    description_key: String,
    card_effects: Vec<CardEffectData>,
});

impl CardTriggerEffectData {
    pub fn trigger(&self) -> CardTriggerType {
        self.trigger
    }

    pub fn description_key(&self) -> &str {
        &self.description_key
    }

    pub fn card_effects(&self) -> &[CardEffectData] {
        &self.card_effects
    }
}
