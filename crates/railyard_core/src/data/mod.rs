//! Host-owned records.
//!
//! Every record here has private fields and read-only accessors. Builders in
//! [`crate::builder`] are the only code that writes them.

mod card;
mod card_trait;
mod character;
mod class;
mod effect;
mod fallback;
mod trigger;
mod upgrade;

pub use card::{CardData, CardType, CollectableRarity, CostType, EMPTY_DESCRIPTION_KEY};
pub use card_trait::CardTraitData;
pub use character::CharacterData;
pub use class::ClassData;
pub use effect::{CardEffectData, TargetMode, Team};
pub use fallback::FallbackData;
pub use trigger::{
    CardTriggerEffectData, CardTriggerType, CharacterTriggerData, CharacterTriggerType,
};
pub use upgrade::CardUpgradeData;
