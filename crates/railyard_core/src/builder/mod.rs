//! Entity builders.
//!
//! A builder is a mutable staging value: callers fill in its public fields,
//! then call [`EntityBuilder::build`]. Building never mutates the builder, so
//! the same builder can be built again and yields an equivalent but distinct
//! entity.
//!
//! Nested children live in [`Nested`] slots. Children are built first, bottom
//! up, and a failure anywhere in the tree aborts the whole parent.

mod build_error;
mod card;
mod card_trait;
mod character;
mod class;
mod effect;
mod nested;
mod trigger;
mod upgrade;

pub use build_error::BuildError;
pub use card::{CardDataBuilder, DESCRIPTION_PREFIX, DESCRIPTION_TRAIT_STATE};
pub use card_trait::CardTraitDataBuilder;
pub use character::CharacterDataBuilder;
pub use class::ClassDataBuilder;
pub use effect::CardEffectDataBuilder;
pub use nested::Nested;
pub use trigger::{CardTriggerEffectDataBuilder, CharacterTriggerDataBuilder};
pub use upgrade::CardUpgradeDataBuilder;

use crate::data::{ClassData, FallbackData};
use crate::game_data::GameData;
use std::rc::Rc;

/// Produces one entity from declarative state.
pub trait EntityBuilder {
    type Output;

    fn build(&self, ctx: &BuildContext<'_>) -> Result<Self::Output, BuildError>;
}

/// External collaborators available while building.
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    game_data: &'a dyn GameData,
    fallback: Option<&'a FallbackData>,
}

impl<'a> BuildContext<'a> {
    pub fn new(game_data: &'a dyn GameData) -> Self {
        Self {
            game_data,
            fallback: None,
        }
    }

    /// Fallback template handed to entities that carry none of their own.
    pub fn with_fallback(mut self, fallback: Option<&'a FallbackData>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback(&self) -> Option<&'a FallbackData> {
        self.fallback
    }

    /// Resolve an optional clan ID. `None` means clanless.
    pub fn resolve_class(
        &self,
        clan_id: Option<&str>,
    ) -> Result<Option<Rc<ClassData>>, BuildError> {
        let Some(id) = clan_id else {
            return Ok(None);
        };
        self.game_data
            .find_class_data(id)
            .map(Some)
            .ok_or_else(|| BuildError::ReferenceResolution {
                kind: "class",
                id: id.to_string(),
            })
    }
}
