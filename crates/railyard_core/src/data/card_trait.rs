use crate::data::CardData;
use crate::define_record;
use std::rc::{Rc, Weak};

/// A trait attached to a card.
///
/// `param_card_data` points back at the owning card. It is written after the
/// card itself has been allocated, so a freshly built trait that has not been
/// attached to a card yet has no owner.
#[derive(Debug, Clone, Default)]
pub struct CardTraitData {
    trait_state_name: String,
    param_str: String,
    param_int: i32,
    param_float: f32,
    param_use_scaling_params: bool,
    param_card_data: Weak<CardData>,
}

define_record!(CardTraitData, "CardTraitData", {
    trait_state_name: String,
    param_str: String,
    param_int: i32,
    param_float: f32,
    param_use_scaling_params: bool,
    param_card_data: Weak<CardData>,
});

impl CardTraitData {
    pub fn trait_state_name(&self) -> &str {
        &self.trait_state_name
    }

    pub fn param_str(&self) -> &str {
        &self.param_str
    }

    pub fn param_int(&self) -> i32 {
        self.param_int
    }

    pub fn param_float(&self) -> f32 {
        self.param_float
    }

    pub fn param_use_scaling_params(&self) -> bool {
        self.param_use_scaling_params
    }

    /// The owning card, if it is still alive.
    pub fn param_card_data(&self) -> Option<Rc<CardData>> {
        self.param_card_data.upgrade()
    }
}
