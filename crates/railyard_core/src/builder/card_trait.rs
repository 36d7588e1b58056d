use crate::builder::{BuildContext, BuildError, EntityBuilder};
use crate::data::CardTraitData;
use crate::record::{blank, inject};

/// Builds a [`CardTraitData`] with no owner.
///
/// The owning card writes the back-reference once it exists.
#[derive(Debug, Clone, Default)]
pub struct CardTraitDataBuilder {
    pub trait_state_name: String,
    pub param_str: String,
    pub param_int: i32,
    pub param_float: f32,
    pub param_use_scaling_params: bool,
}

impl EntityBuilder for CardTraitDataBuilder {
    type Output = CardTraitData;

    fn build(&self, _ctx: &BuildContext<'_>) -> Result<CardTraitData, BuildError> {
        let mut card_trait = blank::<CardTraitData>();
        inject(&mut card_trait, "param_float", self.param_float)?;
        inject(&mut card_trait, "param_int", self.param_int)?;
        inject(&mut card_trait, "param_str", self.param_str.clone())?;
        inject(&mut card_trait, "param_use_scaling_params", self.param_use_scaling_params)?;
        inject(&mut card_trait, "trait_state_name", self.trait_state_name.clone())?;
        Ok(card_trait)
    }
}
