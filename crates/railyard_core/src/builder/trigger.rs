use crate::builder::{BuildContext, BuildError, CardEffectDataBuilder, EntityBuilder, Nested};
use crate::data::{
    CardTriggerEffectData, CardTriggerType, CharacterTriggerData, CharacterTriggerType,
};
use crate::record::{blank, inject};

#[derive(Debug, Clone, Default)]
pub struct CharacterTriggerDataBuilder {
    pub trigger: CharacterTriggerType,
    pub description: String,
    pub effects: Nested<CardEffectDataBuilder>,
}

impl EntityBuilder for CharacterTriggerDataBuilder {
    type Output = CharacterTriggerData;

    fn build(&self, ctx: &BuildContext<'_>) -> Result<CharacterTriggerData, BuildError> {
        let effects = self.effects.resolve(ctx)?;

        let mut trigger = blank::<CharacterTriggerData>();
        inject(&mut trigger, "description_key", self.description.clone())?;
        inject(&mut trigger, "effects", effects)?;
        inject(&mut trigger, "trigger", self.trigger)?;
        Ok(trigger)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardTriggerEffectDataBuilder {
    pub trigger: CardTriggerType,
    pub description: String,
    pub card_effects: Nested<CardEffectDataBuilder>,
}

impl EntityBuilder for CardTriggerEffectDataBuilder {
    type Output = CardTriggerEffectData;

    fn build(&self, ctx: &BuildContext<'_>) -> Result<CardTriggerEffectData, BuildError> {
        let card_effects = self.card_effects.resolve(ctx)?;

        let mut trigger = blank::<CardTriggerEffectData>();
        inject(&mut trigger, "card_effects", card_effects)?;
        inject(&mut trigger, "description_key", self.description.clone())?;
        inject(&mut trigger, "trigger", self.trigger)?;
        Ok(trigger)
    }
}
