use crate::builder::{BuildContext, BuildError, EntityBuilder};
use crate::data::{CardEffectData, TargetMode, Team};
use crate::record::{blank, inject};

#[derive(Debug, Clone, Default)]
pub struct CardEffectDataBuilder {
    /// Name of the effect state class the host runs, e.g. `CardEffectDamage`.
    pub effect_state_name: String,
    pub param_int: i32,
    pub param_str: String,
    pub param_bool: bool,
    pub target_mode: TargetMode,
    pub target_team: Team,
    pub hide_tooltip: bool,
}

impl EntityBuilder for CardEffectDataBuilder {
    type Output = CardEffectData;

    fn build(&self, _ctx: &BuildContext<'_>) -> Result<CardEffectData, BuildError> {
        let mut effect = blank::<CardEffectData>();
        inject(&mut effect, "effect_state_name", self.effect_state_name.clone())?;
        inject(&mut effect, "hide_tooltip", self.hide_tooltip)?;
        inject(&mut effect, "param_bool", self.param_bool)?;
        inject(&mut effect, "param_int", self.param_int)?;
        inject(&mut effect, "param_str", self.param_str.clone())?;
        inject(&mut effect, "target_mode", self.target_mode)?;
        inject(&mut effect, "target_team", self.target_team)?;
        Ok(effect)
    }
}
