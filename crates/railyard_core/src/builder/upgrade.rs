use crate::builder::{BuildContext, BuildError, EntityBuilder};
use crate::data::CardUpgradeData;
use crate::record::{blank, inject};

#[derive(Debug, Clone, Default)]
pub struct CardUpgradeDataBuilder {
    pub upgrade_title_key: String,
    pub upgrade_description_key: String,
    pub bonus_damage: i32,
    pub bonus_hp: i32,
    pub cost_reduction: i32,
}

impl EntityBuilder for CardUpgradeDataBuilder {
    type Output = CardUpgradeData;

    fn build(&self, _ctx: &BuildContext<'_>) -> Result<CardUpgradeData, BuildError> {
        let mut upgrade = blank::<CardUpgradeData>();
        inject(&mut upgrade, "bonus_damage", self.bonus_damage)?;
        inject(&mut upgrade, "bonus_hp", self.bonus_hp)?;
        inject(&mut upgrade, "cost_reduction", self.cost_reduction)?;
        inject(&mut upgrade, "upgrade_description_key", self.upgrade_description_key.clone())?;
        inject(&mut upgrade, "upgrade_title_key", self.upgrade_title_key.clone())?;
        Ok(upgrade)
    }
}
