use crate::define_record;

/// Stat changes applied to every new instance of a card.
#[derive(Debug, Clone, Default)]
pub struct CardUpgradeData {
    upgrade_title_key: String,
    upgrade_description_key: String,
    bonus_damage: i32,
    bonus_hp: i32,
    cost_reduction: i32,
}

define_record!(CardUpgradeData, "CardUpgradeData", {
    upgrade_title_key: String,
    upgrade_description_key: String,
    bonus_damage: i32,
    bonus_hp: i32,
    cost_reduction: i32,
});

impl CardUpgradeData {
    pub fn upgrade_title_key(&self) -> &str {
        &self.upgrade_title_key
    }

    pub fn upgrade_description_key(&self) -> &str {
        &self.upgrade_description_key
    }

    pub fn bonus_damage(&self) -> i32 {
        self.bonus_damage
    }

    pub fn bonus_hp(&self) -> i32 {
        self.bonus_hp
    }

    pub fn cost_reduction(&self) -> i32 {
        self.cost_reduction
    }
}
