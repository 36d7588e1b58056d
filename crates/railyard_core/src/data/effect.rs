use crate::define_record;

/// What a card effect is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetMode {
    #[default]
    Room,
    DropTargetCharacter,
    FrontInRoom,
    SelfTarget,
    Tower,
    Hand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Team {
    #[default]
    None,
    Monsters,
    Heroes,
    Both,
}

/// One effect executed when a card is played or a trigger fires.
#[derive(Debug, Clone, Default)]
pub struct CardEffectData {
    effect_state_name: String,
    param_int: i32,
    param_str: String,
    param_bool: bool,
    target_mode: TargetMode,
    target_team: Team,
    hide_tooltip: bool,
}

define_record!(CardEffectData, "CardEffectData", {
    effect_state_name: String,
    param_int: i32,
    param_str: String,
    param_bool: bool,
    target_mode: TargetMode,
    target_team: Team,
    hide_tooltip: bool,
});

impl CardEffectData {
    pub fn effect_state_name(&self) -> &str {
        &self.effect_state_name
    }

    pub fn param_int(&self) -> i32 {
        self.param_int
    }

    pub fn param_str(&self) -> &str {
        &self.param_str
    }

    pub fn param_bool(&self) -> bool {
        self.param_bool
    }

    pub fn target_mode(&self) -> TargetMode {
        self.target_mode
    }

    pub fn target_team(&self) -> Team {
        self.target_team
    }

    pub fn hide_tooltip(&self) -> bool {
        self.hide_tooltip
    }
}
