//! Content bundled with the runtime.

use railyard_core::asset::Prefab;
use railyard_core::builder::{
    BuildContext, BuildError, CardDataBuilder, CardEffectDataBuilder, CardTraitDataBuilder,
    CharacterDataBuilder, CharacterTriggerDataBuilder, ClassDataBuilder, EntityBuilder,
};
use railyard_core::data::{
    CardType, CharacterTriggerType, CollectableRarity, FallbackData, TargetMode, Team,
};
use railyard_core::define_id;
use railyard_core::game_data::{GameData, GameDataStore};
use railyard_core::ids::{CardPoolId, ClanId};
use railyard_core::registry::Catalog;

define_id!(ClanId for Hellhorned = "c595c344-d323-4cf1-9ad6-41edc2aebbd0");
define_id!(CardPoolId for MegaPool = "MegaPool");
define_id!(CardPoolId for UnitsAllBanner = "UnitsAllBanner");

/// Stand-in for the host's own data: one clan and the default fallback.
pub fn host_game_data() -> Result<GameDataStore, BuildError> {
    let mut store = GameDataStore::new();
    let hellhorned = ClassDataBuilder {
        class_id: Hellhorned::ID.to_string(),
        title_key: "ClassData_titleLoc-Hellhorned".to_string(),
    }
    .build(&BuildContext::new(&store))?;
    store.add_class(hellhorned);
    store.set_default_fallback(FallbackData::new(Prefab::new("CharacterBase")));
    Ok(store)
}

pub fn register_all(
    game_data: &dyn GameData,
    catalog: &mut Catalog,
) -> Result<(), railyard_core::Error> {
    imp().build_and_register(game_data, catalog.characters_mut())?;
    kindling().build_and_register(game_data, catalog.cards_mut())?;
    imp_card().build_and_register(game_data, catalog.cards_mut())?;
    Ok(())
}

fn imp() -> CharacterDataBuilder {
    let mut on_death = CharacterTriggerDataBuilder {
        trigger: CharacterTriggerType::OnDeath,
        description: "Deal [effect0.power] damage to the front enemy.".to_string(),
        ..Default::default()
    };
    on_death.effects.push_builder(CardEffectDataBuilder {
        effect_state_name: "CardEffectDamage".to_string(),
        param_int: 3,
        target_mode: TargetMode::FrontInRoom,
        target_team: Team::Heroes,
        ..Default::default()
    });

    let mut imp = CharacterDataBuilder::new("railyard_char_ember_imp");
    imp.name = "Ember Imp".to_string();
    imp.attack_damage = 4;
    imp.health = 6;
    imp.size = 1;
    imp.subtype_keys.push("SubtypesData_Imp".to_string());
    imp.asset_path = "railyard/ember_imp.png".to_string();
    imp.triggers.push_builder(on_death);
    imp
}

fn kindling() -> CardDataBuilder {
    let mut kindling = CardDataBuilder::new("railyard_card_kindling");
    kindling.name = "Kindling".to_string();
    kindling.cost = 1;
    kindling.card_type = CardType::Spell;
    kindling.rarity = CollectableRarity::Common;
    kindling.set_clan_of::<Hellhorned>();
    kindling.add_to_card_pool_of::<MegaPool>();
    kindling.asset_path = "railyard/kindling.png".to_string();
    kindling.description = "Ember costs are reduced next turn.".to_string();
    kindling.effects.push_builder(CardEffectDataBuilder {
        effect_state_name: "CardEffectDamage".to_string(),
        param_int: 8,
        target_mode: TargetMode::DropTargetCharacter,
        target_team: Team::Heroes,
        ..Default::default()
    });
    kindling.traits.push_builder(CardTraitDataBuilder {
        trait_state_name: "CardTraitExhaustState".to_string(),
        ..Default::default()
    });
    kindling
}

fn imp_card() -> CardDataBuilder {
    let mut card = CardDataBuilder::new("railyard_card_ember_imp");
    card.name = "Ember Imp".to_string();
    card.cost = 1;
    card.card_type = CardType::Monster;
    card.rarity = CollectableRarity::Uncommon;
    card.set_clan_of::<Hellhorned>();
    card.add_to_card_pool_of::<MegaPool>();
    card.add_to_card_pool_of::<UnitsAllBanner>();
    card.asset_path = "railyard/ember_imp_card.png".to_string();
    card.effects.push_builder(CardEffectDataBuilder {
        effect_state_name: "CardEffectSpawnMonster".to_string(),
        param_str: "railyard_char_ember_imp".to_string(),
        target_mode: TargetMode::DropTargetCharacter,
        ..Default::default()
    });
    card
}
