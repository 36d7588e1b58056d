use crate::data::{CardData, CharacterData};
use crate::game_data::GameData;
use crate::registry::Registry;

/// Every registry the host consults, in one value.
#[derive(Default)]
pub struct Catalog {
    cards: Registry<CardData>,
    characters: Registry<CharacterData>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &Registry<CardData> {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut Registry<CardData> {
        &mut self.cards
    }

    pub fn characters(&self) -> &Registry<CharacterData> {
        &self.characters
    }

    pub fn characters_mut(&mut self) -> &mut Registry<CharacterData> {
        &mut self.characters
    }

    /// Seed the character fallback template from the host's own data.
    ///
    /// Does nothing if a registered character already donated one.
    pub fn finish_registration(&mut self, game_data: &dyn GameData) {
        match game_data.default_fallback() {
            Some(fallback) => {
                self.characters.capture_fallback(fallback);
            }
            None => tracing::warn!("host provides no default fallback data"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Prefab;
    use crate::data::FallbackData;
    use crate::game_data::GameDataStore;

    #[test]
    fn test_finish_registration_seeds_character_fallback() {
        let mut game_data = GameDataStore::new();
        game_data.set_default_fallback(FallbackData::new(Prefab::new("CharacterBase")));

        let mut catalog = Catalog::new();
        assert!(catalog.characters().fallback().is_none());
        catalog.finish_registration(&game_data);

        let template = catalog
            .characters()
            .fallback()
            .and_then(|f| f.default_character_prefab())
            .unwrap();
        assert_eq!(template.name(), "CharacterBase");
        assert!(catalog.cards().fallback().is_none());
    }

    #[test]
    fn test_finish_registration_keeps_existing_template() {
        let mut game_data = GameDataStore::new();
        game_data.set_default_fallback(FallbackData::new(Prefab::new("host")));

        let mut catalog = Catalog::new();
        catalog
            .characters_mut()
            .capture_fallback(FallbackData::new(Prefab::new("custom")));
        catalog.finish_registration(&game_data);

        let template = catalog
            .characters()
            .fallback()
            .and_then(|f| f.default_character_prefab())
            .unwrap();
        assert_eq!(template.name(), "custom");
    }
}
