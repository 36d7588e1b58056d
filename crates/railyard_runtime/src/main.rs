//! Railyard Runtime
//!
//! Minimal binary that builds the bundled content, registers it and
//! materializes character art from the plugin folder.

mod content;

use anyhow::Result;
use railyard_asset::CharacterMaterializer;
use railyard_core::registry::Catalog;
use railyard_services::Settings;
use std::path::PathBuf;
use tracing::Level;

fn main() -> Result<()> {
    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("railyard.json"));
    let settings = Settings::load_or_default(&settings_path)?;

    // Initialize logging
    let level = settings.logging.level.parse::<Level>();
    tracing_subscriber::fmt()
        .with_max_level(*level.as_ref().unwrap_or(&Level::INFO))
        .init();
    if let Err(err) = level {
        tracing::warn!("invalid log level '{}': {}", settings.logging.level, err);
    }

    tracing::info!("Railyard v{}", railyard_core::VERSION);

    let game_data = content::host_game_data()?;
    let mut catalog = Catalog::new();
    content::register_all(&game_data, &mut catalog)?;
    catalog.finish_registration(&game_data);

    tracing::info!(
        cards = catalog.cards().len(),
        characters = catalog.characters().len(),
        "registration finished"
    );
    let card_pools = catalog.cards().pools();
    for pool in card_pools.pool_ids() {
        tracing::info!("pool {}: {:?}", pool, card_pools.members(pool));
    }

    let materializer = CharacterMaterializer::new(settings.assets.clone());
    for character in catalog.characters().iter() {
        match materializer.materialize(catalog.characters(), character.id())? {
            Some(object) => {
                tracing::info!("{} materialized from {}", character.id(), object.name())
            }
            None => match materializer.backing_path(character) {
                Some(path) => {
                    tracing::info!("{} has no local art at {}", character.id(), path.display())
                }
                None => tracing::info!("{} has no loadable art path", character.id()),
            },
        }
    }

    Ok(())
}
