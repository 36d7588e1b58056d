//! Railyard Core
//!
//! Builds host-owned data records from declarative builders and registers
//! them for runtime lookup:
//! - Field injection onto blank records (`record`)
//! - Record definitions (`data`)
//! - Entity builders and recursive build resolution (`builder`)
//! - Asset references (`asset`)
//! - Registries and pools (`registry`)

pub mod asset;
pub mod builder;
pub mod data;
mod error;
pub mod game_data;
pub mod ids;
pub mod record;
pub mod registry;

pub use error::Error;
pub use glam;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use crate::asset::{AssetReference, Prefab, Sprite, Texture};
    pub use crate::builder::{
        BuildContext, BuildError, CardDataBuilder, CardEffectDataBuilder, CardTraitDataBuilder,
        CardTriggerEffectDataBuilder, CardUpgradeDataBuilder, CharacterDataBuilder,
        CharacterTriggerDataBuilder, ClassDataBuilder, EntityBuilder, Nested,
    };
    pub use crate::data::*;
    pub use crate::game_data::{GameData, GameDataStore};
    pub use crate::ids::{CardPoolId, ClanId};
    pub use crate::registry::{Catalog, Registered, Registry, RegistryError};
    pub use crate::Error;
}
