//! Railyard Services Layer
//!
//! Configuration shared by the runtime and tools.

pub mod settings;

pub use settings::{LoggingSettings, Settings, SettingsError};
