use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where local assets live and how images become sprites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Prefix joined with an asset reference's GUID to find its file.
    pub plugin_root: PathBuf,
    pub pixels_per_unit: f32,
    /// Normalized sprite pivot.
    pub pivot: [f32; 2],
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            plugin_root: PathBuf::from("BepInEx/plugins"),
            pixels_per_unit: 128.0,
            pivot: [0.5, 0.5],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: AssetSettings =
            serde_json::from_str(r#"{ "pixels_per_unit": 64.0 }"#).unwrap();
        assert_eq!(settings.pixels_per_unit, 64.0);
        assert_eq!(settings.plugin_root, PathBuf::from("BepInEx/plugins"));
        assert_eq!(settings.pivot, [0.5, 0.5]);
    }
}
