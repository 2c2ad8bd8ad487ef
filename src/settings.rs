use crate::hotkey::{parse_key, WallKeyBindings};
use serde::{Deserialize, Serialize};

/// Configuration surface for the wall overlay and its hotkeys.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OverlaySettings {
    /// Alpha written to wall geometry while the overlay is enabled.
    /// Values outside `[0, 1]` are clamped on use.
    #[serde(default = "default_alpha")]
    pub alpha: f32,
    /// Whether the overlay starts enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Name of the key that toggles transparency.
    #[serde(default = "default_toggle_key")]
    pub toggle_key: String,
    /// Names of the two keys that force transparency off.
    #[serde(default = "default_force_opaque_keys")]
    pub force_opaque_keys: [String; 2],
    /// When enabled the host initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_alpha() -> f32 {
    0.1
}

fn default_toggle_key() -> String {
    "Escape".into()
}

fn default_force_opaque_keys() -> [String; 2] {
    ["[".into(), "]".into()]
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            enabled: false,
            toggle_key: default_toggle_key(),
            force_opaque_keys: default_force_opaque_keys(),
            debug_logging: false,
        }
    }
}

impl OverlaySettings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the configured key names, falling back to the default binding
    /// for any name that does not parse.
    pub fn key_bindings(&self) -> WallKeyBindings {
        let defaults = WallKeyBindings::default();
        WallKeyBindings {
            toggle: parse_key(&self.toggle_key).unwrap_or(defaults.toggle),
            force_opaque: [
                parse_key(&self.force_opaque_keys[0]).unwrap_or(defaults.force_opaque[0]),
                parse_key(&self.force_opaque_keys[1]).unwrap_or(defaults.force_opaque[1]),
            ],
        }
    }
}
