//! Host-side preferences for the runner binary.
//!
//! Loaded from / saved to a JSON file beside the executable. Holds the
//! chosen input device, the five key definitions, and the runner's tick
//! budget. The simulation core itself never reads files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::state::{default_keydefs, State};
use crate::types::{InputDevice, KeyDef, KeyDefs};

pub const PREFERENCES_FILE_NAME: &str = "escape_prefs.json";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceChoice {
    Keyboard,
    Kempston,
    Sinclair,
    Protek,
}

/// One key as (port high byte, key mask), mirroring the hardware scan.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct KeyBinding {
    pub port: u8,
    pub mask: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Preferences {
    pub device: DeviceChoice,
    /// Left, right, up, down, fire.
    pub keys: Vec<KeyBinding>,
    /// Stop the headless runner after this many ticks; 0 runs forever.
    pub tick_budget: u64,
    /// Optional log file path.
    pub log_file: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        let defaults = default_keydefs();
        Self {
            device: DeviceChoice::Keyboard,
            keys: defaults
                .defs
                .iter()
                .map(|def| KeyBinding {
                    port: def.port,
                    mask: def.mask,
                })
                .collect(),
            tick_budget: 0,
            log_file: None,
        }
    }
}

impl Preferences {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading preferences from {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing preferences from {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)
            .with_context(|| format!("writing preferences to {}", path.display()))
    }

    /// Install the choices into a fresh game state.
    pub fn apply(&self, state: &mut State) {
        state.chosen_input_device = match self.device {
            DeviceChoice::Keyboard => InputDevice::Keyboard,
            DeviceChoice::Kempston => InputDevice::Kempston,
            DeviceChoice::Sinclair => InputDevice::Sinclair,
            DeviceChoice::Protek => InputDevice::Protek,
        };
        if self.keys.len() == 5 {
            let mut defs = KeyDefs::default();
            for (slot, key) in self.keys.iter().enumerate() {
                defs.defs[slot] = KeyDef {
                    port: key.port,
                    mask: key.mask,
                };
            }
            state.keydefs = defs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trip() {
        let prefs = Preferences::default();
        let json = serde_json::to_string(&prefs).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back.keys.len(), 5);
        assert_eq!(back.tick_budget, 0);
    }

    #[test]
    fn test_apply_sets_device_and_keys() {
        let mut state = State::new().unwrap();
        let mut prefs = Preferences::default();
        prefs.device = DeviceChoice::Kempston;
        prefs.keys[0] = KeyBinding { port: 0xFB, mask: 0x02 };
        prefs.apply(&mut state);
        assert_eq!(state.chosen_input_device, InputDevice::Kempston);
        assert_eq!(state.keydefs.defs[0], KeyDef { port: 0xFB, mask: 0x02 });
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let prefs = Preferences::load(Path::new("/nonexistent/escape_prefs.json")).unwrap();
        assert_eq!(prefs.keys.len(), 5);
    }
}
