//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const KEY_RESOLUTION: &str = "SCOPE_RESOLUTION";
pub const KEY_ALGORITHM: &str = "SCOPE_ALGORITHM";
pub const KEY_INVERT: &str = "SCOPE_INVERT";
pub const KEY_PORT: &str = "SCOPE_PORT";
pub const KEY_BAUD_RATE: &str = "SCOPE_BAUD_RATE";

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Definitions in display order.
pub const SETTING_DEFS: &[SettingDef] = &[
    SettingDef {
        key: KEY_RESOLUTION,
        default: "64x64",
        description: "Frame resolution (64x64, 128x128, 256x256, 512x512, 1024x1024)",
    },
    SettingDef {
        key: KEY_ALGORITHM,
        default: "Global Thresholding",
        description: "Global Thresholding or Adaptive Gaussian Thresholding",
    },
    SettingDef {
        key: KEY_INVERT,
        default: "false",
        description: "Invert the preview (the transmitted frame gets the complement)",
    },
    SettingDef {
        key: KEY_PORT,
        default: "Test mode",
        description: "Serial device name, or \"Test mode\" to skip transmission",
    },
    SettingDef {
        key: KEY_BAUD_RATE,
        default: "9600",
        description: "9600, 38400, 57600, 115200, 250000, 500000 or 1000000",
    },
];

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, &'static SettingDef>> =
    LazyLock::new(|| SETTING_DEFS.iter().map(|def| (def.key, def)).collect());

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}
