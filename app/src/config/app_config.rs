//! Default selections loaded from the environment.

use tracing::warn;

use super::defaults::{
    KEY_ALGORITHM, KEY_BAUD_RATE, KEY_INVERT, KEY_PORT, KEY_RESOLUTION, get_default,
};
use super::validation::validate_setting;

/// Selector defaults, as the raw strings a UI would hold.
///
/// Values come from `SCOPE_*` environment variables (after `.env` loading)
/// and fall back to the built-in defaults when unset or invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub resolution: String,
    pub algorithm: String,
    pub invert: bool,
    pub port: String,
    pub baud_rate: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> String {
            let fallback = get_default(key).unwrap_or_default().to_string();
            match lookup(key) {
                Some(v) if v.is_empty() => fallback,
                Some(v) => match validate_setting(key, &v) {
                    Ok(()) => v,
                    Err(e) => {
                        warn!(key, value = %v, "Ignoring invalid setting: {e}");
                        fallback
                    }
                },
                None => fallback,
            }
        };

        Self {
            resolution: g(KEY_RESOLUTION),
            algorithm: g(KEY_ALGORITHM),
            invert: g(KEY_INVERT) == "true",
            port: g(KEY_PORT),
            baud_rate: g(KEY_BAUD_RATE),
        }
    }

    /// Effective settings as `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (KEY_RESOLUTION, self.resolution.clone()),
            (KEY_ALGORITHM, self.algorithm.clone()),
            (KEY_INVERT, self.invert.to_string()),
            (KEY_PORT, self.port.clone()),
            (KEY_BAUD_RATE, self.baud_rate.clone()),
        ]
    }
}
