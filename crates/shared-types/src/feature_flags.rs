use serde::{Deserialize, Serialize};

use crate::toast::ToastSettings;

fn default_true() -> bool {
    true
}

/// Feature flags controlling optional parts of the clinic console.
///
/// Loaded from `config.toml` on startup. A missing or incomplete file keeps
/// the inventory section visible and logging at INFO.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    #[serde(default = "default_true")]
    pub inventory: bool,
    #[serde(default)]
    pub debug_logging: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            inventory: true,
            debug_logging: false,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    /// Initial toast preferences, used until the user saves their own.
    #[serde(default)]
    pub toast: ToastSettings,
}
