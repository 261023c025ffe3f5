use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::AppError;

/// Which toast notifications the user wants to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    #[default]
    All,
    WarningsAndErrors,
    ErrorsOnly,
}

/// All levels in display order.
pub const ALL_TOAST_LEVELS: &[ToastLevel] = &[
    ToastLevel::All,
    ToastLevel::WarningsAndErrors,
    ToastLevel::ErrorsOnly,
];

impl ToastLevel {
    /// Key used in config files, cookies and select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastLevel::All => "all",
            ToastLevel::WarningsAndErrors => "warnings_and_errors",
            ToastLevel::ErrorsOnly => "errors_only",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ToastLevel::All => "All notifications",
            ToastLevel::WarningsAndErrors => "Warnings and errors",
            ToastLevel::ErrorsOnly => "Errors only",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        ALL_TOAST_LEVELS.iter().copied().find(|l| l.as_str() == s)
    }
}

/// Severity of a single toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

/// Toast preferences edited on the toast settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub level: ToastLevel,
}

fn default_enabled() -> bool {
    true
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: ToastLevel::All,
        }
    }
}

impl ToastSettings {
    /// Build settings from raw form values.
    pub fn from_form(enabled: bool, level_key: &str) -> Result<Self, AppError> {
        match ToastLevel::from_key(level_key) {
            Some(level) => Ok(Self { enabled, level }),
            None => {
                let mut fields = HashMap::new();
                fields.insert(
                    "level".to_string(),
                    format!("Unknown notification level \"{level_key}\""),
                );
                Err(AppError::validation("Invalid toast settings", fields))
            }
        }
    }

    /// Whether a toast of `kind` should be shown under these settings.
    pub fn allows(&self, kind: ToastKind) -> bool {
        if !self.enabled {
            return false;
        }
        match self.level {
            ToastLevel::All => true,
            ToastLevel::WarningsAndErrors => matches!(kind, ToastKind::Warning | ToastKind::Error),
            ToastLevel::ErrorsOnly => kind == ToastKind::Error,
        }
    }
}
