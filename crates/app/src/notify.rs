use dioxus::prelude::*;
use shared_types::{AppError, ToastKind, ToastSettings};
use shared_ui::{use_toast, ToastOptions, Toasts};

/// Cookie holding the user's saved toast preferences.
const COOKIE_NAME: &str = "toast_settings";

/// Toast preferences shared through context.
///
/// Seeded from `config.toml`, then replaced by the cookie value (if any) and
/// by saves from the toast settings page.
#[derive(Clone, Copy)]
pub struct ToastSettingsState {
    pub settings: Signal<ToastSettings>,
}

impl ToastSettingsState {
    pub fn new(initial: ToastSettings) -> Self {
        Self {
            settings: Signal::new(initial),
        }
    }
}

/// Shows toasts subject to the user's [`ToastSettings`].
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: Toasts,
    settings: Signal<ToastSettings>,
}

/// Grab the toast host and the current preferences from context.
pub fn use_notifier() -> Notifier {
    let state: ToastSettingsState = use_context();
    Notifier {
        toasts: use_toast(),
        settings: state.settings,
    }
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(ToastKind::Warning, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        if !self.settings.peek().allows(kind) {
            tracing::debug!(?kind, %message, "Toast suppressed by user preferences");
            return;
        }
        match kind {
            ToastKind::Success => self.toasts.success(message, ToastOptions::new()),
            ToastKind::Info => self.toasts.info(message, ToastOptions::new()),
            ToastKind::Warning => self.toasts.warning(message, ToastOptions::new()),
            ToastKind::Error => self.toasts.error(message, ToastOptions::new()),
        }
    }
}

/// Write the preferences to the `toast_settings` cookie.
pub fn persist_toast_settings(settings: &ToastSettings) -> Result<(), AppError> {
    let script = cookie_write_script(settings)?;
    document::eval(&script);
    Ok(())
}

fn cookie_write_script(settings: &ToastSettings) -> Result<String, AppError> {
    // Encode twice: once for the value, once more to get a JS string literal.
    let json = serde_json::to_string(settings)?;
    let literal = serde_json::to_string(&json)?;
    Ok(format!(
        "document.cookie = '{COOKIE_NAME}=' + encodeURIComponent({literal}) + ';path=/;max-age=31536000;SameSite=Lax';"
    ))
}

/// Read saved preferences back from the cookie. `None` when nothing usable
/// is stored.
pub async fn load_toast_settings() -> Option<ToastSettings> {
    let script = format!(
        r#"var m = document.cookie.match(/(?:^|;\s*){COOKIE_NAME}=([^;]*)/);
        return m ? decodeURIComponent(m[1]) : "";"#
    );
    let raw = match document::eval(&script).join::<String>().await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(error = ?e, "Could not read toast settings cookie");
            return None;
        }
    };
    parse_cookie_value(&raw)
}

fn parse_cookie_value(raw: &str) -> Option<ToastSettings> {
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str(raw) {
        Ok(settings) => Some(settings),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed toast settings cookie");
            None
        }
    }
}

/// Replace the configured defaults with the saved cookie value on startup.
#[component]
pub fn ToastSettingsSeed() -> Element {
    let mut state: ToastSettingsState = use_context();

    use_effect(move || {
        spawn(async move {
            if let Some(saved) = load_toast_settings().await {
                tracing::info!(enabled = saved.enabled, level = saved.level.as_str(), "Loaded saved toast settings");
                state.settings.set(saved);
            }
        });
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ToastLevel;

    #[test]
    fn cookie_script_embeds_escaped_json() {
        let script = cookie_write_script(&ToastSettings {
            enabled: false,
            level: ToastLevel::ErrorsOnly,
        })
        .unwrap();
        assert!(script.starts_with("document.cookie = 'toast_settings='"));
        assert!(script.contains(r#"encodeURIComponent("{\"enabled\":false,\"level\":\"errors_only\"}")"#));
    }

    #[test]
    fn cookie_value_roundtrip() {
        let settings = ToastSettings {
            enabled: true,
            level: ToastLevel::WarningsAndErrors,
        };
        let raw = serde_json::to_string(&settings).unwrap();
        assert_eq!(parse_cookie_value(&raw), Some(settings));
    }

    #[test]
    fn empty_or_garbage_cookie_is_ignored() {
        assert_eq!(parse_cookie_value(""), None);
        assert_eq!(parse_cookie_value("{not json"), None);
        assert_eq!(parse_cookie_value(r#"{"level":"loud"}"#), None);
    }
}
