use dioxus::prelude::*;
use shared_types::{AppError, ToastSettings, ALL_TOAST_LEVELS};
use shared_ui::{
    Button, ButtonType, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    FieldError, Form, FormSelect, PageHeader, PageTitle, Separator, SwitchRow,
};

use crate::notify::{persist_toast_settings, use_notifier, ToastSettingsState};

/// Enabled switch plus minimum-level select for toast notifications.
///
/// Follows the shared preferences: when they change (the saved cookie
/// arriving after startup, or a save here) the fields are rebuilt from the
/// new value.
#[component]
pub fn SettingsToastForm() -> Element {
    let state: ToastSettingsState = use_context();
    let current = (state.settings)();

    rsx! {
        ToastPreferencesFields {
            key: "{current.enabled}-{current.level.as_str()}",
            current,
        }
    }
}

#[component]
fn ToastPreferencesFields(current: ToastSettings) -> Element {
    let mut state: ToastSettingsState = use_context();
    let notifier = use_notifier();

    let mut enabled = use_signal(move || current.enabled);
    let mut level = use_signal(move || current.level.as_str().to_string());
    let mut error = use_signal(|| None::<AppError>);

    let handle_save = move |_: FormEvent| match ToastSettings::from_form(enabled(), &level.read()) {
        Ok(settings) => {
            state.settings.set(settings);
            match persist_toast_settings(&settings) {
                Ok(()) => tracing::info!(?settings, "Toast preferences saved"),
                Err(e) => tracing::warn!(error = %e, "Could not write toast preferences cookie"),
            }
            error.set(None);
            notifier.success("Notification preferences saved");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Toast preferences rejected");
            notifier.error(e.friendly_message());
            error.set(Some(e));
        }
    };

    let level_error = error
        .read()
        .as_ref()
        .and_then(|e| e.field_error("level"))
        .map(str::to_string);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Notifications" }
            }

            Card {
                CardHeader {
                    CardTitle { "Toast notifications" }
                    CardDescription { "Choose which messages pop up after you save or change something." }
                }
                CardContent {
                    Form { class: "settings-toast-form", onsubmit: handle_save,
                        SwitchRow {
                            label: "Show toasts",
                            description: "Turn off to silence every toast.",
                            checked: enabled(),
                            on_change: move |val: bool| enabled.set(val),
                        }

                        Separator {}

                        FormSelect {
                            label: "Minimum level",
                            value: level.read().clone(),
                            onchange: move |e: Event<FormData>| level.set(e.value()),
                            for l in ALL_TOAST_LEVELS {
                                option { value: l.as_str(), "{l.display_name()}" }
                            }
                        }
                        FieldError { message: level_error }

                        div { class: "settings-actions",
                            Button {
                                variant: ButtonVariant::Primary,
                                button_type: ButtonType::Submit,
                                "Save Preferences"
                            }
                        }
                    }
                }
            }
        }
    }
}
