use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod components;
mod config;
mod directory;
mod notify;
mod routes;
#[cfg(test)]
mod test_support;

use directory::StaffDirectory;
use notify::{ToastSettingsSeed, ToastSettingsState};
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    let config = config::load_config();

    let level = if config.features.debug_logging {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("[logger] Failed to install subscriber: {e}");
    }

    tracing::info!(
        inventory = config.features.inventory,
        toasts = config.toast.enabled,
        "Starting clinic console"
    );

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = config::app_config();

    let flags: FeatureFlags = config.features.clone();
    use_context_provider(|| flags);
    use_context_provider(|| ToastSettingsState::new(config.toast));
    use_context_provider(StaffDirectory::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::ToastProvider {
            ToastSettingsSeed {}
            Router::<Route> {}
        }
    }
}
