mod toast_form;

use dioxus::prelude::*;

use toast_form::SettingsToastForm;

/// Toast preferences page.
#[component]
pub fn SettingsToast() -> Element {
    rsx! {
        SettingsToastForm {}
    }
}
