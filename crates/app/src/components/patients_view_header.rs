use dioxus::prelude::*;
use shared_ui::{PageActions, PageHeader, PageTitle};

pub const DEFAULT_PATIENT_TITLE: &str = "Patient Details";

/// Header row for a patient chart: the title on the left, caller-owned
/// content (actions, badges) on the right.
#[component]
pub fn PatientsViewHeader(
    #[props(default = DEFAULT_PATIENT_TITLE.to_string())] title: String,
    children: Element,
) -> Element {
    rsx! {
        PageHeader { class: "patients-view-header",
            PageTitle { "{title}" }
            PageActions { {children} }
        }
    }
}
