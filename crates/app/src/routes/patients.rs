use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant, EmptyState};

use crate::components::PatientsViewHeader;

/// Patient chart shell. Clinical data is out of scope; the page shows the
/// header with the chart number and a way back.
#[component]
pub fn PatientDetail(id: String) -> Element {
    rsx! {
        div { class: "container",
            PatientsViewHeader {
                Badge { variant: BadgeVariant::Info, "Patient #{id}" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| navigator().go_back(),
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                    "Back"
                }
            }
            EmptyState {
                title: "No chart entries",
                description: "Visits and notes for this patient will appear here.",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;

    #[test]
    fn shows_default_title_and_chart_number() {
        let html = render_to_string(|| rsx! { PatientDetail { id: "1042" } });
        assert!(html.contains("<h1 class=\"page-title\">Patient Details</h1>"));
        assert!(html.contains("Patient #1042"));
        assert!(html.contains("Back"));
    }
}
