use dioxus::prelude::*;
use shared_types::StaffRole;

use super::staff_table::StaffListing;
use crate::components::AccountantsHeader;

#[component]
pub fn Accountants() -> Element {
    rsx! {
        div { class: "container",
            AccountantsHeader {}
            StaffListing {
                role: Some(StaffRole::Accountant),
                empty_message: "No accountants have been added.",
            }
        }
    }
}
