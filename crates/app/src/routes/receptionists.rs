use dioxus::prelude::*;
use shared_types::StaffRole;

use super::staff_table::StaffListing;
use crate::components::ReceptionistsHeader;

#[component]
pub fn Receptionists() -> Element {
    rsx! {
        div { class: "container",
            ReceptionistsHeader {}
            StaffListing {
                role: Some(StaffRole::Receptionist),
                empty_message: "No receptionists have been added.",
            }
        }
    }
}
