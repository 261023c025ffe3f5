use dioxus::prelude::*;

use super::staff_table::StaffListing;
use crate::components::UsersHeader;

/// Every staff member regardless of role.
#[component]
pub fn Users() -> Element {
    rsx! {
        div { class: "container",
            UsersHeader {}
            StaffListing {
                role: None,
                empty_message: "Add the first member of your clinic staff to get started.",
            }
        }
    }
}
