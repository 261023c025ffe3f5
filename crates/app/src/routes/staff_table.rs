use dioxus::prelude::*;
use shared_types::{StaffMember, StaffRole};
use shared_ui::{
    Badge, BadgeVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, EmptyState,
};

use crate::directory::StaffDirectory;

/// Directory entries for `role` (everyone when `None`), or an empty state.
#[component]
pub fn StaffListing(#[props(!optional)] role: Option<StaffRole>, empty_message: String) -> Element {
    let directory: StaffDirectory = use_context();
    let members = directory.listed(role);

    if members.is_empty() {
        return rsx! {
            EmptyState {
                title: "No staff yet",
                description: empty_message,
            }
        };
    }

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Email" }
                DataTableColumn { "Role" }
                DataTableColumn { "Added" }
            }
            DataTableBody {
                for member in members {
                    StaffRow { key: "{member.id}", member }
                }
            }
        }
    }
}

#[component]
fn StaffRow(member: StaffMember) -> Element {
    let added = member.created_at.format("%b %-d, %Y").to_string();

    rsx! {
        DataTableRow {
            DataTableCell { "{member.name}" }
            DataTableCell { "{member.email}" }
            DataTableCell {
                Badge { variant: role_badge_variant(member.role), "{member.role.display_name()}" }
            }
            DataTableCell { "{added}" }
        }
    }
}

fn role_badge_variant(role: StaffRole) -> BadgeVariant {
    match role {
        StaffRole::Accountant => BadgeVariant::Info,
        StaffRole::Receptionist => BadgeVariant::Success,
        StaffRole::User => BadgeVariant::Neutral,
    }
}
