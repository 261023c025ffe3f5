use dioxus::prelude::*;
use shared_types::StaffRole;
use shared_ui::SectionHeader;

/// Forward a role's fixed header configuration to [`SectionHeader`].
fn role_header(role: StaffRole) -> Element {
    let config = role.header_config();
    rsx! {
        SectionHeader {
            title: config.title.to_string(),
            create_button_text: config.create_button_text.to_string(),
            create_button_path: config.create_button_path.to_string(),
        }
    }
}

#[component]
pub fn AccountantsHeader() -> Element {
    role_header(StaffRole::Accountant)
}

#[component]
pub fn ReceptionistsHeader() -> Element {
    role_header(StaffRole::Receptionist)
}

#[component]
pub fn UsersHeader() -> Element {
    role_header(StaffRole::User)
}
