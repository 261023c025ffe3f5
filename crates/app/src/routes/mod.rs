pub mod accountants;
pub mod inventory;
pub mod not_found;
pub mod patients;
pub mod receptionists;
pub mod settings;
pub mod staff_table;
pub mod user_create;
pub mod users;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdBriefcase, LdPackage, LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{FeatureFlags, StaffRole};

use accountants::Accountants;
use inventory::Inventory;
use not_found::NotFound;
use patients::PatientDetail;
use receptionists::Receptionists;
use settings::SettingsToast;
use user_create::UserCreate;
use users::Users;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[redirect("/", || Route::Users {})]
    #[layout(AppLayout)]
    #[route("/users")]
    Users {},
    #[route("/users/add")]
    UserCreate {},
    #[route("/accountants")]
    Accountants {},
    #[route("/receptionists")]
    Receptionists {},
    #[route("/inventory")]
    Inventory {},
    #[route("/patients/:id")]
    PatientDetail { id: String },
    #[route("/settings/toast")]
    SettingsToast {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Listing page a staff member of `role` appears on.
    pub fn for_role(role: StaffRole) -> Self {
        match role {
            StaffRole::Accountant => Route::Accountants {},
            StaffRole::Receptionist => Route::Receptionists {},
            StaffRole::User => Route::Users {},
        }
    }
}

/// Top navigation bar and page container.
#[component]
fn AppLayout() -> Element {
    let flags: FeatureFlags = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            nav { class: "app-nav",
                span { class: "app-brand", "Clinic Console" }
                div { class: "app-nav-links",
                    Link { to: Route::Users {}, class: "app-nav-link", active_class: "active",
                        Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
                        "Users"
                    }
                    Link { to: Route::Accountants {}, class: "app-nav-link", active_class: "active",
                        Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 }
                        "Accountants"
                    }
                    Link { to: Route::Receptionists {}, class: "app-nav-link", active_class: "active",
                        Icon::<LdUserCheck> { icon: LdUserCheck, width: 16, height: 16 }
                        "Receptionists"
                    }
                    if flags.inventory {
                        Link { to: Route::Inventory {}, class: "app-nav-link", active_class: "active",
                            Icon::<LdPackage> { icon: LdPackage, width: 16, height: 16 }
                            "Inventory"
                        }
                    }
                    Link { to: Route::SettingsToast {}, class: "app-nav-link", active_class: "active",
                        Icon::<LdBell> { icon: LdBell, width: 16, height: 16 }
                        "Notifications"
                    }
                }
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
