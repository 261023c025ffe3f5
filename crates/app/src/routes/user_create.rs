use dioxus::prelude::*;
use shared_types::{AppError, NewStaffMember, ALL_STAFF_ROLES};
use shared_ui::{
    Button, ButtonType, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    FieldError, Form, FormSelect, Input, PageHeader, PageTitle,
};

use crate::directory::StaffDirectory;
use crate::notify::use_notifier;
use crate::routes::Route;

/// Staff creation form; every role header's create button lands here.
#[component]
pub fn UserCreate() -> Element {
    let mut directory: StaffDirectory = use_context();
    let notifier = use_notifier();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| "user".to_string());
    let mut errors = use_signal(|| None::<AppError>);

    let handle_save = move |_: FormEvent| {
        let form = NewStaffMember {
            name: name.read().clone(),
            email: email.read().clone(),
            role: role.read().clone(),
        };
        match form.validate() {
            Ok(member) => {
                let target = Route::for_role(member.role);
                notifier.success(format!(
                    "{} added as {}",
                    member.name,
                    member.role.display_name()
                ));
                directory.add(member);
                errors.set(None);
                navigator().push(target);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Staff form rejected");
                notifier.error(e.friendly_message());
                errors.set(Some(e));
            }
        }
    };

    let field_error = move |field: &str| {
        errors
            .read()
            .as_ref()
            .and_then(|e| e.field_error(field))
            .map(str::to_string)
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Add Staff Member" }
            }

            Card {
                CardHeader {
                    CardTitle { "Staff details" }
                    CardDescription { "The new member appears on the listing for their role." }
                }
                CardContent {
                    Form {
                        class: "staff-form",
                        onsubmit: handle_save,

                        Input {
                            label: "Full name",
                            required: true,
                            value: name.read().clone(),
                            on_input: move |e: FormEvent| name.set(e.value()),
                            placeholder: "e.g., Dana Reyes",
                        }
                        FieldError { message: field_error("name") }

                        Input {
                            label: "Email",
                            input_type: "email",
                            required: true,
                            value: email.read().clone(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                            placeholder: "name@clinic.example",
                        }
                        FieldError { message: field_error("email") }

                        FormSelect {
                            label: "Role",
                            value: role.read().clone(),
                            onchange: move |e: Event<FormData>| role.set(e.value()),
                            for r in ALL_STAFF_ROLES {
                                option { value: r.as_str(), "{r.display_name()}" }
                            }
                        }
                        FieldError { message: field_error("role") }

                        div { class: "form-actions",
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| {
                                    navigator().go_back();
                                },
                                "Cancel"
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                button_type: ButtonType::Submit,
                                "Add Staff Member"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastSettingsState;
    use crate::test_support::render_to_string;
    use shared_types::ToastSettings;
    use shared_ui::ToastProvider;

    fn app() -> Element {
        use_context_provider(StaffDirectory::new);
        use_context_provider(|| ToastSettingsState::new(ToastSettings::default()));
        rsx! {
            ToastProvider { UserCreate {} }
        }
    }

    #[test]
    fn offers_every_role() {
        let html = render_to_string(app);
        for role in ALL_STAFF_ROLES {
            assert!(html.contains(&format!("value=\"{}\"", role.as_str())));
        }
    }

    #[test]
    fn fresh_form_shows_no_field_errors() {
        let html = render_to_string(app);
        assert!(html.contains("staff-form"));
        assert!(!html.contains("field-error"));
    }
}
