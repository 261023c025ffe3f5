use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::AppError;

/// Path of the staff creation page every role header links to.
pub const STAFF_CREATE_PATH: &str = "/users/add";

/// Role a clinic staff member is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Accountant,
    Receptionist,
    User,
}

/// All roles in display order.
pub const ALL_STAFF_ROLES: &[StaffRole] = &[
    StaffRole::Accountant,
    StaffRole::Receptionist,
    StaffRole::User,
];

/// Fixed configuration a role listing forwards to its section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeaderConfig {
    pub title: &'static str,
    pub create_button_text: &'static str,
    pub create_button_path: &'static str,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Accountant => "accountant",
            StaffRole::Receptionist => "receptionist",
            StaffRole::User => "user",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StaffRole::Accountant => "Accountant",
            StaffRole::Receptionist => "Receptionist",
            StaffRole::User => "User",
        }
    }

    pub fn from_key(s: &str) -> Result<Self, AppError> {
        ALL_STAFF_ROLES
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| AppError::bad_request(format!("Unknown staff role \"{s}\"")))
    }

    /// Header literals for this role's listing page.
    pub fn header_config(&self) -> SectionHeaderConfig {
        match self {
            StaffRole::Accountant => SectionHeaderConfig {
                title: "Accountants",
                create_button_text: "Add Accountant",
                create_button_path: STAFF_CREATE_PATH,
            },
            StaffRole::Receptionist => SectionHeaderConfig {
                title: "Receptionists",
                create_button_text: "Add Receptionist",
                create_button_path: STAFF_CREATE_PATH,
            },
            StaffRole::User => SectionHeaderConfig {
                title: "Manage Users",
                create_button_text: "Add User",
                create_button_path: STAFF_CREATE_PATH,
            },
        }
    }
}

/// A member of the clinic staff directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: StaffRole,
    pub created_at: DateTime<Utc>,
}

/// Raw values from the staff creation form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewStaffMember {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl NewStaffMember {
    /// Check every field and build the directory entry.
    ///
    /// All field problems are reported together in `field_errors`.
    pub fn validate(&self) -> Result<StaffMember, AppError> {
        let mut fields = HashMap::new();

        let name = self.name.trim();
        if name.is_empty() {
            fields.insert("name".to_string(), "Name is required".to_string());
        }

        let email = self.email.trim();
        if !is_plausible_email(email) {
            fields.insert("email".to_string(), "Enter a valid email address".to_string());
        }

        let role = match StaffRole::from_key(&self.role) {
            Ok(role) => Some(role),
            Err(e) => {
                fields.insert("role".to_string(), e.message);
                None
            }
        };

        match role {
            Some(role) if fields.is_empty() => Ok(StaffMember {
                id: Uuid::new_v4(),
                name: name.to_string(),
                email: email.to_lowercase(),
                role,
                created_at: Utc::now(),
            }),
            _ => Err(AppError::validation("Please fix the highlighted fields", fields)),
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use pretty_assertions::assert_eq;

    fn form(name: &str, email: &str, role: &str) -> NewStaffMember {
        NewStaffMember {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    #[test]
    fn role_keys_roundtrip() {
        for role in ALL_STAFF_ROLES {
            assert_eq!(StaffRole::from_key(role.as_str()).unwrap(), *role);
        }
    }

    #[test]
    fn unknown_role_is_bad_request() {
        let err = StaffRole::from_key("doctor").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
    }

    #[test]
    fn header_configs_use_fixed_literals() {
        assert_eq!(
            StaffRole::Accountant.header_config(),
            SectionHeaderConfig {
                title: "Accountants",
                create_button_text: "Add Accountant",
                create_button_path: "/users/add",
            }
        );
        assert_eq!(
            StaffRole::Receptionist.header_config(),
            SectionHeaderConfig {
                title: "Receptionists",
                create_button_text: "Add Receptionist",
                create_button_path: "/users/add",
            }
        );
        assert_eq!(
            StaffRole::User.header_config(),
            SectionHeaderConfig {
                title: "Manage Users",
                create_button_text: "Add User",
                create_button_path: "/users/add",
            }
        );
    }

    #[test]
    fn valid_form_builds_member() {
        let member = form("  Dana Reyes ", "Dana@Clinic.example", "receptionist")
            .validate()
            .unwrap();
        assert_eq!(member.name, "Dana Reyes");
        assert_eq!(member.email, "dana@clinic.example");
        assert_eq!(member.role, StaffRole::Receptionist);
    }

    #[test]
    fn every_invalid_field_is_reported() {
        let err = form(" ", "not-an-email", "doctor").validate().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_error("name").is_some());
        assert!(err.field_error("email").is_some());
        assert!(err.field_error("role").unwrap().contains("doctor"));
    }

    #[test]
    fn email_shapes() {
        assert!(is_plausible_email("a@b.co"));
        assert!(!is_plausible_email("@b.co"));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("a@.co"));
        assert!(!is_plausible_email("a@b.co."));
        assert!(!is_plausible_email("a@@b.co"));
        assert!(!is_plausible_email("a b@c.co"));
    }
}
