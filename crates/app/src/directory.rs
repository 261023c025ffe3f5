use dioxus::prelude::*;
use shared_types::{StaffMember, StaffRole};

/// In-memory staff directory shared by the role listings and the
/// staff creation page.
#[derive(Clone, Copy)]
pub struct StaffDirectory {
    pub members: Signal<Vec<StaffMember>>,
}

impl StaffDirectory {
    pub fn new() -> Self {
        Self {
            members: Signal::new(Vec::new()),
        }
    }

    pub fn add(&mut self, member: StaffMember) {
        tracing::info!(id = %member.id, role = member.role.as_str(), "Staff member added");
        self.members.write().push(member);
    }

    /// Members listed under `role`, or everyone when `role` is `None`.
    pub fn listed(&self, role: Option<StaffRole>) -> Vec<StaffMember> {
        members_for(&self.members.read(), role)
    }
}

fn members_for(members: &[StaffMember], role: Option<StaffRole>) -> Vec<StaffMember> {
    let mut listed: Vec<StaffMember> = members
        .iter()
        .filter(|m| role.map_or(true, |r| m.role == r))
        .cloned()
        .collect();
    listed.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    listed
}
