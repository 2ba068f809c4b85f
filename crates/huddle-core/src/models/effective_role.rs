use crate::{Capability, Role};

/// Resolved authority of a user on a single project.
///
/// Resolution order: project owner, else the membership row's role, else
/// no access. The owner is immune to membership mutation and passes every
/// gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveRole {
    Owner,
    Member(Role),
    NoAccess,
}

impl EffectiveRole {
    /// Whether this authority passes the given gate.
    ///
    /// Editing, inviting, and removal admit EDITOR and up; role changes
    /// require ADMIN; deletion is owner-only.
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewProject => self.has_access(),
            Capability::EditContent | Capability::InviteMember | Capability::RemoveMember => {
                match self {
                    Self::Owner => true,
                    Self::Member(role) => role.has_at_least(Role::Editor),
                    Self::NoAccess => false,
                }
            }
            Capability::ManageRoles => match self {
                Self::Owner => true,
                Self::Member(role) => *role == Role::Admin,
                Self::NoAccess => false,
            },
            Capability::DeleteProject => matches!(self, Self::Owner),
        }
    }

    /// Role equivalent reported to clients; the owner reads as ADMIN.
    pub fn as_role(&self) -> Option<Role> {
        match self {
            Self::Owner => Some(Role::Admin),
            Self::Member(role) => Some(*role),
            Self::NoAccess => None,
        }
    }

    pub fn has_access(&self) -> bool {
        !matches!(self, Self::NoAccess)
    }
}
