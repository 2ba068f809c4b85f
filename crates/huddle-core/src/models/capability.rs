/// Server-side gates consulted before reads and mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Read project data; any role on the project qualifies.
    ViewProject,
    /// Mutate project fields and tasks.
    EditContent,
    /// Issue an invitation for the project.
    InviteMember,
    /// Remove a member from the project.
    RemoveMember,
    /// Change a member's role.
    ManageRoles,
    /// Delete the project outright.
    DeleteProject,
}
