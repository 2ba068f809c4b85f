use crate::{Capability, EffectiveRole, Role};

use proptest::prelude::*;

const ALL_CAPABILITIES: [Capability; 6] = [
    Capability::ViewProject,
    Capability::EditContent,
    Capability::InviteMember,
    Capability::RemoveMember,
    Capability::ManageRoles,
    Capability::DeleteProject,
];

#[test]
fn test_owner_passes_every_gate() {
    for capability in ALL_CAPABILITIES {
        assert!(EffectiveRole::Owner.allows(capability));
    }
}

#[test]
fn test_no_access_fails_every_gate() {
    for capability in ALL_CAPABILITIES {
        assert!(!EffectiveRole::NoAccess.allows(capability));
    }
}

#[test]
fn test_viewer_may_only_view() {
    let viewer = EffectiveRole::Member(Role::Viewer);
    assert!(viewer.allows(Capability::ViewProject));
    assert!(!viewer.allows(Capability::EditContent));
    assert!(!viewer.allows(Capability::InviteMember));
    assert!(!viewer.allows(Capability::RemoveMember));
    assert!(!viewer.allows(Capability::ManageRoles));
    assert!(!viewer.allows(Capability::DeleteProject));
}

#[test]
fn test_editor_edits_but_cannot_manage_roles() {
    let editor = EffectiveRole::Member(Role::Editor);
    assert!(editor.allows(Capability::ViewProject));
    assert!(editor.allows(Capability::EditContent));
    assert!(editor.allows(Capability::InviteMember));
    assert!(editor.allows(Capability::RemoveMember));
    assert!(!editor.allows(Capability::ManageRoles));
    assert!(!editor.allows(Capability::DeleteProject));
}

#[test]
fn test_admin_manages_roles_but_cannot_delete_project() {
    let admin = EffectiveRole::Member(Role::Admin);
    assert!(admin.allows(Capability::ViewProject));
    assert!(admin.allows(Capability::EditContent));
    assert!(admin.allows(Capability::InviteMember));
    assert!(admin.allows(Capability::RemoveMember));
    assert!(admin.allows(Capability::ManageRoles));
    assert!(!admin.allows(Capability::DeleteProject));
}

#[test]
fn test_as_role_reports_owner_as_admin() {
    assert_eq!(EffectiveRole::Owner.as_role(), Some(Role::Admin));
    assert_eq!(
        EffectiveRole::Member(Role::Viewer).as_role(),
        Some(Role::Viewer)
    );
    assert_eq!(EffectiveRole::NoAccess.as_role(), None);
}

fn any_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Admin), Just(Role::Editor), Just(Role::Viewer)]
}

fn any_capability() -> impl Strategy<Value = Capability> {
    prop_oneof![
        Just(Capability::ViewProject),
        Just(Capability::EditContent),
        Just(Capability::InviteMember),
        Just(Capability::RemoveMember),
        Just(Capability::ManageRoles),
        Just(Capability::DeleteProject),
    ]
}

proptest! {
    #[test]
    fn given_allowing_role_when_outranked_then_higher_role_also_allows(
        lower in any_role(),
        higher in any_role(),
        capability in any_capability(),
    ) {
        if higher.has_at_least(lower) && EffectiveRole::Member(lower).allows(capability) {
            prop_assert!(EffectiveRole::Member(higher).allows(capability));
        }
    }

    #[test]
    fn given_any_member_role_when_checked_then_owner_allows_at_least_as_much(
        role in any_role(),
        capability in any_capability(),
    ) {
        if EffectiveRole::Member(role).allows(capability) {
            prop_assert!(EffectiveRole::Owner.allows(capability));
        }
    }
}
