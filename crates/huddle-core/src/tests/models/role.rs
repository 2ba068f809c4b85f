use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "ADMIN");
    assert_eq!(Role::Editor.as_str(), "EDITOR");
    assert_eq!(Role::Viewer.as_str(), "VIEWER");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("EDITOR").unwrap(), Role::Editor);
    assert_eq!(Role::from_str("VIEWER").unwrap(), Role::Viewer);
    assert!(Role::from_str("OWNER").is_err());
    assert!(Role::from_str("admin").is_err());
}

#[test]
fn test_role_hierarchy() {
    assert!(Role::Admin.has_at_least(Role::Editor));
    assert!(Role::Admin.has_at_least(Role::Admin));
    assert!(Role::Editor.has_at_least(Role::Viewer));
    assert!(!Role::Viewer.has_at_least(Role::Editor));
    assert!(!Role::Editor.has_at_least(Role::Admin));
}
