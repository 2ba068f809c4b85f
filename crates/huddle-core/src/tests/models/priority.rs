use crate::Priority;

use std::str::FromStr;

#[test]
fn test_priority_as_str() {
    assert_eq!(Priority::NoPriority.as_str(), "NO_PRIORITY");
    assert_eq!(Priority::Low.as_str(), "LOW");
    assert_eq!(Priority::Medium.as_str(), "MEDIUM");
    assert_eq!(Priority::High.as_str(), "HIGH");
    assert_eq!(Priority::Urgent.as_str(), "URGENT");
}

#[test]
fn test_priority_from_str() {
    assert_eq!(
        Priority::from_str("NO_PRIORITY").unwrap(),
        Priority::NoPriority
    );
    assert_eq!(Priority::from_str("URGENT").unwrap(), Priority::Urgent);
    assert!(Priority::from_str("CRITICAL").is_err());
    assert!(Priority::from_str("low").is_err());
}

#[test]
fn test_priority_default() {
    assert_eq!(Priority::default(), Priority::NoPriority);
}

#[test]
fn test_priority_serde_wire_form() {
    let json = serde_json::to_string(&Priority::NoPriority).unwrap();
    assert_eq!(json, "\"NO_PRIORITY\"");

    let parsed: Priority = serde_json::from_str("\"HIGH\"").unwrap();
    assert_eq!(parsed, Priority::High);
}
