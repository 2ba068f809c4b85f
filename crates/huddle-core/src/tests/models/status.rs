use crate::Status;

use std::str::FromStr;

#[test]
fn test_status_as_str() {
    assert_eq!(Status::Backlog.as_str(), "BACKLOG");
    assert_eq!(Status::Todo.as_str(), "TODO");
    assert_eq!(Status::InProgress.as_str(), "IN_PROGRESS");
    assert_eq!(Status::Done.as_str(), "DONE");
}

#[test]
fn test_status_from_str() {
    assert_eq!(Status::from_str("BACKLOG").unwrap(), Status::Backlog);
    assert_eq!(Status::from_str("TODO").unwrap(), Status::Todo);
    assert_eq!(Status::from_str("IN_PROGRESS").unwrap(), Status::InProgress);
    assert_eq!(Status::from_str("DONE").unwrap(), Status::Done);
    assert!(Status::from_str("in_progress").is_err());
    assert!(Status::from_str("invalid").is_err());
}

#[test]
fn test_status_default() {
    assert_eq!(Status::default(), Status::Backlog);
}

#[test]
fn test_status_serde_wire_form() {
    let json = serde_json::to_string(&Status::InProgress).unwrap();
    assert_eq!(json, "\"IN_PROGRESS\"");

    let parsed: Status = serde_json::from_str("\"BACKLOG\"").unwrap();
    assert_eq!(parsed, Status::Backlog);
}
