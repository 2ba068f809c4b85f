//! Project entity - top-level container for tasks and memberships.

use crate::{Priority, Status};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project groups tasks and collaborators under one owner.
///
/// `owner_id` is fixed at creation. The owner holds admin-equivalent
/// authority without a membership role value and is the only user who may
/// delete the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub status: Status,
    pub priority: Priority,
    pub start_date: Option<DateTime<Utc>>,
    pub target_date: Option<DateTime<Utc>>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project owned by `owner_id` with default workflow state
    pub fn new(name: String, owner_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            summary: None,
            description: None,
            status: Status::default(),
            priority: Priority::default(),
            start_date: None,
            target_date: None,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owner(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }
}
