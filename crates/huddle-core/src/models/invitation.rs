use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A token-bearing offer of `role` on a project to an email address.
///
/// `accepted` flips to true exactly once and never back. Age matters only
/// for duplicate suppression at issue time; a pending token stays
/// redeemable until consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: Uuid,
    pub email: String,
    pub project_id: Uuid,
    pub token: String,
    pub role: Role,
    pub accepted: bool,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    pub fn new(email: String, project_id: Uuid, token: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            project_id,
            token,
            role,
            accepted: false,
            created_at: Utc::now(),
        }
    }

    /// Age in whole seconds relative to `now`
    pub fn age_secs(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_seconds()
    }
}
