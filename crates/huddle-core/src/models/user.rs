use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account mirrored from the identity provider.
///
/// The identity-provider subject is the primary key. Rows appear lazily,
/// on first sync or on invitation acceptance, and are never deleted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: String, email: String, name: Option<String>) -> Self {
        Self {
            id,
            email,
            name,
            created_at: Utc::now(),
        }
    }
}
