use crate::Claims;

/// Verified caller identity available to handlers.
/// Built from validated JWT claims, or from development headers when
/// auth is disabled.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl AuthUser {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
        }
    }

    /// Email comparison for invitation acceptance. Case differences in
    /// the address never block a legitimate accept.
    pub fn matches_email(&self, other: &str) -> bool {
        self.email.eq_ignore_ascii_case(other)
    }
}
