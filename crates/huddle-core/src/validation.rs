//! Input validation shared by the service layer.

use crate::{CoreError, Result};

use std::panic::Location;

use error_location::ErrorLocation;

/// Basic address-shape check: one `@`, non-empty local part, dotted domain.
///
/// This is a plausibility filter, not RFC 5322; the invitation email is
/// only ever compared against identity-provider-verified addresses.
#[track_caller]
pub fn validate_email(email: &str) -> Result<()> {
    let caller = Location::caller();

    let trimmed = email.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !trimmed.contains(char::is_whitespace)
                && matches!(
                    domain.rsplit_once('.'),
                    Some((host, tld)) if !host.is_empty() && !tld.is_empty()
                )
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation {
            message: "invalid email address".to_string(),
            field: Some("email".to_string()),
            location: ErrorLocation::from(caller),
        })
    }
}

/// Reject empty or whitespace-only required text fields.
#[track_caller]
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation {
            message: format!("{field} must not be empty"),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
