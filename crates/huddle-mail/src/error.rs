use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid email address: {source} {location}")]
    Address {
        source: lettre::address::AddressError,
        location: ErrorLocation,
    },

    #[error("Failed to assemble email: {source} {location}")]
    Message {
        source: lettre::error::Error,
        location: ErrorLocation,
    },

    #[error("SMTP transport error: {source} {location}")]
    Transport {
        source: lettre::transport::smtp::Error,
        location: ErrorLocation,
    },
}

impl From<lettre::address::AddressError> for MailError {
    #[track_caller]
    fn from(source: lettre::address::AddressError) -> Self {
        Self::Address {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<lettre::error::Error> for MailError {
    #[track_caller]
    fn from(source: lettre::error::Error) -> Self {
        Self::Message {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<lettre::transport::smtp::Error> for MailError {
    #[track_caller]
    fn from(source: lettre::transport::smtp::Error) -> Self {
        Self::Transport {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MailError>;
