use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A section failed validation after loading.
    #[error("Invalid {section} configuration: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// One constructor per config section so raise sites stay one-liners.
macro_rules! section_error {
    ($($fn_name:ident => $section:literal),+ $(,)?) => {
        impl ConfigError {
            $(
                #[track_caller]
                pub fn $fn_name<S: Into<String>>(message: S) -> Self {
                    ConfigError::Invalid {
                        section: $section,
                        message: message.into(),
                        location: ErrorLocation::from(Location::caller()),
                    }
                }
            )+
        }
    };
}

section_error! {
    auth => "auth",
    cache => "cache",
    config => "general",
    database => "database",
    invite => "invite",
    smtp => "smtp",
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
