use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Redis error: {source} {location}")]
    Redis {
        source: redis::RedisError,
        location: ErrorLocation,
    },

    #[error("Cache payload error: {source} {location}")]
    Payload {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl From<redis::RedisError> for CacheError {
    #[track_caller]
    fn from(source: redis::RedisError) -> Self {
        Self::Redis {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CacheError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Payload {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;
