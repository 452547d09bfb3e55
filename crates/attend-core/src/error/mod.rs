use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Record store and derivation errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The store file has never been created.
    #[error("Record store not found at path: {path:?} {location}")]
    NotFound {
        /// Path to the missing store file.
        path: PathBuf,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Underlying filesystem read/write/open fault.
    #[error("Store IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Configured clock offset is outside the representable range.
    #[error("Invalid UTC offset: {minutes} minutes {location}")]
    InvalidUtcOffset {
        /// The rejected offset, in minutes.
        minutes: i32,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for CoreError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        CoreError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
