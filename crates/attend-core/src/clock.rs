use crate::{CoreError, error::Result};

use std::panic::Location;

use chrono::{DateTime, FixedOffset, Utc};
use error_location::ErrorLocation;

/// Default UTC offset in minutes (+5:30, the original deployment's region).
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

/// Wall-clock source for submission timestamps.
///
/// Renders instants in a fixed UTC offset rather than the host timezone.
/// The offset is configuration, not a constant: daylight rules and leap
/// seconds are deliberately out of scope.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    offset: FixedOffset,
}

impl Clock {
    /// Create a clock with the given UTC offset in minutes.
    ///
    /// Fails with [`CoreError::InvalidUtcOffset`] when the offset does not
    /// fit within a day.
    #[track_caller]
    pub fn new(offset_minutes: i32) -> Result<Self> {
        let offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| CoreError::InvalidUtcOffset {
                minutes: offset_minutes,
                location: ErrorLocation::from(Location::caller()),
            })?;
        Ok(Self { offset })
    }

    /// Render the current instant as a submission timestamp.
    pub fn timestamp(&self) -> String {
        Self::render(Utc::now(), self.offset)
    }

    /// Render a specific instant in the given offset, `DD-MM-YYYY HH:MM:SS`.
    pub fn render(instant: DateTime<Utc>, offset: FixedOffset) -> String {
        instant
            .with_timezone(&offset)
            .format("%d-%m-%Y %H:%M:%S")
            .to_string()
    }

    /// The configured UTC offset.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}
