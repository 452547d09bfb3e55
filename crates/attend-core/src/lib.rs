//! Attend Core Library
//!
//! Record model, flat-file record store, and address/timestamp derivation
//! for the attendance recording service.
//!
//! # Example
//!
//! ```no_run
//! use attend_core::{AttendanceRecord, Clock, CoreResult, RecordStore, normalize_address};
//!
//! fn main() -> CoreResult<()> {
//!     let store = RecordStore::new("attendance.csv");
//!     let clock = Clock::new(330)?;
//!
//!     let record = AttendanceRecord::new(
//!         "alice",
//!         normalize_address(None),
//!         clock.timestamp(),
//!     );
//!     store.append(&record)?;
//!
//!     println!("{}", store.read_all()?);
//!     Ok(())
//! }
//! ```

mod address;
mod clock;
mod error;
mod record;
mod store;

pub use {
    address::normalize_address,
    clock::{Clock, DEFAULT_UTC_OFFSET_MINUTES},
    error::{CoreError, Result as CoreResult},
    record::AttendanceRecord,
    store::RecordStore,
};

#[cfg(test)]
mod tests;
