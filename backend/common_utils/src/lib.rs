//! Utilities shared across the normalization crates.

pub mod consts;
pub mod errors;
pub mod fp_utils;
pub mod id_type;
pub mod macros;
pub mod pii;
pub mod validation;

pub use errors::{CustomResult, ParsingError, ValidationError};
pub use id_type::{IdGenerator, UuidV7Generator};
pub use pii::{Email, PhoneNumber};

/// Date-time utilities.
pub mod date_time {
    use time::{OffsetDateTime, PrimitiveDateTime};

    /// Create a new [`PrimitiveDateTime`] with the current date and time in UTC.
    pub fn now() -> PrimitiveDateTime {
        let utc_date_time = OffsetDateTime::now_utc();
        PrimitiveDateTime::new(utc_date_time.date(), utc_date_time.time())
    }
}
