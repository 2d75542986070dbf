//! Error types for the badi_date crate.

use chrono::NaiveDate;

use crate::occasions::OccasionId;

/// Error type for all fallible operations in the badi_date crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when a date is built from neither a Gregorian instant nor a
    /// complete `(year, month, day)` triple, or from both and they disagree.
    #[error("invalid arguments: {reason}")]
    InvalidConstructorArguments {
        /// What was missing or inconsistent.
        reason: &'static str,
    },

    /// Returned when an Ayyám-i-Há day exceeds the length of the intercalary
    /// period in that year.
    #[error("'{day}' is not a valid day for Ayyam-i-Ha in the year {year}")]
    InvalidIntercalaryDay {
        /// The offending day.
        day: u32,
        /// The era year it was checked against.
        year: i32,
    },

    /// Returned when a month or day lies outside the calendar's bounds.
    #[error("invalid {field}: {value}")]
    InvalidCalendarField {
        /// `"month"` or `"day"`.
        field: &'static str,
        /// The value that was provided.
        value: i64,
    },

    /// Returned when an occasion does not fall anywhere in the given year.
    #[error("occasion {occasion} does not occur in the year {year}")]
    NotFound {
        /// The occasion that was searched for.
        occasion: OccasionId,
        /// The era year searched.
        year: i32,
    },

    /// Returned when parsing an identifier outside the occasion vocabulary.
    #[error("unknown occasion identifier: {id:?}")]
    UnknownOccasion {
        /// The identifier that failed to parse.
        id: String,
    },

    /// Returned when a timezone name is not in the IANA database.
    #[error("unknown timezone: {name:?}")]
    UnknownTimezone {
        /// The name that failed to parse.
        name: String,
    },

    /// Returned when the Sun does not set on that date at that latitude.
    #[error("the sun does not set on {date} at this location")]
    NoSunset {
        /// The local civil date.
        date: NaiveDate,
    },

    /// Returned when day arithmetic leaves the supported Gregorian range.
    #[error("date out of supported range")]
    OutOfRange,
}
