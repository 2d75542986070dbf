//! Conversion between Gregorian dates and the Badíʿ calendar, and lookup of
//! the Baháʼí holy days, feasts and fasting days.
//!
//! Since 172 B.E. (2015) the year starts on the day of the March equinox as
//! observed in Tehran, so the calendar is computed from the positions of the
//! Sun; see [`astronomy`].
//!
//! # Examples
//!
//! Converting a Gregorian date with [`BadiDate`]:
//!
//! ```
//! use badi_date::{BadiDate, Location, Month};
//! use chrono::NaiveDate;
//!
//! let instant = NaiveDate::from_ymd_opt(2015, 11, 13).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let date = BadiDate::from_instant(instant, Location::tehran());
//!
//! assert_eq!(172, date.year().bahai_era());
//! assert_eq!(Month::Ordinary(13), date.month());
//! assert_eq!(10, date.day());
//! assert_eq!("Birth of the Bab", date.occasions()[0].short_title);
//! ```
//!
//! And back:
//!
//! ```
//! use badi_date::{BadiDate, Location, Month};
//!
//! let date = BadiDate::from_calendar_fields(173, Month::Ordinary(1), 1, Location::tehran())?;
//! assert_eq!("2016-03-20", date.gregorian_date().to_string());
//! # Ok::<(), badi_date::Error>(())
//! ```
//!
//! Finding an occasion:
//!
//! ```
//! use badi_date::occasions::{self, OccasionId};
//!
//! assert_eq!("12.18", occasions::find(OccasionId::BirthBab, 173).unwrap().to_string());
//! ```

pub mod astronomy;
pub mod badi;
pub mod error;
pub mod location;
pub mod occasions;
pub mod time_scales;

pub use astronomy::{Astronomy, StandardAstronomy};
pub use badi::{BadiDate, Builder, Calendar, Month, Weekday, Year};
pub use error::Error;
pub use location::Location;
