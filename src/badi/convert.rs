//! Day counting between a Gregorian date and a Badíʿ `(year, month, day)`.

use chrono::{Datelike, Days, NaiveDate};
use tracing::trace;

use super::Month;
use crate::astronomy::{self, Astronomy, ERA_OFFSET};
use crate::error::Error;

/// Days of the 18 months preceding Ayyám-i-Há.
pub(crate) const DAYS_BEFORE_AYYAM_I_HA: i64 = 18 * 19;

/// Number of intercalary days in an era year, 4 or 5.
pub(crate) fn ayyam_i_ha_length<A: Astronomy + ?Sized>(astro: &A, year: i32) -> u32 {
    if astro.is_leap(year) { 5 } else { 4 }
}

/// Returns `(year, month, day)` of the Badíʿ date containing a Gregorian date.
pub(crate) fn ymd_from_gregorian<A: Astronomy + ?Sized>(
    astro: &A,
    date: NaiveDate,
) -> (i32, Month, u32) {
    let era = astronomy::era_year_starting_in(date);
    let nawruz = astro.nawruz_for(date.year());
    let (year, start) = if date >= nawruz {
        (era, nawruz)
    } else {
        (era - 1, astro.nawruz_for(date.year() - 1))
    };
    let days = (date - start).num_days();
    let len = ayyam_i_ha_length(astro, year) as i64;

    let (month, day0) = if days >= DAYS_BEFORE_AYYAM_I_HA + len {
        (Month::Ordinary(19), days - DAYS_BEFORE_AYYAM_I_HA - len)
    } else if days >= DAYS_BEFORE_AYYAM_I_HA {
        (Month::AyyamIHa, days - DAYS_BEFORE_AYYAM_I_HA)
    } else {
        (Month::Ordinary((days / 19) as u32 + 1), days % 19)
    };
    let day = day0 as u32 + 1;
    trace!(%date, year, month = month.number(), day, "gregorian to badi");
    (year, month, day)
}

/// Checks that `(month, day)` exists in the era year.
pub(crate) fn validate<A: Astronomy + ?Sized>(
    astro: &A,
    year: i32,
    month: Month,
    day: u32,
) -> Result<(), Error> {
    if let Month::Ordinary(num) = month {
        if !(1..=19).contains(&num) {
            return Err(Error::InvalidCalendarField {
                field: "month",
                value: num as i64,
            });
        }
    }
    if day == 0 {
        return Err(Error::InvalidCalendarField { field: "day", value: 0 });
    }
    match month {
        Month::AyyamIHa if day > ayyam_i_ha_length(astro, year) => {
            Err(Error::InvalidIntercalaryDay { day, year })
        }
        Month::Ordinary(_) if day > 19 => Err(Error::InvalidCalendarField {
            field: "day",
            value: day as i64,
        }),
        _ => Ok(()),
    }
}

/// Returns the Gregorian date of a Badíʿ `(year, month, day)`.
///
/// # Errors
///
/// Fails if the fields do not form a valid date, or if the result is not
/// representable.
pub(crate) fn gregorian_from_ymd<A: Astronomy + ?Sized>(
    astro: &A,
    year: i32,
    month: Month,
    day: u32,
) -> Result<NaiveDate, Error> {
    validate(astro, year, month, day)?;
    let full_months = match month {
        Month::Ordinary(num) => num - 1,
        Month::AyyamIHa => 18,
    };
    let mut offset = (day - 1) + 19 * full_months;
    if month == Month::Ordinary(19) {
        offset += ayyam_i_ha_length(astro, year);
    }
    let gregorian_year = year.checked_add(ERA_OFFSET).ok_or(Error::OutOfRange)?;
    let date = astro
        .nawruz_for(gregorian_year)
        .checked_add_days(Days::new(offset as u64))
        .ok_or(Error::OutOfRange)?;
    trace!(year, month = month.number(), day, %date, "badi to gregorian");
    Ok(date)
}
