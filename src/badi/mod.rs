//! The Badíʿ calendar.
//!
//! A year starts on Naw-Rúz and has 19 months of 19 days. Four or five
//! intercalary days, Ayyám-i-Há, fall between the 18th and the 19th month.
//! Which Gregorian day Naw-Rúz falls on, and whether a year has five
//! intercalary days, is decided by an [`Astronomy`] implementation; see
//! [`astronomy`](crate::astronomy).

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Tz;

use crate::astronomy::{Astronomy, StandardAstronomy};
use crate::error::Error;
use crate::location::Location;
use crate::occasions::{self, Occasion};

mod convert;
pub mod fmt;

/// Month of a Badíʿ date. `Ordinary` months are numbered 1 to 19.
///
/// Months order by their place in the year, Ayyám-i-Há coming between the
/// 18th and the 19th month.
///
/// # Example
///
/// ```
/// use badi_date::Month::{self, *};
///
/// assert!(Ordinary(18) < AyyamIHa && AyyamIHa < Ordinary(19));
/// assert_eq!(Ok(AyyamIHa), Month::from_number(-1));
/// assert_eq!(-1, AyyamIHa.number());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Ordinary(u32),
    AyyamIHa,
}

impl Month {
    /// Takes the numeric form of a month, `-1` standing for Ayyám-i-Há.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCalendarField`] for anything but `-1` and `1..=19`.
    pub fn from_number(num: i32) -> Result<Self, Error> {
        match num {
            -1 => Ok(Month::AyyamIHa),
            1..=19 => Ok(Month::Ordinary(num as u32)),
            _ => Err(Error::InvalidCalendarField {
                field: "month",
                value: num as i64,
            }),
        }
    }

    /// Returns the numeric form of the month, `-1` for Ayyám-i-Há.
    pub fn number(&self) -> i32 {
        match self {
            Month::Ordinary(num) => *num as i32,
            Month::AyyamIHa => -1,
        }
    }

    /// `true` for Ayyám-i-Há.
    pub fn is_intercalary(&self) -> bool {
        matches!(self, Self::AyyamIHa)
    }

    /// Transliterated name, e.g. `"Bahá"`.
    pub fn name(&self) -> &'static str {
        fmt::month(*self)
    }

    /// Name without diacritics, e.g. `"Baha"`.
    pub fn name_plain(&self) -> &'static str {
        fmt::month_plain(*self)
    }

    /// English meaning of the name, e.g. `"Splendour"`.
    pub fn translation(&self) -> &'static str {
        fmt::month_translation(*self)
    }

    fn ordinal(&self) -> u32 {
        match *self {
            Month::Ordinary(num) if num < 19 => num,
            Month::Ordinary(num) => num + 1,
            Month::AyyamIHa => 19,
        }
    }
}

impl Ord for Month {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl PartialOrd for Month {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Day of the week, numbered from 1 (Saturday, Jalál) to 7 (Friday, Istiqlál).
///
/// # Example
///
/// ```
/// use badi_date::Weekday;
///
/// let sat = Weekday::from(chrono::Weekday::Sat);
/// assert_eq!(1, sat.number());
/// assert_eq!("Jalál", sat.name());
/// assert_eq!(7, Weekday::from(chrono::Weekday::Fri).number());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Weekday(u32);

impl Weekday {
    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn name(&self) -> &'static str {
        fmt::weekday(self.0)
    }

    pub fn name_plain(&self) -> &'static str {
        fmt::weekday_plain(self.0)
    }

    pub fn translation(&self) -> &'static str {
        fmt::weekday_translation(self.0)
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(wd: chrono::Weekday) -> Self {
        Weekday((wd.num_days_from_sunday() + 1) % 7 + 1)
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Year of the Badíʿ era (B.E.), with its place in the 19-year Váḥid and
/// the 361-year Kull-i-Shayʼ.
///
/// # Example
///
/// ```
/// use badi_date::Year;
///
/// let year = Year::new(172);
/// assert_eq!((1, 10, 1), (year.kull_i_shay(), year.vahid(), year.year_in_vahid()));
/// assert_eq!("Alif", year.name());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Year(i32);

impl Year {
    pub const fn new(bahai_era: i32) -> Self {
        Year(bahai_era)
    }

    /// The era year, 1 being the year starting at Naw-Rúz 1844.
    pub fn bahai_era(&self) -> i32 {
        self.0
    }

    pub fn kull_i_shay(&self) -> i32 {
        (self.0 - 1).div_euclid(361) + 1
    }

    /// Number of the Váḥid within its Kull-i-Shayʼ, 1 to 19.
    pub fn vahid(&self) -> i32 {
        (self.0 - 1).rem_euclid(361) / 19 + 1
    }

    /// Position of the year within its Váḥid, 1 to 19.
    pub fn year_in_vahid(&self) -> u32 {
        (self.0 - 1).rem_euclid(19) as u32 + 1
    }

    pub fn name(&self) -> &'static str {
        fmt::year(self.year_in_vahid())
    }

    pub fn name_plain(&self) -> &'static str {
        fmt::year_plain(self.year_in_vahid())
    }

    pub fn translation(&self) -> &'static str {
        fmt::year_translation(self.year_in_vahid())
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of the Badíʿ calendar together with the Gregorian instant it was
/// made from, the location it is observed at and the [`Calendar`] that
/// converted it.
///
/// The instant is a wall-clock time in the location's timezone; dates built
/// from calendar fields sit at midnight. Day arithmetic and sunsets go
/// through the date's own calendar.
///
/// Two dates are equal when their calendar fields, coordinates and the
/// moment their wall-clock times stand for agree. The timezone only takes
/// part through that moment.
///
/// # Example
///
/// ```
/// use badi_date::{BadiDate, Location, Month};
/// use chrono::NaiveDate;
///
/// let instant = NaiveDate::from_ymd_opt(2015, 3, 21).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let date = BadiDate::from_instant(instant, Location::tehran());
/// assert_eq!("172.1.1", date.to_string());
/// assert_eq!("Jalál 1 Bahá 172 B.E.", date.long_format());
///
/// let next = date + 19;
/// assert_eq!(Month::Ordinary(2), next.month());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct BadiDate<A = StandardAstronomy> {
    year: Year,
    month: Month,
    day: u32,
    weekday: Weekday,
    gregorian: NaiveDateTime,
    location: Location,
    calendar: Calendar<A>,
}

impl BadiDate {
    /// Converts a wall-clock time at `location`.
    pub fn from_instant(instant: NaiveDateTime, location: Location) -> Self {
        Calendar::standard().date_from_instant(instant, location)
    }

    /// Converts a zoned time, observed at Tehran's coordinates in the time's
    /// own timezone.
    pub fn from_datetime(instant: DateTime<Tz>) -> Self {
        Calendar::standard().date_from_datetime(instant, Location::tehran())
    }

    /// Builds a date from its calendar fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIntercalaryDay`] for a fifth day of Ayyám-i-Há
    /// in a year with four, and [`Error::InvalidCalendarField`] for a month
    /// or day outside the calendar.
    ///
    /// # Example
    ///
    /// ```
    /// use badi_date::{BadiDate, Error, Location, Month};
    ///
    /// let date = BadiDate::from_calendar_fields(174, Month::AyyamIHa, 5, Location::tehran());
    /// assert_eq!("2018-03-01", date.unwrap().gregorian_date().to_string());
    ///
    /// assert_eq!(
    ///     Err(Error::InvalidIntercalaryDay { day: 5, year: 173 }),
    ///     BadiDate::from_calendar_fields(173, Month::AyyamIHa, 5, Location::tehran()),
    /// );
    /// ```
    pub fn from_calendar_fields(
        year: i32,
        month: Month,
        day: u32,
        location: Location,
    ) -> Result<Self, Error> {
        Calendar::standard().date_from_fields(year, month, day, location)
    }

    /// Starts a [`Builder`], for callers whose inputs are optional.
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl<A> BadiDate<A> {
    pub fn year(&self) -> Year {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The Gregorian wall-clock time in [`BadiDate::timezone`].
    pub fn gregorian(&self) -> NaiveDateTime {
        self.gregorian
    }

    pub fn gregorian_date(&self) -> NaiveDate {
        self.gregorian.date()
    }

    /// The wall-clock time placed in the location's timezone.
    ///
    /// An ambiguous time resolves to its earlier reading. A time skipped by
    /// a daylight saving change moves an hour forward.
    pub fn to_datetime(&self) -> DateTime<Tz> {
        let tz = self.location.timezone;
        tz.from_local_datetime(&self.gregorian)
            .earliest()
            .or_else(|| {
                let later = self.gregorian.checked_add_signed(TimeDelta::hours(1))?;
                tz.from_local_datetime(&later).earliest()
            })
            .unwrap_or_else(|| tz.from_utc_datetime(&self.gregorian))
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude
    }

    pub fn timezone(&self) -> Tz {
        self.location.timezone
    }

    pub fn calendar(&self) -> &Calendar<A> {
        &self.calendar
    }

    /// Occasions falling on this date, see [`occasions::on`].
    pub fn occasions(&self) -> Vec<&'static Occasion> {
        occasions::on(self.year.bahai_era(), self.month, self.day)
    }

    /// E.g. `"Jalál 1 Bahá 172 B.E."`.
    pub fn long_format(&self) -> String {
        format!(
            "{} {} {} {} B.E.",
            self.weekday, self.day, self.month, self.year
        )
    }

    /// E.g. `"Jalál, 1 Bahá, 172 B.E."`.
    pub fn long_comma_format(&self) -> String {
        format!(
            "{}, {} {}, {} B.E.",
            self.weekday, self.day, self.month, self.year
        )
    }

    /// E.g. `"1 Bahá 172"`.
    pub fn short_format(&self) -> String {
        format!("{} {} {}", self.day, self.month, self.year)
    }
}

impl<A: Astronomy + Clone> BadiDate<A> {
    /// Sunset on this date's Gregorian day at its location.
    pub fn sunset_time(&self) -> Result<DateTime<Tz>, Error> {
        self.calendar.sunset_time(self)
    }

    /// Sunset on the following Gregorian day, when the next Badíʿ day begins
    /// for an observer at the location.
    pub fn upcoming_sunset_time(&self) -> Result<DateTime<Tz>, Error> {
        self.calendar.upcoming_sunset_time(self)
    }

    pub fn checked_add_days(&self, days: i64) -> Result<Self, Error> {
        self.calendar.add_days(self, days)
    }

    pub fn checked_sub_days(&self, days: i64) -> Result<Self, Error> {
        self.calendar.sub_days(self, days)
    }
}

impl<A> PartialEq for BadiDate<A> {
    fn eq(&self, other: &Self) -> bool {
        self.weekday == other.weekday
            && self.day == other.day
            && self.month == other.month
            && self.year == other.year
            && self.to_datetime() == other.to_datetime()
            && self.location.latitude == other.location.latitude
            && self.location.longitude == other.location.longitude
    }
}

impl<A> Display for BadiDate<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.year, self.month.number(), self.day)
    }
}

impl<A: Astronomy + Clone> Add<i64> for BadiDate<A> {
    type Output = BadiDate<A>;

    /// # Panics
    ///
    /// Panics if the result is out of range, use
    /// [`BadiDate::checked_add_days`] to handle that.
    fn add(self, days: i64) -> BadiDate<A> {
        match self.checked_add_days(days) {
            Ok(date) => date,
            Err(e) => panic!("`BadiDate + {}` failed: {}", days, e),
        }
    }
}

impl<A: Astronomy + Clone> Sub<i64> for BadiDate<A> {
    type Output = BadiDate<A>;

    /// # Panics
    ///
    /// Panics if the result is out of range, use
    /// [`BadiDate::checked_sub_days`] to handle that.
    fn sub(self, days: i64) -> BadiDate<A> {
        match self.checked_sub_days(days) {
            Ok(date) => date,
            Err(e) => panic!("`BadiDate - {}` failed: {}", days, e),
        }
    }
}

/// Collects optional construction inputs for a [`BadiDate`].
///
/// Either an instant or all of year, month and day must be given. When both
/// are, they have to name the same day.
///
/// # Example
///
/// ```
/// use badi_date::{BadiDate, Error, Month};
///
/// let date = BadiDate::builder().year(172).month(Month::Ordinary(13)).day(10).build().unwrap();
/// assert_eq!("2015-11-13", date.gregorian_date().to_string());
///
/// assert!(matches!(
///     BadiDate::builder().year(172).month(Month::Ordinary(13)).build(),
///     Err(Error::InvalidConstructorArguments { .. })
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    instant: Option<NaiveDateTime>,
    timezone: Option<Tz>,
    year: Option<i32>,
    month: Option<Month>,
    day: Option<u32>,
    location: Option<Location>,
}

impl Builder {
    /// Wall-clock time in the location's timezone.
    pub fn instant(mut self, instant: NaiveDateTime) -> Self {
        self.instant = Some(instant);
        self
    }

    /// Zoned time; its timezone replaces the location's.
    pub fn datetime(mut self, instant: DateTime<Tz>) -> Self {
        self.instant = Some(instant.naive_local());
        self.timezone = Some(instant.timezone());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub fn day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    /// Observer location, Tehran if not given.
    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Builds the date with [`Calendar::standard`].
    pub fn build(self) -> Result<BadiDate, Error> {
        self.build_with(Calendar::standard())
    }

    /// Builds the date with `calendar`, which the date keeps for its
    /// arithmetic and sunsets.
    pub fn build_with<A: Astronomy + Clone>(
        self,
        calendar: &Calendar<A>,
    ) -> Result<BadiDate<A>, Error> {
        let mut location = self.location.unwrap_or_default();
        if let Some(tz) = self.timezone {
            location.timezone = tz;
        }
        let fields = match (self.year, self.month, self.day) {
            (Some(y), Some(m), Some(d)) => Some((y, m, d)),
            (None, None, None) => None,
            _ if self.instant.is_none() => {
                return Err(Error::InvalidConstructorArguments {
                    reason: "year, month and day must be given together",
                });
            }
            _ => {
                return Err(Error::InvalidConstructorArguments {
                    reason: "incomplete year, month and day next to an instant",
                });
            }
        };
        match (self.instant, fields) {
            (Some(instant), None) => Ok(calendar.date_from_instant(instant, location)),
            (None, Some((y, m, d))) => calendar.date_from_fields(y, m, d, location),
            (Some(instant), Some((y, m, d))) => {
                let date = calendar.date_from_fields(y, m, d, location)?;
                if date.gregorian_date() != instant.date() {
                    return Err(Error::InvalidConstructorArguments {
                        reason: "instant and calendar fields name different days",
                    });
                }
                Ok(calendar.date_from_instant(instant, location))
            }
            (None, None) => Err(Error::InvalidConstructorArguments {
                reason: "neither an instant nor year, month and day given",
            }),
        }
    }
}

static STANDARD: Calendar = Calendar::new(StandardAstronomy);

/// Conversion engine over an [`Astronomy`] implementation.
///
/// # Example
///
/// ```
/// use badi_date::{Calendar, Location, Month};
///
/// let calendar = Calendar::standard();
/// let date = calendar.date_from_fields(172, Month::Ordinary(18), 19, Location::tehran());
/// let next = calendar.add_days(&date.unwrap(), 1).unwrap();
/// assert_eq!((Month::AyyamIHa, 1), (next.month(), next.day()));
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Calendar<A = StandardAstronomy> {
    astronomy: A,
}

impl Calendar<StandardAstronomy> {
    /// Process-wide calendar over [`StandardAstronomy`].
    pub fn standard() -> &'static Self {
        &STANDARD
    }
}

impl<A> Calendar<A> {
    pub const fn new(astronomy: A) -> Self {
        Self { astronomy }
    }

    pub fn astronomy(&self) -> &A {
        &self.astronomy
    }
}

impl<A: Astronomy + Clone> Calendar<A> {

    /// Converts a wall-clock time at `location`.
    pub fn date_from_instant(&self, instant: NaiveDateTime, location: Location) -> BadiDate<A> {
        let (year, month, day) = convert::ymd_from_gregorian(&self.astronomy, instant.date());
        BadiDate {
            year: Year(year),
            month,
            day,
            weekday: instant.weekday().into(),
            gregorian: instant,
            location,
            calendar: self.clone(),
        }
    }

    /// Converts a zoned time at the coordinates of `location`, in the time's
    /// own timezone.
    pub fn date_from_datetime(&self, instant: DateTime<Tz>, location: Location) -> BadiDate<A> {
        let location = Location {
            timezone: instant.timezone(),
            ..location
        };
        self.date_from_instant(instant.naive_local(), location)
    }

    /// Builds a date from its calendar fields, at midnight of its Gregorian day.
    pub fn date_from_fields(
        &self,
        year: i32,
        month: Month,
        day: u32,
        location: Location,
    ) -> Result<BadiDate<A>, Error> {
        let date = convert::gregorian_from_ymd(&self.astronomy, year, month, day)?;
        Ok(BadiDate {
            year: Year(year),
            month,
            day,
            weekday: date.weekday().into(),
            gregorian: date.and_time(NaiveTime::MIN),
            location,
            calendar: self.clone(),
        })
    }

    /// Moves a date by whole days, keeping its time of day and location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the result is not representable.
    pub fn add_days(&self, date: &BadiDate<A>, days: i64) -> Result<BadiDate<A>, Error> {
        let instant = TimeDelta::try_days(days)
            .and_then(|delta| date.gregorian.checked_add_signed(delta))
            .ok_or(Error::OutOfRange)?;
        Ok(self.date_from_instant(instant, date.location))
    }

    pub fn sub_days(&self, date: &BadiDate<A>, days: i64) -> Result<BadiDate<A>, Error> {
        self.add_days(date, days.checked_neg().ok_or(Error::OutOfRange)?)
    }

    /// Number of days of Ayyám-i-Há in an era year.
    ///
    /// ```
    /// use badi_date::Calendar;
    ///
    /// assert_eq!(4, Calendar::standard().ayyam_i_ha_length(173));
    /// assert_eq!(5, Calendar::standard().ayyam_i_ha_length(174));
    /// ```
    pub fn ayyam_i_ha_length(&self, year: i32) -> u32 {
        convert::ayyam_i_ha_length(&self.astronomy, year)
    }

    pub fn sunset_time(&self, date: &BadiDate<A>) -> Result<DateTime<Tz>, Error> {
        self.astronomy.sunset_time(date.gregorian_date(), &date.location)
    }

    pub fn upcoming_sunset_time(&self, date: &BadiDate<A>) -> Result<DateTime<Tz>, Error> {
        let next = date.gregorian_date().succ_opt().ok_or(Error::OutOfRange)?;
        self.astronomy.sunset_time(next, &date.location)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn month_order() {
        use Month::*;
        let mut months = vec![Ordinary(19), AyyamIHa, Ordinary(1), Ordinary(18)];
        months.sort();
        assert_eq!(vec![Ordinary(1), Ordinary(18), AyyamIHa, Ordinary(19)], months);
    }

    #[test]
    fn month_from_number() {
        assert_eq!(Ok(Month::Ordinary(19)), Month::from_number(19));
        assert_eq!(
            Err(Error::InvalidCalendarField { field: "month", value: 0 }),
            Month::from_number(0)
        );
        assert!(Month::from_number(-2).is_err());
    }

    #[test]
    fn weekday_numbers() {
        use chrono::Weekday::*;
        let nums: Vec<_> = [Sat, Sun, Mon, Tue, Wed, Thu, Fri]
            .into_iter()
            .map(|wd| Weekday::from(wd).number())
            .collect();
        assert_eq!(vec![1, 2, 3, 4, 5, 6, 7], nums);
    }

    #[test]
    fn year_cycles() {
        let cycles = |y: Year| (y.kull_i_shay(), y.vahid(), y.year_in_vahid());
        assert_eq!((1, 1, 1), cycles(Year(1)));
        assert_eq!((1, 19, 19), cycles(Year(361)));
        assert_eq!((2, 1, 1), cycles(Year(362)));
        assert_eq!("Váḥid", Year(361).name());
    }

    #[test]
    fn formats() {
        let date = BadiDate::from_instant(at(2015, 3, 21, 12), Location::tehran());
        assert_eq!("172.1.1", date.to_string());
        assert_eq!("Jalál 1 Bahá 172 B.E.", date.long_format());
        assert_eq!("Jalál, 1 Bahá, 172 B.E.", date.long_comma_format());
        assert_eq!("1 Bahá 172", date.short_format());

        let ayyam = BadiDate::from_calendar_fields(172, Month::AyyamIHa, 2, Location::tehran());
        assert_eq!("172.-1.2", ayyam.unwrap().to_string());
    }

    #[test]
    fn equality_compares_moments_across_timezones() {
        let noon_utc = Utc.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).unwrap();
        let in_tehran = BadiDate::from_datetime(noon_utc.with_timezone(&Tz::Asia__Tehran));
        let in_london = BadiDate::from_datetime(noon_utc.with_timezone(&Tz::Europe__London));
        assert_ne!(in_tehran.gregorian(), in_london.gregorian());
        assert_eq!(in_tehran, in_london);

        // same wall clock, three and a half hours apart
        let tehran = BadiDate::from_instant(at(2020, 5, 1, 9), Location::tehran());
        let utc_clock = Location {
            timezone: Tz::UTC,
            ..Location::tehran()
        };
        assert_ne!(tehran, BadiDate::from_instant(at(2020, 5, 1, 9), utc_clock));
        assert_ne!(tehran, BadiDate::from_instant(at(2020, 5, 1, 10), Location::tehran()));

        let london = Location::new(51.5, -0.12, Some(Tz::Europe__London));
        let london_clock = noon_utc.with_timezone(&Tz::Europe__London).naive_local();
        assert_ne!(in_london, BadiDate::from_instant(london_clock, london));
    }

    #[test]
    fn wall_clock_in_a_dst_gap_moves_forward() {
        let toronto = Location::new(43.65, -79.38, Some(Tz::America__Toronto));
        let skipped = at(2021, 3, 14, 2) + TimeDelta::minutes(30);
        let date = BadiDate::from_instant(skipped, toronto);
        let resolved = date.to_datetime();
        assert_eq!(at(2021, 3, 14, 3) + TimeDelta::minutes(30), resolved.naive_local());
        assert_eq!(Utc.with_ymd_and_hms(2021, 3, 14, 7, 30, 0).unwrap(), resolved);
        assert_eq!(date, date);
    }

    #[test]
    fn arithmetic_keeps_time_and_location() {
        let toronto = Location::new(43.65, -79.38, Some(Tz::America__Toronto));
        let date = BadiDate::from_instant(at(2020, 5, 1, 9), toronto);
        let later = date + 30;
        assert_eq!(at(2020, 5, 31, 9), later.gregorian());
        assert_eq!(toronto, later.location());
        assert_eq!(date, later - 30);
        assert_eq!(Err(Error::OutOfRange), date.checked_add_days(i64::MAX));
        assert_eq!(Err(Error::OutOfRange), date.checked_sub_days(i64::MIN));
    }

    #[test]
    fn from_datetime_adopts_timezone() {
        let instant = Tz::America__Toronto.with_ymd_and_hms(2015, 3, 21, 8, 0, 0).unwrap();
        let date = BadiDate::from_datetime(instant);
        assert_eq!(Tz::America__Toronto, date.timezone());
        assert_eq!(crate::location::TEHRAN_LAT, date.latitude());
        assert_eq!("172.1.1", date.to_string());
    }

    #[test]
    fn builder_paths() {
        let fields = BadiDate::builder()
            .year(172)
            .month(Month::Ordinary(1))
            .day(1)
            .build()
            .unwrap();
        let instant = BadiDate::builder().instant(at(2015, 3, 21, 0)).build().unwrap();
        assert_eq!(fields, instant);

        let both = BadiDate::builder()
            .instant(at(2015, 3, 21, 15))
            .year(172)
            .month(Month::Ordinary(1))
            .day(1)
            .build()
            .unwrap();
        assert_eq!(at(2015, 3, 21, 15), both.gregorian());
    }

    #[test]
    fn builder_errors() {
        let reason = |r: Result<BadiDate, Error>| match r {
            Err(Error::InvalidConstructorArguments { reason }) => reason,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(
            "neither an instant nor year, month and day given",
            reason(BadiDate::builder().build())
        );
        assert_eq!(
            "year, month and day must be given together",
            reason(BadiDate::builder().year(172).day(1).build())
        );
        assert_eq!(
            "instant and calendar fields name different days",
            reason(
                BadiDate::builder()
                    .instant(at(2015, 3, 22, 0))
                    .year(172)
                    .month(Month::Ordinary(1))
                    .day(1)
                    .build()
            )
        );
        assert_eq!(
            Err(Error::InvalidIntercalaryDay { day: 5, year: 173 }),
            BadiDate::builder().year(173).month(Month::AyyamIHa).day(5).build()
        );
    }

    #[test]
    fn occasions_of_date() {
        let date = BadiDate::from_instant(at(2015, 11, 13, 12), Location::tehran());
        let fields = (date.year().bahai_era(), date.month(), date.day());
        assert_eq!((172, Month::Ordinary(13), 10), fields);
        let ids: Vec<_> = date.occasions().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(vec!["birth_bab"], ids);
    }

    #[test]
    fn upcoming_sunset_is_a_day_later() {
        let date = BadiDate::from_instant(at(2020, 3, 20, 12), Location::tehran());
        let today = date.sunset_time().unwrap();
        let tomorrow = date.upcoming_sunset_time().unwrap();
        let diff = (tomorrow - today).num_minutes();
        assert!((1439..=1442).contains(&diff), "{diff}");
    }

    /// Naw-Rúz always on 10 March, with no sunsets.
    #[derive(Debug, Clone, Copy)]
    struct EarlyNawruz;

    impl Astronomy for EarlyNawruz {
        fn nawruz_for(&self, gregorian_year: i32) -> NaiveDate {
            NaiveDate::from_ymd_opt(gregorian_year, 3, 10).unwrap()
        }

        fn sunset_time(&self, date: NaiveDate, _: &Location) -> Result<DateTime<Tz>, Error> {
            Err(Error::NoSunset { date })
        }
    }

    #[test]
    fn dates_keep_their_calendar() {
        let calendar = Calendar::new(EarlyNawruz);
        let date = calendar
            .date_from_fields(170, Month::Ordinary(1), 1, Location::tehran())
            .unwrap();
        assert_eq!(NaiveDate::from_ymd_opt(2013, 3, 10), Some(date.gregorian_date()));

        let next = date + 1;
        assert_eq!(calendar.add_days(&date, 1).unwrap(), next);
        assert_eq!("170.1.2", next.to_string());
        assert_eq!(calendar.sub_days(&date, 1), date.checked_sub_days(1));
        assert_eq!("169.19.19", (date - 1).to_string());
        assert_eq!(date, next - 1);

        let built = BadiDate::builder()
            .instant(at(2013, 3, 10, 12))
            .build_with(&calendar)
            .unwrap();
        assert_eq!("170.1.1", built.to_string());
        assert_eq!(
            Err(Error::NoSunset { date: built.gregorian_date() }),
            built.sunset_time()
        );
    }
}
