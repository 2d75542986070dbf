//! Solar events the calendar is anchored to: the March equinox, sunset, and
//! from them the Naw-Rúz of each year.
//!
//! The calendar only depends on the [`Astronomy`] trait. [`StandardAstronomy`]
//! implements it with analytic series, accurate to about a minute, which is
//! enough to place Naw-Rúz except in years where the equinox falls within a
//! minute or so of sunset in Tehran.

use std::f64::consts::{PI, TAU};

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::Error;
use crate::location::Location;
use crate::time_scales::{Tt, Ut};

/// Gregorian year from which Naw-Rúz follows the equinox. Earlier years keep
/// the fixed 21 March.
pub const UNIFIED_FROM_YEAR: i32 = 2015;

/// Difference between the Gregorian year of a Naw-Rúz and its era year.
pub const ERA_OFFSET: i32 = 1843;

/// Source of the astronomical facts the calendar needs.
///
/// Implementations must be pure for equal inputs; the conversion engine may
/// call them several times per date.
pub trait Astronomy {
    /// Gregorian date of Naw-Rúz in `gregorian_year`.
    fn nawruz_for(&self, gregorian_year: i32) -> NaiveDate;

    /// Whether the era year has five days of Ayyám-i-Há instead of four.
    ///
    /// The default implementation counts the days between this year's and the
    /// next year's Naw-Rúz.
    fn is_leap(&self, era_year: i32) -> bool {
        let this = self.nawruz_for(gregorian_year_of(era_year));
        let next = self.nawruz_for(gregorian_year_of(era_year + 1));
        (next - this).num_days() == 366
    }

    /// Time of sunset on a local civil date at `location`, in its timezone.
    fn sunset_time(&self, date: NaiveDate, location: &Location) -> Result<DateTime<Tz>, Error>;
}

/// Analytic implementation of [`Astronomy`].
#[derive(Debug, Copy, Clone, Default)]
pub struct StandardAstronomy;

impl Astronomy for StandardAstronomy {
    /// # Example
    ///
    /// ```
    /// use badi_date::{Astronomy, StandardAstronomy};
    /// use chrono::NaiveDate;
    ///
    /// let astro = StandardAstronomy;
    /// assert_eq!(NaiveDate::from_ymd_opt(2000, 3, 21), Some(astro.nawruz_for(2000)));
    /// assert_eq!(NaiveDate::from_ymd_opt(2016, 3, 20), Some(astro.nawruz_for(2016)));
    /// ```
    fn nawruz_for(&self, gregorian_year: i32) -> NaiveDate {
        if gregorian_year < UNIFIED_FROM_YEAR {
            return fixed_nawruz(gregorian_year);
        }
        let tehran = Location::tehran();
        let Some(equinox) = march_equinox(gregorian_year) else {
            return fixed_nawruz(gregorian_year);
        };
        let day = local_date(equinox, &tehran.timezone);
        let nawruz = match sunset_utc(day, &tehran) {
            Some(sunset) if equinox >= sunset => day + Duration::days(1),
            _ => day,
        };
        debug!(gregorian_year, %equinox, %nawruz, "resolved Naw-Ruz from the equinox");
        nawruz
    }

    fn sunset_time(&self, date: NaiveDate, location: &Location) -> Result<DateTime<Tz>, Error> {
        let sunset = sunset_utc(date, location).ok_or(Error::NoSunset { date })?;
        Ok(sunset.with_timezone(&location.timezone))
    }
}

fn fixed_nawruz(gregorian_year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(gregorian_year, 3, 21).unwrap_or(NaiveDate::MIN)
}

/// Periodic terms `(A, B, C)` for the equinox correction, Meeus table 27.C.
#[rustfmt::skip]
const EQUINOX_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96, 1934.136), (203.0, 337.23, 32964.467), (199.0, 342.08, 20.186),
    (182.0, 27.85, 445267.112), (156.0, 73.14, 45036.886), (136.0, 171.52, 22518.443),
    (77.0, 222.54, 65928.934), (74.0, 296.72, 3034.906), (70.0, 243.58, 9037.513),
    (58.0, 119.81, 33718.147), (52.0, 297.17, 150.678), (50.0, 21.02, 2281.226),
    (45.0, 247.54, 29929.562), (44.0, 325.15, 31555.956), (29.0, 60.93, 4443.417),
    (18.0, 155.12, 67555.328), (17.0, 288.79, 4562.452), (16.0, 198.04, 62894.029),
    (14.0, 199.76, 31436.921), (12.0, 95.39, 14577.848), (12.0, 287.11, 31931.756),
    (12.0, 320.81, 34777.259), (9.0, 227.73, 1222.114), (8.0, 15.45, 16859.074),
];

/// Instant of the March equinox in Terrestrial Time.
///
/// Valid for years 1000 to 3000.
pub fn march_equinox_tt(year: i32) -> Tt {
    let y = (year - 2000) as f64 / 1000.0;
    let jde0 = 2451623.80984 + 365242.37404 * y + 0.05169 * y.powi(2)
        - 0.00411 * y.powi(3)
        - 0.00057 * y.powi(4);
    let t = (jde0 - 2451545.0) / 36525.0;
    let w = (35999.373 * t - 2.47).to_radians();
    let dl = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();
    let s: f64 = EQUINOX_TERMS
        .iter()
        .map(|&(a, b, c)| a * (b + c * t).to_radians().cos())
        .sum();
    Tt(jde0 + 0.00001 * s / dl)
}

/// Instant of the March equinox in UTC.
///
/// # Example
///
/// ```
/// use badi_date::astronomy::march_equinox;
///
/// let equinox = march_equinox(2015).unwrap();
/// assert_eq!("2015-03-20 22:4", &equinox.to_string()[..15]);
/// ```
pub fn march_equinox(year: i32) -> Option<DateTime<Utc>> {
    Ut::convert(march_equinox_tt(year)).to_utc()
}

/// Maximum iterations for the sunset refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Altitude of the Sun's centre at sunset: refraction plus semidiameter.
const SUNSET_ALTITUDE_DEG: f64 = -0.8333;

/// Earth rotation relative to the stars, in radians per solar day.
const SIDEREAL_RATE: f64 = TAU * 1.002_737_811_911_354_6;

/// Apparent right ascension and declination of the Sun, low precision
/// (Meeus ch. 25), in radians.
fn sun_ra_dec(jd: f64) -> (f64, f64) {
    let t = (jd - 2451545.0) / 36525.0;
    let l0 = 280.46646 + 36000.76983 * t;
    let m = (357.52911 + 35999.05029 * t).to_radians();
    let c = (1.914602 - 0.004817 * t) * m.sin()
        + 0.019993 * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    let lambda = (l0 + c - 0.00569 - 0.00478 * omega.sin()).to_radians();
    let eps = (23.439291 - 0.0130042 * t + 0.00256 * omega.cos()).to_radians();
    let ra = (eps.cos() * lambda.sin()).atan2(lambda.cos()).rem_euclid(TAU);
    let dec = (eps.sin() * lambda.sin()).asin();
    (ra, dec)
}

/// Greenwich mean sidereal time in radians.
fn gmst_rad(jd_ut: f64) -> f64 {
    (280.46061837 + 360.98564736629 * (jd_ut - 2451545.0))
        .to_radians()
        .rem_euclid(TAU)
}

/// Wraps an angle into `[-pi, pi]`.
fn normalize(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

fn hour_angle(jd: f64, ra: f64, location: &Location) -> f64 {
    normalize(gmst_rad(jd) + location.longitude_rad() - ra)
}

/// Sunset on a civil date at a location, in UTC, or `None` during polar day
/// or night.
///
/// Starts from the approximate local noon of that date and refines the time
/// at which the Sun's hour angle reaches the setting value.
fn sunset_utc(date: NaiveDate, location: &Location) -> Option<DateTime<Utc>> {
    let phi = location.latitude_rad();
    let h0 = SUNSET_ALTITUDE_DEG.to_radians();

    let noon = Ut::midnight(date).0 + 0.5 - location.longitude / 360.0;
    let (ra, _) = sun_ra_dec(noon);
    let transit = noon - hour_angle(noon, ra, location) / SIDEREAL_RATE;

    let mut jd = transit;
    for _ in 0..=MAX_ITERATIONS {
        let (ra, dec) = sun_ra_dec(jd);
        let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
        if !(-1.0..=1.0).contains(&cos_h) {
            return None;
        }
        let correction = normalize(cos_h.acos() - hour_angle(jd, ra, location)) / SIDEREAL_RATE;
        jd += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }
    Ut(jd).to_utc()
}

/// Converts a UTC instant into the local civil date at a timezone.
pub(crate) fn local_date(time: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    tz.from_utc_datetime(&time.naive_utc()).date_naive()
}

/// Gregorian year the era year's Naw-Rúz falls in.
pub fn gregorian_year_of(era_year: i32) -> i32 {
    era_year + ERA_OFFSET
}

/// Era year whose Naw-Rúz falls in the Gregorian year of `date`.
pub(crate) fn era_year_starting_in(date: NaiveDate) -> i32 {
    date.year() - ERA_OFFSET
}
