//! Deals with different time scales, specifically, conversion from TT into
//! UT (UTC or UT1).
//!
//! Only conversions necessary for other computations in this crate are
//! included: the equinox is computed in Terrestrial Time and has to be turned
//! into civil time before the Naw-Rúz day can be decided.

use chrono::{DateTime, NaiveDate, Utc};

/// Julian date of the Unix epoch, 1970-01-01T00:00Z.
const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Julian day number of the day before 0001-01-01, proleptic Gregorian.
const CE_JDN_OFFSET: i32 = 1721425;

/// [Terristrial time](https://en.wikipedia.org/wiki/Terrestrial_Time),
/// represented in Julian date (JD).
///
/// Equinox algorithms yield "Julian Ephemeris Days", which are on this scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tt(pub f64);

impl From<Tai> for Tt {
    fn from(tai: Tai) -> Tt {
        Tt(tai.0 + 32.184 / 86400.0)
    }
}

/// [International atomic time](https://en.wikipedia.org/wiki/International_Atomic_Time),
/// represented in Julian date (JD).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Tai(pub f64);

impl From<Tt> for Tai {
    fn from(tt: Tt) -> Tai {
        Tai(tt.0 - 32.184 / 86400.0)
    }
}

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time), the actual
/// civil time used for determining the actual date at a given time point.
///
/// This can be either UTC (coordinated universal time, based on TAI with leap
/// seconds) or UT1 (mean solar time on the Prime Meridian) depending on the
/// year. Specifically, UTC from 1972-01-01T00:00Z to the expiry of the
/// leap second table, UT1 otherwise.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

impl Ut {
    /// Converts a TAI (or other time scale easily convertible to TAI) into
    /// UT.
    ///
    /// # Example
    ///
    /// ```
    /// use badi_date::time_scales::{Tt, Ut};
    /// let ut = Ut::convert(Tt(2457102.5));
    /// // 32.184 s + 35 leap seconds in March 2015
    /// assert!((ut.0 - (2457102.5 - 67.184 / 86400.0)).abs() < 1e-7);
    /// ```
    pub fn convert<T>(time: T) -> Self
    where
        T: Into<Tai>,
    {
        let tai = time.into();
        let data = &*leap_seconds::DATA;

        if tai < data.starts {
            let diff = leap_seconds::estimate(tai) + data.c1;
            return Ut(tai.0 - diff / 86400.0); // NOTE UT1, not UTC
        } else if tai > data.expires {
            let diff = leap_seconds::estimate(tai) + data.c2;
            return Ut(tai.0 - diff / 86400.0); // NOTE UT1, not UTC
        }

        let ls = match data.leap_seconds.partition_point(|ls| ls.tai <= tai) {
            0 => return Ut(tai.0 - 10.0 / 86400.0),
            i => &data.leap_seconds[i - 1],
        };
        let leap = ((tai.0 - ls.tai.0) * 86400.0).min(1.0);
        Ut(tai.0 - (ls.delta_secs as f64 + leap) / 86400.0)
    }

    /// Returns the time point in UTC, or `None` if it lies outside the range
    /// `chrono` can represent.
    ///
    /// # Example
    ///
    /// ```
    /// use badi_date::time_scales::Ut;
    /// let utc = Ut(2451545.0).to_utc().unwrap();
    /// assert_eq!("2000-01-01T12:00:00+00:00", utc.to_rfc3339());
    /// ```
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let millis = ((self.0 - UNIX_EPOCH_JD) * 86_400_000.0).round();
        DateTime::from_timestamp_millis(millis as i64)
    }

    /// Returns 0h UT of a Gregorian date.
    pub fn midnight(date: NaiveDate) -> Self {
        Ut(julian_day_number(date) as f64 - 0.5)
    }
}

/// Returns the Julian day number (JDN) of a Gregorian date.
///
/// # Example
///
/// ```
/// use badi_date::time_scales::julian_day_number;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// assert_eq!(2451545, julian_day_number(date));
/// ```
pub fn julian_day_number(date: NaiveDate) -> i32 {
    use chrono::Datelike;
    date.num_days_from_ce() + CE_JDN_OFFSET
}

mod leap_seconds {
    use std::sync::LazyLock;

    use chrono::NaiveDate;

    use super::{Tai, Tt, julian_day_number};

    pub const DATES: &[(i32, u32, u32)] = &[
        (1972, 6, 30),
        (1972, 12, 31),
        (1973, 12, 31),
        (1974, 12, 31),
        (1975, 12, 31),
        (1976, 12, 31),
        (1977, 12, 31),
        (1978, 12, 31),
        (1979, 12, 31),
        (1981, 6, 30),
        (1982, 6, 30),
        (1983, 6, 30),
        (1985, 6, 30),
        (1987, 12, 31),
        (1989, 12, 31),
        (1990, 12, 31),
        (1992, 6, 30),
        (1993, 6, 30),
        (1994, 6, 30),
        (1995, 12, 31),
        (1997, 6, 30),
        (1998, 12, 31),
        (2005, 12, 31),
        (2008, 12, 31),
        (2012, 6, 30),
        (2015, 6, 30),
        (2016, 12, 31),
    ];
    pub const DATE_EXPIRES: (i32, u32, u32) = (2026, 6, 28);

    #[derive(Debug, Clone)]
    pub struct Data {
        pub starts: Tai,
        pub leap_seconds: Vec<LeapSecond>,
        pub expires: Tai,
        pub c1: f64,
        pub c2: f64,
    }
    #[derive(Debug, Clone)]
    pub struct LeapSecond {
        pub tai: Tai,
        pub delta_secs: i32,
    }

    pub static DATA: LazyLock<Data> = LazyLock::new(compute);

    fn jdn((y, m, d): (i32, u32, u32)) -> i32 {
        let date = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap_or_else(|| panic!("date not recognized: {:?}", (y, m, d)));
        julian_day_number(date)
    }

    fn compute() -> Data {
        let starts = Tai(jdn((1972, 1, 1)) as f64 - 0.5 + 10.0 / 86400.0);
        let leap_seconds = (10..)
            .zip(DATES)
            .map(|(delta_secs, &ymd)| LeapSecond {
                tai: Tai(jdn(ymd) as f64 + (43199 + delta_secs) as f64 / 86400.0),
                delta_secs,
            })
            .collect();
        let expires = Tai(jdn(DATE_EXPIRES) as f64 + (43199 + 10 + DATES.len()) as f64 / 86400.0);
        let c1 = 10.0 - estimate(starts);
        let c2 = (DATES.len() + 10) as f64 - estimate(expires);
        Data {
            starts,
            leap_seconds,
            expires,
            c1,
            c2,
        }
    }

    /// Parabolic ΔT (TT − UT1) estimate in seconds, with a long-period
    /// correction term.
    pub fn estimate<T: Into<Tt>>(tt: T) -> f64 {
        use std::f64::consts::PI;
        let tt = tt.into();
        let y = (tt.0 - 2451544.5) / 365.2425 + 2000.0;
        let t = (y - 1825.0) / 100.0;
        31.4115 * t * t + 284.8435805251424 * (2.0 * PI * (t + 0.75) / 14.0).cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tt_to_ut_inside_table() {
        // 2020-03-20T03:50Z in TT terms: 37 leap seconds + 32.184 s
        let ut = Ut::convert(Tt(2458928.660417));
        assert!((ut.0 - (2458928.660417 - 69.184 / 86400.0)).abs() < 1e-7);
    }

    #[test]
    fn tt_to_ut_is_continuous_at_expiry() {
        let expires = leap_seconds::DATA.expires;
        let before = Ut::convert(Tai(expires.0 - 1e-6));
        let after = Ut::convert(Tai(expires.0 + 1e-6));
        assert!((after.0 - before.0).abs() < 1.0 / 86400.0);
    }

    #[test]
    fn tt_to_ut_is_continuous_at_start() {
        let starts = leap_seconds::DATA.starts;
        let before = Ut::convert(Tai(starts.0 - 1e-6));
        let after = Ut::convert(Tai(starts.0 + 1e-6));
        assert!((after.0 - before.0).abs() < 1.0 / 86400.0);
    }

    #[test]
    fn utc_from_julian_date() {
        let date = NaiveDate::from_ymd_opt(2015, 3, 20).unwrap();
        let evening = Ut(Ut::midnight(date).0 + 0.75).to_utc().unwrap();
        assert_eq!("2015-03-20T18:00:00+00:00", evening.to_rfc3339());
        assert_eq!(None, Ut(1e12).to_utc());
    }

    #[test]
    fn midnight_jd() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(Ut(2451544.5), Ut::midnight(date));
    }
}
