//! Observer location used for sunset times.

use chrono_tz::Tz;

use crate::error::Error;

/// Latitude of Tehran, the reference point of the calendar.
///
/// 35° 41' 45.9996" N converted to decimal degrees.
pub const TEHRAN_LAT: f64 = 35.696111;
/// Longitude of Tehran, 51° 25' 23.0016" E in decimal degrees.
pub const TEHRAN_LNG: f64 = 51.423056;
/// Timezone of Tehran.
pub const TEHRAN_TZ: Tz = Tz::Asia__Tehran;

/// Geographic coordinates and timezone of an observer.
///
/// A zero latitude or longitude stands for "not given" and is replaced by the
/// Tehran value, so a location exactly on the equator or the prime meridian
/// cannot be expressed through [`Location::new`]. Build the struct literally
/// if that is really wanted.
///
/// # Example
///
/// ```
/// use badi_date::Location;
///
/// let loc = Location::new(0.0, 0.0, None);
/// assert_eq!(Location::tehran(), loc);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Location {
    /// Degrees north of the equator.
    pub latitude: f64,
    /// Degrees east of Greenwich.
    pub longitude: f64,
    /// Civil timezone, used for turning instants into local dates.
    pub timezone: Tz,
}

impl Location {
    /// The calendar's reference point.
    pub const fn tehran() -> Self {
        Self {
            latitude: TEHRAN_LAT,
            longitude: TEHRAN_LNG,
            timezone: TEHRAN_TZ,
        }
    }

    /// Creates a location, falling back to Tehran for every zero coordinate
    /// and for a missing timezone.
    pub fn new(latitude: f64, longitude: f64, timezone: Option<Tz>) -> Self {
        Self {
            latitude: if latitude == 0.0 { TEHRAN_LAT } else { latitude },
            longitude: if longitude == 0.0 { TEHRAN_LNG } else { longitude },
            timezone: timezone.unwrap_or(TEHRAN_TZ),
        }
    }

    /// Replaces the timezone by its IANA name.
    ///
    /// # Example
    ///
    /// ```
    /// use badi_date::Location;
    ///
    /// let loc = Location::new(43.65, -79.38, None)
    ///     .with_timezone_name("America/Toronto")
    ///     .unwrap();
    /// assert_eq!("America/Toronto", loc.timezone.name());
    /// assert!(Location::tehran().with_timezone_name("Mars/Olympus").is_err());
    /// ```
    pub fn with_timezone_name(self, name: &str) -> Result<Self, Error> {
        let timezone = name.parse::<Tz>().map_err(|_| Error::UnknownTimezone {
            name: name.to_owned(),
        })?;
        Ok(Self { timezone, ..self })
    }

    pub(crate) fn latitude_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    pub(crate) fn longitude_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::tehran()
    }
}
