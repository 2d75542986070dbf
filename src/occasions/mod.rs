//! Holy days, feasts, fasting days and the intercalary days, and the dates
//! they fall on.
//!
//! Which occasions fall on a given Badíʿ date depends on the era year: before
//! 172 B.E. a few holy days were kept on fixed solar dates that differ from
//! the ones used since, and from 172 B.E. on the Birth of the Báb and the
//! Birth of Baháʼu'lláh move with the lunar calendar.
//!
//! # Examples
//!
//! ```
//! use badi_date::Month;
//! use badi_date::occasions::{self, OccasionId};
//!
//! let ids: Vec<_> = occasions::on(1, Month::Ordinary(1), 1).iter().map(|o| o.id).collect();
//! assert_eq!(vec![OccasionId::Nawruz, OccasionId::Feast1], ids);
//!
//! assert_eq!("1.1", occasions::find(OccasionId::Nawruz, 50).unwrap().to_string());
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::badi::Month;
use crate::error::Error;

mod catalogue;
mod tables;

use tables::Table;

/// Era year from which the unified calendar, and its holy day dates, apply.
pub const UNIFIED_ERA_YEAR: i32 = 172;

macro_rules! occasion_ids {
    ($($variant:ident => $name:literal,)*) => {
        /// Stable identifier of an occasion.
        ///
        /// The string forms returned by [`OccasionId::as_str`] are meant to be
        /// persisted; they never change.
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
        pub enum OccasionId {
            $($variant,)*
        }

        impl OccasionId {
            /// Every identifier, in catalogue order.
            pub const ALL: &'static [OccasionId] = &[$(OccasionId::$variant,)*];

            /// Returns the persisted string form of the identifier.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(OccasionId::$variant => $name,)*
                }
            }
        }

        impl FromStr for OccasionId {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(OccasionId::$variant),)*
                    _ => Err(Error::UnknownOccasion { id: s.to_owned() }),
                }
            }
        }
    };
}

occasion_ids! {
    AyyamIHa1 => "ayyam_i_ha_1",
    AyyamIHa2 => "ayyam_i_ha_2",
    AyyamIHa3 => "ayyam_i_ha_3",
    AyyamIHa4 => "ayyam_i_ha_4",
    AyyamIHa5 => "ayyam_i_ha_5",
    Fasting1 => "fasting_1",
    Fasting2 => "fasting_2",
    Fasting3 => "fasting_3",
    Fasting4 => "fasting_4",
    Fasting5 => "fasting_5",
    Fasting6 => "fasting_6",
    Fasting7 => "fasting_7",
    Fasting8 => "fasting_8",
    Fasting9 => "fasting_9",
    Fasting10 => "fasting_10",
    Fasting11 => "fasting_11",
    Fasting12 => "fasting_12",
    Fasting13 => "fasting_13",
    Fasting14 => "fasting_14",
    Fasting15 => "fasting_15",
    Fasting16 => "fasting_16",
    Fasting17 => "fasting_17",
    Fasting18 => "fasting_18",
    Fasting19 => "fasting_19",
    Feast1 => "feast_1",
    Feast2 => "feast_2",
    Feast3 => "feast_3",
    Feast4 => "feast_4",
    Feast5 => "feast_5",
    Feast6 => "feast_6",
    Feast7 => "feast_7",
    Feast8 => "feast_8",
    Feast9 => "feast_9",
    Feast10 => "feast_10",
    Feast11 => "feast_11",
    Feast12 => "feast_12",
    Feast13 => "feast_13",
    Feast14 => "feast_14",
    Feast15 => "feast_15",
    Feast16 => "feast_16",
    Feast17 => "feast_17",
    Feast18 => "feast_18",
    Feast19 => "feast_19",
    Ridvan1 => "ridvan_1",
    Ridvan2 => "ridvan_2",
    Ridvan3 => "ridvan_3",
    Ridvan4 => "ridvan_4",
    Ridvan5 => "ridvan_5",
    Ridvan6 => "ridvan_6",
    Ridvan7 => "ridvan_7",
    Ridvan8 => "ridvan_8",
    Ridvan9 => "ridvan_9",
    Ridvan10 => "ridvan_10",
    Ridvan11 => "ridvan_11",
    Ridvan12 => "ridvan_12",
    Nawruz => "nawruz",
    DeclarationBab => "declaration_bab",
    AscensionBahaullah => "ascension_bahaullah",
    MartyrdomBab => "martyrdom_bab",
    BirthBab => "birth_bab",
    BirthBahaullah => "birth_bahaullah",
    Covenant => "covenant",
    AscensionAbdulbaha => "ascension_abdulbaha",
}

impl OccasionId {
    /// Returns the catalogue entry of the occasion.
    ///
    /// # Example
    ///
    /// ```
    /// use badi_date::occasions::{OccasionId, OccasionKind};
    ///
    /// let occasion = OccasionId::Ridvan9.occasion();
    /// assert_eq!(OccasionKind::Holy, occasion.kind);
    /// assert!(occasion.work_suspended);
    /// assert_eq!("9th day of Ridvan", occasion.short_title);
    /// ```
    pub fn occasion(&self) -> &'static Occasion {
        &catalogue::CATALOGUE[*self as usize]
    }
}

impl fmt::Display for OccasionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of an occasion.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OccasionKind {
    Holy,
    Feast,
    Fasting,
    Ridvan,
    AyyamIHa,
}

/// A named occasion with its display titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occasion {
    pub id: OccasionId,
    pub kind: OccasionKind,
    /// Whether work is to be suspended on this day.
    pub work_suspended: bool,
    pub title: &'static str,
    pub short_title: &'static str,
    pub title_html: &'static str,
    pub short_title_html: &'static str,
}

/// Month and day of a Badíʿ date without its year, the key of the date
/// tables.
///
/// Renders as `month.day`, with Ayyám-i-Há as month `-1`.
///
/// # Example
///
/// ```
/// use badi_date::Month;
/// use badi_date::occasions::DayKey;
///
/// let key: DayKey = "-1.4".parse().unwrap();
/// assert_eq!(DayKey::new(Month::AyyamIHa, 4), key);
/// assert_eq!("-1.4", key.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DayKey {
    pub month: Month,
    pub day: u32,
}

impl DayKey {
    pub const fn new(month: Month, day: u32) -> Self {
        Self { month, day }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.month.number(), self.day)
    }
}

impl FromStr for DayKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |field| Error::InvalidCalendarField { field, value: 0 };
        let (month, day) = s.split_once('.').ok_or(invalid("month"))?;
        let month: i32 = month.parse().map_err(|_| invalid("month"))?;
        let day: u32 = day.parse().map_err(|_| invalid("day"))?;
        Ok(Self {
            month: Month::from_number(month)?,
            day,
        })
    }
}

/// Tables that apply in an era year, in lookup order.
fn tables_for(year: i32) -> impl Iterator<Item = &'static Table> {
    let (fixed, lunar) = if year < UNIFIED_ERA_YEAR {
        (tables::BEFORE_172, None)
    } else {
        (tables::AFTER_172, tables::lunar(year))
    };
    [Some(tables::BASE), Some(fixed), lunar].into_iter().flatten()
}

/// Returns the occasions falling on a Badíʿ date, base occasions first.
///
/// An ordinary day returns an empty list.
///
/// # Example
///
/// ```
/// use badi_date::Month;
/// use badi_date::occasions::{self, OccasionId};
///
/// let on = |y, m, d| -> Vec<OccasionId> {
///     occasions::on(y, Month::Ordinary(m), d).iter().map(|o| o.id).collect()
/// };
/// assert_eq!(vec![OccasionId::DeclarationBab], on(171, 4, 7));
/// assert_eq!(vec![OccasionId::DeclarationBab], on(172, 4, 8));
/// assert!(on(171, 4, 8).is_empty());
/// ```
pub fn on(year: i32, month: Month, day: u32) -> Vec<&'static Occasion> {
    let key = DayKey::new(month, day);
    tables_for(year)
        .filter_map(|table| table.iter().find(|(k, _)| *k == key))
        .flat_map(|(_, ids)| ids.iter())
        .map(OccasionId::occasion)
        .collect()
}

/// Returns the date an occasion falls on in an era year.
///
/// The applicable tables are merged key by key, later tables replacing the
/// occasions of a key already present, and the first key listing the
/// occasion wins. A key taken over by a lunar anniversary thus no longer
/// yields the occasion it had in the base table, even though [`on`] still
/// reports both.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the occasion does not occur in that year,
/// e.g. the birth anniversaries after 306 B.E., for which there is no data.
pub fn find(id: OccasionId, year: i32) -> Result<DayKey, Error> {
    let mut merged: Vec<(DayKey, &'static [OccasionId])> = Vec::new();
    for table in tables_for(year) {
        for &(key, ids) in table {
            match merged.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = ids,
                None => merged.push((key, ids)),
            }
        }
    }
    merged
        .into_iter()
        .find(|(_, ids)| ids.contains(&id))
        .map(|(key, _)| key)
        .ok_or_else(|| {
            warn!(
                occasion = %id,
                year,
                lunar_years = ?tables::lunar_range(),
                "occasion not found in year"
            );
            Error::NotFound { occasion: id, year }
        })
}

/// Returns every occasion of an era year with its date, in calendar order.
///
/// # Example
///
/// ```
/// use badi_date::occasions::{self, OccasionId};
///
/// let year = occasions::in_year(172);
/// assert_eq!(OccasionId::Nawruz, year[0].1.id);
/// assert!(year.iter().any(|(_, o)| o.id == OccasionId::BirthBab));
/// ```
pub fn in_year(year: i32) -> Vec<(DayKey, &'static Occasion)> {
    let mut res: Vec<_> = tables_for(year)
        .flat_map(|table| table.iter())
        .flat_map(|&(key, ids)| ids.iter().map(move |id| (key, id.occasion())))
        .collect();
    res.sort_by_key(|&(key, _)| key);
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(year: i32, month: Month, day: u32) -> Vec<OccasionId> {
        on(year, month, day).iter().map(|o| o.id).collect()
    }

    #[test]
    fn catalogue_matches_identifier_order() {
        assert_eq!(63, OccasionId::ALL.len());
        for &id in OccasionId::ALL {
            assert_eq!(id, id.occasion().id);
        }
    }

    #[test]
    fn identifiers_round_trip_through_strings() {
        for &id in OccasionId::ALL {
            assert_eq!(Ok(id), id.as_str().parse());
        }
        assert_eq!(
            Err(Error::UnknownOccasion {
                id: "feast_20".into()
            }),
            "feast_20".parse::<OccasionId>()
        );
    }

    #[test]
    fn work_suspended_days() {
        let suspended: Vec<_> = OccasionId::ALL
            .iter()
            .filter(|id| id.occasion().work_suspended)
            .map(|id| id.as_str())
            .collect();
        assert_eq!(
            vec![
                "ridvan_1",
                "ridvan_9",
                "ridvan_12",
                "nawruz",
                "declaration_bab",
                "ascension_bahaullah",
                "martyrdom_bab",
                "birth_bab",
                "birth_bahaullah",
            ],
            suspended
        );
    }

    #[test]
    fn nawruz_and_first_feast() {
        use OccasionId::*;
        assert_eq!(vec![Nawruz, Feast1], ids(1, Month::Ordinary(1), 1));
    }

    #[test]
    fn ayyam_i_ha_day() {
        assert_eq!(vec![OccasionId::AyyamIHa1], ids(1, Month::AyyamIHa, 1));
        assert_eq!(vec![OccasionId::AyyamIHa5], ids(1, Month::AyyamIHa, 5));
    }

    #[test]
    fn concatenates_base_and_era_tables() {
        use OccasionId::*;
        assert_eq!(vec![Feast19, Fasting1], ids(200, Month::Ordinary(19), 1));
        // base feast of Qudrat and the lunar Birth of Bahá'u'lláh
        assert_eq!(vec![Feast13, BirthBahaullah], ids(181, Month::Ordinary(13), 1));
    }

    #[test]
    fn birth_anniversaries() {
        use OccasionId::*;
        assert_eq!(vec![BirthBab], ids(172, Month::Ordinary(13), 10));
        assert_eq!(vec![BirthBahaullah], ids(172, Month::Ordinary(13), 11));
        assert!(ids(100, Month::Ordinary(13), 10).is_empty());
        assert_eq!(vec![BirthBab], ids(100, Month::Ordinary(12), 5));
        assert_eq!(vec![BirthBahaullah], ids(100, Month::Ordinary(13), 9));
        assert!(ids(307, Month::Ordinary(12), 18).is_empty());
    }

    #[test]
    fn ordinary_day_has_no_occasions() {
        assert!(ids(175, Month::Ordinary(7), 12).is_empty());
    }

    #[test]
    fn find_fixed_and_era_dates() {
        use OccasionId::*;
        assert_eq!("1.1", find(Nawruz, 50).unwrap().to_string());
        assert_eq!("4.7", find(DeclarationBab, 171).unwrap().to_string());
        assert_eq!("4.8", find(DeclarationBab, 172).unwrap().to_string());
        assert_eq!("12.5", find(BirthBab, 100).unwrap().to_string());
        assert_eq!("12.18", find(BirthBab, 173).unwrap().to_string());
        assert_eq!("-1.3", find(AyyamIHa3, 180).unwrap().to_string());
    }

    #[test]
    fn find_lets_later_tables_replace_keys() {
        use OccasionId::*;
        // 12.1 is taken over by the Birth of the Báb in 180 B.E.
        assert_eq!(
            Err(Error::NotFound { occasion: Feast12, year: 180 }),
            find(Feast12, 180)
        );
        assert_eq!("12.1", find(Feast12, 179).unwrap().to_string());
    }

    #[test]
    fn find_missing_lunar_data() {
        assert_eq!(
            Err(Error::NotFound {
                occasion: OccasionId::BirthBab,
                year: 307
            }),
            find(OccasionId::BirthBab, 307)
        );
    }

    #[test]
    fn in_year_is_sorted_by_calendar_order() {
        let year = in_year(174);
        assert!(year.windows(2).all(|w| w[0].0 <= w[1].0));
        // 18 feasts before Ayyám-i-Há, then the 19th together with the fast
        let ayyam = year.iter().position(|(k, _)| k.month == Month::AyyamIHa).unwrap();
        assert!(year[..ayyam].iter().all(|(k, _)| k.month < Month::Ordinary(19)));
        assert_eq!(OccasionId::Fasting19, year.last().unwrap().1.id);
    }

    #[test]
    fn day_key_parse_errors() {
        assert!("13".parse::<DayKey>().is_err());
        assert!("20.1".parse::<DayKey>().is_err());
        assert!("x.1".parse::<DayKey>().is_err());
    }
}
