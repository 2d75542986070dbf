//! Date tables mapping `month.day` keys to the occasions falling on them.
//!
//! The fixed tables are compile-time data. The yearly dates of the two birth
//! anniversaries, which follow the lunar calendar from 172 B.E. on, come from
//! an embedded data file parsed on first use.

use std::num::ParseIntError;
use std::sync::LazyLock;

use tracing::debug;

use super::DayKey;
use super::OccasionId::{self, *};
use crate::badi::Month;

/// One table: keys in declaration order, each with its occasions.
pub(super) type Table = [(DayKey, &'static [OccasionId])];

const fn on(month: u32, day: u32) -> DayKey {
    DayKey {
        month: Month::Ordinary(month),
        day,
    }
}

const fn ayyam_i_ha(day: u32) -> DayKey {
    DayKey {
        month: Month::AyyamIHa,
        day,
    }
}

/// Occasions falling on the same day every year.
pub(super) static BASE: &Table = &[
    (on(1, 1), &[Nawruz, Feast1]),
    (on(2, 1), &[Feast2]),
    (on(2, 13), &[Ridvan1]),
    (on(2, 14), &[Ridvan2]),
    (on(2, 15), &[Ridvan3]),
    (on(2, 16), &[Ridvan4]),
    (on(2, 17), &[Ridvan5]),
    (on(2, 18), &[Ridvan6]),
    (on(2, 19), &[Ridvan7]),
    (on(3, 1), &[Feast3, Ridvan8]),
    (on(3, 2), &[Ridvan9]),
    (on(3, 3), &[Ridvan10]),
    (on(3, 4), &[Ridvan11]),
    (on(3, 5), &[Ridvan12]),
    (on(4, 1), &[Feast4]),
    (on(4, 13), &[AscensionBahaullah]),
    (on(5, 1), &[Feast5]),
    (on(6, 1), &[Feast6]),
    (on(7, 1), &[Feast7]),
    (on(8, 1), &[Feast8]),
    (on(9, 1), &[Feast9]),
    (on(10, 1), &[Feast10]),
    (on(11, 1), &[Feast11]),
    (on(12, 1), &[Feast12]),
    (on(13, 1), &[Feast13]),
    (on(14, 1), &[Feast14]),
    (on(14, 4), &[Covenant]),
    (on(14, 6), &[AscensionAbdulbaha]),
    (on(15, 1), &[Feast15]),
    (on(16, 1), &[Feast16]),
    (on(17, 1), &[Feast17]),
    (on(18, 1), &[Feast18]),
    (ayyam_i_ha(1), &[AyyamIHa1]),
    (ayyam_i_ha(2), &[AyyamIHa2]),
    (ayyam_i_ha(3), &[AyyamIHa3]),
    (ayyam_i_ha(4), &[AyyamIHa4]),
    (ayyam_i_ha(5), &[AyyamIHa5]),
    (on(19, 1), &[Feast19, Fasting1]),
    (on(19, 2), &[Fasting2]),
    (on(19, 3), &[Fasting3]),
    (on(19, 4), &[Fasting4]),
    (on(19, 5), &[Fasting5]),
    (on(19, 6), &[Fasting6]),
    (on(19, 7), &[Fasting7]),
    (on(19, 8), &[Fasting8]),
    (on(19, 9), &[Fasting9]),
    (on(19, 10), &[Fasting10]),
    (on(19, 11), &[Fasting11]),
    (on(19, 12), &[Fasting12]),
    (on(19, 13), &[Fasting13]),
    (on(19, 14), &[Fasting14]),
    (on(19, 15), &[Fasting15]),
    (on(19, 16), &[Fasting16]),
    (on(19, 17), &[Fasting17]),
    (on(19, 18), &[Fasting18]),
    (on(19, 19), &[Fasting19]),
];

/// Holy days before the calendar was unified in 172 B.E.
pub(super) static BEFORE_172: &Table = &[
    (on(4, 7), &[DeclarationBab]),
    (on(6, 16), &[MartyrdomBab]),
    (on(12, 5), &[BirthBab]),
    (on(13, 9), &[BirthBahaullah]),
];

/// Fixed holy days from 172 B.E. on.
pub(super) static AFTER_172: &Table = &[
    (on(4, 8), &[DeclarationBab]),
    (on(6, 17), &[MartyrdomBab]),
];

/// Dates of the Birth of the Báb and of Baháʼu'lláh in one era year.
#[derive(Debug)]
pub(super) struct LunarYear {
    pub year: i32,
    pub dates: [(DayKey, &'static [OccasionId]); 2],
}

static RAW_DATA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/lunar_births.txt"));

static LUNAR: LazyLock<Vec<LunarYear>> = LazyLock::new(|| {
    let res = parse_raw_data().unwrap_or_else(|e| panic!("error parsing lunar date data: {:?}", e));
    debug!(years = res.len(), "parsed lunar anniversary dates");
    res
});

/// Returns the lunar anniversary table of an era year, if there is data for it.
pub(super) fn lunar(year: i32) -> Option<&'static Table> {
    LUNAR
        .binary_search_by_key(&year, |ly| ly.year)
        .ok()
        .map(|i| &LUNAR[i].dates[..])
}

/// First and last era year covered by the lunar data.
pub(super) fn lunar_range() -> Option<(i32, i32)> {
    Some((LUNAR.first()?.year, LUNAR.last()?.year))
}

fn parse_raw_data() -> Result<Vec<LunarYear>, RawDataError> {
    let mut res: Vec<LunarYear> = Vec::new();
    for (line_num, line) in (1usize..).zip(RAW_DATA.lines()) {
        if line.starts_with('#') {
            continue;
        }
        let mut it = line.split_whitespace();
        let year: i32 = match it.next() {
            None => continue,
            Some(s) => s
                .parse()
                .map_err(|e| RawDataError::new(line_num, 1, ErrorType::InvalidInt(e)))?,
        };
        if res.last().is_some_and(|prev| prev.year >= year) {
            return Err(RawDataError::new(line_num, 1, ErrorType::Unsorted));
        }
        let birth_bab = require_next_key(&mut it, line_num, 2)?;
        let birth_bahaullah = require_next_key(&mut it, line_num, 3)?;
        res.push(LunarYear {
            year,
            dates: [(birth_bab, &[BirthBab]), (birth_bahaullah, &[BirthBahaullah])],
        });
    }
    Ok(res)
}

fn require_next_key<'a, I: Iterator<Item = &'a str>>(
    it: &mut I,
    line_num: usize,
    field_num: usize,
) -> Result<DayKey, RawDataError> {
    use ErrorType::*;
    it.next()
        .ok_or_else(|| RawDataError::new(line_num, field_num, MissingField))?
        .parse()
        .map_err(|_| RawDataError::new(line_num, field_num, InvalidKey))
}

#[derive(Debug)]
#[allow(dead_code)]
struct RawDataError {
    pub line_num: usize,
    pub field_num: usize,
    pub reason: ErrorType,
}

impl RawDataError {
    fn new(line_num: usize, field_num: usize, reason: ErrorType) -> Self {
        Self {
            line_num,
            field_num,
            reason,
        }
    }
}

#[derive(Debug)]
#[allow(dead_code)]
enum ErrorType {
    InvalidInt(ParseIntError),
    InvalidKey,
    MissingField,
    Unsorted,
}
