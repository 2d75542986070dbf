use badi_date::occasions::{self, OccasionId};
use badi_date::{Astronomy, BadiDate, Calendar, Error, Location, Month};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("badi_date=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn fields(year: i32, month: Month, day: u32) -> Result<BadiDate, Error> {
    BadiDate::from_calendar_fields(year, month, day, Location::tehran())
}

fn triple(date: &BadiDate) -> (i32, Month, u32) {
    (date.year().bahai_era(), date.month(), date.day())
}

fn ids(year: i32, month: Month, day: u32) -> Vec<OccasionId> {
    fields(year, month, day)
        .unwrap()
        .occasions()
        .iter()
        .map(|o| o.id)
        .collect()
}

#[test]
fn calendar_fields_round_trip() {
    init_tracing();
    let calendar = Calendar::standard();
    for year in 1..=400 {
        let len = calendar.ayyam_i_ha_length(year);
        let days = (1..=19)
            .flat_map(|m| [(Month::Ordinary(m), 1), (Month::Ordinary(m), 19)])
            .chain((1..=len).map(|d| (Month::AyyamIHa, d)));
        for (month, day) in days {
            let date = fields(year, month, day).unwrap();
            let back = BadiDate::from_instant(date.gregorian(), Location::tehran());
            assert_eq!(
                (year, month, day),
                (back.year().bahai_era(), back.month(), back.day()),
                "{date}"
            );
        }
    }
}

#[test]
fn gregorian_round_trip() {
    init_tracing();
    let mut day = noon(2012, 1, 1);
    while day < noon(2031, 1, 1) {
        let date = BadiDate::from_instant(day, Location::tehran());
        let back = fields(date.year().bahai_era(), date.month(), date.day()).unwrap();
        assert_eq!(day.date(), back.gregorian_date(), "{date}");
        day += Duration::days(1);
    }
}

#[test]
fn unified_calendar_starts_on_nawruz_2015() {
    let date = BadiDate::from_instant(noon(2015, 3, 21), Location::tehran());
    assert_eq!("172.1.1", date.to_string());
    assert_eq!(1, date.weekday().number());

    let eve = BadiDate::from_instant(noon(2015, 3, 20), Location::tehran());
    assert_eq!("171.19.19", eve.to_string());
}

#[test]
fn nawruz_moves_with_the_equinox() {
    for (era, gregorian) in [
        (173, "2016-03-20"),
        (174, "2017-03-20"),
        (175, "2018-03-21"),
        (177, "2020-03-20"),
        (180, "2023-03-21"),
    ] {
        let date = fields(era, Month::Ordinary(1), 1).unwrap();
        assert_eq!(gregorian, date.gregorian_date().to_string(), "{era}");
    }
}

#[test]
fn leap_consistency() {
    assert!(fields(174, Month::AyyamIHa, 5).is_ok());
    assert_eq!(
        Err(Error::InvalidIntercalaryDay { day: 6, year: 174 }),
        fields(174, Month::AyyamIHa, 6)
    );
    assert_eq!(
        Err(Error::InvalidIntercalaryDay { day: 5, year: 173 }),
        fields(173, Month::AyyamIHa, 5)
    );
    // before 172 B.E. the leap years follow the Gregorian ones
    assert!(fields(156, Month::AyyamIHa, 5).is_ok());
    assert!(fields(157, Month::AyyamIHa, 5).is_err());
}

#[test]
fn invalid_fields() {
    assert_eq!(
        Err(Error::InvalidCalendarField {
            field: "day",
            value: 20
        }),
        fields(172, Month::Ordinary(1), 20)
    );
    assert_eq!(
        Err(Error::InvalidCalendarField {
            field: "month",
            value: 0
        }),
        fields(172, Month::Ordinary(0), 1)
    );
}

#[test]
fn weekday_is_stable_over_weeks() {
    let start = BadiDate::from_instant(noon(2019, 1, 1), Location::tehran());
    for weeks in 0..120 {
        let date = start + weeks * 7;
        assert_eq!(start.weekday(), date.weekday(), "{date}");
    }
}

#[test]
fn arithmetic_crosses_ayyam_i_ha() {
    let calendar = Calendar::standard();
    for year in 165..=185 {
        let last_of_mulk = fields(year, Month::Ordinary(18), 19).unwrap();
        let first = last_of_mulk + 1;
        assert_eq!((year, Month::AyyamIHa, 1), triple(&first));

        let len = calendar.ayyam_i_ha_length(year) as i64;
        let ala = first + len;
        assert_eq!((year, Month::Ordinary(19), 1), triple(&ala));
        assert_eq!(first, ala - len);
    }
}

#[test]
fn arithmetic_crosses_years() {
    let last = fields(180, Month::Ordinary(19), 19).unwrap();
    let next = last + 1;
    assert_eq!("181.1.1", next.to_string());
    assert_eq!(last, next - 1);
}

#[test]
fn occasion_lookup_cases() {
    use OccasionId::*;
    assert_eq!(vec![Nawruz, Feast1], ids(1, Month::Ordinary(1), 1));
    assert_eq!(vec![AyyamIHa1], ids(1, Month::AyyamIHa, 1));
    assert!(ids(171, Month::Ordinary(4), 7).contains(&DeclarationBab));
    assert!(ids(172, Month::Ordinary(4), 8).contains(&DeclarationBab));
    assert!(!ids(171, Month::Ordinary(4), 8).contains(&DeclarationBab));
    assert!(ids(172, Month::Ordinary(13), 10).contains(&BirthBab));
    assert!(!ids(100, Month::Ordinary(13), 10).contains(&BirthBab));
    assert_eq!("1.1", occasions::find(Nawruz, 50).unwrap().to_string());
    assert!(ids(172, Month::Ordinary(7), 12).is_empty());
}

#[test]
fn birth_anniversaries_on_gregorian_dates() {
    let bab = BadiDate::from_instant(noon(2015, 11, 13), Location::tehran());
    let found: Vec<_> = bab.occasions().iter().map(|o| o.id).collect();
    assert_eq!(vec![OccasionId::BirthBab], found);

    let key = occasions::find(OccasionId::BirthBab, 173).unwrap();
    let date = fields(173, key.month, key.day).unwrap();
    assert_eq!("2016-11-01", date.gregorian_date().to_string());
}

#[test]
fn builder_needs_a_complete_input() {
    assert!(matches!(
        BadiDate::builder().build(),
        Err(Error::InvalidConstructorArguments { .. })
    ));
    assert!(matches!(
        BadiDate::builder().month(Month::Ordinary(1)).day(1).build(),
        Err(Error::InvalidConstructorArguments { .. })
    ));

    let instant = Tz::America__Toronto
        .with_ymd_and_hms(2016, 3, 20, 9, 30, 0)
        .unwrap();
    let date = BadiDate::builder()
        .datetime(instant)
        .location(Location::new(43.65, -79.38, None))
        .build()
        .unwrap();
    assert_eq!("173.1.1", date.to_string());
    assert_eq!(Tz::America__Toronto, date.timezone());
    assert_eq!(43.65, date.latitude());
}

#[test]
fn sunset_at_location() {
    let toronto = Location::new(43.65, -79.38, Some(Tz::America__Toronto));
    let date = BadiDate::from_instant(noon(2020, 6, 20), toronto);
    let sunset = date.sunset_time().unwrap();
    assert_eq!(Tz::America__Toronto, sunset.timezone());
    assert_eq!("2020-06-20", sunset.date_naive().to_string());
    // about 21:03 EDT
    let local = sunset.naive_local().time();
    let expected = chrono::NaiveTime::from_hms_opt(21, 3, 0).unwrap();
    assert!((local - expected).num_minutes().abs() <= 3, "{sunset}");
}

/// Naw-Rúz always on 20 March and sunset always at 18:00.
#[derive(Debug, Clone, Copy)]
struct Simple;

impl Astronomy for Simple {
    fn nawruz_for(&self, gregorian_year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(gregorian_year, 3, 20).unwrap()
    }

    fn sunset_time(&self, date: NaiveDate, location: &Location) -> Result<DateTime<Tz>, Error> {
        let time = date.and_hms_opt(18, 0, 0).unwrap();
        Ok(location.timezone.from_local_datetime(&time).unwrap())
    }
}

#[test]
fn calendar_over_custom_astronomy() {
    let calendar = Calendar::new(Simple);
    let date = calendar.date_from_instant(noon(2001, 3, 20), Location::tehran());
    assert_eq!("158.1.1", date.to_string());

    // 160 B.E. spans 29 February 2004
    assert_eq!(4, calendar.ayyam_i_ha_length(158));
    assert_eq!(5, calendar.ayyam_i_ha_length(160));

    let built = BadiDate::builder()
        .year(158)
        .month(Month::Ordinary(1))
        .day(1)
        .build_with(&calendar)
        .unwrap();
    assert_eq!("2001-03-20", built.gregorian_date().to_string());

    let sunset = calendar.upcoming_sunset_time(&built).unwrap();
    assert_eq!("2001-03-21 18:00:00", sunset.naive_local().to_string());
    assert_eq!(Ok(sunset), built.upcoming_sunset_time());
}

#[test]
fn custom_calendar_arithmetic_matches_operators() {
    let calendar = Calendar::new(Simple);
    let date = calendar
        .date_from_fields(158, Month::Ordinary(18), 19, Location::tehran())
        .unwrap();
    for days in [1, 4, 5, 40, 400] {
        assert_eq!(calendar.add_days(&date, days).unwrap(), date + days, "{days}");
        assert_eq!(calendar.sub_days(&date, days).unwrap(), date - days, "{days}");
    }
    // 158 B.E. has four days of Ayyám-i-Há under this astronomy
    assert_eq!("158.19.1", (date + 5).to_string());
    assert_eq!(Ok(date), (date + 40).checked_sub_days(40));
}
