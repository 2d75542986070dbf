//! Names of months, weekdays and years.

use super::Month;

const MONTHS: [Names; 19] = [
    ("Bahá", "Baha", "Splendour"),
    ("Jalál", "Jalal", "Glory"),
    ("Jamál", "Jamal", "Beauty"),
    ("‘Aẓamat", "Azamat", "Grandeur"),
    ("Núr", "Nur", "Light"),
    ("Raḥmat", "Rahmat", "Mercy"),
    ("Kalimát", "Kalimat", "Words"),
    ("Kamál", "Kamal", "Perfection"),
    ("Asmá’", "Asma", "Names"),
    ("‘Izzat", "Izzat", "Might"),
    ("Mashíyyat", "Mashiyyat", "Will"),
    ("‘Ilm", "Ilm", "Knowledge"),
    ("Qudrat", "Qudrat", "Power"),
    ("Qawl", "Qawl", "Speech"),
    ("Masá’il", "Masail", "Questions"),
    ("Sharaf", "Sharaf", "Honour"),
    ("Sulṭán", "Sultan", "Sovereignty"),
    ("Mulk", "Mulk", "Dominion"),
    ("‘Alá’", "Ala", "Loftiness"),
];

const AYYAM_I_HA: Names = ("Ayyám-i-Há", "Ayyam-i-Ha", "Days of Ha");

/// Weekdays, starting from Saturday.
const WEEKDAYS: [Names; 7] = [
    ("Jalál", "Jalal", "Glory"),
    ("Jamál", "Jamal", "Beauty"),
    ("Kamál", "Kamal", "Perfection"),
    ("Fiḍál", "Fidal", "Grace"),
    ("‘Idál", "Idal", "Justice"),
    ("Istijlál", "Istijlal", "Majesty"),
    ("Istiqlál", "Istiqlal", "Independence"),
];

/// Years of a Váḥid, the 19-year cycle.
const YEARS: [Names; 19] = [
    ("Alif", "Alif", "A"),
    ("Bá’", "Ba", "B"),
    ("Ab", "Ab", "Father"),
    ("Dál", "Dal", "D"),
    ("Báb", "Bab", "Gate"),
    ("Váv", "Vav", "V"),
    ("Abad", "Abad", "Eternity"),
    ("Jád", "Jad", "Generosity"),
    ("Bahá", "Baha", "Splendour"),
    ("Ḥubb", "Hubb", "Love"),
    ("Bahháj", "Bahhaj", "Delightful"),
    ("Javáb", "Javab", "Answer"),
    ("Aḥad", "Ahad", "Single"),
    ("Vahháb", "Vahhab", "Bountiful"),
    ("Vidád", "Vidad", "Affection"),
    ("Badí‘", "Badi", "Beginning"),
    ("Bahí", "Bahi", "Luminous"),
    ("Abhá", "Abha", "Most Luminous"),
    ("Váḥid", "Vahid", "Unity"),
];

type Names = (&'static str, &'static str, &'static str);

/// Looks up 1-based `num` in a name table.
///
/// # Panics
///
/// Panics if `num` is not in `1..=table.len()`.
fn entry<const N: usize>(table: &[Names; N], num: u32, what: &str) -> Names {
    match num as usize {
        i @ 1.. if i <= N => table[i - 1],
        _ => panic!("{} {} not in 1..={}", what, num, N),
    }
}

fn month_entry(m: Month) -> Names {
    match m {
        Month::Ordinary(num) => entry(&MONTHS, num, "month"),
        Month::AyyamIHa => AYYAM_I_HA,
    }
}

/// Returns the transliterated month name.
///
/// # Example
///
/// ```
/// use badi_date::Month::*;
/// use badi_date::badi::fmt;
///
/// assert_eq!("‘Aẓamat", fmt::month(Ordinary(4)));
/// assert_eq!("Ayyám-i-Há", fmt::month(AyyamIHa));
/// ```
///
/// # Panics
///
/// Panics if an ordinary month number is not in `1..=19`.
pub fn month(m: Month) -> &'static str {
    month_entry(m).0
}

/// Returns the month name in plain ASCII.
///
/// ```
/// use badi_date::Month::*;
/// use badi_date::badi::fmt;
///
/// assert_eq!("Azamat", fmt::month_plain(Ordinary(4)));
/// ```
pub fn month_plain(m: Month) -> &'static str {
    month_entry(m).1
}

/// Returns the English meaning of the month name.
pub fn month_translation(m: Month) -> &'static str {
    month_entry(m).2
}

/// Returns the transliterated weekday name, `1` being Saturday.
///
/// ```
/// use badi_date::badi::fmt;
///
/// assert_eq!("Jalál", fmt::weekday(1));
/// assert_eq!("Istiqlál", fmt::weekday(7));
/// ```
///
/// # Panics
///
/// Panics if `num` is not in `1..=7`.
pub fn weekday(num: u32) -> &'static str {
    entry(&WEEKDAYS, num, "weekday").0
}

/// Returns the weekday name in plain ASCII.
pub fn weekday_plain(num: u32) -> &'static str {
    entry(&WEEKDAYS, num, "weekday").1
}

/// Returns the English meaning of the weekday name.
pub fn weekday_translation(num: u32) -> &'static str {
    entry(&WEEKDAYS, num, "weekday").2
}

/// Returns the name of the `num`-th year of a Váḥid.
///
/// ```
/// use badi_date::badi::fmt;
///
/// assert_eq!("Alif", fmt::year(1));
/// assert_eq!("Váḥid", fmt::year(19));
/// ```
///
/// # Panics
///
/// Panics if `num` is not in `1..=19`.
pub fn year(num: u32) -> &'static str {
    entry(&YEARS, num, "year").0
}

/// Returns the year name in plain ASCII.
pub fn year_plain(num: u32) -> &'static str {
    entry(&YEARS, num, "year").1
}

/// Returns the English meaning of the year name.
pub fn year_translation(num: u32) -> &'static str {
    entry(&YEARS, num, "year").2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month() {
        for (std, m) in [
            ("Bahá", Month::Ordinary(1)),
            ("Mulk", Month::Ordinary(18)),
            ("‘Alá’", Month::Ordinary(19)),
            ("Ayyám-i-Há", Month::AyyamIHa),
        ] {
            assert_eq!(std, month(m));
        }
        assert_eq!("Sovereignty", month_translation(Month::Ordinary(17)));
    }

    #[test]
    #[should_panic(expected = "month 20 not in 1..=19")]
    fn test_month_out_of_range() {
        month(Month::Ordinary(20));
    }

    #[test]
    #[should_panic(expected = "weekday 0 not in 1..=7")]
    fn test_weekday_zero() {
        weekday(0);
    }

    #[test]
    #[should_panic(expected = "year 20 not in 1..=19")]
    fn test_year_out_of_range() {
        year_translation(20);
    }

    #[test]
    fn test_year() {
        assert_eq!(("Hubb", "Love"), (year_plain(10), year_translation(10)));
    }
}
