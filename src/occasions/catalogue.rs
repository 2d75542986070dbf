//! Display data of every occasion, in the declaration order of [`OccasionId`].

use super::{Occasion, OccasionId, OccasionKind};

pub(super) static CATALOGUE: [Occasion; 63] = [
    Occasion {
        id: OccasionId::AyyamIHa1,
        kind: OccasionKind::AyyamIHa,
        work_suspended: false,
        title: "First day of Ayyam-i-Ha (Intercalery Days)",
        short_title: "1st day of Ayyam-i-Ha",
        title_html: "First day of Ayyám-i-Há (Intercalery Days)",
        short_title_html: "1<sup>st</sup> day of Ayyám-i-Há",
    },
    Occasion {
        id: OccasionId::AyyamIHa2,
        kind: OccasionKind::AyyamIHa,
        work_suspended: false,
        title: "Second day of Ayyam-i-Ha (Intercalery Days)",
        short_title: "2nd day of Ayyam-i-Ha",
        title_html: "Second day of Ayyám-i-Há (Intercalery Days)",
        short_title_html: "2<sup>nd</sup> day of Ayyám-i-Há",
    },
    Occasion {
        id: OccasionId::AyyamIHa3,
        kind: OccasionKind::AyyamIHa,
        work_suspended: false,
        title: "Third day of Ayyam-i-Ha (Intercalery Days)",
        short_title: "3rd day of Ayyam-i-Ha",
        title_html: "Third day of Ayyám-i-Há (Intercalery Days)",
        short_title_html: "3<sup>rd</sup> day of Ayyám-i-Há",
    },
    Occasion {
        id: OccasionId::AyyamIHa4,
        kind: OccasionKind::AyyamIHa,
        work_suspended: false,
        title: "Fourth day of Ayyam-i-Ha (Intercalery Days)",
        short_title: "4th day of Ayyam-i-Ha",
        title_html: "Fourth day of Ayyám-i-Há (Intercalery Days)",
        short_title_html: "4<sup>th</sup> day of Ayyám-i-Há",
    },
    Occasion {
        id: OccasionId::AyyamIHa5,
        kind: OccasionKind::AyyamIHa,
        work_suspended: false,
        title: "Fifth day of Ayyam-i-Ha (Intercalery Days)",
        short_title: "5th day of Ayyam-i-Ha",
        title_html: "Fifth day of Ayyám-i-Há (Intercalery Days)",
        short_title_html: "5<sup>th</sup> day of Ayyám-i-Há",
    },
    Occasion {
        id: OccasionId::Fasting1,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "First day of the period of Fasting",
        short_title: "1st day of Fasting",
        title_html: "First day of the period of Fasting",
        short_title_html: "1<sup>st</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting2,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Second day of the period of Fasting",
        short_title: "2nd day of Fasting",
        title_html: "Second day of the period of Fasting",
        short_title_html: "2<sup>nd</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting3,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Third day of the period of Fasting",
        short_title: "3rd day of Fasting",
        title_html: "Third day of the period of Fasting",
        short_title_html: "3<sup>rd</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting4,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Fourth day of the period of Fasting",
        short_title: "4th day of Fasting",
        title_html: "Fourth day of the period of Fasting",
        short_title_html: "4<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting5,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Fifth day of the period of Fasting",
        short_title: "5th day of Fasting",
        title_html: "Fifth day of the period of Fasting",
        short_title_html: "5<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting6,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Sixth day of the period of Fasting",
        short_title: "6th day of Fasting",
        title_html: "Sixth day of the period of Fasting",
        short_title_html: "6<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting7,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Seventh day of the period of Fasting",
        short_title: "7th day of Fasting",
        title_html: "Seventh day of the period of Fasting",
        short_title_html: "7<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting8,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Eighth day of the period of Fasting",
        short_title: "8th day of Fasting",
        title_html: "Eighth day of the period of Fasting",
        short_title_html: "8<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting9,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Ninth day of the period of Fasting",
        short_title: "9th day of Fasting",
        title_html: "Ninth day of the period of Fasting",
        short_title_html: "9<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting10,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Tenth day of the period of Fasting",
        short_title: "10th day of Fasting",
        title_html: "Tenth day of the period of Fasting",
        short_title_html: "10<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting11,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Eleventh day of the period of Fasting",
        short_title: "11th day of Fasting",
        title_html: "Eleventh day of the period of Fasting",
        short_title_html: "11<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting12,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Twelfth day of the period of Fasting",
        short_title: "12th day of Fasting",
        title_html: "Twelfth day of the period of Fasting",
        short_title_html: "12<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting13,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Thirteenth day of the period of Fasting",
        short_title: "13th day of Fasting",
        title_html: "Thirteenth day of the period of Fasting",
        short_title_html: "13<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting14,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Fourteenth day of the period of Fasting",
        short_title: "14th day of Fasting",
        title_html: "Fourteenth day of the period of Fasting",
        short_title_html: "14<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting15,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Fifteenth day of the period of Fasting",
        short_title: "15th day of Fasting",
        title_html: "Fifteenth day of the period of Fasting",
        short_title_html: "15<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting16,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Sixteenth day of the period of Fasting",
        short_title: "16th day of Fasting",
        title_html: "Sixteenth day of the period of Fasting",
        short_title_html: "16<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting17,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Seventeenth day of the period of Fasting",
        short_title: "17th day of Fasting",
        title_html: "Seventeenth day of the period of Fasting",
        short_title_html: "17<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting18,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Eighteenth day of the period of Fasting",
        short_title: "18th day of Fasting",
        title_html: "Eighteenth day of the period of Fasting",
        short_title_html: "18<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Fasting19,
        kind: OccasionKind::Fasting,
        work_suspended: false,
        title: "Nineteenth day of the period of Fasting",
        short_title: "19th day of Fasting",
        title_html: "Nineteenth day of the period of Fasting",
        short_title_html: "19<sup>th</sup> day of Fasting",
    },
    Occasion {
        id: OccasionId::Feast1,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Baha (Splendour)",
        short_title: "Feast of Baha",
        title_html: "Nineteen Day Feast of the month of Bahá (Splendour)",
        short_title_html: "Feast of Bahá",
    },
    Occasion {
        id: OccasionId::Feast2,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Jalal (Glory)",
        short_title: "Feast of Jalal",
        title_html: "Nineteen Day Feast of the month of Jalál (Glory)",
        short_title_html: "Feast of Jalál",
    },
    Occasion {
        id: OccasionId::Feast3,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Jamal (Beauty)",
        short_title: "Feast of Jamal",
        title_html: "Nineteen Day Feast of the month of Jamál (Beauty)",
        short_title_html: "Feast of Jamál",
    },
    Occasion {
        id: OccasionId::Feast4,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Azamat (Grandeur)",
        short_title: "Feast of Azamat",
        title_html: "Nineteen Day Feast of the month of ‘Aẓamat (Grandeur)",
        short_title_html: "Feast of ‘Aẓamat",
    },
    Occasion {
        id: OccasionId::Feast5,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Nur (Light)",
        short_title: "Feast of Nur",
        title_html: "Nineteen Day Feast of the month of Núr (Light)",
        short_title_html: "Feast of Núr",
    },
    Occasion {
        id: OccasionId::Feast6,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Rahmat (Mercy)",
        short_title: "Feast of Rahmat",
        title_html: "Nineteen Day Feast of the month of Raḥmat (Mercy)",
        short_title_html: "Feast of Raḥmat",
    },
    Occasion {
        id: OccasionId::Feast7,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Kalimat (Words)",
        short_title: "Feast of Kalimat",
        title_html: "Nineteen Day Feast of the month of Kalimát (Words)",
        short_title_html: "Feast of Kalimát",
    },
    Occasion {
        id: OccasionId::Feast8,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Kamal (Perfection)",
        short_title: "Feast of Kamal",
        title_html: "Nineteen Day Feast of the month of Kamál (Perfection)",
        short_title_html: "Feast of Kamál",
    },
    Occasion {
        id: OccasionId::Feast9,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Asma (Names)",
        short_title: "Feast of Asma",
        title_html: "Nineteen Day Feast of the month of Asmá’ (Names)",
        short_title_html: "Feast of Asmá’",
    },
    Occasion {
        id: OccasionId::Feast10,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Izzat (Might)",
        short_title: "Feast of Izzat",
        title_html: "Nineteen Day Feast of the month of ‘Izzat (Might)",
        short_title_html: "Feast of ‘Izzat",
    },
    Occasion {
        id: OccasionId::Feast11,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Mashiyyat (Will)",
        short_title: "Feast of Mashiyyat",
        title_html: "Nineteen Day Feast of the month of Ma<u>sh</u>íyyat (Will)",
        short_title_html: "Feast of Ma<u>sh</u>íyyat",
    },
    Occasion {
        id: OccasionId::Feast12,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Ilm (Knowledge)",
        short_title: "Feast of Ilm",
        title_html: "Nineteen Day Feast of the month of ‘Ilm (Knowledge)",
        short_title_html: "Feast of ‘Ilm",
    },
    Occasion {
        id: OccasionId::Feast13,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Qudrat (Power)",
        short_title: "Feast of Qudrat",
        title_html: "Nineteen Day Feast of the month of Qudrat (Power)",
        short_title_html: "Feast of Qudrat",
    },
    Occasion {
        id: OccasionId::Feast14,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Qawl (Speech)",
        short_title: "Feast of Qawl",
        title_html: "Nineteen Day Feast of the month of Qawl (Speech)",
        short_title_html: "Feast of Qawl",
    },
    Occasion {
        id: OccasionId::Feast15,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Masail (Questions)",
        short_title: "Feast of Masail",
        title_html: "Nineteen Day Feast of the month of Masá’il (Questions)",
        short_title_html: "Feast of Masá’il",
    },
    Occasion {
        id: OccasionId::Feast16,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Sharaf (Honour)",
        short_title: "Feast of Sharaf",
        title_html: "Nineteen Day Feast of the month of <u>Sh</u>araf (Honour)",
        short_title_html: "Feast of <u>Sh</u>araf",
    },
    Occasion {
        id: OccasionId::Feast17,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Sultan (Sovereignty)",
        short_title: "Feast of Sultan",
        title_html: "Nineteen Day Feast of the month of Sulṭán (Sovereignty)",
        short_title_html: "Feast of Sulṭán",
    },
    Occasion {
        id: OccasionId::Feast18,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Mulk (Dominion)",
        short_title: "Feast of Mulk",
        title_html: "Nineteen Day Feast of the month of Mulk (Dominion)",
        short_title_html: "Feast of Mulk",
    },
    Occasion {
        id: OccasionId::Feast19,
        kind: OccasionKind::Feast,
        work_suspended: false,
        title: "Nineteen Day Feast of the month of Ala (Loftiness)",
        short_title: "Feast of Ala",
        title_html: "Nineteen Day Feast of the month of ‘Alá’ (Loftiness)",
        short_title_html: "Feast of ‘Alá’",
    },
    Occasion {
        id: OccasionId::Ridvan1,
        kind: OccasionKind::Holy,
        work_suspended: true,
        title: "First day of the Festival of Ridvan",
        short_title: "1st day of Ridvan",
        title_html: "First day of the Festival of Riḍván",
        short_title_html: "1<sup>st</sup> day of Riḍván",
    },
    Occasion {
        id: OccasionId::Ridvan2,
        kind: OccasionKind::Ridvan,
        work_suspended: false,
        title: "Second day of the Festival of Ridvan",
        short_title: "2nd day of Ridvan",
        title_html: "Second day of the Festival of Riḍván",
        short_title_html: "2<sup>nd</sup> day of Riḍván",
    },
    Occasion {
        id: OccasionId::Ridvan3,
        kind: OccasionKind::Ridvan,
        work_suspended: false,
        title: "Third day of the Festival of Ridvan",
        short_title: "3rd day of Ridvan",
        title_html: "Third day of the Festival of Riḍván",
        short_title_html: "3<sup>rd</sup> day of Riḍván",
    },
    Occasion {
        id: OccasionId::Ridvan4,
        kind: OccasionKind::Ridvan,
        work_suspended: false,
        title: "Fourth day of the Festival of Ridvan",
        short_title: "4th day of Ridvan",
        title_html: "Fourth day of the Festival of Riḍván",
        short_title_html: "4<sup>th</sup> day of Riḍván",
    },
    Occasion {
        id: OccasionId::Ridvan5,
        kind: OccasionKind::Ridvan,
        work_suspended: false,
        title: "Fifth day of the Festival of Ridvan",
        short_title: "5th day of Ridvan",
        title_html: "Fifth day of the Festival of Riḍván",
        short_title_html: "5<sup>th</sup> day of Riḍván",
    },
    Occasion {
        id: OccasionId::Ridvan6,
        kind: OccasionKind::Ridvan,
        work_suspended: false,
        title: "Sixth day of the Festival of Ridvan",
        short_title: "6th day of Ridvan",
        title_html: "Sixth day of the Festival of Riḍván",
        short_title_html: "6<sup>th</sup> day of Riḍván",
    },
    Occasion {
        id: OccasionId::Ridvan7,
        kind: OccasionKind::Ridvan,
        work_suspended: false,
        title: "Seventh day of the Festival of Ridvan",
        short_title: "7th day of Ridvan",
        title_html: "Seventh day of the Festival of Riḍván",
        short_title_html: "7<sup>th</sup> day of Riḍván",
    },
    Occasion {
        id: OccasionId::Ridvan8,
        kind: OccasionKind::Ridvan,
        work_suspended: false,
        title: "Eighth day of the Festival of Ridvan",
        short_title: "8th day of Ridvan",
        title_html: "Eighth day of the Festival of Riḍván",
        short_title_html: "8<sup>th</sup> day of Riḍván",
    },
    Occasion {
        id: OccasionId::Ridvan9,
        kind: OccasionKind::Holy,
        work_suspended: true,
        title: "Ninth day of the Festival of Ridvan",
        short_title: "9th day of Ridvan",
        title_html: "Ninth day of the Festival of Riḍván",
        short_title_html: "9<sup>th</sup> day of Riḍván",
    },
    Occasion {
        id: OccasionId::Ridvan10,
        kind: OccasionKind::Ridvan,
        work_suspended: false,
        title: "Tenth day of the Festival of Ridvan",
        short_title: "10th day of Ridvan",
        title_html: "Tenth day of the Festival of Riḍván",
        short_title_html: "10<sup>th</sup> day of Riḍván",
    },
    Occasion {
        id: OccasionId::Ridvan11,
        kind: OccasionKind::Ridvan,
        work_suspended: false,
        title: "Eleventh day of the Festival of Ridvan",
        short_title: "11th day of Ridvan",
        title_html: "Eleventh day of the Festival of Riḍván",
        short_title_html: "11<sup>th</sup> day of Riḍván",
    },
    Occasion {
        id: OccasionId::Ridvan12,
        kind: OccasionKind::Holy,
        work_suspended: true,
        title: "Twelfth day of the Festival of Ridvan",
        short_title: "12th day of Ridvan",
        title_html: "Twelfth day of the Festival of Riḍván",
        short_title_html: "12<sup>th</sup> day of Riḍván",
    },
    Occasion {
        id: OccasionId::Nawruz,
        kind: OccasionKind::Holy,
        work_suspended: true,
        title: "Naw-Ruz (New Year)",
        short_title: "Naw-Ruz",
        title_html: "Naw-Rúz (New Year)",
        short_title_html: "Naw-Rúz",
    },
    Occasion {
        id: OccasionId::DeclarationBab,
        kind: OccasionKind::Holy,
        work_suspended: true,
        title: "Declaration of the Bab",
        short_title: "Declaration of the Bab",
        title_html: "Declaration of the Báb",
        short_title_html: "Declaration of the Báb",
    },
    Occasion {
        id: OccasionId::AscensionBahaullah,
        kind: OccasionKind::Holy,
        work_suspended: true,
        title: "Ascension of Baha'u'llah",
        short_title: "Ascension of Baha'u'llah",
        title_html: "Ascension of Bahá’u’lláh",
        short_title_html: "Ascension of Bahá’u’lláh",
    },
    Occasion {
        id: OccasionId::MartyrdomBab,
        kind: OccasionKind::Holy,
        work_suspended: true,
        title: "Martyrdom of the Bab",
        short_title: "Martyrdom of the Bab",
        title_html: "Martyrdom of the Báb",
        short_title_html: "Martyrdom of the Báb",
    },
    Occasion {
        id: OccasionId::BirthBab,
        kind: OccasionKind::Holy,
        work_suspended: true,
        title: "Anniversary of the Birth of the Bab",
        short_title: "Birth of the Bab",
        title_html: "Anniversary of the Birth of the Báb",
        short_title_html: "Birth of the Báb",
    },
    Occasion {
        id: OccasionId::BirthBahaullah,
        kind: OccasionKind::Holy,
        work_suspended: true,
        title: "Anniversary of the Birth of Baha'u'llah",
        short_title: "Birth of Baha'u'llah",
        title_html: "Anniversary of the Birth of Bahá’u’lláh",
        short_title_html: "Birth of Bahá’u’lláh",
    },
    Occasion {
        id: OccasionId::Covenant,
        kind: OccasionKind::Holy,
        work_suspended: false,
        title: "Day of the Covenant",
        short_title: "Day of the Covenant",
        title_html: "Day of the Covenant",
        short_title_html: "Day of the Covenant",
    },
    Occasion {
        id: OccasionId::AscensionAbdulbaha,
        kind: OccasionKind::Holy,
        work_suspended: false,
        title: "Ascension of Abdu'l-Baha",
        short_title: "Ascension of Abdu'l-Baha",
        title_html: "Ascension of ‘Abdu’l-Bahá",
        short_title_html: "Ascension of ‘Abdu’l-Bahá",
    },
];
