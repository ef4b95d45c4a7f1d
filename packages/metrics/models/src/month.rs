//! Calendar months and the localized vocabulary used to name them.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A calendar month. The discriminant is the zero-based column index used by
/// the historical grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Month {
    January = 0,
    February = 1,
    March = 2,
    April = 3,
    May = 4,
    June = 5,
    July = 6,
    August = 7,
    September = 8,
    October = 9,
    November = 10,
    December = 11,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Zero-based index (January = 0).
    #[must_use]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// One-based calendar number (January = 1).
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Month for a zero-based index.
    #[must_use]
    pub const fn from_index(index: u32) -> Option<Self> {
        if index < 12 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Month for a one-based calendar number.
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            0 => None,
            n => Self::from_index(n - 1),
        }
    }
}

/// Language of the month labels.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MonthLocale {
    English,
    /// Locale of the published hotspot tables.
    #[default]
    Portuguese,
}

const ENGLISH: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const PORTUGUESE: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// An ordered, immutable table of twelve lowercase month labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthVocabulary {
    locale: MonthLocale,
    names: &'static [&'static str; 12],
}

impl MonthVocabulary {
    /// Vocabulary for `locale`.
    #[must_use]
    pub fn new(locale: MonthLocale) -> Self {
        let names = match locale {
            MonthLocale::English => &ENGLISH,
            MonthLocale::Portuguese => &PORTUGUESE,
        };
        Self { locale, names }
    }

    /// The locale this vocabulary was built for.
    #[must_use]
    pub const fn locale(&self) -> MonthLocale {
        self.locale
    }

    /// Lowercase label of `month`.
    #[must_use]
    pub const fn name(&self, month: Month) -> &'static str {
        self.names[month.index() as usize]
    }

    /// Resolves a label case-insensitively. Surrounding whitespace is
    /// ignored; anything outside the vocabulary yields `None`.
    #[must_use]
    pub fn resolve(&self, label: &str) -> Option<Month> {
        let label = label.trim().to_lowercase();
        (0..)
            .zip(self.names.iter())
            .find(|(_, name)| **name == label)
            .and_then(|(index, _)| Month::from_index(index))
    }
}

impl Default for MonthVocabulary {
    fn default() -> Self {
        Self::new(MonthLocale::default())
    }
}
