use chrono::{Datelike, Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Full pt-BR weekday names, Sunday first. chrono's `pt_BR` `%A` drops the
/// `-feira` suffix.
const PT_BR_WEEKDAYS: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

/// Locale of the date labels shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateLocale {
    /// Brazilian Portuguese, the product's native locale.
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// English.
    #[serde(rename = "en")]
    En,
}

impl DateLocale {
    /// Parses a language tag such as `pt-BR`, `pt` or `en-US`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "pt" => Some(Self::PtBr),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Language tag matching the translation files.
    pub fn tag(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::En => "en",
        }
    }

    fn chrono_locale(self) -> Locale {
        match self {
            Self::PtBr => Locale::pt_BR,
            Self::En => Locale::en_US,
        }
    }

    fn format(self, date: NaiveDate, pattern: &str) -> String {
        Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
            .format_localized(pattern, self.chrono_locale())
            .to_string()
    }

    /// Heading of the selected day, `Dia 05 de março` / `Day 05 of March`.
    pub fn selected_date_label(self, date: NaiveDate) -> String {
        match self {
            Self::PtBr => self.format(date, "Dia %d de %B"),
            Self::En => self.format(date, "Day %d of %B"),
        }
    }

    /// Full weekday name of `date`, `terça-feira` / `Tuesday`.
    pub fn weekday_label(self, date: NaiveDate) -> String {
        match self {
            Self::PtBr => {
                PT_BR_WEEKDAYS[date.weekday().num_days_from_sunday() as usize].to_string()
            }
            Self::En => self.format(date, "%A"),
        }
    }

    /// Calendar caption of the month containing `date`, `Março 2024`.
    pub fn month_title(self, date: NaiveDate) -> String {
        capitalize(&self.format(date, "%B %Y"))
    }

    /// One-letter weekday headers, Sunday first.
    pub fn weekday_initials(self) -> [&'static str; 7] {
        match self {
            Self::PtBr => ["D", "S", "T", "Q", "Q", "S", "S"],
            Self::En => ["S", "M", "T", "W", "T", "F", "S"],
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
