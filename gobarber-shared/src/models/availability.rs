use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Availability flag of one day of a provider's month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MonthAvailabilityItem {
    /// Day of month, 1-based.
    pub day: u32,
    /// Whether the provider still accepts appointments that day.
    pub available: bool,
}

/// Query string of `GET /providers/{id}/month-availability`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MonthAvailabilityQuery {
    /// Calendar year.
    pub year: i32,
    /// Month, 1-based.
    pub month: u32,
}

impl From<NaiveDate> for MonthAvailabilityQuery {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}
