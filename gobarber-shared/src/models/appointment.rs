use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The client who booked an appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentUser {
    /// Client display name.
    pub name: String,

    /// Public URL of the client's avatar.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A scheduled appointment as returned by `GET /appointments/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    /// Unique identifier of the appointment.
    pub id: Uuid,

    /// Provider the appointment was booked with.
    pub provider_id: Uuid,

    /// Start of the appointment.
    pub date: DateTime<Utc>,

    /// Client who booked it.
    pub user: AppointmentUser,
}

/// Query string of `GET /appointments/me`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DayAppointmentsQuery {
    /// Calendar year.
    pub year: i32,
    /// Month, 1-based.
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
}

impl From<NaiveDate> for DayAppointmentsQuery {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}
