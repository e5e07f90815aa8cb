//! Wire types of the GoBarber HTTP API.

/// Appointments of a provider's day.
pub mod appointment;
/// Per-day availability of a provider's month.
pub mod availability;
/// Error body of failed requests.
pub mod errors;
/// Accounts and sessions.
pub mod user;

pub use appointment::{Appointment, AppointmentUser, DayAppointmentsQuery};
pub use availability::{MonthAvailabilityItem, MonthAvailabilityQuery};
pub use errors::ErrorResponse;
pub use user::{SessionResponse, SignInRequest, SignUpRequest, UserSummary};
