//! Derived state of the provider dashboard: appointment buckets, disabled
//! calendar days, labels, and the month grid the calendar renders.

/// Month grid of the dashboard calendar.
pub mod calendar;
mod labels;
mod memo;
mod sequence;
mod view_model;

pub use calendar::{CalendarDay, CalendarWeek, GridInputs, WeekendPolicy, month_grid};
pub use labels::DateLocale;
pub use memo::Memo;
pub use sequence::{LatestRequest, Ticket};
pub use view_model::{
    AFTERNOON_STARTS_AT, AppointmentView, DashboardViewModel, DayPeriod, PartitionedAppointments,
    disabled_dates, next_appointment, partition_by_period,
};
