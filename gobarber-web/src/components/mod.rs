pub(crate) mod appointment_item;
pub(crate) mod avatar;
pub(crate) mod button;
pub(crate) mod calendar;
pub(crate) mod language_selector;
pub(crate) mod user_dropdown;

pub use appointment_item::AppointmentItem;
pub use button::Button;
pub use calendar::Calendar;
