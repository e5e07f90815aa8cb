use std::fmt::Display;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

use super::calendar::first_of_month;
use super::labels::DateLocale;
use super::memo::Memo;
use crate::models::{
    Appointment, DayAppointmentsQuery, MonthAvailabilityItem, MonthAvailabilityQuery,
};

/// Appointments before this local hour belong to the morning.
pub const AFTERNOON_STARTS_AT: u32 = 12;

/// Half of the day an appointment falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// Local hour below 12.
    Morning,
    /// Local hour 12 or later.
    Afternoon,
}

impl DayPeriod {
    /// Period of a local hour.
    pub fn of_hour(hour: u32) -> Self {
        if hour < AFTERNOON_STARTS_AT {
            Self::Morning
        } else {
            Self::Afternoon
        }
    }
}

/// An appointment together with its presentation in the viewer's time zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentView {
    /// The appointment as fetched.
    pub appointment: Appointment,
    /// Local start time, `HH:mm`.
    pub hour_formatted: String,
    /// Local half of the day.
    pub period: DayPeriod,
}

impl AppointmentView {
    /// Projects `appointment` into `tz`.
    pub fn new<Tz>(appointment: &Appointment, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let local = appointment.date.with_timezone(tz);
        Self {
            appointment: appointment.clone(),
            hour_formatted: local.format("%H:%M").to_string(),
            period: DayPeriod::of_hour(local.hour()),
        }
    }
}

/// Appointments of a day split into morning and afternoon, input order kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedAppointments {
    /// Appointments starting before noon.
    pub morning: Vec<AppointmentView>,
    /// Appointments starting at noon or later.
    pub afternoon: Vec<AppointmentView>,
}

/// One date per unavailable day of `month`, built from the month's year and
/// month and the item's day. Days the month does not have are skipped.
pub fn disabled_dates(month: NaiveDate, availability: &[MonthAvailabilityItem]) -> Vec<NaiveDate> {
    availability
        .iter()
        .filter(|item| !item.available)
        .filter_map(|item| NaiveDate::from_ymd_opt(month.year(), month.month(), item.day))
        .collect()
}

/// Splits `appointments` by the local hour of their start in `tz`.
pub fn partition_by_period<Tz>(appointments: &[Appointment], tz: &Tz) -> PartitionedAppointments
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut partitioned = PartitionedAppointments::default();
    for view in appointments.iter().map(|a| AppointmentView::new(a, tz)) {
        match view.period {
            DayPeriod::Morning => partitioned.morning.push(view),
            DayPeriod::Afternoon => partitioned.afternoon.push(view),
        }
    }
    partitioned
}

/// First appointment, in input order, starting strictly after `now`.
pub fn next_appointment(appointments: &[Appointment], now: DateTime<Utc>) -> Option<&Appointment> {
    appointments.iter().find(|appointment| appointment.date > now)
}

/// Derived state of the provider dashboard.
///
/// Inputs are replaced wholesale through the setters; every derived value is
/// cached in a [`Memo`] keyed by exactly the inputs it reads, so it is
/// recomputed after a relevant change and never otherwise.
#[derive(Debug)]
pub struct DashboardViewModel<Tz: TimeZone> {
    tz: Tz,
    locale: DateLocale,
    viewed_month: NaiveDate,
    selected_date: NaiveDate,
    appointments: Vec<Appointment>,
    appointments_rev: u64,
    availability: Vec<MonthAvailabilityItem>,
    availability_rev: u64,
    disabled: Memo<(NaiveDate, u64), Vec<NaiveDate>>,
    periods: Memo<u64, PartitionedAppointments>,
    next: Memo<(u64, DateTime<Utc>), Option<AppointmentView>>,
    date_label: Memo<(NaiveDate, DateLocale), String>,
    weekday_label: Memo<(NaiveDate, DateLocale), String>,
}

impl<Tz> DashboardViewModel<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    /// Starts on `today`, viewing its month, with nothing fetched yet.
    pub fn new(tz: Tz, locale: DateLocale, today: NaiveDate) -> Self {
        Self {
            tz,
            locale,
            viewed_month: first_of_month(today),
            selected_date: today,
            appointments: Vec::new(),
            appointments_rev: 0,
            availability: Vec::new(),
            availability_rev: 0,
            disabled: Memo::new(),
            periods: Memo::new(),
            next: Memo::new(),
            date_label: Memo::new(),
            weekday_label: Memo::new(),
        }
    }

    /// First day of the month shown by the calendar.
    pub fn viewed_month(&self) -> NaiveDate {
        self.viewed_month
    }

    /// Day whose appointments are listed.
    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Query of the availability fetch for the viewed month.
    pub fn month_query(&self) -> MonthAvailabilityQuery {
        MonthAvailabilityQuery::from(self.viewed_month)
    }

    /// Query of the appointments fetch for the selected day.
    pub fn day_query(&self) -> DayAppointmentsQuery {
        DayAppointmentsQuery::from(self.selected_date)
    }

    /// Switches the label locale.
    pub fn set_locale(&mut self, locale: DateLocale) {
        self.locale = locale;
    }

    /// Shows another month. The availability of the previous month is
    /// discarded; returns whether the month changed.
    pub fn set_viewed_month(&mut self, date: NaiveDate) -> bool {
        let month = first_of_month(date);
        if month == self.viewed_month {
            return false;
        }
        self.viewed_month = month;
        self.replace_availability(Vec::new());
        true
    }

    /// Selects another day. The appointments of the previous day are
    /// discarded; returns whether the selection changed.
    pub fn set_selected_date(&mut self, date: NaiveDate) -> bool {
        if date == self.selected_date {
            return false;
        }
        self.selected_date = date;
        self.replace_appointments(Vec::new());
        true
    }

    /// Applies a completed appointments fetch issued for `query`.
    ///
    /// A response for a day that is no longer selected is dropped, even when
    /// it arrives before the fetch of the new day was issued. Returns whether
    /// the appointments were replaced.
    pub fn load_appointments(
        &mut self,
        query: DayAppointmentsQuery,
        appointments: Vec<Appointment>,
    ) -> bool {
        if query != self.day_query() {
            tracing::debug!(?query, "dropping appointments of a deselected day");
            return false;
        }
        self.replace_appointments(appointments);
        true
    }

    /// Applies a completed availability fetch issued for `query`; a response
    /// for a month no longer viewed is dropped. Returns whether the
    /// availability was replaced.
    pub fn load_availability(
        &mut self,
        query: MonthAvailabilityQuery,
        availability: Vec<MonthAvailabilityItem>,
    ) -> bool {
        if query != self.month_query() {
            tracing::debug!(?query, "dropping availability of a month no longer viewed");
            return false;
        }
        self.replace_availability(availability);
        true
    }

    fn replace_appointments(&mut self, appointments: Vec<Appointment>) {
        self.appointments = appointments;
        self.appointments_rev += 1;
    }

    fn replace_availability(&mut self, availability: Vec<MonthAvailabilityItem>) {
        self.availability = availability;
        self.availability_rev += 1;
    }

    /// Dates of the viewed month the provider does not work.
    pub fn disabled_dates(&mut self) -> &[NaiveDate] {
        let availability = &self.availability;
        self.disabled.get_or_compute(
            (self.viewed_month, self.availability_rev),
            |(month, _)| disabled_dates(*month, availability),
        )
    }

    /// Morning and afternoon buckets of the selected day.
    pub fn periods(&mut self) -> &PartitionedAppointments {
        let appointments = &self.appointments;
        let tz = &self.tz;
        self.periods
            .get_or_compute(self.appointments_rev, |_| partition_by_period(appointments, tz))
    }

    /// Appointments starting before noon.
    pub fn morning_appointments(&mut self) -> &[AppointmentView] {
        &self.periods().morning
    }

    /// Appointments starting at noon or later.
    pub fn afternoon_appointments(&mut self) -> &[AppointmentView] {
        &self.periods().afternoon
    }

    /// First appointment starting after `now`.
    pub fn next_appointment(&mut self, now: DateTime<Utc>) -> Option<&AppointmentView> {
        let appointments = &self.appointments;
        let tz = &self.tz;
        self.next
            .get_or_compute((self.appointments_rev, now), |(_, now)| {
                next_appointment(appointments, *now).map(|a| AppointmentView::new(a, tz))
            })
            .as_ref()
    }

    /// `Dia 05 de março` for the selected date.
    pub fn selected_date_label(&mut self) -> &str {
        self.date_label
            .get_or_compute((self.selected_date, self.locale), |(date, locale)| {
                locale.selected_date_label(*date)
            })
    }

    /// `terça-feira` for the selected date.
    pub fn selected_weekday_label(&mut self) -> &str {
        self.weekday_label
            .get_or_compute((self.selected_date, self.locale), |(date, locale)| {
                locale.weekday_label(*date)
            })
    }

    /// How many times the derived values have been computed, in the order
    /// disabled dates, periods, next appointment, date label, weekday label.
    pub fn computations(&self) -> [usize; 5] {
        [
            self.disabled.computations(),
            self.periods.computations(),
            self.next.computations(),
            self.date_label.computations(),
            self.weekday_label.computations(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentUser;
    use chrono::FixedOffset;
    use uuid::Uuid;

    fn appointment(hour: u32, minute: u32) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            provider_id: Uuid::nil(),
            date: Utc.with_ymd_and_hms(2024, 3, 5, hour, minute, 0).unwrap(),
            user: AppointmentUser {
                name: format!("Client {hour:02}:{minute:02}"),
                avatar_url: None,
            },
        }
    }

    fn item(day: u32, available: bool) -> MonthAvailabilityItem {
        MonthAvailabilityItem { day, available }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_disabled_dates_scenario() {
        let dates = disabled_dates(date(2024, 3, 1), &[item(5, false), item(6, true)]);
        assert_eq!(dates, vec![date(2024, 3, 5)]);
    }

    #[test]
    fn test_disabled_dates_one_per_unavailable_day() {
        let availability: Vec<_> = (1..=31).map(|day| item(day, day % 3 != 0)).collect();
        let dates = disabled_dates(date(2024, 3, 17), &availability);

        assert_eq!(dates.len(), 10);
        for d in &dates {
            assert_eq!((d.year(), d.month()), (2024, 3));
            assert_eq!(d.day() % 3, 0);
        }
    }

    #[test]
    fn test_disabled_dates_skip_days_outside_month() {
        let dates = disabled_dates(date(2024, 4, 1), &[item(30, false), item(31, false)]);
        assert_eq!(dates, vec![date(2024, 4, 30)]);
    }

    #[test]
    fn test_partition_boundary_and_order() {
        let input = vec![
            appointment(8, 0),
            appointment(11, 59),
            appointment(12, 0),
            appointment(9, 30),
            appointment(17, 0),
        ];
        let partitioned = partition_by_period(&input, &Utc);

        let hours = |views: &[AppointmentView]| {
            views
                .iter()
                .map(|v| v.hour_formatted.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(hours(&partitioned.morning), ["08:00", "11:59", "09:30"]);
        assert_eq!(hours(&partitioned.afternoon), ["12:00", "17:00"]);
    }

    #[test]
    fn test_partition_is_exact() {
        let input: Vec<_> = (0..24).map(|hour| appointment(hour, 15)).collect();
        let partitioned = partition_by_period(&input, &Utc);

        assert_eq!(partitioned.morning.len() + partitioned.afternoon.len(), input.len());
        for original in &input {
            let occurrences = partitioned
                .morning
                .iter()
                .chain(&partitioned.afternoon)
                .filter(|view| view.appointment.id == original.id)
                .count();
            assert_eq!(occurrences, 1);
        }
    }

    #[test]
    fn test_partition_uses_local_hour() {
        // 14:00 UTC is 11:00 in Brasília.
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
        let partitioned = partition_by_period(&[appointment(14, 0)], &brasilia);

        assert_eq!(partitioned.afternoon.len(), 0);
        assert_eq!(partitioned.morning[0].hour_formatted, "11:00");
    }

    #[test]
    fn test_next_appointment() {
        let input = vec![appointment(8, 0), appointment(10, 0), appointment(15, 0)];
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap();
        assert_eq!(next_appointment(&input, now), Some(&input[1]));

        // Strictly after: an appointment starting right now is not next.
        let at_ten = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        assert_eq!(next_appointment(&input, at_ten), Some(&input[2]));
    }

    #[test]
    fn test_next_appointment_absent() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 18, 0, 0).unwrap();
        assert_eq!(next_appointment(&[], now), None);
        assert_eq!(
            next_appointment(&[appointment(8, 0), appointment(15, 0)], now),
            None
        );
    }

    #[test]
    fn test_next_appointment_follows_input_order() {
        let input = vec![appointment(16, 0), appointment(10, 0)];
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap();
        assert_eq!(next_appointment(&input, now), Some(&input[0]));
    }

    #[test]
    fn test_view_model_recomputes_only_on_input_change() {
        let mut vm = DashboardViewModel::new(Utc, DateLocale::En, date(2024, 3, 5));
        vm.replace_availability(vec![item(5, false), item(6, true)]);
        vm.replace_appointments(vec![appointment(9, 0), appointment(14, 0)]);

        assert_eq!(vm.disabled_dates(), [date(2024, 3, 5)]);
        assert_eq!(vm.morning_appointments().len(), 1);
        assert_eq!(vm.afternoon_appointments().len(), 1);
        assert_eq!(vm.selected_date_label(), "Day 05 of March");
        assert_eq!(vm.selected_weekday_label(), "Tuesday");
        assert_eq!(vm.computations(), [1, 1, 0, 1, 1]);

        // Unrelated re-reads hit the caches.
        vm.disabled_dates();
        vm.morning_appointments();
        vm.selected_date_label();
        vm.selected_weekday_label();
        assert_eq!(vm.computations(), [1, 1, 0, 1, 1]);

        // New appointments only invalidate the appointment-derived values.
        vm.replace_appointments(vec![appointment(13, 0)]);
        assert!(vm.morning_appointments().is_empty());
        vm.disabled_dates();
        vm.selected_date_label();
        assert_eq!(vm.computations(), [1, 2, 0, 1, 1]);
    }

    #[test]
    fn test_view_model_next_appointment_cache() {
        let mut vm = DashboardViewModel::new(Utc, DateLocale::En, date(2024, 3, 5));
        vm.replace_appointments(vec![appointment(9, 0), appointment(14, 0)]);
        let morning = Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap();
        let noon = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();

        assert_eq!(vm.next_appointment(morning).unwrap().hour_formatted, "09:00");
        assert_eq!(vm.next_appointment(morning).unwrap().hour_formatted, "09:00");
        assert_eq!(vm.computations()[2], 1);

        assert_eq!(vm.next_appointment(noon).unwrap().hour_formatted, "14:00");
        assert_eq!(vm.computations()[2], 2);
    }

    #[test]
    fn test_changing_month_discards_availability() {
        let mut vm = DashboardViewModel::new(Utc, DateLocale::PtBr, date(2024, 3, 5));
        vm.replace_availability(vec![item(5, false)]);
        assert_eq!(vm.disabled_dates().len(), 1);

        assert!(!vm.set_viewed_month(date(2024, 3, 28)));
        assert!(vm.set_viewed_month(date(2024, 4, 10)));
        assert_eq!(vm.viewed_month(), date(2024, 4, 1));
        assert!(vm.disabled_dates().is_empty());
        assert_eq!(
            vm.month_query(),
            MonthAvailabilityQuery {
                year: 2024,
                month: 4
            }
        );
    }

    #[test]
    fn test_changing_selection_discards_appointments() {
        let mut vm = DashboardViewModel::new(Utc, DateLocale::En, date(2024, 3, 5));
        vm.replace_appointments(vec![appointment(9, 0)]);

        assert!(!vm.set_selected_date(date(2024, 3, 5)));
        assert!(vm.set_selected_date(date(2024, 3, 6)));
        assert!(vm.morning_appointments().is_empty());
        assert_eq!(vm.selected_weekday_label(), "Wednesday");
        assert_eq!(
            vm.day_query(),
            DayAppointmentsQuery {
                year: 2024,
                month: 3,
                day: 6
            }
        );
    }

    #[test]
    fn test_late_response_for_previous_day_is_dropped() {
        let mut vm = DashboardViewModel::new(Utc, DateLocale::En, date(2024, 3, 5));
        let fifth = vm.day_query();
        assert!(vm.set_selected_date(date(2024, 3, 6)));

        // The 5th's fetch resolves after the click, before the 6th's is issued.
        assert!(!vm.load_appointments(fifth, vec![appointment(9, 0)]));
        assert!(vm.morning_appointments().is_empty());
        assert!(vm.afternoon_appointments().is_empty());

        let sixth = vm.day_query();
        assert!(vm.load_appointments(sixth, vec![appointment(14, 0)]));
        assert_eq!(vm.afternoon_appointments().len(), 1);
    }

    #[test]
    fn test_late_response_for_previous_month_is_dropped() {
        let mut vm = DashboardViewModel::new(Utc, DateLocale::En, date(2024, 3, 5));
        let march = vm.month_query();
        assert!(vm.set_viewed_month(date(2024, 4, 1)));

        assert!(!vm.load_availability(march, vec![item(10, false)]));
        assert!(vm.disabled_dates().is_empty());

        let april = vm.month_query();
        assert!(vm.load_availability(april, vec![item(10, false)]));
        assert_eq!(vm.disabled_dates(), [date(2024, 4, 10)]);
    }

    #[test]
    fn test_locale_change_relabels() {
        let mut vm = DashboardViewModel::new(Utc, DateLocale::En, date(2024, 3, 5));
        assert_eq!(vm.selected_weekday_label(), "Tuesday");
        vm.set_locale(DateLocale::PtBr);
        assert_eq!(vm.selected_weekday_label(), "terça-feira");
    }
}
