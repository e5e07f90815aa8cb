use chrono::{Datelike, Months, NaiveDate, Weekday};

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days of the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

/// First day of the following month.
pub fn next_month(month: NaiveDate) -> NaiveDate {
    let first = first_of_month(month);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

/// First day of the preceding month.
pub fn previous_month(month: NaiveDate) -> NaiveDate {
    let first = first_of_month(month);
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

/// Whether the calendar may page back from `month`: never before the month of
/// `today`.
pub fn can_go_back(month: NaiveDate, today: NaiveDate) -> bool {
    first_of_month(month) > first_of_month(today)
}

/// Weekdays on which no appointment can be booked, regardless of the
/// provider's availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekendPolicy {
    closed: Vec<Weekday>,
}

impl Default for WeekendPolicy {
    fn default() -> Self {
        Self::new(vec![Weekday::Sun, Weekday::Sat])
    }
}

impl WeekendPolicy {
    /// Policy closing the given weekdays.
    pub fn new(closed: Vec<Weekday>) -> Self {
        Self { closed }
    }

    /// Whether `date` falls on a closed weekday.
    pub fn is_closed(&self, date: NaiveDate) -> bool {
        self.closed.contains(&date.weekday())
    }
}

/// One day cell of the month calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    /// The day.
    pub date: NaiveDate,
    /// The provider may work that weekday.
    pub available: bool,
    /// The day cannot be picked: unavailable or a closed weekday.
    pub disabled: bool,
    /// The day is the current selection.
    pub selected: bool,
    /// The day is today.
    pub today: bool,
}

impl CalendarDay {
    /// Whether clicking the day changes the selection.
    pub fn selectable(&self) -> bool {
        self.available && !self.disabled
    }
}

/// A week row, Sunday first; `None` pads days of adjacent months.
pub type CalendarWeek = [Option<CalendarDay>; 7];

/// Inputs of [`month_grid`].
#[derive(Debug, Clone, Copy)]
pub struct GridInputs<'a> {
    /// Any day of the month to lay out.
    pub month: NaiveDate,
    /// Current selection.
    pub selected: NaiveDate,
    /// Today in the viewer's time zone.
    pub today: NaiveDate,
    /// Dates the provider marked unavailable.
    pub disabled_dates: &'a [NaiveDate],
    /// Closed weekdays.
    pub policy: &'a WeekendPolicy,
}

/// Lays out the month as Sunday-first weeks.
pub fn month_grid(inputs: &GridInputs<'_>) -> Vec<CalendarWeek> {
    let first = first_of_month(inputs.month);
    let mut weeks = Vec::new();
    let mut week: CalendarWeek = [None; 7];

    for date in first.iter_days().take(days_in_month(first) as usize) {
        let column = date.weekday().num_days_from_sunday() as usize;
        let closed = inputs.policy.is_closed(date);
        week[column] = Some(CalendarDay {
            date,
            available: !closed,
            disabled: closed || inputs.disabled_dates.contains(&date),
            selected: date == inputs.selected,
            today: date == inputs.today,
        });

        if column == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }

    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn grid(month: NaiveDate, today: NaiveDate, disabled: &[NaiveDate]) -> Vec<CalendarWeek> {
        let policy = WeekendPolicy::default();
        month_grid(&GridInputs {
            month,
            selected: today,
            today,
            disabled_dates: disabled,
            policy: &policy,
        })
    }

    #[test]
    fn test_month_helpers() {
        assert_eq!(first_of_month(date(2024, 3, 17)), date(2024, 3, 1));
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2023, 2, 10)), 28);
        assert_eq!(days_in_month(date(2024, 4, 1)), 30);
        assert_eq!(next_month(date(2024, 12, 31)), date(2025, 1, 1));
        assert_eq!(previous_month(date(2024, 1, 15)), date(2023, 12, 1));
    }

    #[test]
    fn test_cannot_page_before_current_month() {
        let today = date(2024, 3, 5);
        assert!(!can_go_back(date(2024, 3, 20), today));
        assert!(can_go_back(date(2024, 4, 1), today));
    }

    #[test]
    fn test_grid_covers_every_day_once() {
        // March 2024 starts on a Friday and has 31 days.
        let weeks = grid(date(2024, 3, 1), date(2024, 3, 1), &[]);
        let days: Vec<_> = weeks.iter().flatten().flatten().collect();

        assert_eq!(weeks.len(), 6);
        assert_eq!(days.len(), 31);
        assert_eq!(weeks[0][5].unwrap().date, date(2024, 3, 1));
        assert!(weeks[0][..5].iter().all(Option::is_none));
        for (index, day) in days.iter().enumerate() {
            assert_eq!(day.date.day() as usize, index + 1);
        }
    }

    #[test]
    fn test_grid_flags() {
        let today = date(2024, 3, 5);
        let weeks = grid(today, today, &[date(2024, 3, 7)]);
        let day = |d: u32| {
            *weeks
                .iter()
                .flatten()
                .flatten()
                .find(|cell| cell.date.day() == d)
                .unwrap()
        };

        // Earlier weekdays of the month stay selectable to review their schedule.
        assert!(!day(4).disabled && day(4).selectable());
        // Today.
        assert!(day(5).today && day(5).selected && day(5).selectable());
        // Unavailable per provider.
        assert!(day(7).disabled && !day(7).selectable());
        // Saturday and Sunday are closed.
        assert!(!day(9).available && day(9).disabled);
        assert!(!day(10).available && day(10).disabled);
        // A regular future weekday.
        assert!(day(11).selectable());
    }

    #[test]
    fn test_weekend_policy() {
        let policy = WeekendPolicy::default();
        assert!(policy.is_closed(date(2024, 3, 10)));
        assert!(policy.is_closed(date(2024, 3, 9)));
        assert!(!policy.is_closed(date(2024, 3, 8)));

        let open_saturdays = WeekendPolicy::new(vec![Weekday::Sun]);
        assert!(!open_saturdays.is_closed(date(2024, 3, 9)));
    }
}
