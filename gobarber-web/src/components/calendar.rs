use chrono::{Datelike, NaiveDate};
use i18nrs::yew::use_translation;
use shared::dashboard::calendar::{can_go_back, next_month, previous_month};
use shared::dashboard::{CalendarDay, DateLocale, GridInputs, WeekendPolicy, month_grid};
use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    /// First day of the month on display.
    pub month: NaiveDate,
    pub selected: NaiveDate,
    pub today: NaiveDate,
    /// Days the provider does not work.
    pub disabled_dates: Vec<NaiveDate>,
    pub locale: DateLocale,
    pub on_select: Callback<NaiveDate>,
    pub on_month_change: Callback<NaiveDate>,
}

/// Month calendar with Sunday-first weeks.
#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let (i18n, ..) = use_translation();
    let policy = WeekendPolicy::default();

    let weeks = month_grid(&GridInputs {
        month: props.month,
        selected: props.selected,
        today: props.today,
        disabled_dates: &props.disabled_dates,
        policy: &policy,
    });

    let back_allowed = can_go_back(props.month, props.today);
    let on_previous = {
        let on_month_change = props.on_month_change.clone();
        let target = previous_month(props.month);
        Callback::from(move |_| on_month_change.emit(target))
    };
    let on_next = {
        let on_month_change = props.on_month_change.clone();
        let target = next_month(props.month);
        Callback::from(move |_| on_month_change.emit(target))
    };

    let render_day = |cell: &Option<CalendarDay>| -> Html {
        let Some(day) = *cell else {
            return html! { <td></td> };
        };
        let onclick = {
            let on_select = props.on_select.clone();
            Callback::from(move |_| {
                if day.selectable() {
                    on_select.emit(day.date);
                }
            })
        };
        html! {
            <td>
                <button
                    type="button"
                    class={classes!(
                        "btn", "btn-sm", "btn-square",
                        if day.selected { "btn-primary" } else { "btn-ghost" },
                        day.today.then_some("border-primary"),
                        day.disabled.then_some("btn-disabled"),
                    )}
                    disabled={day.disabled}
                    {onclick}
                >
                    { day.date.day() }
                </button>
            </td>
        }
    };

    html! {
        <div class="card bg-base-200 p-4">
            <div class="flex items-center justify-between mb-2">
                <button
                    type="button"
                    class="btn btn-ghost btn-sm"
                    aria-label={i18n.t("dashboard.previous_month")}
                    disabled={!back_allowed}
                    onclick={on_previous}
                >
                    <i class="fa-solid fa-chevron-left"></i>
                </button>
                <span class="font-semibold">{ props.locale.month_title(props.month) }</span>
                <button
                    type="button"
                    class="btn btn-ghost btn-sm"
                    aria-label={i18n.t("dashboard.next_month")}
                    onclick={on_next}
                >
                    <i class="fa-solid fa-chevron-right"></i>
                </button>
            </div>
            <table class="table-fixed w-full text-center">
                <thead>
                    <tr>
                        { for props.locale.weekday_initials().iter().map(|initial| html! { <th>{ *initial }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for weeks.iter().map(|week| html! {
                        <tr>{ for week.iter().map(&render_day) }</tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
