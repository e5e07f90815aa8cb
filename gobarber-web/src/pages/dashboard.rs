use chrono::{DateTime, DurationRound, Local, NaiveDate, TimeDelta, Utc};
use i18nrs::yew::use_translation;
use shared::dashboard::{AppointmentView, DashboardViewModel};
use shared::models::{
    Appointment, DayAppointmentsQuery, MonthAvailabilityItem, MonthAvailabilityQuery,
};
use uuid::Uuid;
use yew::{Callback, Html, function_component, html, use_force_update, use_mut_ref};
use yewdux::prelude::use_selector;

use crate::api::GoBarberClient;
use crate::components::{AppointmentItem, Calendar};
use crate::hooks::use_latest_fetch;
use crate::language;
use crate::models::app_state::AppState;

/// Current instant truncated to the minute, so the next-appointment memo is
/// reused by every render within the same minute.
fn current_minute() -> DateTime<Utc> {
    let now = Utc::now();
    now.duration_trunc(TimeDelta::minutes(1)).unwrap_or(now)
}

fn render_period(title: String, empty: &str, items: &[AppointmentView]) -> Html {
    html! {
        <section class="mt-8">
            <h2 class="text-lg text-base-content/70 border-b border-base-300 pb-2 mb-4">{ title }</h2>
            if items.is_empty() {
                <p class="text-base-content/50">{ empty }</p>
            } else {
                <div class="flex flex-col gap-3">
                    { for items.iter().map(|view| html! {
                        <AppointmentItem key={view.appointment.id.to_string()} view={view.clone()} />
                    }) }
                </div>
            }
        </section>
    }
}

/// Provider dashboard: the selected day's schedule next to the month calendar.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let locale = language::date_locale(i18n.get_current_language());
    let provider_id = use_selector(|state: &AppState| state.user.as_ref().map(|user| user.id));
    let today = Local::now().date_naive();
    let model = use_mut_ref(|| DashboardViewModel::new(Local, locale, today));
    let force_update = use_force_update();

    model.borrow_mut().set_locale(locale);
    let month_query = (*provider_id).map(|id| (id, model.borrow().month_query()));
    let day_query = model.borrow().day_query();

    {
        let model = model.clone();
        let force_update = force_update.clone();
        use_latest_fetch(
            month_query,
            |(provider_id, query)| async move {
                GoBarberClient::shared()
                    .month_availability(&provider_id, query)
                    .await
            },
            Callback::from(
                move |((_, query), items): ((Uuid, MonthAvailabilityQuery), Vec<MonthAvailabilityItem>)| {
                    if model.borrow_mut().load_availability(query, items) {
                        force_update.force_update();
                    }
                },
            ),
        );
    }

    {
        let model = model.clone();
        let force_update = force_update.clone();
        use_latest_fetch(
            Some(day_query),
            |query| async move { GoBarberClient::shared().appointments_for_day(query).await },
            Callback::from(move |(query, appointments): (DayAppointmentsQuery, Vec<Appointment>)| {
                if model.borrow_mut().load_appointments(query, appointments) {
                    force_update.force_update();
                }
            }),
        );
    }

    let on_select = {
        let model = model.clone();
        let force_update = force_update.clone();
        Callback::from(move |date: NaiveDate| {
            if model.borrow_mut().set_selected_date(date) {
                force_update.force_update();
            }
        })
    };

    let on_month_change = {
        let model = model.clone();
        Callback::from(move |month: NaiveDate| {
            if model.borrow_mut().set_viewed_month(month) {
                force_update.force_update();
            }
        })
    };

    let mut view = model.borrow_mut();
    let selected = view.selected_date();
    let viewed_month = view.viewed_month();
    let is_today = selected == today;
    let date_label = view.selected_date_label().to_string();
    let weekday_label = view.selected_weekday_label().to_string();
    let next = if is_today {
        view.next_appointment(current_minute()).cloned()
    } else {
        None
    };
    let morning = view.morning_appointments().to_vec();
    let afternoon = view.afternoon_appointments().to_vec();
    let disabled_dates = view.disabled_dates().to_vec();
    drop(view);

    let empty = i18n.t("dashboard.empty");

    html! {
        <div class="flex flex-col-reverse lg:flex-row gap-12 max-w-5xl mx-auto py-8">
            <div class="flex-1">
                <h1 class="text-3xl font-bold">{ i18n.t("dashboard.title") }</h1>
                <p class="mt-2 flex gap-2 text-primary font-medium">
                    if is_today {
                        <span>{ i18n.t("dashboard.today") }</span>
                        <span class="text-base-content/30">{ "|" }</span>
                    }
                    <span>{ date_label }</span>
                    <span class="text-base-content/30">{ "|" }</span>
                    <span>{ weekday_label }</span>
                </p>

                if let Some(next) = next {
                    <section class="mt-10">
                        <h2 class="text-lg text-base-content/70 mb-4">{ i18n.t("dashboard.next") }</h2>
                        <AppointmentItem view={next} highlighted=true />
                    </section>
                }

                { render_period(i18n.t("dashboard.morning"), &empty, &morning) }
                { render_period(i18n.t("dashboard.afternoon"), &empty, &afternoon) }
            </div>
            <aside class="w-full lg:w-80">
                <Calendar
                    month={viewed_month}
                    {selected}
                    {today}
                    {disabled_dates}
                    {locale}
                    {on_select}
                    {on_month_change}
                />
            </aside>
        </div>
    }
}
