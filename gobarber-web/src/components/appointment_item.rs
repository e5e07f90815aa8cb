use shared::dashboard::AppointmentView;
use yew::{Html, Properties, classes, function_component, html};

use crate::components::avatar::Avatar;

#[derive(Properties, PartialEq)]
pub struct AppointmentItemProps {
    pub view: AppointmentView,
    /// Larger card used for the next appointment.
    #[prop_or_default]
    pub highlighted: bool,
}

/// One row of the day schedule: start time, client avatar and name.
#[function_component(AppointmentItem)]
pub fn appointment_item(props: &AppointmentItemProps) -> Html {
    let appointment = &props.view.appointment;
    let client = &appointment.user;

    html! {
        <div class={classes!(
            "flex", "items-center", "gap-4",
            props.highlighted.then_some("card bg-base-200 p-4 border-l-4 border-primary")
        )}>
            <span class="flex items-center gap-2 w-20 text-base-content/70">
                <i class="fa-regular fa-clock text-primary"></i>
                { &props.view.hour_formatted }
            </span>
            <div class="flex flex-1 items-center gap-4 bg-base-300 rounded-box p-3">
                <Avatar name={client.name.clone()} url={client.avatar_url.clone()} />
                <strong>{ &client.name }</strong>
            </div>
        </div>
    }
}
