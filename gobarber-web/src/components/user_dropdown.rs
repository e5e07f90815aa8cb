use crate::{
    components::avatar::Avatar, models::app_state::AppState, routes::MainRoute,
    session::use_session,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

/// Avatar, greeting and sign-out entry of the signed-in user.
#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let (i18n, ..) = use_translation();
    let session = use_session();
    let (state, dispatch) = use_store::<AppState>();
    let Some(user) = state.user.clone() else {
        return html! {};
    };

    let on_sign_out = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        session.sign_out(&dispatch);
    });

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost h-auto py-1 gap-3">
                <Avatar name={user.name.clone()} url={user.avatar_url.clone()} size="w-10" />
                <div class="text-left leading-tight">
                    <div class="text-xs text-base-content/70">{ i18n.t("header.welcome") }</div>
                    <div class="text-sm font-semibold text-primary">{ user.first_name() }</div>
                </div>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ &user.name }</div>
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                </li>
                <div class="divider my-0"></div>
                <li>
                    <Link<MainRoute> to={MainRoute::Profile}>{ i18n.t("profile.title") }</Link<MainRoute>>
                </li>
                <li><a onclick={on_sign_out}>{ i18n.t("header.sign_out") }</a></li>
            </ul>
        </div>
    }
}
