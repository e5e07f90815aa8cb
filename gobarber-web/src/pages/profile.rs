use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::components::avatar::Avatar;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

/// Read-only view of the signed-in user.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let (i18n, _) = use_translation();
    let user = use_selector(|state: &AppState| state.user.clone());
    let Some(user) = (*user).clone() else {
        return html! {};
    };

    html! {
        <div class="max-w-md mx-auto py-8 space-y-6">
            <Link<MainRoute> to={MainRoute::Dashboard} classes="link link-hover">
                <i class="fa-solid fa-arrow-left mr-2"></i>
                { i18n.t("profile.back") }
            </Link<MainRoute>>
            <div class="flex flex-col items-center gap-4">
                <Avatar name={user.name.clone()} url={user.avatar_url.clone()} size="w-32" />
                <h1 class="text-2xl font-bold">{ i18n.t("profile.title") }</h1>
            </div>
            <dl class="card bg-base-200 p-4 space-y-2">
                <dt class="text-sm text-base-content/70">{ i18n.t("profile.name") }</dt>
                <dd class="font-semibold">{ &user.name }</dd>
                <dt class="text-sm text-base-content/70">{ i18n.t("profile.email") }</dt>
                <dd class="font-semibold">{ &user.email }</dd>
            </dl>
        </div>
    }
}
