use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// Shown for any path outside the route table.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-4 bg-base-200">
            <h1 class="text-4xl font-bold">{ "404" }</h1>
            <h2 class="text-2xl">{ i18n.t("not_found.title") }</h2>
            <p class="text-base-content/70">{ i18n.t("not_found.message") }</p>
            <Link<MainRoute> to={MainRoute::SignIn} classes="btn btn-primary">
                { i18n.t("not_found.back") }
            </Link<MainRoute>>
        </div>
    }
}
