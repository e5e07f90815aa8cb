use crate::{
    components::{language_selector::LanguageSelector, user_dropdown::UserDropdown},
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let on_dashboard = props.current_route == Some(MainRoute::Dashboard);

    html! {
        <nav class="navbar justify-between bg-base-300 px-6">
            <Link<MainRoute> to={MainRoute::Dashboard} classes={classes!("btn", "btn-ghost", "text-xl", "text-primary", on_dashboard.then_some("btn-active"))}>
                <i class="fa-solid fa-scissors"></i>
                { i18n.t("app.title") }
            </Link<MainRoute>>
            <div class="flex items-center gap-2">
                <LanguageSelector />
                <UserDropdown />
            </div>
        </nav>
    }
}
