mod api;
mod app;
mod components;
mod config;
mod containers;
mod hooks;
mod language;
mod models;
mod pages;
mod routes;
mod routes_test;
mod session;
mod storage;

use app::App;
use config::FrontendConfig;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::supported_languages;
use std::collections::HashMap;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: FrontendConfig::new().default_language.tag().to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    let config = FrontendConfig::new();
    if let Some(level) = config.console_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }

    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        match info.location() {
            Some(location) => log::error!(
                "Panic: {payload}\n  at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ),
            None => log::error!("Panic: {payload}"),
        }
    }));

    log::info!("Starting GoBarber against {}", config.api_base_url());
    for route in routes::route_table() {
        log::debug!("route {} (private: {})", route.path, route.is_private);
    }

    Renderer::<InternationalApp>::new().render();
}
