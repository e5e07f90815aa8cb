use i18nrs::yew::use_translation;
use yew::{Callback, Html, MouseEvent, function_component, html};

use crate::language::{self, LanguageInfo};

/// Switches the UI language; date labels follow through the dashboard.
#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let (i18n, set_language) = use_translation();
    let current = i18n.get_current_language().to_string();
    let active_flag = language::get_language_info(&current).map_or("🌐", |info| info.flag);

    let mut languages: Vec<LanguageInfo> = language::supported_languages().into_values().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle" title={i18n.t("header.language")}>
                <span>{ active_flag }</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-44">
            {
                for languages.into_iter().map(|info| {
                    let code = info.code.to_string();
                    let set_language = set_language.clone();
                    let onclick = Callback::from(move |event: MouseEvent| {
                        event.prevent_default();
                        set_language.emit(code.clone());
                    });
                    html! {
                        <li>
                            <a class={if info.code == current { "active" } else { "" }} {onclick}>
                                <span>{ info.flag }</span>
                                <span>{ info.native_name }</span>
                            </a>
                        </li>
                    }
                })
            }
            </ul>
        </div>
    }
}
