use i18nrs::yew::use_translation;
use yew::{Children, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub loading: bool,
}

/// Form submit button; shows a loading label and refuses clicks while a
/// request is in flight.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <button
            class={classes!("btn", "btn-primary", "w-full", props.loading.then_some("btn-disabled"))}
            type="submit"
            disabled={props.loading}
        >
            if props.loading {
                <span class="loading loading-spinner"></span>
                { i18n.t("app.loading") }
            } else {
                { props.children.clone() }
            }
        </button>
    }
}
