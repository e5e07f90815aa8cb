use i18nrs::yew::use_translation;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthCardProps {
    pub title: String,
    pub children: Children,
}

/// Centered card shared by the sign-in and sign-up pages.
#[function_component(AuthCard)]
pub fn auth_card(props: &AuthCardProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body">
                    <span class="text-3xl font-bold text-primary self-center mb-4">
                        <i class="fa-solid fa-scissors mr-2"></i>
                        { i18n.t("app.title") }
                    </span>
                    <h2 class="card-title text-2xl self-center">{ &props.title }</h2>
                    { props.children.clone() }
                </div>
            </div>
        </div>
    }
}

/// Keeps `state` in sync with the input the event came from.
pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: &'static str,
    pub kind: &'static str,
    pub icon: &'static str,
    pub label: String,
    pub value: String,
    pub oninput: Callback<InputEvent>,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Labelled input with its validation message.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class="form-control">
            <label class={classes!("input", "input-bordered", "flex", "items-center", "gap-2", props.error.is_some().then_some("input-error"))}>
                <i class={classes!("fa-solid", props.icon, "opacity-70")}></i>
                <input
                    id={props.id}
                    class="grow"
                    type={props.kind}
                    placeholder={props.label.clone()}
                    aria-label={props.label.clone()}
                    value={props.value.clone()}
                    oninput={props.oninput.clone()}
                />
            </label>
            if let Some(error) = &props.error {
                <span class="label-text-alt text-error mt-1">{ error }</span>
            }
        </div>
    }
}
