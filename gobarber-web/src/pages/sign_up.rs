use crate::{
    components::Button,
    containers::auth_card::{AuthCard, FormField, bind_input},
    containers::form_validation::{FormErrors, ValidationError, validate_sign_up},
    routes::MainRoute,
    session::use_session,
};
use i18nrs::yew::use_translation;
use shared::models::SignUpRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};

/// Location state telling the sign-in page an account was just created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountCreated;

#[function_component(SignUpPage)]
pub fn sign_up_page() -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let session = use_session();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let field_errors = use_state(FormErrors::default);
    let failed = use_state(|| false);
    let loading = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let field_errors = field_errors.clone();
        let failed = failed.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }

            let request = SignUpRequest {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            if let Err(errors) = validate_sign_up(&request) {
                field_errors.set(errors);
                return;
            }

            field_errors.set(FormErrors::default());
            failed.set(false);
            loading.set(true);

            let session = session.clone();
            let navigator = navigator.clone();
            let failed = failed.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match session.sign_up(&request).await {
                    Ok(user) => {
                        log::info!("created account {}", user.id);
                        if let Some(navigator) = navigator {
                            navigator.push_with_state(&MainRoute::SignIn, AccountCreated);
                        }
                    }
                    Err(err) => {
                        log::warn!("sign-up failed with status {:?}: {err}", err.status());
                        failed.set(true);
                    }
                }
                loading.set(false);
            });
        })
    };

    let field_error = |error: Option<ValidationError>| error.map(|error| i18n.t(error.translation_key()));

    html! {
        <AuthCard title={i18n.t("sign_up.title")}>
            <form class="flex flex-col gap-2" {onsubmit} novalidate=true>
                if *failed {
                    <div class="alert alert-error" role="alert">
                        <div>
                            <strong>{ i18n.t("sign_up.error_title") }</strong>
                            <p>{ i18n.t("sign_up.error") }</p>
                        </div>
                    </div>
                }
                <FormField
                    id="name"
                    kind="text"
                    icon="fa-user"
                    label={i18n.t("sign_up.name")}
                    value={(*name).clone()}
                    oninput={bind_input(&name)}
                    error={field_error(field_errors.name)}
                />
                <FormField
                    id="email"
                    kind="email"
                    icon="fa-envelope"
                    label={i18n.t("sign_in.email")}
                    value={(*email).clone()}
                    oninput={bind_input(&email)}
                    error={field_error(field_errors.email)}
                />
                <FormField
                    id="password"
                    kind="password"
                    icon="fa-lock"
                    label={i18n.t("sign_in.password")}
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                    error={field_error(field_errors.password)}
                />
                <div class="mt-4">
                    <Button loading={*loading}>{ i18n.t("sign_up.submit") }</Button>
                </div>
            </form>
            <Link<MainRoute> to={MainRoute::SignIn} classes="link link-hover mt-6 self-center">
                <i class="fa-solid fa-arrow-left mr-2"></i>
                { i18n.t("sign_up.back") }
            </Link<MainRoute>>
        </AuthCard>
    }
}
