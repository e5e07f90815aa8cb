use crate::{
    components::Button,
    containers::form_validation::{FormErrors, ValidationError, validate_sign_in},
    containers::auth_card::{AuthCard, FormField, bind_input},
    models::app_state::AppState,
    pages::sign_up::AccountCreated,
    routes::MainRoute,
    session::use_session,
};
use i18nrs::yew::use_translation;
use shared::models::SignInRequest;
use shared::session::AuthError;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_location};
use yewdux::prelude::use_dispatch;

/// Translation key of the message shown for a failed sign-in.
pub fn auth_error_key(error: &AuthError) -> &'static str {
    match error {
        AuthError::InvalidCredentials => "sign_in.invalid_credentials",
        AuthError::Network(_) => "sign_in.network",
        AuthError::Unexpected(_) => "sign_in.unexpected",
    }
}

/// Sign-in form. On success the route guard moves the user on, back to the
/// private page that sent them here when there was one.
#[function_component(SignInPage)]
pub fn sign_in_page() -> Html {
    let (i18n, ..) = use_translation();
    let session = use_session();
    let dispatch = use_dispatch::<AppState>();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let field_errors = use_state(FormErrors::default);
    let error = use_state(|| None::<AuthError>);
    let loading = use_state(|| false);
    let account_created = use_location()
        .and_then(|location| location.state::<AccountCreated>())
        .is_some();

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let field_errors = field_errors.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }

            let request = SignInRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            if let Err(errors) = validate_sign_in(&request) {
                field_errors.set(errors);
                return;
            }

            field_errors.set(FormErrors::default());
            error.set(None);
            loading.set(true);

            let session = session.clone();
            let dispatch = dispatch.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                if let Err(err) = session.sign_in(request, &dispatch).await {
                    log::warn!("sign-in failed: {err}");
                    error.set(Some(err));
                }
                loading.set(false);
            });
        })
    };

    let field_error = |error: Option<ValidationError>| error.map(|error| i18n.t(error.translation_key()));

    html! {
        <AuthCard title={i18n.t("sign_in.title")}>
            <form class="flex flex-col gap-2" {onsubmit} novalidate=true>
                if account_created && error.is_none() {
                    <div class="alert alert-success" role="status">
                        <span>{ i18n.t("sign_up.success") }</span>
                    </div>
                }
                if let Some(err) = &*error {
                    <div class="alert alert-error" role="alert">
                        <div>
                            <strong>{ i18n.t("sign_in.error_title") }</strong>
                            <p>{ i18n.t(auth_error_key(err)) }</p>
                        </div>
                    </div>
                }
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
                    <Button loading={*loading}>{ i18n.t("sign_in.submit") }</Button>
                </div>
            </form>
            <Link<MainRoute> to={MainRoute::SignUp} classes="link link-hover mt-6 self-center">
                <i class="fa-solid fa-right-to-bracket mr-2"></i>
                { i18n.t("sign_in.create_account") }
            </Link<MainRoute>>
        </AuthCard>
    }
}
