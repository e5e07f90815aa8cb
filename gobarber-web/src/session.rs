//! The browser session: one [`SessionStore`] over `localStorage`, handed to
//! components through a Yew context.

use std::rc::Rc;

use once_cell::unsync::OnceCell;
use shared::models::{SignInRequest, SignUpRequest, UserSummary};
use shared::session::{AuthError, SessionStore};
use yew::{hook, use_context};
use yewdux::Dispatch;

use crate::api::{ApiError, GoBarberClient};
use crate::models::app_state::AppState;
use crate::storage::BrowserStorage;

/// Session store persisted in `localStorage`.
pub type BrowserSessionStore = SessionStore<BrowserStorage>;

thread_local! {
    static SHARED_SESSION: OnceCell<Rc<BrowserSessionStore>> = const { OnceCell::new() };
}

/// The session store of this page, hydrated on first use.
///
/// Hydration also hands the restored token to the shared API client.
pub fn shared() -> Rc<BrowserSessionStore> {
    SHARED_SESSION.with(|cell| {
        cell.get_or_init(|| {
            let store = SessionStore::hydrate(BrowserStorage);
            GoBarberClient::shared().set_token(store.token());
            Rc::new(store)
        })
        .clone()
    })
}

/// Context value giving components access to the session store.
#[derive(Debug, Clone)]
pub struct SessionContext {
    store: Rc<BrowserSessionStore>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self { store: shared() }
    }
}

impl SessionContext {
    /// Signs in through the shared API client and publishes the user.
    ///
    /// # Errors
    /// Returns the [`AuthError`] of the failed attempt; state is unchanged.
    pub async fn sign_in(
        &self,
        credentials: SignInRequest,
        dispatch: &Dispatch<AppState>,
    ) -> Result<UserSummary, AuthError> {
        let client = GoBarberClient::shared();
        let user = self.store.sign_in(&client, &credentials).await?;
        client.set_token(self.store.token());
        dispatch.set(AppState {
            user: Some(user.clone()),
        });
        Ok(user)
    }

    /// Registers a new account. The session is left as it is; the new user
    /// signs in afterwards.
    ///
    /// # Errors
    /// Returns the [`ApiError`] of the rejected registration.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<UserSummary, ApiError> {
        GoBarberClient::shared().sign_up(request).await
    }

    /// Ends the session everywhere: storage, API client and app state.
    pub fn sign_out(&self, dispatch: &Dispatch<AppState>) {
        self.store.sign_out();
        GoBarberClient::shared().set_token(None);
        dispatch.set(AppState { user: None });
    }
}

/// The session context provided by `App`, or the shared store when rendered
/// outside of it.
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_default()
}
