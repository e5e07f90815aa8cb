use std::cell::RefCell;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::storage::SessionStorage;
use crate::models::{SessionResponse, SignInRequest, UserSummary};

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "@GoBarber:token";
/// Storage key of the JSON encoded [`UserSummary`].
pub const USER_KEY: &str = "@GoBarber:user";

/// Why a sign-in attempt failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The API rejected the email/password combination.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The API could not be reached.
    #[error("unable to reach the server: {0}")]
    Network(String),

    /// The API answered with something the client does not understand.
    #[error("unexpected response from the server: {0}")]
    Unexpected(String),
}

/// Exchanges credentials for a session, usually over HTTP.
#[async_trait(?Send)]
pub trait Authenticator {
    /// Authenticates `credentials` against the API.
    ///
    /// # Errors
    /// Returns [`AuthError`] when the credentials are refused or the request fails.
    async fn authenticate(
        &self,
        credentials: &SignInRequest,
    ) -> Result<SessionResponse, AuthError>;
}

/// An authenticated session: token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token sent with authenticated requests.
    pub token: String,
    /// The signed-in user.
    pub user: UserSummary,
}

/// Owner of the current session.
///
/// The store is hydrated once from storage, then only changes through
/// [`SessionStore::sign_in`] and [`SessionStore::sign_out`]. Every change is
/// written through to the storage backend.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: RefCell<Option<Session>>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Builds the store from whatever `storage` holds.
    ///
    /// A token without a user (or the reverse), or a user entry that does not
    /// decode, hydrates as signed out and the leftovers are removed.
    pub fn hydrate(storage: S) -> Self {
        let session = Self::read_persisted(&storage);
        match &session {
            Some(session) => info!(user_id = %session.user.id, "restored persisted session"),
            None => debug!("no persisted session"),
        }
        Self {
            storage,
            session: RefCell::new(session),
        }
    }

    fn read_persisted(storage: &S) -> Option<Session> {
        let token = storage.get(TOKEN_KEY);
        let user = storage.get(USER_KEY);

        match (token, user) {
            (Ok(Some(token)), Ok(Some(user))) => match serde_json::from_str::<UserSummary>(&user) {
                Ok(user) => Some(Session { token, user }),
                Err(err) => {
                    warn!(error = %err, "discarding undecodable persisted user");
                    Self::clear(storage);
                    None
                }
            },
            (Ok(None), Ok(None)) => None,
            (Ok(_), Ok(_)) => {
                warn!("discarding incomplete persisted session");
                Self::clear(storage);
                None
            }
            (Err(err), _) | (_, Err(err)) => {
                warn!(error = %err, "session storage unavailable, starting signed out");
                None
            }
        }
    }

    fn clear(storage: &S) {
        storage.remove(TOKEN_KEY);
        storage.remove(USER_KEY);
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<UserSummary> {
        self.session
            .borrow()
            .as_ref()
            .map(|session| session.user.clone())
    }

    /// The bearer token of the current session.
    pub fn token(&self) -> Option<String> {
        self.session
            .borrow()
            .as_ref()
            .map(|session| session.token.clone())
    }

    /// Whether a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// Authenticates through `authenticator` and establishes the session.
    ///
    /// # Errors
    /// Propagates the [`AuthError`] of the authenticator; the current session is
    /// left untouched in that case.
    pub async fn sign_in<A>(
        &self,
        authenticator: &A,
        credentials: &SignInRequest,
    ) -> Result<UserSummary, AuthError>
    where
        A: Authenticator + ?Sized,
    {
        let response = authenticator.authenticate(credentials).await?;
        Ok(self.establish(response))
    }

    /// Installs the session from a successful `POST /sessions` response and
    /// persists it.
    ///
    /// A storage failure is logged and the session is kept in memory only.
    pub fn establish(&self, response: SessionResponse) -> UserSummary {
        let SessionResponse { user, token } = response;

        if let Err(err) = self.persist(&token, &user) {
            warn!(error = %err, "session will not survive a reload");
        }
        info!(user_id = %user.id, "signed in");

        *self.session.borrow_mut() = Some(Session {
            token,
            user: user.clone(),
        });
        user
    }

    fn persist(&self, token: &str, user: &UserSummary) -> Result<(), super::StorageError> {
        let user_json = serde_json::to_string(user).map_err(|err| super::StorageError::Write {
            key: USER_KEY.to_string(),
            reason: err.to_string(),
        })?;
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, &user_json)
    }

    /// Ends the session and removes every persisted trace of it.
    pub fn sign_out(&self) {
        Self::clear(&self.storage);
        if self.session.borrow_mut().take().is_some() {
            info!("signed out");
        }
    }
}
