use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    Appointment, DayAppointmentsQuery, ErrorResponse, MonthAvailabilityItem,
    MonthAvailabilityQuery, SessionResponse, SignInRequest, SignUpRequest, UserSummary,
};
use shared::session::{AuthError, Authenticator};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use uuid::Uuid;

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<GoBarberClient> = const { OnceCell::new() };
}

/// Failure of a request to the GoBarber API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{status}: {body}")]
    Status {
        /// HTTP status of the response.
        status: StatusCode,
        /// Decoded error body, or the status reason when the body is not JSON.
        body: ErrorResponse,
    },

    /// The success body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Transport(err)
        }
    }
}

impl ApiError {
    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) | Self::Decode(err) => err.status(),
        }
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, .. }
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::BAD_REQUEST =>
            {
                AuthError::InvalidCredentials
            }
            ApiError::Status { body, .. } => AuthError::Unexpected(body.message),
            ApiError::Transport(err) => AuthError::Network(err.to_string()),
            ApiError::Decode(err) => AuthError::Unexpected(err.to_string()),
        }
    }
}

/// Lightweight API client for GoBarber web interactions.
#[derive(Clone, Debug)]
pub struct GoBarberClient {
    base_url: String,
    client: Client,
    token: Arc<Mutex<Option<String>>>,
}

impl GoBarberClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// The client shared by the whole application, pointed at the configured
    /// API.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sets or clears the bearer token sent with authenticated requests.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = token;
        }
    }

    /// The bearer token currently in use.
    pub fn current_token(&self) -> Option<String> {
        self.token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_token() {
            request.header("Authorization", format!("Bearer {token}"))
        } else {
            request
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<ErrorResponse>(&text).unwrap_or_else(|_| {
            ErrorResponse::new(status.canonical_reason().unwrap_or("request failed"))
        });
        log::warn!("API answered {status}: {}", body.message);
        Err(ApiError::Status { status, body })
    }

    /// Exchange credentials for a session (`POST /sessions`).
    pub async fn sign_in(&self, payload: &SignInRequest) -> Result<SessionResponse, ApiError> {
        let url = self.api_url("sessions");
        let response = self.client.post(url).json(payload).send().await?;
        Self::decode(response).await
    }

    /// Create an account (`POST /users`).
    pub async fn sign_up(&self, payload: &SignUpRequest) -> Result<UserSummary, ApiError> {
        let url = self.api_url("users");
        let response = self.client.post(url).json(payload).send().await?;
        Self::decode(response).await
    }

    /// Availability of each day of a provider's month.
    pub async fn month_availability(
        &self,
        provider_id: &Uuid,
        query: MonthAvailabilityQuery,
    ) -> Result<Vec<MonthAvailabilityItem>, ApiError> {
        let url = self.api_url(&format!("providers/{provider_id}/month-availability"));
        let response = self
            .apply_auth(self.client.get(url))
            .query(&query)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Appointments of the signed-in provider on one day.
    pub async fn appointments_for_day(
        &self,
        query: DayAppointmentsQuery,
    ) -> Result<Vec<Appointment>, ApiError> {
        let url = self.api_url("appointments/me");
        let response = self
            .apply_auth(self.client.get(url))
            .query(&query)
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[async_trait(?Send)]
impl Authenticator for GoBarberClient {
    async fn authenticate(&self, credentials: &SignInRequest) -> Result<SessionResponse, AuthError> {
        self.sign_in(credentials).await.map_err(AuthError::from)
    }
}
