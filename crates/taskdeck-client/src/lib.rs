#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! HTTP client for the task-manager API.
//!
//! A thin typed wrapper over `reqwest`: every call joins an endpoint path
//! onto the configured base URL, attaches `Authorization: Bearer <token>`
//! where the endpoint requires it, and classifies non-2xx responses into a
//! [`ClientError`]. There is deliberately no retry, timeout escalation, or
//! request deduplication here; the contract is one request per call.

mod error;
mod token;

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use taskdeck_api_models::{
    ApiErrorBody, RegisterRequest, Task, TaskAnalysis, TaskCompletionPatch, TaskDraft,
    TokenResponse, UserProfile,
};

pub use error::ClientError;
pub use token::SessionToken;

/// Header used to correlate a client invocation with server-side logs.
pub const HEADER_REQUEST_ID: &str = "x-request-id";

/// Default per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const TASKS_PATH: &str = "/api/tasks";
const ANALYZE_PATH: &str = "/api/tasks/analyze";
const TOKEN_PATH: &str = "/api/token";
const REGISTER_PATH: &str = "/api/register";
const ME_PATH: &str = "/api/me";

/// Construction-time options for an [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Optional trace identifier sent as `x-request-id` on every request.
    pub request_id: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            request_id: None,
        }
    }
}

/// Typed client for the remote task-manager API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Construct a client against `base_url` with default options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] when the underlying HTTP client cannot
    /// be constructed.
    pub fn new(base_url: Url) -> Result<Self, ClientError> {
        Self::with_options(base_url, &ClientOptions::default())
    }

    /// Construct a client with explicit timeout and trace id options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequestId`] when the configured trace id
    /// is not a valid header value, or [`ClientError::Build`] when the HTTP
    /// client cannot be constructed.
    pub fn with_options(base_url: Url, options: &ClientOptions) -> Result<Self, ClientError> {
        let mut default_headers = HeaderMap::new();
        if let Some(request_id) = &options.request_id {
            let value =
                HeaderValue::from_str(request_id).map_err(|_| ClientError::InvalidRequestId)?;
            default_headers.insert(HEADER_REQUEST_ID, value);
        }

        let http = Client::builder()
            .timeout(options.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { http, base_url })
    }

    /// Base URL this client targets.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Register a new account. A successful registration yields no token;
    /// callers log in afterwards.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-2xx response.
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, ClientError> {
        let url = self.endpoint(REGISTER_PATH)?;
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|err| ClientError::transport(REGISTER_PATH, err))?;
        decode(response, REGISTER_PATH).await
    }

    /// Exchange credentials for a bearer token via the OAuth2 password form.
    ///
    /// The form field is named `username` but carries the account email,
    /// matching the backend's password flow.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-2xx response,
    /// including 401 for bad credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionToken, ClientError> {
        let url = self.endpoint(TOKEN_PATH)?;
        let response = self
            .http
            .post(url)
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .map_err(|err| ClientError::transport(TOKEN_PATH, err))?;
        let body: TokenResponse = decode(response, TOKEN_PATH).await?;
        tracing::debug!(token_type = %body.token_type, "login succeeded");
        Ok(SessionToken::new(body.access_token))
    }

    /// Fetch the profile of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-2xx response.
    pub async fn current_user(&self, token: &SessionToken) -> Result<UserProfile, ClientError> {
        let url = self.endpoint(ME_PATH)?;
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, token.authorization_value())
            .send()
            .await
            .map_err(|err| ClientError::transport(ME_PATH, err))?;
        decode(response, ME_PATH).await
    }

    /// Fetch the full task collection, in server order.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-2xx response.
    pub async fn list_tasks(&self, token: &SessionToken) -> Result<Vec<Task>, ClientError> {
        let url = self.endpoint(TASKS_PATH)?;
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, token.authorization_value())
            .send()
            .await
            .map_err(|err| ClientError::transport(TASKS_PATH, err))?;
        decode(response, TASKS_PATH).await
    }

    /// Create a task from a draft. The server assigns the id and the task
    /// starts out not completed.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-2xx response.
    pub async fn create_task(
        &self,
        token: &SessionToken,
        draft: &TaskDraft,
    ) -> Result<Task, ClientError> {
        let url = self.endpoint(TASKS_PATH)?;
        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, token.authorization_value())
            .json(draft)
            .send()
            .await
            .map_err(|err| ClientError::transport(TASKS_PATH, err))?;
        decode(response, TASKS_PATH).await
    }

    /// Replace a task's completion flag.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-2xx response,
    /// including 404 for an unknown id.
    pub async fn set_completed(
        &self,
        token: &SessionToken,
        task_id: i64,
        completed: bool,
    ) -> Result<Task, ClientError> {
        let path = format!("{TASKS_PATH}/{task_id}");
        let url = self.endpoint(&path)?;
        let response = self
            .http
            .patch(url)
            .header(AUTHORIZATION, token.authorization_value())
            .json(&TaskCompletionPatch { completed })
            .send()
            .await
            .map_err(|err| ClientError::transport(&path, err))?;
        decode(response, &path).await
    }

    /// Delete a task by id. The response body is unused.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-2xx response,
    /// including 404 for an unknown id.
    pub async fn delete_task(
        &self,
        token: &SessionToken,
        task_id: i64,
    ) -> Result<(), ClientError> {
        let path = format!("{TASKS_PATH}/{task_id}");
        let url = self.endpoint(&path)?;
        let response = self
            .http
            .delete(url)
            .header(AUTHORIZATION, token.authorization_value())
            .send()
            .await
            .map_err(|err| ClientError::transport(&path, err))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(classify_response(response).await)
        }
    }

    /// Fetch the server-computed analysis aggregate for the user's tasks.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-2xx response.
    pub async fn analyze_tasks(&self, token: &SessionToken) -> Result<TaskAnalysis, ClientError> {
        let url = self.endpoint(ANALYZE_PATH)?;
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, token.authorization_value())
            .send()
            .await
            .map_err(|err| ClientError::transport(ANALYZE_PATH, err))?;
        decode(response, ANALYZE_PATH).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|source| ClientError::Endpoint {
                path: path.to_string(),
                source,
            })
    }
}

async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T, ClientError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| ClientError::decode(path, err))
    } else {
        Err(classify_response(response).await)
    }
}

/// Classify a non-2xx response into an API error, extracting the backend's
/// `{"detail": ...}` message when it is a plain string.
async fn classify_response(response: Response) -> ClientError {
    let status = response.status();
    let bytes = response.bytes().await.unwrap_or_default();

    let body_text = String::from_utf8_lossy(&bytes).trim().to_string();
    let detail = serde_json::from_slice::<ApiErrorBody>(&bytes)
        .ok()
        .and_then(|body| body.detail);

    let message = detail.unwrap_or_else(|| {
        if body_text.is_empty() {
            format!("request failed with status {status}")
        } else {
            body_text
        }
    });

    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}
