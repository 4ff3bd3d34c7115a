//! Main ZIA API client and the retrying dispatcher.

use crate::api::DenylistApi;
use crate::auth;
use crate::config::RetryConfig;
use crate::retry::{Sleeper, TokioSleeper};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use zia_core::{AccessToken, Credentials, Result, ZiaError};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the rate-limit window reset, in seconds
const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Fallback reset when the provider omits the header
const DEFAULT_RATE_LIMIT_RESET_SECS: u64 = 5;

/// Header the provider sets during maintenance windows
const MAINTENANCE_MODE_HEADER: &str = "x-zscaler-mode";
const READ_ONLY_MARKER: &str = "read-only";

/// Main ZIA API client.
///
/// Cheap to clone; stateless and reentrant, so independent update requests
/// may share one client concurrently. The only shared state is the read-only
/// credential/configuration bundle.
#[derive(Clone)]
pub struct ZiaClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    credentials: Credentials,
    token_url: String,
    retry: RetryConfig,
    sleeper: Arc<dyn Sleeper>,
    cancel: CancellationToken,
}

/// Outcome of classifying a single dispatch attempt
enum Classified {
    Success(Value),
    Retryable(ZiaError),
    Fatal(ZiaError),
}

impl ZiaClient {
    /// Create a new client with default settings
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        ZiaClientBuilder::new(credentials).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(credentials: Credentials) -> ZiaClientBuilder {
        ZiaClientBuilder::new(credentials)
    }

    /// Access denylist endpoints
    #[must_use]
    pub fn denylist(&self) -> DenylistApi<'_> {
        DenylistApi::new(self)
    }

    /// The credentials this client was built with
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Acquire a fresh bearer token.
    ///
    /// Called once per update operation; tokens are never cached across
    /// invocations.
    pub async fn access_token(&self) -> Result<AccessToken> {
        auth::exchange(&self.inner.http, &self.inner.token_url, &self.inner.credentials).await
    }

    /// Perform a GET request through the retrying dispatcher
    pub(crate) async fn get(&self, path: &str, token: &AccessToken) -> Result<Value> {
        self.dispatch(Method::GET, path, token, None::<&Value>).await
    }

    /// Perform a PUT request with a JSON body through the retrying dispatcher
    pub(crate) async fn put<B: Serialize + Sync>(
        &self,
        path: &str,
        token: &AccessToken,
        body: &B,
    ) -> Result<Value> {
        self.dispatch(Method::PUT, path, token, Some(body)).await
    }

    /// Perform a bodyless POST request through the retrying dispatcher
    pub(crate) async fn post(&self, path: &str, token: &AccessToken) -> Result<Value> {
        self.dispatch(Method::POST, path, token, None::<&Value>).await
    }

    /// Send one logical API call, retrying transient provider conditions.
    ///
    /// Each retryable classification first waits its condition-specific
    /// duration (rate-limit reset, 5s for an edit lock, 30s for maintenance)
    /// and then the escalating outer backoff. The two waits compound on
    /// purpose: the provider's advice and the generic curve are independent.
    /// After the attempt budget is exhausted the last classified error is
    /// returned.
    async fn dispatch<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        token: &AccessToken,
        body: Option<&B>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.inner.credentials.base_url, path);
        let retry = &self.inner.retry;
        let mut attempt = 0_u32;

        loop {
            attempt += 1;
            if self.inner.cancel.is_cancelled() {
                return Err(ZiaError::Cancelled);
            }
            debug!(%method, %url, attempt, "dispatching API request");

            let mut request = self
                .inner
                .http
                .request(method.clone(), &url)
                .bearer_auth(token.as_str());
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request
                .send()
                .await
                .map_err(|e| ZiaError::Http(e.to_string()))?;

            match Self::classify(response).await? {
                Classified::Success(value) => return Ok(value),
                Classified::Fatal(err) => {
                    warn!(%url, error = %err, "fatal API error");
                    return Err(err);
                }
                Classified::Retryable(err) => {
                    if let Some(wait) = err.advised_wait() {
                        warn!(
                            %url,
                            error = %err,
                            wait_secs = wait.as_secs(),
                            "transient provider condition, honoring advised wait"
                        );
                        self.sleep(wait).await?;
                    }
                    if attempt >= retry.max_attempts {
                        return Err(err);
                    }
                    let backoff = retry.backoff_for(attempt);
                    debug!(attempt, backoff_secs = backoff.as_secs(), "backing off before retry");
                    self.sleep(backoff).await?;
                }
            }
        }
    }

    /// Map a provider response onto the retryable/fatal taxonomy
    async fn classify(response: Response) -> Result<Classified> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let reset = response
                .headers()
                .get(RATE_LIMIT_RESET_HEADER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_RATE_LIMIT_RESET_SECS);
            return Ok(Classified::Retryable(ZiaError::RateLimited { reset }));
        }

        if status == StatusCode::CONFLICT {
            return Ok(Classified::Retryable(ZiaError::EditLocked));
        }

        if status == StatusCode::FORBIDDEN {
            let read_only = response
                .headers()
                .get(MAINTENANCE_MODE_HEADER)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|mode| mode == READ_ONLY_MARKER);
            if read_only {
                return Ok(Classified::Retryable(ZiaError::ReadOnly));
            }
            // A plain 403 is an authorization problem, not maintenance.
        }

        if status.is_server_error() {
            return Ok(Classified::Retryable(ZiaError::Server {
                status: status.as_u16(),
            }));
        }

        if status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| ZiaError::Http(e.to_string()))?;
            if text.trim().is_empty() {
                return Ok(Classified::Success(Value::Null));
            }
            return Ok(Classified::Success(serde_json::from_str(&text)?));
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|message| message.as_str())
                    .map(String::from)
            })
            .unwrap_or(body);
        Ok(Classified::Fatal(ZiaError::Api {
            status: status.as_u16(),
            message,
        }))
    }

    /// Wait through the injected sleeper, aborting if cancellation fires
    async fn sleep(&self, duration: Duration) -> Result<()> {
        if duration.is_zero() {
            return Ok(());
        }
        tokio::select! {
            () = self.inner.cancel.cancelled() => Err(ZiaError::Cancelled),
            () = self.inner.sleeper.sleep(duration) => Ok(()),
        }
    }
}

/// Builder for configuring a [`ZiaClient`]
pub struct ZiaClientBuilder {
    credentials: Credentials,
    token_url: Option<String>,
    timeout: Duration,
    user_agent: String,
    retry: RetryConfig,
    sleeper: Arc<dyn Sleeper>,
    cancel: CancellationToken,
}

impl ZiaClientBuilder {
    /// Create a new builder with the given credentials
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            token_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("zia-denylist-rs/{}", env!("CARGO_PKG_VERSION")),
            retry: RetryConfig::default(),
            sleeper: Arc::new(TokioSleeper),
            cancel: CancellationToken::new(),
        }
    }

    /// Override the OAuth2 token endpoint (useful for testing)
    #[must_use]
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set retry configuration
    #[must_use]
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry = config;
        self
    }

    /// Replace the delay scheduler (useful for testing)
    #[must_use]
    pub fn sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Attach a cancellation token so an overall deadline can abort
    /// mid-retry
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> ZiaClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        let token_url = self
            .token_url
            .unwrap_or_else(|| self.credentials.token_url());

        ZiaClient {
            inner: Arc::new(ClientInner {
                http,
                credentials: self.credentials,
                token_url,
                retry: self.retry,
                sleeper: self.sleeper,
                cancel: self.cancel,
            }),
        }
    }
}
