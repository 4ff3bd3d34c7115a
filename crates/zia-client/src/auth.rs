//! OAuth2 client-credentials exchange.

use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::debug;
use zia_core::{AccessToken, Credentials, Result, ZiaError};

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Trade long-lived client credentials for a short-lived bearer token.
///
/// Token failures are fatal at this layer and never retried; only API
/// dispatch participates in the retry policy.
pub(crate) async fn exchange(
    http: &HttpClient,
    token_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken> {
    debug!(url = token_url, "requesting access token");

    let params = [
        ("grant_type", "client_credentials"),
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("audience", credentials.audience.as_str()),
    ];

    let response = http
        .post(token_url)
        .form(&params)
        .send()
        .await
        .map_err(|e| ZiaError::Http(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::OK {
        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ZiaError::Http(e.to_string()))?;
        Ok(AccessToken::new(body.access_token))
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(ZiaError::Auth {
            status: status.as_u16(),
            message,
        })
    }
}
