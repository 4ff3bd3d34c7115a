//! Tenant credentials and endpoint configuration.

use std::fmt;

/// Hostname suffix of the ZIA OAuth2 authorization service
const AUTH_HOST: &str = "zslogin.net";

/// Default OAuth2 audience for the ZIA API
pub const DEFAULT_AUDIENCE: &str = "https://api.zscaler.com";

/// Default ZIA API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.zsapi.net/zia/api/v1";

/// Immutable tenant credentials, constructed once and injected into the
/// client. Never mutated by this crate.
#[derive(Clone)]
pub struct Credentials {
    /// Tenant-specific subdomain prefix of the auth endpoint
    pub vanity_domain: String,
    /// OAuth2 client id
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
    /// OAuth2 audience
    pub audience: String,
    /// API base URL, e.g. `https://api.zsapi.net/zia/api/v1`
    pub base_url: String,
}

impl Credentials {
    /// Build credentials with the standard audience and base URL.
    #[must_use]
    pub fn new(
        vanity_domain: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            vanity_domain: vanity_domain.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            audience: DEFAULT_AUDIENCE.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// The tenant's OAuth2 token endpoint.
    #[must_use]
    pub fn token_url(&self) -> String {
        format!("https://{}.{AUTH_HOST}/oauth2/v1/token", self.vanity_domain)
    }
}

// Keep the secret out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("vanity_domain", &self.vanity_domain)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("audience", &self.audience)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Opaque bearer token obtained per update operation.
///
/// Not cached or reused across separate update invocations; expiry is the
/// provider's concern.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw bearer token string
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// The raw bearer token
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}
