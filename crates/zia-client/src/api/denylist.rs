//! Denylist endpoints and the read-modify-write-activate orchestration.

use crate::ZiaClient;
use tracing::{info, warn};
use zia_core::{AccessToken, DenylistSnapshot, Domain, Result, UpdateOutcome, ZiaError};

/// Advanced threat settings document holding the denylist
const ADVANCED_SETTINGS_PATH: &str = "/security/advanced";

/// Activation endpoint; pushed changes do not take effect without it
const ACTIVATE_PATH: &str = "/status/activate";

/// Denylist API endpoints
pub struct DenylistApi<'a> {
    client: &'a ZiaClient,
}

impl<'a> DenylistApi<'a> {
    pub(crate) const fn new(client: &'a ZiaClient) -> Self {
        Self { client }
    }

    /// Fetch the current policy document
    pub async fn snapshot(&self, token: &AccessToken) -> Result<DenylistSnapshot> {
        let value = self.client.get(ADVANCED_SETTINGS_PATH, token).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Write back the full modified policy document
    pub async fn push(&self, token: &AccessToken, snapshot: &DenylistSnapshot) -> Result<()> {
        self.client.put(ADVANCED_SETTINGS_PATH, token, snapshot).await?;
        Ok(())
    }

    /// Activate pending configuration changes.
    ///
    /// Public on its own so callers can retry activation alone after an
    /// [`ZiaError::Activation`] outcome.
    pub async fn activate(&self, token: &AccessToken) -> Result<()> {
        self.client.post(ACTIVATE_PATH, token).await?;
        Ok(())
    }

    /// Validate a raw URL or hostname and append it to the denylist.
    ///
    /// Invalid input is a local no-op reported as
    /// [`UpdateOutcome::Rejected`], never a server fault. A domain already
    /// present short-circuits before any write. Activation failure after a
    /// successful push surfaces as [`ZiaError::Activation`]; the push is not
    /// rolled back.
    pub async fn add_domain(&self, raw: &str) -> Result<UpdateOutcome> {
        let domain = match Domain::parse(raw) {
            Ok(domain) => domain,
            Err(err) => {
                warn!(input = raw, error = %err, "rejected denylist candidate");
                return Ok(UpdateOutcome::Rejected {
                    input: raw.to_owned(),
                });
            }
        };

        let token = self.client.access_token().await?;

        let mut snapshot = self.snapshot(&token).await?;
        if snapshot.contains(&domain) {
            info!(%domain, "domain already denylisted");
            return Ok(UpdateOutcome::AlreadyPresent { domain });
        }

        snapshot.insert(&domain);
        self.push(&token, &snapshot).await?;
        info!(%domain, "domain added to denylist");

        match self.activate(&token).await {
            Ok(()) => info!("configuration change activated"),
            Err(err) => return Err(ZiaError::Activation(Box::new(err))),
        }

        Ok(UpdateOutcome::Added { domain })
    }
}
