//! The advanced-threat policy document and update outcomes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::domain::Domain;

/// The full policy document as returned by `GET /security/advanced`.
///
/// Only the denylist field is interpreted; every other field is captured
/// verbatim so a read-modify-write cycle round-trips the document unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DenylistSnapshot {
    /// Denylisted domains. Absent in the provider response means empty.
    #[serde(rename = "blacklistUrls", default)]
    pub blacklist_urls: Vec<String>,

    /// All other document fields, preserved untouched
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl DenylistSnapshot {
    /// Whether the domain is already denylisted (exact, case-normalized match)
    #[must_use]
    pub fn contains(&self, domain: &Domain) -> bool {
        self.blacklist_urls.iter().any(|entry| entry == domain.as_str())
    }

    /// Append a domain to the denylist, leaving the rest of the document
    /// untouched
    pub fn insert(&mut self, domain: &Domain) {
        self.blacklist_urls.push(domain.as_str().to_owned());
    }
}

/// Result of a denylist update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The domain was appended and the change activated
    Added {
        /// The validated domain that was added
        domain: Domain,
    },
    /// The domain was already denylisted; no write was issued
    AlreadyPresent {
        /// The validated domain found in the existing list
        domain: Domain,
    },
    /// The input failed local validation; no network call was made
    Rejected {
        /// The raw input as supplied by the caller
        input: String,
    },
}
