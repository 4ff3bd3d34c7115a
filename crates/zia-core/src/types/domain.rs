//! Validated domain names.

use serde::Serialize;
use std::fmt;
use url::Url;

use crate::error::{Result, ZiaError};

/// ZIA maximum length for a denylisted domain
const MAX_DOMAIN_LEN: usize = 255;

/// A validated, lowercase ASCII hostname.
///
/// The only way to obtain one is [`Domain::parse`], so any `Domain` reaching
/// the network layer has already passed the syntax checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    /// Normalize and validate a raw URL or hostname string.
    ///
    /// Trims whitespace, lowercases, and strips a leading `http://` or
    /// `https://` down to the host component. The remainder must be
    /// dot-separated labels of 1-63 alphanumeric/hyphen characters (no
    /// leading hyphen) ending in an alphabetic label of at least two
    /// characters, at most 255 characters overall.
    ///
    /// Purely local; never performs I/O.
    pub fn parse(raw: &str) -> Result<Self> {
        let cleaned = raw.trim().to_ascii_lowercase();

        // Reject before host extraction: the URL parser would otherwise
        // punycode-encode an internationalized host into valid ASCII.
        if !cleaned.is_ascii() {
            return Err(invalid(raw));
        }

        let candidate = if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
            Url::parse(&cleaned)
                .ok()
                .and_then(|url| url.host_str().map(str::to_owned))
                .filter(|host| !host.is_empty())
                .ok_or_else(|| invalid(raw))?
        } else {
            cleaned
        };

        if candidate.len() > MAX_DOMAIN_LEN || !is_valid_hostname(&candidate) {
            return Err(invalid(raw));
        }

        Ok(Self(candidate))
    }

    /// The validated hostname
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn invalid(raw: &str) -> ZiaError {
    ZiaError::InvalidDomain {
        input: raw.to_owned(),
    }
}

/// Label rules: one or more 1-63 char alphanumeric/hyphen labels, none
/// starting with a hyphen, then a final label of at least two letters.
fn is_valid_hostname(candidate: &str) -> bool {
    let mut labels: Vec<&str> = candidate.split('.').collect();

    let Some(tld) = labels.pop() else {
        return false;
    };
    if labels.is_empty() {
        return false;
    }
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
