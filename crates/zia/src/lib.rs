//! Rust client for safely updating the Zscaler ZIA denylist.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use zia::{Credentials, UpdateOutcome, ZiaClient};
//!
//! #[tokio::main]
//! async fn main() -> zia::Result<()> {
//!     let credentials = Credentials::new("acme", "client-id", "client-secret");
//!     let client = ZiaClient::new(credentials);
//!
//!     match client.denylist().add_domain("https://bad.example.com/tracker").await? {
//!         UpdateOutcome::Added { domain } => println!("{domain} blocked and activated"),
//!         UpdateOutcome::AlreadyPresent { domain } => println!("{domain} was already blocked"),
//!         UpdateOutcome::Rejected { input } => eprintln!("not a valid domain: {input}"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

// Re-export core types
pub use zia_core::*;

// Re-export client
pub use zia_client::{RetryConfig, Sleeper, TokioSleeper, ZiaClient, ZiaClientBuilder};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
