//! Core types and errors for the ZIA denylist client.
//!
//! This crate provides the foundational types used across the library:
//!
//! - **Types**: [`Domain`], [`Credentials`], [`DenylistSnapshot`],
//!   [`UpdateOutcome`]
//! - **Errors**: Comprehensive error handling with [`ZiaError`]
//!
//! # Example
//!
//! ```rust
//! use zia_core::{Domain, Result};
//!
//! fn normalize(raw: &str) -> Result<String> {
//!     let domain = Domain::parse(raw)?;
//!     Ok(domain.as_str().to_owned())
//! }
//!
//! assert_eq!(normalize("https://Sub.Example.com/path").unwrap(), "sub.example.com");
//! ```

mod error;
pub mod types;

pub use error::{Result, ZiaError};
pub use types::*;
