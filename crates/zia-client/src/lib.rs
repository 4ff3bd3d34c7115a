//! HTTP client for the ZIA denylist API.
//!
//! This crate provides the [`ZiaClient`]: credential exchange, a retrying
//! dispatcher that classifies provider responses, and the
//! fetch-merge-push-activate denylist update sequence.

pub mod api;
mod auth;
mod client;
mod config;
mod retry;

pub use client::{ZiaClient, ZiaClientBuilder};
pub use config::RetryConfig;
pub use retry::{Sleeper, TokioSleeper};
pub use zia_core::{Result, ZiaError};
