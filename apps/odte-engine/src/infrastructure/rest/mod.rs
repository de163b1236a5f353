//! Shared REST plumbing for the data provider adapters.
//!
//! Both providers are read-only JSON APIs queried with GET. Network errors,
//! 408, 429 and 5xx are retried with exponential backoff.

mod client;
mod error;
mod retry;

pub use client::RestClient;
pub use error::RestError;
pub use retry::RetryConfig;
