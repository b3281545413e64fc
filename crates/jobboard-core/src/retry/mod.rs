//! Retry and backoff policy.
//!
//! Classifies transport failures (timeouts, connection errors) and makes
//! capped exponential backoff decisions so the request executor applies one
//! consistent, configurable policy.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
