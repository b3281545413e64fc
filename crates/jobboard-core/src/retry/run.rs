//! Retry loop: run an async attempt until success or policy says stop.

use std::future::Future;

use super::policy::{ErrorKind, RetryDecision, RetryPolicy};

/// Runs `attempt` until it succeeds or the retry policy says to stop.
/// On retryable failure, sleeps for the backoff duration then tries again.
/// `attempt` receives the 1-based attempt number.
pub async fn run_with_retry<T, E, F, Fut, C>(
    policy: &RetryPolicy,
    classify: C,
    mut attempt: F,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: Fn(&E) -> ErrorKind,
{
    let mut n = 1u32;
    loop {
        match attempt(n).await {
            Ok(v) => return Ok(v),
            Err(e) => match policy.decide(n, classify(&e)) {
                RetryDecision::NoRetry => return Err(e),
                RetryDecision::RetryAfter(d) => {
                    tracing::warn!(attempt = n, delay_ms = d.as_millis() as u64, "retrying request");
                    tokio::time::sleep(d).await;
                    n += 1;
                }
            },
        }
    }
}
