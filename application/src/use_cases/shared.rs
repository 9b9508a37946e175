//! Shared utilities for use cases.
//!
//! Contains cancellation checking and the timeout/retry wrapper used for
//! every agent invocation (debater turns, checkpoint analysis, judging).

use crate::config::BehaviorConfig;
use crate::ports::agent_gateway::GatewayError;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Check if cancellation has been requested.
pub(crate) fn is_cancelled(token: &Option<CancellationToken>) -> bool {
    token.as_ref().is_some_and(|t| t.is_cancelled())
}

/// Invoke an agent with a per-attempt timeout and bounded retries.
///
/// Timeouts and failed requests are retried with exponential backoff up to
/// `behavior.max_retries` times. Other errors return immediately. The last
/// error is returned once retries are exhausted.
pub(crate) async fn invoke_with_retry<T, F, Fut>(
    behavior: &BehaviorConfig,
    label: &str,
    mut call: F,
) -> Result<T, GatewayError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GatewayError>>,
{
    let mut attempt = 0;
    loop {
        let result = match behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, call())
                .await
                .unwrap_or(Err(GatewayError::Timeout)),
            None => call().await,
        };

        match result {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < behavior.max_retries => {
                attempt += 1;
                let delay = behavior.backoff_for(attempt);
                warn!(
                    "{} failed ({}), retry {}/{} in {:?}",
                    label, e, attempt, behavior.max_retries, delay
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => {
                debug!("{} gave up after {} retries: {}", label, attempt, e);
                return Err(e);
            }
        }
    }
}
