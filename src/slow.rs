use crate::constants::ANSWER;
use std::time::Duration;
use tokio::time;

/// Stands in for a long-running operation: waits out `delay`, then answers
///
/// Writes nothing and cannot fail.
pub async fn slow_function(delay: Duration) -> i64 {
    tracing::debug!(delay_ms = delay.as_millis() as u64, "Starting slow computation");
    time::sleep(delay).await;
    ANSWER
}
