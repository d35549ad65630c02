//! Runs the slow computation while the spinner animates
//!
//! ```text
//!   supervise()
//!     ├─ spinner::spawn() ───────────► spinner task (draws every frame_interval)
//!     ├─ slow_function().await             │
//!     ├─ handle.cancel() ──────────────────┤
//!     └─ handle.stop().await ◄── line blanked, Stopped
//! ```
//!
//! The answer is only returned after the spinner has blanked its line, so nothing
//! printed afterwards can end up next to a stale frame.

use crate::config::Config;
use crate::constants::{DEFAULT_LABEL, timing};
use crate::error::AppError;
use crate::slow::slow_function;
use crate::spinner;
use std::io::Write;
use std::time::Duration;

/// Settings for one supervised run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorConfig {
    pub label: String,
    pub frame_interval: Duration,
    pub delay: Duration,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            frame_interval: Duration::from_millis(timing::FRAME_INTERVAL_MS),
            delay: Duration::from_millis(timing::COMPUTATION_DELAY_MS),
        }
    }
}

impl From<&Config> for SupervisorConfig {
    fn from(config: &Config) -> Self {
        Self {
            label: config.label.clone(),
            frame_interval: config.frame_interval(),
            delay: config.delay(),
        }
    }
}

/// Animates a spinner on `out` until the slow computation answers
///
/// # Errors
/// Returns an error if the spinner fails to write or its task panics.
pub async fn supervise<W>(out: W, config: &SupervisorConfig) -> Result<i64, AppError>
where
    W: Write + Send + 'static,
{
    let mut spinner = spinner::spawn(out, config.label.clone(), config.frame_interval);
    tracing::info!(?spinner, label = %config.label, "Spinner spawned");

    let result = slow_function(config.delay).await;
    tracing::debug!(result, "Slow computation finished");

    spinner.cancel();
    spinner.stop().await?;

    Ok(result)
}
