//! The spinner task and the handle that controls it
//!
//! [`spawn`] starts the animation as a Tokio task and hands back a
//! [`SpinnerHandle`]. The task only notices cancellation between frames, so a
//! frame is never cut off half written. A spinner cancelled before its first
//! frame draws nothing. Once cancelled it blanks its line and reports
//! [`SpinnerState::Stopped`]. A failed write ends the task early, but it still
//! reports [`SpinnerState::Stopped`].
//!
//! ```text
//!   Running ──cancel while sleeping──► CancelRequested ──line blanked──► Stopped
//! ```

use super::frames::Frames;
use super::status_line::{LineEraser, StatusLine};
use crate::error::AppError;
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;

/// Lifecycle of a spawned spinner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerState {
    Running,
    CancelRequested,
    Stopped,
}

/// Starts the spinner on the current Tokio runtime without waiting for it
///
/// The returned handle is the only way to stop the animation. Dropping the handle
/// cancels the spinner too, but only [`SpinnerHandle::stop`] waits for the line to
/// be blanked.
pub fn spawn<W>(out: W, label: impl Into<String>, interval: Duration) -> SpinnerHandle
where
    W: Write + Send + 'static,
{
    let token = CancellationToken::new();
    let (state_tx, state_rx) = watch::channel(SpinnerState::Running);
    let task = tokio::spawn(spin(out, label.into(), interval, token.clone(), state_tx));

    SpinnerHandle {
        token,
        task: Some(task),
        state: state_rx,
    }
}

async fn spin<W: Write>(
    out: W,
    label: String,
    interval: Duration,
    token: CancellationToken,
    state: watch::Sender<SpinnerState>,
) -> io::Result<()> {
    let mut line = LineEraser::new(out);

    let outcome = animate(&mut line, &label, interval, &token).await;
    if let Ok(drawn) = outcome {
        state.send_replace(SpinnerState::CancelRequested);
        tracing::debug!(frames = drawn, width = line.width(), "Spinner cancelled, blanking line");
    }
    let outcome = outcome.and_then(|_| line.clear());

    // A failed draw still gets its best-effort blanking before Stopped is reported
    drop(line);
    state.send_replace(SpinnerState::Stopped);
    outcome
}

/// Draws frames until cancelled, returning how many were drawn
async fn animate<W: Write>(
    line: &mut LineEraser<W>,
    label: &str,
    interval: Duration,
    token: &CancellationToken,
) -> io::Result<u64> {
    let mut drawn = 0u64;

    for glyph in Frames::new() {
        if token.is_cancelled() {
            break;
        }
        line.draw(&StatusLine::new(glyph, label))?;
        drawn += 1;
        tracing::trace!(glyph = %glyph, frame = drawn, "Drew spinner frame");

        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = time::sleep(interval) => {}
        }
    }

    Ok(drawn)
}

/// Owner's handle on a running spinner
pub struct SpinnerHandle {
    token: CancellationToken,
    task: Option<JoinHandle<io::Result<()>>>,
    state: watch::Receiver<SpinnerState>,
}

impl SpinnerHandle {
    /// Asks the spinner to stop at its next pause; repeated calls do nothing
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!("Cancelling spinner");
        }
        self.token.cancel();
    }

    pub fn state(&self) -> SpinnerState {
        *self.state.borrow()
    }

    pub fn is_stopped(&self) -> bool {
        self.state() == SpinnerState::Stopped
    }

    /// Cancels the spinner and waits until its line has been blanked
    ///
    /// Calling this on an already stopped spinner returns immediately without
    /// writing anything.
    pub async fn stop(&mut self) -> Result<(), AppError> {
        self.cancel();
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        task.await??;
        tracing::debug!("Spinner stopped");
        Ok(())
    }
}

impl Drop for SpinnerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl fmt::Debug for SpinnerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinnerHandle")
            .field("state", &self.state())
            .field("cancelled", &self.token.is_cancelled())
            .field("joined", &self.task.is_none())
            .finish()
    }
}
