//! Connection bootstrap
//!
//! The PLM client may not be running when the tool starts, so login is
//! polled at a fixed interval until it reports ready. The wait is
//! cancellable through a [`CancelToken`] and can be bounded through
//! [`Retry::max_attempts`]; sleeping goes through the [`Clock`] trait so
//! tests run without real delays.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::session::{LoginStatus, PlmSession};

/// Sleep abstraction injected into the retry loop.
pub trait Clock {
    fn sleep(&self, duration: Duration);
}

/// Real wall-clock sleeping.
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Shared flag to abort a connection wait from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Retry policy for the login loop.
#[derive(Debug, Clone)]
pub struct Retry {
    /// Delay between login attempts.
    pub interval: Duration,
    /// Maximum number of attempts, or `None` to retry until cancelled.
    pub max_attempts: Option<usize>,
}

impl Default for Retry {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_attempts: None,
        }
    }
}

/// Errors ending a connection wait without a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConnectError {
    #[error("connection wait was cancelled")]
    Cancelled,
    #[error("connection not established after {0} attempts")]
    AttemptsExhausted(usize),
}

/// Poll `session.login()` until it reports [`LoginStatus::Ready`].
///
/// A login error is treated the same as not-ready and retried; only
/// cancellation or an exhausted attempt budget end the wait unsuccessfully.
pub fn connect<S: PlmSession>(
    session: &mut S,
    clock: &dyn Clock,
    cancel: &CancelToken,
    retry: &Retry,
) -> Result<(), ConnectError> {
    info!("connecting to the PLM client");
    let mut attempts = 0usize;
    loop {
        if cancel.is_cancelled() {
            return Err(ConnectError::Cancelled);
        }
        attempts += 1;
        match session.login() {
            Ok(LoginStatus::Ready) => {
                info!(attempts, "connection established");
                return Ok(());
            }
            Ok(LoginStatus::NotReady) => {
                debug!(attempts, "client not ready, waiting");
            }
            Err(err) => {
                warn!(attempts, error = %err, "login attempt failed, waiting");
            }
        }
        if let Some(max) = retry.max_attempts {
            if attempts >= max {
                return Err(ConnectError::AttemptsExhausted(attempts));
            }
        }
        clock.sleep(retry.interval);
    }
}
