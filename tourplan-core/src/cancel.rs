//! Cooperative cancellation for long-running solves.
//!
//! Only the exact solver checks the token, between subset-size passes.
//! Cancellation is reported as [`SolveError::Cancelled`], never as a tour.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::SolveError;

/// Shared flag plus optional deadline.
///
/// Clones share the flag, so a caller can keep one clone and cancel a solve
/// running on another thread. [`CancellationToken::never`] carries no flag
/// at all.
///
/// # Examples
/// ```
/// use tourplan_core::CancellationToken;
///
/// let token = CancellationToken::new();
/// let worker = token.clone();
/// assert!(!worker.is_cancelled());
/// token.cancel();
/// assert!(worker.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    flag: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    /// A token that only fires when [`CancellationToken::cancel`] is called.
    #[must_use]
    pub fn new() -> Self {
        Self {
            flag: Some(Arc::new(AtomicBool::new(false))),
            deadline: None,
        }
    }

    /// A token that never fires on its own.
    ///
    /// [`CancellationToken::cancel`] is a no-op on it and its clones; only a
    /// deadline added with [`CancellationToken::with_deadline`] can fire it.
    ///
    /// # Examples
    /// ```
    /// use tourplan_core::CancellationToken;
    ///
    /// let token = CancellationToken::never();
    /// token.cancel();
    /// assert!(token.check().is_ok());
    /// ```
    #[must_use]
    pub const fn never() -> Self {
        Self {
            flag: None,
            deadline: None,
        }
    }

    /// Also fire once `timeout` has elapsed from now.
    ///
    /// A timeout too large to represent is treated as no deadline.
    #[must_use]
    pub fn with_deadline(self, timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
            ..self
        }
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        if let Some(flag) = &self.flag {
            flag.store(true, Ordering::Relaxed);
        }
    }

    /// Whether cancellation was requested or the deadline has passed.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
            || self
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Return [`SolveError::Cancelled`] if the token has fired.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Cancelled`] once [`Self::is_cancelled`] holds.
    pub fn check(&self) -> Result<(), SolveError> {
        if self.is_cancelled() {
            return Err(SolveError::Cancelled);
        }
        Ok(())
    }
}
