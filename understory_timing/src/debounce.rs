// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing edge debounce.

/// Fires once after an event stream has been quiet for `quiet_ms`.
///
/// Every event pushes the deadline out. Hosts call [`Debounce::poll`] from
/// their frame or timer callback; it returns `true` exactly once per burst.
/// This is the usual way to detect "scrolling stopped" without a native
/// scroll-end event.
///
/// ```rust
/// use understory_timing::Debounce;
///
/// let mut settle = Debounce::new(150);
/// settle.on_event(0);
/// settle.on_event(100);
/// assert!(!settle.poll(200));
/// assert!(settle.poll(250));
/// assert!(!settle.poll(400));
/// ```
#[derive(Clone, Debug)]
pub struct Debounce {
    quiet_ms: u64,
    deadline: Option<u64>,
}

impl Debounce {
    /// Creates an idle debounce with the given quiet period.
    #[must_use]
    pub const fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            deadline: None,
        }
    }

    /// The quiet period.
    #[must_use]
    pub const fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }

    /// Records an event at `now_ms`, restarting the quiet period.
    pub fn on_event(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.quiet_ms));
    }

    /// Returns `true` once when the quiet period has passed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                #[cfg(feature = "tracing")]
                tracing::trace!(now_ms, "debounce settled");
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` while waiting for the quiet period to pass.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time at which the pending fire becomes due.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Drops the pending fire.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
