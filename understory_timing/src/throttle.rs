// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading and trailing edge throttle.

/// Limits how often a bursty event stream triggers work.
///
/// The first event after a quiet period fires immediately (leading edge).
/// Events arriving within `interval_ms` of the last fire are coalesced into a
/// single pending trailing fire, which the host collects with
/// [`Throttle::poll`] once the interval has elapsed. The trailing fire makes
/// sure the final scroll position of a burst is always processed.
///
/// Time is supplied by the host as monotonic milliseconds. A clock that goes
/// backwards is treated as "no time elapsed".
///
/// ```rust
/// use understory_timing::Throttle;
///
/// let mut throttle = Throttle::new(16);
/// assert!(throttle.on_event(0));
/// assert!(!throttle.on_event(5));
/// assert!(!throttle.poll(10));
/// assert!(throttle.poll(16));
/// ```
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: u64,
    last_fire: Option<u64>,
    pending: bool,
}

impl Throttle {
    /// Creates a throttle that fires at most once per `interval_ms`.
    ///
    /// An interval of `0` fires on every event.
    #[must_use]
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fire: None,
            pending: false,
        }
    }

    /// The minimum time between fires.
    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Changes the interval. Pending state is kept.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
    }

    /// Records an event at `now_ms`.
    ///
    /// Returns `true` if the caller should do the work now.
    pub fn on_event(&mut self, now_ms: u64) -> bool {
        if self.elapsed(now_ms) {
            self.fire(now_ms);
            true
        } else {
            self.pending = true;
            false
        }
    }

    /// Returns `true` once if a coalesced event is due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.pending && self.elapsed(now_ms) {
            self.fire(now_ms);
            true
        } else {
            false
        }
    }

    /// Returns `true` if an event is waiting for a trailing fire.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Time at which the pending trailing fire becomes due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        if !self.pending {
            return None;
        }
        self.last_fire
            .map(|last| last.saturating_add(self.interval_ms))
    }

    /// Drops a pending trailing fire without touching the last fire time.
    ///
    /// Use this when the caller handled the coalesced event some other way,
    /// so a later [`Throttle::poll`] does not fire for nothing.
    pub fn clear_pending(&mut self) {
        self.pending = false;
    }

    /// Forgets the last fire and any pending event.
    pub fn reset(&mut self) {
        self.last_fire = None;
        self.pending = false;
    }

    fn elapsed(&self, now_ms: u64) -> bool {
        match self.last_fire {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }

    fn fire(&mut self, now_ms: u64) {
        #[cfg(feature = "tracing")]
        tracing::trace!(now_ms, trailing = self.pending, "throttle fired");
        self.last_fire = Some(now_ms);
        self.pending = false;
    }
}
