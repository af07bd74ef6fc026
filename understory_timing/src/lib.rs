// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Timing: host-clock rate limiting for UI event streams.
//!
//! Scroll and resize notifications arrive far more often than a list needs to
//! recompute. This crate provides two small policies that turn a bursty event
//! stream into a bounded amount of work:
//!
//! - [`Throttle`]: at most one fire per interval, with a trailing fire so the
//!   last event of a burst is never lost.
//! - [`Debounce`]: one fire after the stream has been quiet for a while.
//!
//! Neither policy owns a timer. The host passes its own monotonic clock in
//! milliseconds to every call and polls from whatever frame or timer callback
//! it already has. This keeps the policies deterministic and testable without
//! an event loop.
//!
//! ```rust
//! use understory_timing::{Debounce, Throttle};
//!
//! let mut recompute = Throttle::new(16);
//! let mut settled = Debounce::new(150);
//!
//! for now in [0, 4, 8, 12] {
//!     if recompute.on_event(now) {
//!         // recompute the visible range
//!     }
//!     settled.on_event(now);
//! }
//!
//! assert!(recompute.poll(16));
//! assert!(settled.poll(162));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `trace` events when a policy fires.
//!
//! This crate is `no_std`.

#![no_std]

mod debounce;
mod throttle;

pub use debounce::Debounce;
pub use throttle::Throttle;
