// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_virtual_list --heading-base-level=0

//! Understory Virtual List: windowing for fixed-height lists.
//!
//! This crate decides which slice of a long, uniformly sized list should be
//! realized for a given scroll position, so that rendering cost is bounded by
//! the viewport instead of the list length.
//!
//! The core concepts are:
//!
//! - [`ListGeometry`]: validated item height, viewport height, and overscan.
//!   Zero heights are rejected with a [`GeometryError`].
//! - [`compute_visible_range`]: a pure function from a scroll offset and item
//!   count to a half-open [`VisibleRange`] plus the offset at which the
//!   realized slice should be placed.
//! - [`compute_total_height`]: the full content height, used to size the
//!   scrollable area.
//! - [`MemoizedCalculator`]: remembers the last input and result so repeated
//!   notifications with identical input skip recomputation.
//! - [`VirtualList`]: a controller holding scroll state and item count on top
//!   of a [`MemoizedCalculator`], with scroll clamping and index-based
//!   scrolling.
//!
//! This crate deliberately does **not** know about widgets or any particular
//! UI framework. Host frameworks are responsible for:
//!
//! - Owning the actual data and view instances.
//! - Calling [`VirtualList::visible_range`] when scroll or viewport changes.
//! - Realizing items `start..end` and translating them by `render_offset`.
//! - Sizing the scroll content to [`VirtualList::total_height`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_virtual_list::{ListGeometry, VirtualList};
//!
//! // 100 cards, 400 pixels each, in an 800 pixel viewport with 3 cards of overscan.
//! let geometry = ListGeometry::new(400, 800, 3).unwrap();
//! let mut list = VirtualList::new(geometry, 100);
//!
//! list.set_scroll_offset(4000);
//! let range = list.visible_range();
//! assert_eq!(range.start, 7);
//! assert!(range.contains(10));
//! assert_eq!(list.total_height(), 40_000);
//! ```
//!
//! All offsets and heights are in a caller-chosen unit, typically logical
//! pixels. Arithmetic saturates instead of overflowing, and scroll offsets
//! past the end of the content clamp to the last item.
//!
//! ## Features
//!
//! - `tracing`: emit a `trace` event whenever the memoized calculator
//!   recomputes.
//!
//! This crate is `no_std`.

#![no_std]

mod geometry;
mod memo;
mod virtual_list;
mod window;

pub use geometry::{GeometryError, ListGeometry, ViewportState};
pub use memo::{MemoStats, MemoizedCalculator};
pub use virtual_list::VirtualList;
pub use window::{VisibleRange, compute_total_height, compute_visible_range};
