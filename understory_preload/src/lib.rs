// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Preload: a bounded cache for resources a view is about to need.
//!
//! Virtualized lists only realize a window of items, but scrolling feels
//! smoother if the images (or other resources) referenced by that window are
//! already loaded when the items appear. This crate provides
//! [`PreloadCache`], an explicitly owned cache that:
//!
//! - tells the host which keys still need loading ([`PreloadCache::request`]),
//! - records load outcomes without treating failures as fatal
//!   ([`PreloadCache::complete`]),
//! - and bounds memory with an approximate LRU over a fixed entry count.
//!
//! The cache performs no I/O and owns no tasks; hosts run the loads however
//! they like and report back. It is meant to be created once per session and
//! passed by reference to the views that need it.
//!
//! ## Features
//!
//! - `tracing`: log failed loads at `warn` and evictions at `trace`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;

pub use cache::{PreloadCache, PreloadState, WindowStatus};
