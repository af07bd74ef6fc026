// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory List: a virtualized card list.
//!
//! [`CardList`] is the piece a host mounts inside its scroll container. It
//! combines three Understory primitives:
//!
//! - `understory_virtual_list` decides which cards to realize,
//! - `understory_timing` throttles scroll notifications,
//! - `understory_preload` tracks the images of the realized cards.
//!
//! The host owns rendering and I/O. A typical frame looks like:
//!
//! ```rust
//! use overstory_list::{CardItem, CardList};
//! use understory_preload::PreloadCache;
//! use understory_virtual_list::ListGeometry;
//!
//! struct Card {
//!     image: &'static str,
//! }
//!
//! impl CardItem for Card {
//!     type ImageKey = &'static str;
//!
//!     fn image_key(&self) -> Option<&'static str> {
//!         Some(self.image)
//!     }
//! }
//!
//! let cards = (0..100).map(|_| Card { image: "cover.jpg" }).collect();
//! let geometry = ListGeometry::new(400, 800, 3).unwrap();
//! let mut list = CardList::new(cards, geometry, 16);
//!
//! // One cache for the whole session, shared by every list.
//! let mut images = PreloadCache::<&'static str, ()>::new(256);
//!
//! if list.on_scroll(4000, 0) {
//!     for key in list.preload_visible(&mut images) {
//!         // Start loading `key`, then report back with `images.complete`.
//!         images.complete(key, Ok::<_, ()>(()));
//!     }
//! }
//!
//! let range = list.visible_range();
//! assert_eq!(range.start, 7);
//! assert_eq!(list.visible_items().len(), range.len());
//! ```
//!
//! ## Features
//!
//! - `tracing`: log window changes at `debug`, and enable `tracing` in the
//!   underlying crates.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod card_list;

pub use card_list::{CardItem, CardList};
