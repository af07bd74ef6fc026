// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible range computation for fixed-height lists.

use core::ops::Range;

use crate::ListGeometry;

/// The contiguous slice of items a host should realize.
///
/// The range is half-open: items `start..end` are realized. `render_offset`
/// is the distance from the top of the list to item `start`; hosts translate
/// the realized slice by this amount so it lines up with its position in the
/// full list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VisibleRange {
    /// First realized index (inclusive).
    pub start: usize,
    /// One past the last realized index.
    pub end: usize,
    /// Offset of item `start` from the top of the list.
    pub render_offset: usize,
}

impl VisibleRange {
    /// The range for an empty list.
    pub const EMPTY: Self = Self {
        start: 0,
        end: 0,
        render_offset: 0,
    };

    /// Number of realized items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if no items are realized.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns `true` if `index` is realized.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Returns the realized indices as a [`Range`].
    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the realized part of `items`.
    ///
    /// Bounds are clamped to `items.len()`, so a range computed for a longer
    /// list never panics when applied to a shorter one.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }
}

/// Computes which items must be realized to cover the viewport.
///
/// `scroll_offset` is the distance scrolled from the top of the list.
/// Offsets past the end of the content are tolerated: once leading overscan
/// is applied, `start` clamps to the last item. This can happen transiently
/// while content shrinks or the viewport is resized.
///
/// The result covers the item at the top of the viewport, every item needed to
/// fill `viewport_height`, and up to `overscan` items on each side. Trailing
/// overscan is bounded by `start + visible + 2 * overscan`, so near the top of
/// the list the unused leading overscan is spent after the window instead.
///
/// ```rust
/// use understory_virtual_list::{ListGeometry, compute_visible_range};
///
/// let geometry = ListGeometry::new(400, 800, 3).unwrap();
/// let range = compute_visible_range(4000, 100, &geometry);
/// assert_eq!(range.start, 7);
/// assert_eq!(range.render_offset, 2800);
/// assert!(range.contains(10));
/// ```
#[must_use]
pub fn compute_visible_range(
    scroll_offset: usize,
    total_item_count: usize,
    geometry: &ListGeometry,
) -> VisibleRange {
    if total_item_count == 0 {
        return VisibleRange::EMPTY;
    }

    let item_height = geometry.item_height();
    let overscan = geometry.overscan();

    let start = (scroll_offset / item_height)
        .saturating_sub(overscan)
        .min(total_item_count - 1);
    let end = start
        .saturating_add(geometry.visible_item_estimate())
        .saturating_add(overscan.saturating_mul(2))
        .min(total_item_count);

    VisibleRange {
        start,
        end,
        render_offset: start.saturating_mul(item_height),
    }
}

/// Total height of a list of `total_item_count` items.
///
/// Hosts size the scrollable content to this so native scrollbars reflect the
/// full list even though only a slice is realized.
#[must_use]
pub const fn compute_total_height(total_item_count: usize, item_height: usize) -> usize {
    total_item_count.saturating_mul(item_height)
}
