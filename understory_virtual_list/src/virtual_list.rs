// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller tying geometry, scroll state, and the memoized
//! calculator together.

use crate::{
    GeometryError, ListGeometry, MemoizedCalculator, ViewportState, VisibleRange,
    compute_total_height,
};

/// Scroll state and cached visible range for one fixed-height list.
///
/// Hosts feed scroll and resize notifications in, then read
/// [`VirtualList::visible_range`] to decide which items to realize.
#[derive(Clone, Debug)]
pub struct VirtualList {
    calc: MemoizedCalculator,
    scroll_offset: usize,
    len: usize,
}

impl VirtualList {
    /// Creates a controller scrolled to the top.
    #[must_use]
    pub fn new(geometry: ListGeometry, len: usize) -> Self {
        Self {
            calc: MemoizedCalculator::new(geometry),
            scroll_offset: 0,
            len,
        }
    }

    /// The current geometry.
    #[must_use]
    pub fn geometry(&self) -> &ListGeometry {
        self.calc.geometry()
    }

    /// The memoized calculator backing this list.
    #[must_use]
    pub fn calculator(&self) -> &MemoizedCalculator {
        &self.calc
    }

    /// Number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the number of items.
    ///
    /// The scroll offset is left alone; a stale offset past the new end is
    /// clamped when the range is computed. Call
    /// [`VirtualList::clamp_scroll_offset`] to also fix the stored offset.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Sets the scroll offset reported by the host.
    pub fn set_scroll_offset(&mut self, scroll_offset: usize) {
        self.scroll_offset = scroll_offset;
    }

    /// Current viewport state.
    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        ViewportState {
            scroll_offset: self.scroll_offset,
            viewport_height: self.geometry().viewport_height(),
        }
    }

    /// Applies a viewport update from the host.
    ///
    /// A changed viewport height rebuilds the geometry, which drops the
    /// memoized range. A zero height is rejected and leaves the list
    /// unchanged.
    pub fn apply_viewport(&mut self, viewport: ViewportState) -> Result<(), GeometryError> {
        self.set_viewport_height(viewport.viewport_height)?;
        self.scroll_offset = viewport.scroll_offset;
        Ok(())
    }

    /// Sets the viewport height.
    pub fn set_viewport_height(&mut self, viewport_height: usize) -> Result<(), GeometryError> {
        let geometry = self.geometry().with_viewport_height(viewport_height)?;
        self.calc.set_geometry(geometry);
        Ok(())
    }

    /// Sets the overscan.
    pub fn set_overscan(&mut self, overscan: usize) {
        let geometry = self.geometry().with_overscan(overscan);
        self.calc.set_geometry(geometry);
    }

    /// Returns the items to realize for the current scroll offset.
    pub fn visible_range(&mut self) -> VisibleRange {
        self.calc.compute(self.scroll_offset, self.len)
    }

    /// Total content height.
    #[must_use]
    pub fn total_height(&self) -> usize {
        compute_total_height(self.len, self.geometry().item_height())
    }

    /// Largest scroll offset that still fills the viewport.
    ///
    /// This is `0` when all content fits inside the viewport.
    #[must_use]
    pub fn max_scroll_offset(&self) -> usize {
        self.total_height()
            .saturating_sub(self.geometry().viewport_height())
    }

    /// Clamps the stored scroll offset to `0..=max_scroll_offset()`.
    ///
    /// Returns the clamped offset.
    pub fn clamp_scroll_offset(&mut self) -> usize {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
        self.scroll_offset
    }

    /// Scrolls so that item `index` starts at the top of the viewport.
    ///
    /// The offset is clamped, so indices near the end leave the last item at
    /// the bottom of the viewport instead. Out-of-range indices scroll to the
    /// end.
    pub fn scroll_to_index(&mut self, index: usize) -> usize {
        let target = index.saturating_mul(self.geometry().item_height());
        self.scroll_offset = target;
        self.clamp_scroll_offset()
    }
}
