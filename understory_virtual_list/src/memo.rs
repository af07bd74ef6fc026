// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoizing wrapper around [`compute_visible_range`].

use crate::{ListGeometry, VisibleRange, compute_visible_range};

/// Hit and miss counters for a [`MemoizedCalculator`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Calls answered from the cache.
    pub hits: u64,
    /// Calls that recomputed the range.
    pub misses: u64,
}

/// Remembers the most recent visible range for a fixed [`ListGeometry`].
///
/// Scroll and resize notifications often repeat the same input (for example a
/// resize that does not change the scroll position). The calculator keeps the
/// last `(scroll_offset, total_item_count)` pair and its result, and returns
/// the cached range only when both match exactly.
///
/// The cache is tied to the geometry: [`MemoizedCalculator::set_geometry`]
/// drops it.
///
/// ```rust
/// use understory_virtual_list::{ListGeometry, MemoizedCalculator};
///
/// let geometry = ListGeometry::new(20, 200, 2).unwrap();
/// let mut calc = MemoizedCalculator::new(geometry);
///
/// let first = calc.compute(100, 1_000);
/// let again = calc.compute(100, 1_000);
/// assert_eq!(first, again);
/// assert_eq!(calc.stats().hits, 1);
/// ```
#[derive(Clone, Debug)]
pub struct MemoizedCalculator {
    geometry: ListGeometry,
    last: Option<CacheEntry>,
    stats: MemoStats,
}

#[derive(Copy, Clone, Debug)]
struct CacheEntry {
    scroll_offset: usize,
    total_item_count: usize,
    range: VisibleRange,
}

impl MemoizedCalculator {
    /// Creates a calculator with an empty cache.
    #[must_use]
    pub fn new(geometry: ListGeometry) -> Self {
        Self {
            geometry,
            last: None,
            stats: MemoStats::default(),
        }
    }

    /// The geometry this calculator computes for.
    #[must_use]
    pub fn geometry(&self) -> &ListGeometry {
        &self.geometry
    }

    /// Replaces the geometry and drops the cached range.
    ///
    /// Setting an identical geometry keeps the cache.
    pub fn set_geometry(&mut self, geometry: ListGeometry) {
        if self.geometry != geometry {
            self.geometry = geometry;
            self.invalidate();
        }
    }

    /// Drops the cached range so the next call recomputes.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Returns the visible range, reusing the previous result when the inputs
    /// are unchanged.
    pub fn compute(&mut self, scroll_offset: usize, total_item_count: usize) -> VisibleRange {
        if let Some(entry) = self.last
            && entry.scroll_offset == scroll_offset
            && entry.total_item_count == total_item_count
        {
            self.stats.hits += 1;
            return entry.range;
        }

        let range = compute_visible_range(scroll_offset, total_item_count, &self.geometry);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            scroll_offset,
            total_item_count,
            start = range.start,
            end = range.end,
            "recomputed visible range"
        );
        self.stats.misses += 1;
        self.last = Some(CacheEntry {
            scroll_offset,
            total_item_count,
            range,
        });
        range
    }

    /// Returns the cached range without recomputing, if any.
    #[must_use]
    pub fn cached(&self) -> Option<VisibleRange> {
        self.last.map(|entry| entry.range)
    }

    /// Cache hit and miss counters since construction.
    #[must_use]
    pub fn stats(&self) -> MemoStats {
        self.stats
    }
}
