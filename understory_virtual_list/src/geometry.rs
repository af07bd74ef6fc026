// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated list geometry and viewport state.

use core::fmt;

/// Error returned when a [`ListGeometry`] would be degenerate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryError {
    /// Every item must be at least one unit tall.
    ZeroItemHeight,
    /// The viewport must be at least one unit tall.
    ZeroViewportHeight,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroItemHeight => f.write_str("item height must be greater than zero"),
            Self::ZeroViewportHeight => f.write_str("viewport height must be greater than zero"),
        }
    }
}

impl core::error::Error for GeometryError {}

/// Fixed geometry of a virtualized list.
///
/// All items share the same `item_height`. `overscan` is the number of extra
/// items realized before the first and after the last visible item so fast
/// scrolling does not show blank rows.
///
/// A `ListGeometry` can only be built through [`ListGeometry::new`], which
/// rejects zero heights, so the calculator never divides by zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListGeometry {
    item_height: usize,
    viewport_height: usize,
    overscan: usize,
}

impl ListGeometry {
    /// Creates a geometry, validating that both heights are non-zero.
    pub fn new(
        item_height: usize,
        viewport_height: usize,
        overscan: usize,
    ) -> Result<Self, GeometryError> {
        if item_height == 0 {
            return Err(GeometryError::ZeroItemHeight);
        }
        if viewport_height == 0 {
            return Err(GeometryError::ZeroViewportHeight);
        }
        Ok(Self {
            item_height,
            viewport_height,
            overscan,
        })
    }

    /// Height of every item.
    #[must_use]
    pub const fn item_height(&self) -> usize {
        self.item_height
    }

    /// Height of the scrolling viewport.
    #[must_use]
    pub const fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Number of extra items realized on each side of the visible window.
    #[must_use]
    pub const fn overscan(&self) -> usize {
        self.overscan
    }

    /// Number of items needed to cover the viewport, rounding up.
    #[must_use]
    pub const fn visible_item_estimate(&self) -> usize {
        self.viewport_height.div_ceil(self.item_height)
    }

    /// Returns a copy with a different viewport height.
    pub fn with_viewport_height(self, viewport_height: usize) -> Result<Self, GeometryError> {
        Self::new(self.item_height, viewport_height, self.overscan)
    }

    /// Returns a copy with a different overscan.
    #[must_use]
    pub const fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }
}

/// Scroll position and viewport size reported by the host.
///
/// This is recreated on every scroll or resize notification.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ViewportState {
    /// Distance scrolled from the top of the list.
    pub scroll_offset: usize,
    /// Visible height of the scrolling container.
    pub viewport_height: usize,
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;

    use super::{GeometryError, ListGeometry};

    #[test]
    fn rejects_zero_item_height() {
        assert_eq!(
            ListGeometry::new(0, 800, 3),
            Err(GeometryError::ZeroItemHeight)
        );
    }

    #[test]
    fn rejects_zero_viewport_height() {
        assert_eq!(
            ListGeometry::new(400, 0, 3),
            Err(GeometryError::ZeroViewportHeight)
        );
    }

    #[test]
    fn visible_estimate_rounds_up() {
        let exact = ListGeometry::new(400, 800, 0).unwrap();
        assert_eq!(exact.visible_item_estimate(), 2);

        let partial = ListGeometry::new(400, 801, 0).unwrap();
        assert_eq!(partial.visible_item_estimate(), 3);

        let tiny = ListGeometry::new(400, 1, 0).unwrap();
        assert_eq!(tiny.visible_item_estimate(), 1);
    }

    #[test]
    fn with_viewport_height_revalidates() {
        let geometry = ListGeometry::new(20, 200, 2).unwrap();
        let resized = geometry.with_viewport_height(100).unwrap();
        assert_eq!(resized.viewport_height(), 100);
        assert_eq!(resized.overscan(), 2);
        assert_eq!(
            geometry.with_viewport_height(0),
            Err(GeometryError::ZeroViewportHeight)
        );
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            GeometryError::ZeroItemHeight.to_string(),
            "item height must be greater than zero"
        );
    }
}
