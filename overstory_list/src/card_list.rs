// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The card list controller.

use alloc::vec::Vec;
use core::hash::Hash;

use understory_preload::{PreloadCache, WindowStatus};
use understory_timing::Throttle;
use understory_virtual_list::{GeometryError, ListGeometry, VirtualList, VisibleRange};

/// An item that can be shown as a card.
pub trait CardItem {
    /// Key identifying the card's image in a [`PreloadCache`].
    type ImageKey: Clone + Eq + Hash;

    /// The image this card displays, if any.
    fn image_key(&self) -> Option<Self::ImageKey>;
}

/// A virtualized list of cards.
///
/// Scroll notifications are throttled: the visible range is recomputed at
/// most once per throttle interval, and the last offset of a burst is applied
/// from [`CardList::tick`]. Resizes and item changes apply immediately.
#[derive(Clone, Debug)]
pub struct CardList<T> {
    items: Vec<T>,
    list: VirtualList,
    throttle: Throttle,
    pending_offset: Option<usize>,
    range: VisibleRange,
}

impl<T> CardList<T> {
    /// Creates a list scrolled to the top.
    ///
    /// `throttle_ms` bounds how often scroll events recompute the range;
    /// `0` recomputes on every event.
    #[must_use]
    pub fn new(items: Vec<T>, geometry: ListGeometry, throttle_ms: u64) -> Self {
        let mut list = VirtualList::new(geometry, items.len());
        let range = list.visible_range();
        Self {
            items,
            list,
            throttle: Throttle::new(throttle_ms),
            pending_offset: None,
            range,
        }
    }

    /// All items, realized or not.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replaces the items.
    ///
    /// The scroll offset is clamped to the new content height.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.list.set_len(self.items.len());
        self.list.clamp_scroll_offset();
        self.refresh();
    }

    /// The underlying windowing controller.
    #[must_use]
    pub fn virtual_list(&self) -> &VirtualList {
        &self.list
    }

    /// Reports a scroll event at `now_ms`.
    ///
    /// Returns `true` if the visible range changed.
    pub fn on_scroll(&mut self, scroll_offset: usize, now_ms: u64) -> bool {
        if self.throttle.on_event(now_ms) {
            self.pending_offset = None;
            self.apply_scroll(scroll_offset)
        } else {
            self.pending_offset = Some(scroll_offset);
            false
        }
    }

    /// Applies a throttled scroll offset once it is due.
    ///
    /// Hosts call this from their frame or timer callback. Returns `true` if
    /// the visible range changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.throttle.poll(now_ms) {
            return false;
        }
        match self.pending_offset.take() {
            Some(offset) => self.apply_scroll(offset),
            None => false,
        }
    }

    /// When the next [`CardList::tick`] has work to do, if anything is pending.
    #[must_use]
    pub fn next_tick_deadline(&self) -> Option<u64> {
        self.throttle.next_deadline()
    }

    /// Reports a new viewport height.
    ///
    /// Any throttled scroll offset is applied along with the resize. Returns
    /// `true` if the visible range changed.
    pub fn on_resize(&mut self, viewport_height: usize) -> Result<bool, GeometryError> {
        self.list.set_viewport_height(viewport_height)?;
        if let Some(offset) = self.pending_offset.take() {
            self.list.set_scroll_offset(offset);
            self.throttle.clear_pending();
        }
        Ok(self.refresh())
    }

    /// The most recently applied visible range.
    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        self.range
    }

    /// The realized items.
    #[must_use]
    pub fn visible_items(&self) -> &[T] {
        self.range.slice(&self.items)
    }

    /// The realized items with their indices in the full list.
    pub fn visible_indexed(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        (self.range.start..).zip(self.visible_items())
    }

    /// Height of the scrollable content.
    #[must_use]
    pub fn total_height(&self) -> usize {
        self.list.total_height()
    }

    fn apply_scroll(&mut self, scroll_offset: usize) -> bool {
        self.list.set_scroll_offset(scroll_offset);
        self.refresh()
    }

    fn refresh(&mut self) -> bool {
        let range = self.list.visible_range();
        if range == self.range {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            start = range.start,
            end = range.end,
            render_offset = range.render_offset,
            "card list window moved"
        );
        self.range = range;
        true
    }
}

impl<T: CardItem> CardList<T> {
    /// Requests the images of the realized cards.
    ///
    /// Returns the keys the host should start loading; keys already cached
    /// or in flight are skipped.
    pub fn preload_visible<V>(
        &self,
        cache: &mut PreloadCache<T::ImageKey, V>,
    ) -> Vec<T::ImageKey> {
        cache.request(self.visible_items().iter().filter_map(T::image_key))
    }

    /// Combined load state of the realized cards' images.
    #[must_use]
    pub fn visible_image_status<V>(
        &self,
        cache: &PreloadCache<T::ImageKey, V>,
    ) -> WindowStatus {
        let keys: Vec<T::ImageKey> = self
            .visible_items()
            .iter()
            .filter_map(T::image_key)
            .collect();
        cache.window_status(keys.iter())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use understory_preload::{PreloadCache, WindowStatus};
    use understory_virtual_list::ListGeometry;

    use super::{CardItem, CardList};

    #[derive(Clone, Debug, PartialEq)]
    struct Program {
        id: usize,
        image: Option<String>,
    }

    impl CardItem for Program {
        type ImageKey = String;

        fn image_key(&self) -> Option<String> {
            self.image.clone()
        }
    }

    fn programs(n: usize) -> Vec<Program> {
        (0..n)
            .map(|id| Program {
                id,
                // Every third program has no picture.
                image: (id % 3 != 0).then(|| alloc::format!("program-{id}.jpg")),
            })
            .collect()
    }

    fn list(n: usize, throttle_ms: u64) -> CardList<Program> {
        CardList::new(
            programs(n),
            ListGeometry::new(400, 800, 3).unwrap(),
            throttle_ms,
        )
    }

    #[test]
    fn initial_window_is_at_top() {
        let list = list(100, 16);
        assert_eq!(list.visible_range().as_range(), 0..8);
        assert_eq!(list.visible_items().len(), 8);
        assert_eq!(list.total_height(), 40_000);
    }

    #[test]
    fn throttled_scroll_applies_last_offset_on_tick() {
        let mut list = list(100, 16);
        assert!(list.on_scroll(4000, 0));
        assert_eq!(list.visible_range().start, 7);

        assert!(!list.on_scroll(8000, 5));
        assert!(!list.on_scroll(12000, 10));
        assert_eq!(list.visible_range().start, 7, "held back by the throttle");
        assert_eq!(list.next_tick_deadline(), Some(16));

        assert!(!list.tick(15));
        assert!(list.tick(16));
        assert_eq!(list.visible_range().start, 27);
        assert!(!list.tick(100));
    }

    #[test]
    fn unthrottled_scroll_applies_immediately() {
        let mut list = list(100, 0);
        assert!(list.on_scroll(4000, 0));
        assert!(list.on_scroll(8000, 0));
        assert_eq!(list.visible_range().start, 17);
    }

    #[test]
    fn scroll_within_same_item_reports_no_change() {
        let mut list = list(100, 0);
        assert!(list.on_scroll(4000, 0));
        assert!(!list.on_scroll(4100, 1));
    }

    #[test]
    fn resize_flushes_pending_scroll() {
        let mut list = list(100, 16);
        let _ = list.on_scroll(0, 0);
        let _ = list.on_scroll(4000, 1);
        assert!(list.on_resize(1600).unwrap());
        let range = list.visible_range();
        assert_eq!(range.start, 7);
        assert_eq!(range.end, 7 + 4 + 6);
        assert!(list.on_resize(0).is_err());
    }

    #[test]
    fn resize_consumes_the_trailing_scroll() {
        let mut list = list(100, 16);
        let _ = list.on_scroll(0, 0);
        let _ = list.on_scroll(4000, 1);
        assert!(list.on_resize(1600).unwrap());
        assert_eq!(list.next_tick_deadline(), None);

        // Nothing left for the tick to apply.
        assert!(!list.tick(16));

        // The interval counts from the scroll at 0, so this lands on the
        // leading edge instead of waiting for another tick.
        assert!(list.on_scroll(8000, 20));
        assert_eq!(list.visible_range().start, 17);
    }

    #[test]
    fn visible_indexed_reports_true_indices() {
        let mut list = list(100, 0);
        let _ = list.on_scroll(4000, 0);
        let ids: Vec<usize> = list.visible_indexed().map(|(i, _)| i).collect();
        assert_eq!(ids, (7..15).collect::<Vec<_>>());
        assert!(list.visible_indexed().all(|(i, program)| program.id == i));
    }

    #[test]
    fn shrinking_items_clamps_window() {
        let mut list = list(100, 0);
        let _ = list.on_scroll(39_000, 0);
        list.set_items(programs(4));
        assert_eq!(list.virtual_list().scroll_offset(), 800);
        assert_eq!(list.visible_range().as_range(), 0..4);
        assert_eq!(list.visible_items().len(), 4);
    }

    #[test]
    fn preloads_visible_images_once() {
        let list = list(100, 0);
        let mut cache = PreloadCache::<String, ()>::new(64);

        let first = list.preload_visible(&mut cache);
        // Items 0..8 minus those with id % 3 == 0 (0, 3, 6).
        assert_eq!(first.len(), 5);
        assert!(list.preload_visible(&mut cache).is_empty());
        assert_eq!(list.visible_image_status(&cache), WindowStatus::Loading);

        for key in first {
            cache.complete(key, Ok::<_, ()>(()));
        }
        assert_eq!(list.visible_image_status(&cache), WindowStatus::Ready);
    }

    #[test]
    fn failed_image_does_not_affect_window() {
        let mut list = list(100, 0);
        let mut cache = PreloadCache::<String, ()>::new(64);
        let keys = list.preload_visible(&mut cache);
        cache.complete(keys[0].clone(), Err("network"));
        assert_eq!(list.visible_image_status(&cache), WindowStatus::Failed);

        assert!(list.on_scroll(4000, 0));
        assert_eq!(list.visible_range().start, 7);
    }
}
