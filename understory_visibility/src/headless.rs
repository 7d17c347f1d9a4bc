// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Rect, Size, Vec2};

use crate::align::{ScrollAlign, scroll_offset_for};
use crate::host::VisibilityHost;

/// Handle to an element of a [`HeadlessDocument`].
///
/// A slot index plus a generation counter.
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any handle that pointed to it is now stale.
/// - On reuse of a freed slot, its generation is incremented, so stale handles
///   never alias the new element.
///
/// Stale handles, and handles whose slot does not exist in the document they
/// are used with, measure as [`Rect::ZERO`] and are ignored by
/// [`VisibilityHost::scroll_into_view`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HeadlessElement(u32, u32);

impl HeadlessElement {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    rect: Option<Rect>,
}

/// In‑memory document host.
///
/// `HeadlessDocument` keeps a registry of elements with rectangles in
/// document coordinates, a scroll offset, and the two viewport size sources.
/// It can be used to:
/// - Drive [`crate::scroll_into_view_if_needed`] and
///   [`crate::report_visibility`] without a rendering host.
/// - Observe how many times the scroll primitive was invoked.
///
/// Bounding rectangles are reported in viewport coordinates, that is the
/// document rectangle shifted by the negated scroll offset. Scrolling follows
/// the configured [`ScrollAlign`] per axis and is clamped to the content
/// extent, which is the union of all element rectangles.
#[derive(Clone, Debug)]
pub struct HeadlessDocument {
    ids: HashMap<String, HeadlessElement>,
    slots: Vec<Slot>,
    free: Vec<u32>,
    scroll: Vec2,
    inner_size: Option<Size>,
    client_size: Size,
    block_align: ScrollAlign,
    inline_align: ScrollAlign,
    scroll_count: usize,
}

impl HeadlessDocument {
    /// Creates an empty document whose window reports `inner_size`.
    ///
    /// - The client size is zero, so `inner_size` is what the viewport uses.
    /// - Initial scroll offset is zero.
    /// - Block alignment is [`ScrollAlign::Start`], inline alignment is
    ///   [`ScrollAlign::Nearest`].
    #[must_use]
    pub fn new(inner_size: Size) -> Self {
        Self {
            ids: HashMap::new(),
            slots: Vec::new(),
            free: Vec::new(),
            scroll: Vec2::ZERO,
            inner_size: Some(inner_size),
            client_size: Size::ZERO,
            block_align: ScrollAlign::Start,
            inline_align: ScrollAlign::Nearest,
            scroll_count: 0,
        }
    }

    /// Inserts an element, or moves it if `id` is already present.
    ///
    /// `rect` is in document coordinates. The scroll offset is re‑clamped to
    /// the new content extent.
    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) -> HeadlessElement {
        let id = id.into();
        let element = match self.ids.get(&id) {
            Some(&element) => {
                self.slots[element.idx()].rect = Some(rect);
                element
            }
            None => {
                let element = self.alloc(rect);
                self.ids.insert(id, element);
                element
            }
        };
        self.scroll_to(self.scroll);
        element
    }

    /// Removes the element `id`, returning its document rectangle.
    ///
    /// Handles to the element become stale and the scroll offset is
    /// re‑clamped to the remaining content.
    pub fn remove(&mut self, id: &str) -> Option<Rect> {
        let element = self.ids.remove(id)?;
        let rect = self.slots[element.idx()].rect.take();
        self.free.push(element.0);
        self.scroll_to(self.scroll);
        rect
    }

    /// Returns `true` if `element` refers to a live element of this document.
    #[must_use]
    pub fn is_alive(&self, element: HeadlessElement) -> bool {
        self.live_rect(element).is_some()
    }

    /// Returns the document rectangle of `id`, if present.
    #[must_use]
    pub fn document_rect(&self, id: &str) -> Option<Rect> {
        self.ids.get(id).and_then(|&e| self.live_rect(e))
    }

    /// Sets the primary viewport size source. `None` models a window that
    /// does not expose its inner size.
    pub fn set_inner_size(&mut self, size: Option<Size>) {
        self.inner_size = size;
        self.scroll_to(self.scroll);
    }

    /// Sets the secondary viewport size source.
    pub fn set_client_size(&mut self, size: Size) {
        self.client_size = size;
        self.scroll_to(self.scroll);
    }

    /// Sets the alignment used on the block (vertical) axis.
    pub fn set_block_align(&mut self, align: ScrollAlign) {
        self.block_align = align;
    }

    /// Returns the alignment used on the block (vertical) axis.
    #[must_use]
    pub fn block_align(&self) -> ScrollAlign {
        self.block_align
    }

    /// Sets the alignment used on the inline (horizontal) axis.
    pub fn set_inline_align(&mut self, align: ScrollAlign) {
        self.inline_align = align;
    }

    /// Returns the alignment used on the inline (horizontal) axis.
    #[must_use]
    pub fn inline_align(&self) -> ScrollAlign {
        self.inline_align
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    /// Sets the scroll offset, clamped to the scrollable range.
    ///
    /// This does not count as an invocation of the scroll primitive.
    pub fn scroll_to(&mut self, offset: Vec2) {
        let max = self.max_scroll();
        self.scroll = Vec2::new(offset.x.clamp(0.0, max.x), offset.y.clamp(0.0, max.y));
    }

    /// Number of times [`VisibilityHost::scroll_into_view`] has run on a live
    /// element.
    #[must_use]
    pub fn scroll_count(&self) -> usize {
        self.scroll_count
    }

    /// Returns the union of all element rectangles, anchored at the document
    /// origin.
    #[must_use]
    pub fn content_extent(&self) -> Size {
        self.slots
            .iter()
            .filter_map(|slot| slot.rect)
            .fold(Size::ZERO, |acc, r| {
                Size::new(acc.width.max(r.max_x()), acc.height.max(r.max_y()))
            })
    }

    fn alloc(&mut self, rect: Rect) -> HeadlessElement {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.rect = Some(rect);
            return HeadlessElement(idx, slot.generation);
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "more than u32::MAX live elements is unsupported"
        )]
        let idx = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 1,
            rect: Some(rect),
        });
        HeadlessElement(idx, 1)
    }

    fn live_rect(&self, element: HeadlessElement) -> Option<Rect> {
        self.slots
            .get(element.idx())
            .filter(|slot| slot.generation == element.1)
            .and_then(|slot| slot.rect)
    }

    fn max_scroll(&self) -> Vec2 {
        let content = self.content_extent();
        let viewport = self.viewport_size();
        Vec2::new(
            (content.width - viewport.width).max(0.0),
            (content.height - viewport.height).max(0.0),
        )
    }
}

impl VisibilityHost for HeadlessDocument {
    type Element = HeadlessElement;

    fn find_element_by_id(&self, id: &str) -> Option<HeadlessElement> {
        self.ids.get(id).copied()
    }

    fn measure_bounding_rect(&self, element: &HeadlessElement) -> Rect {
        self.live_rect(*element)
            .map_or(Rect::ZERO, |rect| rect - self.scroll)
    }

    fn inner_size(&self) -> Option<Size> {
        self.inner_size
    }

    fn client_size(&self) -> Size {
        self.client_size
    }

    fn scroll_into_view(&mut self, element: &HeadlessElement) {
        let Some(rect) = self.live_rect(*element) else {
            return;
        };
        self.scroll_count += 1;
        let viewport = self.viewport_size();
        let x = scroll_offset_for(
            rect.min_x(),
            rect.max_x(),
            self.scroll.x,
            viewport.width,
            self.inline_align,
        );
        let y = scroll_offset_for(
            rect.min_y(),
            rect.max_y(),
            self.scroll.y,
            viewport.height,
            self.block_align,
        );
        self.scroll_to(Vec2::new(x, y));
    }
}
