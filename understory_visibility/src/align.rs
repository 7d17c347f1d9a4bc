// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Where an element should land along one axis when scrolled into view.
///
/// The defaults of [`crate::HeadlessDocument`] follow the browser default for
/// `Element.scrollIntoView()`: [`ScrollAlign::Start`] on the block (vertical)
/// axis and [`ScrollAlign::Nearest`] on the inline (horizontal) axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Align the element's start edge with the viewport's start edge.
    #[default]
    Start,
    /// Center the element within the viewport.
    Center,
    /// Align the element's end edge with the viewport's end edge.
    End,
    /// Scroll the minimum distance needed; leave the offset alone when the
    /// element already fits.
    Nearest,
}

/// Computes the scroll offset along one axis that brings an element into view.
///
/// `start`/`end` are the element's edges and `scroll` the current offset, all
/// in document coordinates; `extent` is the viewport length on this axis. The
/// result is not clamped to the scrollable range.
#[must_use]
pub fn scroll_offset_for(start: f64, end: f64, scroll: f64, extent: f64, align: ScrollAlign) -> f64 {
    match align {
        ScrollAlign::Start => start,
        ScrollAlign::Center => start - (extent - (end - start)) * 0.5,
        ScrollAlign::End => end - extent,
        ScrollAlign::Nearest => {
            if start < scroll {
                start
            } else if end > scroll + extent {
                end - extent
            } else {
                scroll
            }
        }
    }
}
