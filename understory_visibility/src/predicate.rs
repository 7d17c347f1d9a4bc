// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

bitflags::bitflags! {
    /// Edges of a bounding rectangle that lie outside the viewport.
    ///
    /// An empty set means the rectangle is fully visible. An edge whose
    /// comparison involves `NaN` is reported as outside.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct OutsideEdges: u8 {
        /// `top < 0`.
        const TOP = 1 << 0;
        /// `left < 0`.
        const LEFT = 1 << 1;
        /// `right > viewport.width`.
        const RIGHT = 1 << 2;
        /// `bottom > viewport.height`.
        const BOTTOM = 1 << 3;
    }
}

/// Returns which edges of `rect` fall outside a viewport of size `viewport`.
///
/// `rect` is in viewport coordinates: `x0`/`y0` are the left/top edges and
/// `x1`/`y1` are the right/bottom edges, as reported by a bounding‑rect
/// measurement. The viewport spans `[0, width] x [0, height]`, inclusive.
#[must_use]
#[allow(
    clippy::neg_cmp_op_on_partial_ord,
    reason = "negated comparisons put NaN on the outside"
)]
pub fn outside_edges(rect: Rect, viewport: Size) -> OutsideEdges {
    let mut edges = OutsideEdges::empty();
    if !(rect.y0 >= 0.0) {
        edges |= OutsideEdges::TOP;
    }
    if !(rect.x0 >= 0.0) {
        edges |= OutsideEdges::LEFT;
    }
    if !(rect.x1 <= viewport.width) {
        edges |= OutsideEdges::RIGHT;
    }
    if !(rect.y1 <= viewport.height) {
        edges |= OutsideEdges::BOTTOM;
    }
    edges
}

/// Returns `true` if `rect` lies entirely within the viewport.
///
/// Edges are inclusive, so a rectangle exactly matching the viewport is fully
/// visible.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_visibility::is_fully_visible;
///
/// let viewport = Size::new(1024.0, 768.0);
/// assert!(is_fully_visible(Rect::new(10.0, 10.0, 500.0, 400.0), viewport));
/// assert!(!is_fully_visible(Rect::new(10.0, -5.0, 500.0, 400.0), viewport));
/// ```
#[must_use]
pub fn is_fully_visible(rect: Rect, viewport: Size) -> bool {
    outside_edges(rect, viewport).is_empty()
}
