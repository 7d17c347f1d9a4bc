// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;

use kurbo::{Rect, Size};

use crate::viewport::resolve_viewport_size;

/// Capabilities a document host exposes to the visibility checks.
///
/// This replaces ambient access to "the current document" and "the current
/// window". Implementations wrap a real rendering host (see `WebHost` on
/// `wasm32`) or model one in memory (see [`crate::HeadlessDocument`]).
///
/// All calls are synchronous and are made from a single thread.
pub trait VisibilityHost {
    /// Handle to an element in the host document.
    ///
    /// Handles are logged when found, hence the `Debug` bound.
    type Element: Debug;

    /// Looks up an element by its identifier.
    fn find_element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Measures the element's bounding rectangle in viewport coordinates.
    ///
    /// `x0`/`y0` are the left/top edges, `x1`/`y1` the right/bottom edges,
    /// measured from the top‑left of the layout viewport.
    fn measure_bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Primary viewport size source, if the host exposes one.
    ///
    /// In a browser this is the window's inner size.
    fn inner_size(&self) -> Option<Size>;

    /// Secondary viewport size source.
    ///
    /// In a browser this is the root document element's client size.
    fn client_size(&self) -> Size;

    /// Returns the current viewport size.
    ///
    /// The default resolves [`VisibilityHost::inner_size`] against
    /// [`VisibilityHost::client_size`] with [`resolve_viewport_size`].
    fn viewport_size(&self) -> Size {
        resolve_viewport_size(self.inner_size(), self.client_size())
    }

    /// Scrolls the element into view using the host's default behavior.
    fn scroll_into_view(&mut self, element: &Self::Element);
}
