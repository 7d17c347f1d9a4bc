// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use web_sys::{Document, Element, Window};

use crate::host::VisibilityHost;

/// [`VisibilityHost`] backed by a browser window and its document.
#[derive(Clone, Debug)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// Wraps an explicit window and document.
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Uses the global `window` and its `document`, if both exist.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self::new(window, document))
    }
}

impl VisibilityHost for WebHost {
    type Element = Element;

    fn find_element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn measure_bounding_rect(&self, element: &Element) -> Rect {
        let r = element.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }

    fn inner_size(&self) -> Option<Size> {
        let width = self.window.inner_width().ok()?.as_f64()?;
        let height = self.window.inner_height().ok()?.as_f64()?;
        Some(Size::new(width, height))
    }

    fn client_size(&self) -> Size {
        self.document
            .document_element()
            .map(|root| Size::new(f64::from(root.client_width()), f64::from(root.client_height())))
            .unwrap_or(Size::ZERO)
    }

    fn scroll_into_view(&mut self, element: &Element) {
        element.scroll_into_view();
    }
}
