// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::fmt;

use kurbo::Rect;

use crate::host::VisibilityHost;
use crate::predicate::{OutsideEdges, outside_edges};

/// Log target used for every record emitted by this crate.
pub const LOG_TARGET: &str = "understory_visibility";

/// No element with the requested identifier exists in the host document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementNotFound {
    /// The identifier that failed to resolve.
    pub id: String,
}

impl fmt::Display for ElementNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no element with id `{}` in the document", self.id)
    }
}

impl core::error::Error for ElementNotFound {}

/// Result of [`report_visibility`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityReport {
    /// The element lies entirely within the viewport.
    FullyVisible,
    /// At least one edge of the element lies outside the viewport.
    NotFullyVisible(OutsideEdges),
    /// The identifier did not resolve; a warning was logged.
    ElementNotFound,
}

impl VisibilityReport {
    /// Returns `true` for [`VisibilityReport::FullyVisible`].
    #[must_use]
    pub fn is_fully_visible(self) -> bool {
        matches!(self, Self::FullyVisible)
    }
}

/// Result of [`scroll_into_view_if_needed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The element was already fully visible; nothing was scrolled.
    AlreadyVisible,
    /// The host's scroll‑into‑view primitive was invoked once.
    Scrolled,
    /// The identifier did not resolve; a warning was logged.
    ElementNotFound,
}

/// Looks up `id` and measures its bounding rectangle in viewport coordinates.
///
/// This is the shared first step of [`report_visibility`] and
/// [`scroll_into_view_if_needed`]; unlike those, it hands the lookup failure
/// back to the caller and does not log it.
pub fn measure_element<H: VisibilityHost + ?Sized>(
    host: &H,
    id: &str,
) -> Result<Rect, ElementNotFound> {
    let element = find(host, id)?;
    Ok(host.measure_bounding_rect(&element))
}

/// Logs whether the element `id` is fully inside the viewport, without
/// scrolling.
///
/// A missing element is reported with a single warning and
/// [`VisibilityReport::ElementNotFound`].
pub fn report_visibility<H: VisibilityHost + ?Sized>(host: &H, id: &str) -> VisibilityReport {
    let element = match find(host, id) {
        Ok(element) => element,
        Err(err) => {
            log::warn!(target: LOG_TARGET, "{err}");
            return VisibilityReport::ElementNotFound;
        }
    };
    let rect = host.measure_bounding_rect(&element);
    let viewport = host.viewport_size();
    let edges = outside_edges(rect, viewport);
    if edges.is_empty() {
        log::info!(target: LOG_TARGET, "element `{id}` is in the viewport");
        VisibilityReport::FullyVisible
    } else {
        log::info!(
            target: LOG_TARGET,
            "element `{id}` is not in the viewport (outside: {edges:?}, rect: {rect:?}, viewport: {viewport:?})"
        );
        VisibilityReport::NotFullyVisible(edges)
    }
}

/// Scrolls the element `id` into view if it is not already fully visible.
///
/// The host's scroll primitive is invoked at most once, and only when the
/// element has an edge outside the viewport. Calling this again right after a
/// successful scroll is a no‑op as long as the element now fits.
///
/// A missing element is not an error: a single warning is logged and
/// [`ScrollOutcome::ElementNotFound`] is returned.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_visibility::{HeadlessDocument, ScrollOutcome, scroll_into_view_if_needed};
///
/// let mut doc = HeadlessDocument::new(Size::new(1024.0, 768.0));
/// doc.insert("footer", Rect::new(10.0, 1500.0, 500.0, 1600.0));
///
/// assert_eq!(scroll_into_view_if_needed(&mut doc, "footer"), ScrollOutcome::Scrolled);
/// assert_eq!(scroll_into_view_if_needed(&mut doc, "footer"), ScrollOutcome::AlreadyVisible);
/// assert_eq!(doc.scroll_count(), 1);
/// ```
pub fn scroll_into_view_if_needed<H: VisibilityHost + ?Sized>(
    host: &mut H,
    id: &str,
) -> ScrollOutcome {
    let element = match find(host, id) {
        Ok(element) => element,
        Err(err) => {
            log::warn!(target: LOG_TARGET, "{err}");
            return ScrollOutcome::ElementNotFound;
        }
    };
    let rect = host.measure_bounding_rect(&element);
    let edges = outside_edges(rect, host.viewport_size());
    if edges.is_empty() {
        log::debug!(target: LOG_TARGET, "element `{id}` already visible");
        return ScrollOutcome::AlreadyVisible;
    }
    log::debug!(target: LOG_TARGET, "scrolling `{id}` into view (outside: {edges:?})");
    host.scroll_into_view(&element);
    ScrollOutcome::Scrolled
}

fn find<H: VisibilityHost + ?Sized>(host: &H, id: &str) -> Result<H::Element, ElementNotFound> {
    match host.find_element_by_id(id) {
        Some(element) => {
            log::debug!(target: LOG_TARGET, "found `{id}`: {element:?}");
            Ok(element)
        }
        None => Err(ElementNotFound { id: id.to_string() }),
    }
}
