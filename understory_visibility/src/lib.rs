// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_visibility --heading-base-level=0

//! Understory Visibility: viewport visibility checks and scroll‑into‑view.
//!
//! This crate answers one question, "is this element entirely inside the
//! viewport?", and acts on it by asking the host to scroll the element into
//! view when it is not. It focuses on:
//! - A pure predicate over a bounding rectangle and a viewport size.
//! - Viewport size resolution from a primary and a fallback source.
//! - Two entry points sharing that predicate: one that only reports, and one
//!   that scrolls if needed.
//!
//! It does **not** own a document, a layout engine or a scroll animation.
//! Callers provide those through the [`VisibilityHost`] trait, which exposes
//! element lookup, bounding‑rect measurement, the viewport size sources, and
//! the host's own scroll‑into‑view primitive. [`HeadlessDocument`] implements
//! it in memory; on `wasm32`, `WebHost` implements it with `web-sys`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_visibility::{
//!     HeadlessDocument, ScrollOutcome, VisibilityReport, is_fully_visible, report_visibility,
//!     scroll_into_view_if_needed,
//! };
//!
//! // `Rect::new(left, top, right, bottom)` in viewport coordinates.
//! let viewport = Size::new(1024.0, 768.0);
//! assert!(is_fully_visible(Rect::new(0.0, 0.0, 1024.0, 768.0), viewport));
//! assert!(!is_fully_visible(Rect::new(10.0, 10.0, 500.0, 900.0), viewport));
//!
//! let mut doc = HeadlessDocument::new(viewport);
//! doc.insert("card", Rect::new(10.0, 10.0, 500.0, 900.0));
//! assert!(matches!(
//!     report_visibility(&doc, "card"),
//!     VisibilityReport::NotFullyVisible(_)
//! ));
//! assert_eq!(scroll_into_view_if_needed(&mut doc, "missing"), ScrollOutcome::ElementNotFound);
//! ```
//!
//! ## Logging
//!
//! Records go through the `log` facade under [`LOG_TARGET`]. A missing element
//! produces exactly one warning; the found element and the scroll decision are
//! logged at debug level; [`report_visibility`] logs its verdict at info level.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod align;
mod check;
mod headless;
mod host;
mod predicate;
mod viewport;
#[cfg(target_arch = "wasm32")]
mod web;

pub use align::{ScrollAlign, scroll_offset_for};
pub use check::{
    ElementNotFound, LOG_TARGET, ScrollOutcome, VisibilityReport, measure_element,
    report_visibility, scroll_into_view_if_needed,
};
pub use headless::{HeadlessDocument, HeadlessElement};
pub use host::VisibilityHost;
pub use predicate::{OutsideEdges, is_fully_visible, outside_edges};
pub use viewport::resolve_viewport_size;
#[cfg(target_arch = "wasm32")]
pub use web::WebHost;
