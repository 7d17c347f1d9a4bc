// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_visibility` entry points against a headless host.
//!
//! These exercise the literal 1024x768 scenarios and the idempotence of
//! scrolling an element that has just been brought into view.

use kurbo::{Rect, Size, Vec2};
use understory_visibility::{
    HeadlessDocument, OutsideEdges, ScrollOutcome, VisibilityHost, VisibilityReport,
    is_fully_visible, report_visibility, scroll_into_view_if_needed,
};

const VIEWPORT: Size = Size::new(1024.0, 768.0);

/// `top, left, right, bottom` in the order the edges are usually quoted.
fn edges(top: f64, left: f64, right: f64, bottom: f64) -> Rect {
    Rect::new(left, top, right, bottom)
}

/// A tall page scrolled down by 100px, so document `y` maps to viewport `y - 100`.
fn scrolled_page() -> HeadlessDocument {
    let mut doc = HeadlessDocument::new(VIEWPORT);
    doc.insert("page", Rect::new(0.0, 0.0, 1024.0, 4000.0));
    doc.scroll_to(Vec2::new(0.0, 100.0));
    doc
}

#[test]
fn literal_scenarios() {
    assert!(is_fully_visible(edges(10.0, 10.0, 500.0, 400.0), VIEWPORT));
    assert!(!is_fully_visible(edges(-5.0, 10.0, 500.0, 400.0), VIEWPORT));
    assert!(is_fully_visible(edges(0.0, 0.0, 1024.0, 768.0), VIEWPORT));
    assert!(!is_fully_visible(edges(10.0, 10.0, 500.0, 900.0), VIEWPORT));
}

#[test]
fn visible_element_is_left_alone() {
    let mut doc = scrolled_page();
    // Viewport rect: top 10, bottom 400.
    doc.insert("card", edges(110.0, 10.0, 500.0, 500.0));

    assert_eq!(report_visibility(&doc, "card"), VisibilityReport::FullyVisible);
    assert_eq!(
        scroll_into_view_if_needed(&mut doc, "card"),
        ScrollOutcome::AlreadyVisible
    );
    assert_eq!(doc.scroll_count(), 0);
    assert_eq!(doc.scroll_offset(), Vec2::new(0.0, 100.0));
}

#[test]
fn element_above_viewport_scrolls_up() {
    let mut doc = scrolled_page();
    // Viewport rect: top -5, bottom 400.
    let card = doc.insert("card", edges(95.0, 10.0, 500.0, 500.0));

    assert_eq!(
        report_visibility(&doc, "card"),
        VisibilityReport::NotFullyVisible(OutsideEdges::TOP)
    );
    assert_eq!(
        scroll_into_view_if_needed(&mut doc, "card"),
        ScrollOutcome::Scrolled
    );
    assert_eq!(doc.scroll_count(), 1);
    assert!(is_fully_visible(
        doc.measure_bounding_rect(&card),
        doc.viewport_size()
    ));
}

#[test]
fn element_below_viewport_scrolls_down() {
    let mut doc = scrolled_page();
    // Viewport rect: top 10, bottom 900.
    let card = doc.insert("card", edges(110.0, 10.0, 500.0, 1000.0));

    assert_eq!(
        report_visibility(&doc, "card"),
        VisibilityReport::NotFullyVisible(OutsideEdges::BOTTOM)
    );
    assert_eq!(
        scroll_into_view_if_needed(&mut doc, "card"),
        ScrollOutcome::Scrolled
    );
    assert_eq!(doc.measure_bounding_rect(&card).y0, 0.0);
}

#[test]
fn second_call_after_scroll_is_a_no_op() {
    let mut doc = scrolled_page();
    doc.insert("card", edges(2000.0, 10.0, 500.0, 2300.0));

    assert_eq!(
        scroll_into_view_if_needed(&mut doc, "card"),
        ScrollOutcome::Scrolled
    );
    let after_first = doc.scroll_offset();
    assert_eq!(
        scroll_into_view_if_needed(&mut doc, "card"),
        ScrollOutcome::AlreadyVisible
    );
    assert_eq!(doc.scroll_count(), 1);
    assert_eq!(doc.scroll_offset(), after_first);
}

#[test]
fn missing_element_does_not_scroll() {
    let mut doc = scrolled_page();
    assert_eq!(
        scroll_into_view_if_needed(&mut doc, "nonexistent-id"),
        ScrollOutcome::ElementNotFound
    );
    assert_eq!(doc.scroll_count(), 0);
    assert_eq!(doc.scroll_offset(), Vec2::new(0.0, 100.0));
}

#[test]
fn client_size_is_used_when_inner_size_is_missing() {
    let mut doc = HeadlessDocument::new(VIEWPORT);
    doc.insert("page", Rect::new(0.0, 0.0, 1024.0, 4000.0));
    doc.insert("card", edges(10.0, 10.0, 500.0, 700.0));
    assert_eq!(report_visibility(&doc, "card"), VisibilityReport::FullyVisible);

    // Older hosts only expose the root element's client size.
    doc.set_client_size(Size::new(1024.0, 600.0));
    doc.set_inner_size(None);
    assert_eq!(
        report_visibility(&doc, "card"),
        VisibilityReport::NotFullyVisible(OutsideEdges::BOTTOM)
    );
}
