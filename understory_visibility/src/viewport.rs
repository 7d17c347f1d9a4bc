// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Resolves the viewport size from a primary and a secondary source.
///
/// Each axis is resolved independently: the primary value is used when it is
/// present and non‑zero, otherwise the secondary value is used. `NaN` in the
/// primary source counts as absent.
///
/// In a browser the primary source is the window's inner size and the
/// secondary source is the root element's client size, which some older
/// engines expose when the former is missing.
///
/// ```rust
/// use kurbo::Size;
/// use understory_visibility::resolve_viewport_size;
///
/// let client = Size::new(1000.0, 700.0);
/// assert_eq!(resolve_viewport_size(None, client), client);
/// assert_eq!(
///     resolve_viewport_size(Some(Size::new(1024.0, 0.0)), client),
///     Size::new(1024.0, 700.0),
/// );
/// ```
#[must_use]
pub fn resolve_viewport_size(primary: Option<Size>, secondary: Size) -> Size {
    match primary {
        Some(primary) => Size::new(
            pick(primary.width, secondary.width),
            pick(primary.height, secondary.height),
        ),
        None => secondary,
    }
}

fn pick(primary: f64, secondary: f64) -> f64 {
    // Zero and NaN are both "falsy" for a viewport dimension.
    if primary == 0.0 || primary.is_nan() {
        secondary
    } else {
        primary
    }
}
