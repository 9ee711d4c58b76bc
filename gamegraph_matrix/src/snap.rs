// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-to-grid coordinate snapping.
//!
//! These helpers avoid `f64::floor`/`ceil`/`round`, which are unavailable in
//! `no_std` builds; truncation casts plus a negative-side correction give the
//! same results for the magnitudes a layout can reach.

/// Largest grid coordinate whose cell start is at or below `value`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Grid coordinates are intentionally i32; out-of-range values saturate."
)]
#[must_use]
pub fn floor_cell(value: f64, cell_size: f64) -> i32 {
    debug_assert!(cell_size > 0.0, "cell_size must be strictly positive");
    let t = value / cell_size;
    if t >= i32::MAX as f64 {
        return i32::MAX;
    }
    if t <= i32::MIN as f64 {
        return i32::MIN;
    }
    let coord = t as i32;
    // The cast truncated toward zero; shift negative fractions down.
    if t < 0.0 && f64::from(coord) > t {
        coord.saturating_sub(1)
    } else {
        coord
    }
}

/// Smallest grid coordinate whose cell start is at or above `value`.
#[must_use]
pub fn ceil_cell(value: f64, cell_size: f64) -> i32 {
    floor_cell(-value, cell_size).saturating_neg()
}

/// Grid coordinate of the cell center nearest to `value`.
#[must_use]
pub fn round_cell(value: f64, cell_size: f64) -> i32 {
    debug_assert!(cell_size > 0.0, "cell_size must be strictly positive");
    floor_cell(value + cell_size / 2.0, cell_size)
}

/// Rounds a pixel quantity to the nearest whole pixel.
#[must_use]
pub fn round_px(value: f64) -> f64 {
    f64::from(floor_cell(value + 0.5, 1.0))
}
