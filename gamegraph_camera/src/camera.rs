// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera state.

use kurbo::{Point, Size, Vec2};

/// The viewport's window onto graph pixel space.
///
/// `position` is the graph-space point under the viewport's top-left corner;
/// a node at graph position `p` appears on screen at
/// `p - position + viewport_offset`. Exclusively owned by the engine;
/// hosts influence it only through input events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Graph-space position of the viewport's top-left corner.
    pub position: Point,
    /// Viewport size in pixels.
    pub viewport_size: Size,
    /// Screen position of the viewport's top-left corner, used to convert
    /// pointer coordinates arriving in screen space.
    pub viewport_offset: Point,
}

impl Camera {
    /// A camera parked one cell up-left of the grid origin, so the root node
    /// is comfortably inside the viewport before the first layout runs.
    #[must_use]
    pub fn new(cell_size: f64, viewport_size: Size) -> Self {
        Self {
            position: Point::new(-cell_size, -cell_size),
            viewport_size,
            viewport_offset: Point::ORIGIN,
        }
    }

    /// Shifts the camera by `delta`. Panning is unbounded; the layout has no
    /// edges worth clamping to.
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }
}
