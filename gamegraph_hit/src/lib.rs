// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gamegraph Hit: mapping pointer coordinates back to tree positions.
//!
//! The inverse of drawing: a pointer position in screen space, minus the
//! viewport's screen offset, plus the camera position, lands in graph pixel
//! space; snapping each axis to the nearest cell and consulting the layout
//! matrix yields the tree position under the pointer, or nothing over empty
//! grid.
//!
//! Click-after-drag suppression is the engine's job (it owns the drag state);
//! this crate only answers "what is at this point."
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;

use gamegraph_camera::Camera;
use gamegraph_matrix::snap::round_cell;
use gamegraph_matrix::{GridPos, Layout};
use gamegraph_tree::TreePosition;

/// Resolves a screen-space pointer position to the tree position under it.
///
/// Returns `None` when the nearest cell is unoccupied; a miss is never an
/// error.
#[must_use]
pub fn resolve(
    pointer: Point,
    camera: &Camera,
    cell_size: f64,
    layout: &Layout,
) -> Option<TreePosition> {
    let graph_x = pointer.x - camera.viewport_offset.x + camera.position.x;
    let graph_y = pointer.y - camera.viewport_offset.y + camera.position.y;
    let grid = GridPos::new(round_cell(graph_x, cell_size), round_cell(graph_y, cell_size));
    layout.cell(grid)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use gamegraph_camera::Camera;
    use gamegraph_matrix::build;
    use gamegraph_tree::{ArenaTree, MoveColor, MoveNode, MoveTree};

    use super::resolve;

    const CELL: f64 = 10.0;

    fn sample() -> ArenaTree {
        let mut tree = ArenaTree::new();
        let root = tree.root();
        tree.push_move(root, MoveNode::with_move(MoveColor::Black, "dd"));
        tree.push_move(root, MoveNode::with_move(MoveColor::White, "pp"));
        let a = tree.add_child(root, MoveNode::with_move(MoveColor::Black, "qd"));
        tree.push_move(a, MoveNode::with_move(MoveColor::White, "dp"));
        tree.add_child(root, MoveNode::with_move(MoveColor::Black, "cc"));
        tree
    }

    #[test]
    fn every_cell_round_trips_through_its_pixel_center() {
        let tree = sample();
        let layout = build(&tree);
        let mut camera = Camera::new(CELL, Size::new(100.0, 100.0));
        camera.position = Point::new(-13.0, 7.0);
        camera.viewport_offset = Point::new(40.0, 25.0);

        for (grid, pos) in layout.cells() {
            let screen = Point::new(
                f64::from(grid.col) * CELL - camera.position.x + camera.viewport_offset.x,
                f64::from(grid.row) * CELL - camera.position.y + camera.viewport_offset.y,
            );
            assert_eq!(resolve(screen, &camera, CELL, &layout), Some(pos));
        }
    }

    #[test]
    fn snaps_to_the_nearest_cell() {
        let tree = sample();
        let layout = build(&tree);
        let camera = Camera {
            position: Point::ORIGIN,
            viewport_size: Size::new(100.0, 100.0),
            viewport_offset: Point::ORIGIN,
        };

        // 4.9px off center still hits the cell at the grid origin.
        assert!(resolve(Point::new(4.9, 4.9), &camera, CELL, &layout).is_some());
        let on_grid = resolve(Point::new(0.0, 0.0), &camera, CELL, &layout);
        assert_eq!(resolve(Point::new(4.9, 4.9), &camera, CELL, &layout), on_grid);
    }

    #[test]
    fn empty_grid_is_a_miss() {
        let tree = sample();
        let layout = build(&tree);
        let camera = Camera::new(CELL, Size::new(100.0, 100.0));

        // Far off the layout.
        assert_eq!(resolve(Point::new(900.0, 900.0), &camera, CELL, &layout), None);
    }
}
