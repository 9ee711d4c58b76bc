// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Centering the camera on a selected node.

use kurbo::Point;

use gamegraph_matrix::Layout;
use gamegraph_matrix::snap::round_px;
use gamegraph_tree::TreePosition;

use crate::Camera;

/// Centers `selection` in the viewport, biased horizontally toward the side
/// of its row with more room.
///
/// The bias: `rel_x` runs from `1` at the row's left edge to `-1` at its
/// right edge (`0` for a single-column row or a dead-center node), and is
/// scaled by half the row's pixel width, clamped to half the viewport minus
/// one cell so wide rows don't push the selection off screen. The clamp is a
/// heuristic tuned for sidebars a handful of cells wide; treat the exact
/// off-center placement on very wide rows as unspecified.
///
/// Returns `false` without touching the camera when the selection is missing
/// from the layout (stale selection after an edit); the next valid layout
/// recenters normally.
pub fn recenter(
    camera: &mut Camera,
    layout: &Layout,
    selection: TreePosition,
    cell_size: f64,
) -> bool {
    let Some(grid) = layout.position_of(selection) else {
        return false;
    };
    let Some(span) = layout.width_of(grid.row) else {
        return false;
    };

    let rel_x = if span.width == 1 {
        0.0
    } else {
        1.0 - 2.0 * f64::from(grid.col - span.left_padding) / f64::from(span.width - 1)
    };
    let half_row = f64::from(span.width - 1) * cell_size / 2.0;
    let diff = half_row.min(camera.viewport_size.width / 2.0 - cell_size);

    camera.position = Point::new(
        round_px(f64::from(grid.col) * cell_size + rel_x * diff - camera.viewport_size.width / 2.0),
        round_px(f64::from(grid.row) * cell_size - camera.viewport_size.height / 2.0),
    );
    true
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use gamegraph_matrix::build;
    use gamegraph_tree::{ArenaTree, MoveColor, MoveNode, MoveTree, TreePosition};

    use super::recenter;
    use crate::Camera;

    const CELL: f64 = 10.0;

    /// A tree whose branch row spans five columns: the head of a run of five
    /// sibling branches under a two-node trunk.
    fn five_wide() -> (ArenaTree, [TreePosition; 5]) {
        let mut tree = ArenaTree::new();
        let root = tree.root();
        tree.push_move(root, MoveNode::with_move(MoveColor::Black, "dd"));
        let mut heads = [TreePosition::new(root, 0); 5];
        for head in &mut heads {
            let run = tree.add_child(root, MoveNode::with_move(MoveColor::White, "pp"));
            *head = TreePosition::new(run, 0);
        }
        (tree, heads)
    }

    #[test]
    fn dead_center_node_gets_no_bias() {
        let (tree, heads) = five_wide();
        let layout = build(&tree);
        let mut camera = Camera::new(CELL, Size::new(120.0, 80.0));

        // Column index 2 of a width-5 row is dead center.
        let selected = heads[2];
        let grid = layout.position_of(selected).unwrap();
        assert_eq!(grid.col, 2);
        assert!(recenter(&mut camera, &layout, selected, CELL));

        let node_px = f64::from(grid.col) * CELL;
        let node_py = f64::from(grid.row) * CELL;
        assert_eq!(camera.position, Point::new(node_px - 60.0, node_py - 40.0));
    }

    #[test]
    fn leftmost_node_is_biased_toward_the_empty_right() {
        let (tree, heads) = five_wide();
        let layout = build(&tree);
        let mut camera = Camera::new(CELL, Size::new(120.0, 80.0));

        assert!(recenter(&mut camera, &layout, heads[0], CELL));
        let plain_center = 0.0 * CELL - 60.0;
        // rel_x = +1 shifts the camera right of the plain centering...
        assert!(camera.position.x > plain_center);

        // ...and the rightmost head mirrors it.
        let mut mirror = Camera::new(CELL, Size::new(120.0, 80.0));
        assert!(recenter(&mut mirror, &layout, heads[4], CELL));
        let grid = layout.position_of(heads[4]).unwrap();
        assert!(mirror.position.x < f64::from(grid.col) * CELL - 60.0);
    }

    #[test]
    fn bias_is_clamped_by_the_viewport() {
        let (tree, heads) = five_wide();
        let layout = build(&tree);

        // Half the row is 20px; half the viewport minus a cell is only 5px,
        // so the clamp wins.
        let mut camera = Camera::new(CELL, Size::new(30.0, 80.0));
        assert!(recenter(&mut camera, &layout, heads[0], CELL));
        assert_eq!(camera.position.x, 0.0 * CELL + 5.0 - 15.0);
    }

    #[test]
    fn single_column_row_is_centered_exactly() {
        let mut tree = ArenaTree::new();
        tree.push_move(tree.root(), MoveNode::with_move(MoveColor::Black, "dd"));
        let layout = build(&tree);
        let mut camera = Camera::new(CELL, Size::new(100.0, 100.0));

        let selected = TreePosition::new(tree.root(), 1);
        assert!(recenter(&mut camera, &layout, selected, CELL));
        assert_eq!(camera.position, Point::new(-50.0, 10.0 - 50.0));
    }

    #[test]
    fn stale_selection_leaves_the_camera_alone() {
        let (tree, _) = five_wide();
        let layout = build(&tree);
        let mut camera = Camera::new(CELL, Size::new(100.0, 100.0));
        let before = camera.position;

        let stale = TreePosition::new(tree.root(), 99);
        assert!(!recenter(&mut camera, &layout, stale, CELL));
        assert_eq!(camera.position, before);
    }
}
