// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport culling and descriptor emission.

use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Point, Size};

use gamegraph_matrix::snap::{ceil_cell, floor_cell};
use gamegraph_matrix::{GridPos, GridRect, Layout};
use gamegraph_tree::{MoveTree, NodeKind, RunId, TreePosition};

use crate::{GraphStyle, Rgba, TrackMemo};

/// Columns scanned beyond the strict viewport on each side, absorbing node
/// glyphs and diagonal connectors that straddle the edge.
const PAD_COLS: i32 = 2;
/// Rows scanned beyond the strict viewport on each side. Larger than the
/// column pad because bones and their connectors run vertically for several
/// cells past the node that anchors them.
const PAD_ROWS: i32 = 5;

/// Glyph selection for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// An ordinary move: drawn as a circle.
    Move,
    /// A pass: drawn as a square.
    Pass,
    /// A setup position without a move: drawn as a diamond.
    Setup,
}

impl From<NodeKind> for NodeShape {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Move => Self::Move,
            NodeKind::Pass => Self::Pass,
            NodeKind::Setup => Self::Setup,
        }
    }
}

/// Everything the presentation layer needs to draw one node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDescriptor {
    /// The node's tree position, for diffing and event payloads.
    pub tree_position: TreePosition,
    /// Grid cell.
    pub grid: GridPos,
    /// Center of the glyph in graph pixel space (before camera translation).
    pub position: Point,
    /// Glyph to draw.
    pub shape: NodeShape,
    /// Resolved fill color.
    pub fill: Rgba,
    /// Whether the node lies on the current path.
    pub on_current_track: bool,
}

/// A bone or branch connector.
///
/// `above == below` draws a plain vertical bone of `length` starting at
/// `above`; otherwise the polyline runs `above → below` (diagonal branch
/// connector) and continues `length` pixels straight down from `below`.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDescriptor {
    /// Upper endpoint in graph pixel space.
    pub above: Point,
    /// Lower endpoint in graph pixel space.
    pub below: Point,
    /// Length of the bone continuing downward from `below`, in pixels.
    pub length: f64,
    /// Whether this edge belongs to the current path.
    pub current: bool,
    /// Resolved stroke color.
    pub color: Rgba,
    /// Resolved stroke width.
    pub width: f64,
}

/// One frame's worth of draw descriptors.
///
/// `edges` is ordered alternate-first so that painting the list in order
/// leaves current-path lines on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Visible nodes, in column-major scan order.
    pub nodes: Vec<NodeDescriptor>,
    /// Visible edges, alternates before current-path edges.
    pub edges: Vec<EdgeDescriptor>,
}

/// The grid rectangle worth scanning for the given camera placement.
///
/// A conservative superset: every cell whose glyph or connector could touch
/// the viewport lies inside; cells outside can safely be skipped. False
/// positives only cost a little scan time.
#[must_use]
pub fn visible_region(camera_position: Point, viewport_size: Size, cell_size: f64) -> GridRect {
    GridRect {
        min_col: floor_cell(camera_position.x, cell_size).saturating_sub(PAD_COLS),
        min_row: floor_cell(camera_position.y, cell_size).saturating_sub(PAD_ROWS),
        max_col: ceil_cell(camera_position.x + viewport_size.width, cell_size).saturating_add(PAD_COLS),
        max_row: ceil_cell(camera_position.y + viewport_size.height, cell_size).saturating_add(PAD_ROWS),
    }
}

/// Scans the visible region and emits draw descriptors for every occupied
/// cell, with bones and branch connectors attached to the first cell of each
/// run encountered and to each run's last cell.
pub fn render<T: MoveTree + ?Sized>(
    tree: &T,
    layout: &Layout,
    memo: &mut TrackMemo,
    selection: Option<TreePosition>,
    camera_position: Point,
    viewport_size: Size,
    cell_size: f64,
    style: &GraphStyle,
) -> Scene {
    let region = visible_region(camera_position, viewport_size, cell_size);
    // Clamp the scan to the occupied part of the grid; the region may reach
    // far off-layout when the camera pans into empty space.
    let min_col = region.min_col.max(0);
    let max_col = region.max_col.min(layout.columns().saturating_sub(1));
    let min_row = region.min_row.max(0);
    let max_row = region.max_row.min(layout.rows().saturating_sub(1));

    let mut nodes = Vec::new();
    let mut current_edges = Vec::new();
    let mut alternate_edges = Vec::new();
    let mut done_bones: HashSet<RunId> = HashSet::new();

    for col in min_col..=max_col {
        for row in min_row..=max_row {
            let grid = GridPos::new(col, row);
            let Some(pos) = layout.cell(grid) else {
                continue;
            };
            let on_current_track = memo.is_current(tree, pos.run);
            let center = cell_center(grid, cell_size);

            nodes.push(NodeDescriptor {
                tree_position: pos,
                grid,
                position: center,
                shape: shape_of(tree, pos),
                fill: fill_of(tree, pos, on_current_track, selection, style),
                on_current_track,
            });

            if !done_bones.contains(&pos.run) {
                // One bone per run per pass, anchored at whichever of its
                // cells the scan reaches first.
                let bone = bone_edge(tree, layout, pos, center, cell_size, on_current_track, style);
                if let Some(edge) = bone {
                    push_edge(&mut current_edges, &mut alternate_edges, edge);
                    done_bones.insert(pos.run);
                }
            }

            if pos.index + 1 == tree.move_count(pos.run) {
                // Successor edges fan out from the run's last cell to each
                // child's bone head.
                for &child in tree.children(pos.run) {
                    let current = on_current_track
                        && tree.children(pos.run).get(tree.current_child(pos.run)) == Some(&child);
                    let Some(head) = layout.position_of(TreePosition::new(child, 0)) else {
                        continue;
                    };
                    let edge = EdgeDescriptor {
                        above: center,
                        below: cell_center(head, cell_size),
                        length: bone_tail(tree, child, cell_size),
                        current,
                        color: edge_color(current, style),
                        width: edge_width(current, style),
                    };
                    push_edge(&mut current_edges, &mut alternate_edges, edge);
                    done_bones.insert(child);
                }
            }
        }
    }

    let mut edges = alternate_edges;
    edges.append(&mut current_edges);
    Scene { nodes, edges }
}

fn cell_center(grid: GridPos, cell_size: f64) -> Point {
    Point::new(f64::from(grid.col) * cell_size, f64::from(grid.row) * cell_size)
}

fn bone_tail<T: MoveTree + ?Sized>(tree: &T, run: RunId, cell_size: f64) -> f64 {
    let count = tree.move_count(run);
    #[allow(
        clippy::cast_precision_loss,
        reason = "Run lengths are far below f64's exact-integer range."
    )]
    let tail = count.saturating_sub(1) as f64;
    tail * cell_size
}

fn bone_edge<T: MoveTree + ?Sized>(
    tree: &T,
    layout: &Layout,
    pos: TreePosition,
    center: Point,
    cell_size: f64,
    on_current_track: bool,
    style: &GraphStyle,
) -> Option<EdgeDescriptor> {
    let (above, below) = if pos.index == 0 && tree.parent(pos.run).is_some() {
        // Branch head: connect from the parent's last node.
        let prev = tree.step(pos, -1)?;
        let prev_grid = layout.position_of(prev)?;
        (cell_center(prev_grid, cell_size), center)
    } else {
        // Mid-bone cell: emit the run's own bone from its head.
        let head = layout.position_of(TreePosition::new(pos.run, 0))?;
        let top = cell_center(head, cell_size);
        (top, top)
    };
    Some(EdgeDescriptor {
        above,
        below,
        length: bone_tail(tree, pos.run, cell_size),
        current: on_current_track,
        color: edge_color(on_current_track, style),
        width: edge_width(on_current_track, style),
    })
}

fn push_edge(current: &mut Vec<EdgeDescriptor>, alternate: &mut Vec<EdgeDescriptor>, edge: EdgeDescriptor) {
    if edge.current {
        current.push(edge);
    } else {
        alternate.push(edge);
    }
}

const fn edge_color(current: bool, style: &GraphStyle) -> Rgba {
    if current { style.edge_color } else { style.edge_inactive_color }
}

const fn edge_width(current: bool, style: &GraphStyle) -> f64 {
    if current { style.edge_width } else { style.edge_inactive_width }
}

fn shape_of<T: MoveTree + ?Sized>(tree: &T, pos: TreePosition) -> NodeShape {
    tree.node(pos.run, pos.index)
        .map_or(NodeShape::Move, |node| node.kind().into())
}

fn fill_of<T: MoveTree + ?Sized>(
    tree: &T,
    pos: TreePosition,
    on_current_track: bool,
    selection: Option<TreePosition>,
    style: &GraphStyle,
) -> Rgba {
    if !on_current_track {
        return style.node_inactive_color;
    }
    if selection == Some(pos) {
        return style.node_selected_color;
    }
    let Some(node) = tree.node(pos.run, pos.index) else {
        return style.node_color;
    };
    if node.has_property(&style.bookmark_property) {
        style.node_bookmark_color
    } else if node.has_any_property(&style.comment_properties) {
        style.node_comment_color
    } else {
        style.node_color
    }
}
