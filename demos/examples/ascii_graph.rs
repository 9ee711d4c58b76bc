// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving the engine from a plain terminal host.
//!
//! This example shows the whole host protocol without a windowing system:
//! - build a branching move tree with `gamegraph_tree`,
//! - feed selection and pointer events into `gamegraph_engine`,
//! - poll until the debounced recenter fires,
//! - print the resulting scene as ASCII art.
//!
//! Run:
//! - `cargo run -p gamegraph_demos --example ascii_graph`

use gamegraph_engine::{GraphEngine, GraphEvent, GraphSettings, InputEvent, NodeShape, PointerButton, Scene};
use gamegraph_tree::{ArenaTree, MoveColor, MoveNode, MoveTree, TreePosition};
use kurbo::{Point, Size};

const CELL: f64 = 10.0;

/// A short game: a main line, a branch fight, and a bookmarked alternative.
fn build_tree() -> (ArenaTree, TreePosition) {
    let mut tree = ArenaTree::new();
    let root = tree.root();
    tree.push_move(root, MoveNode::with_move(MoveColor::Black, "dd"));
    tree.push_move(root, MoveNode::with_move(MoveColor::White, "pp"));
    tree.push_move(root, MoveNode::with_move(MoveColor::Black, "pd"));

    // Main continuation, with a pass in the middle.
    let main = tree.add_child(root, MoveNode::with_move(MoveColor::White, "dp"));
    tree.push_move(main, MoveNode::pass(MoveColor::Black));
    let selection = tree.push_move(main, MoveNode::with_move(MoveColor::White, "qq"));

    // A bookmarked alternative with its own sub-branch.
    let alt = tree.add_child(root, MoveNode::with_move(MoveColor::White, "dq"));
    if let Some(node) = tree.node_mut(alt, 0) {
        node.set_property("HO", "1");
    }
    tree.push_move(alt, MoveNode::with_move(MoveColor::Black, "cq"));
    tree.add_child(alt, MoveNode::with_move(MoveColor::White, "fq"));
    tree.add_child(alt, MoveNode::with_move(MoveColor::White, "gq"));

    tree.set_current_child(root, 0);
    (tree, selection)
}

fn glyph(shape: NodeShape, on_current_track: bool, selected: bool) -> char {
    if selected {
        return '@';
    }
    match (shape, on_current_track) {
        (NodeShape::Setup, _) => '#',
        (NodeShape::Pass, true) => 'x',
        (NodeShape::Move, true) => 'o',
        (_, false) => '.',
    }
}

/// Prints the scene as a character grid, one text row per grid row plus an
/// interleaved row for bones and branch connectors.
fn print_scene(scene: &Scene, selection: TreePosition) {
    let cell_of = |px: f64| (px / CELL).round() as usize;

    // Edges can reach cells whose nodes were culled (a run head above the
    // viewport, a bone tail running past the last visible node), so the
    // canvas is sized from edge extents as well as node cells.
    let mut max_col = scene.nodes.iter().map(|n| n.grid.col as usize).max().unwrap_or(0);
    let mut max_row = scene.nodes.iter().map(|n| n.grid.row as usize).max().unwrap_or(0);
    for edge in &scene.edges {
        let tail = (edge.length / CELL).round() as usize;
        max_col = max_col.max(cell_of(edge.above.x)).max(cell_of(edge.below.x));
        max_row = max_row.max(cell_of(edge.above.y)).max(cell_of(edge.below.y) + tail);
    }
    let width = (max_col + 1) * 2;
    let height = (max_row + 1) * 2;
    let mut canvas = vec![vec![' '; width]; height];

    for edge in &scene.edges {
        let (c0, r0) = (cell_of(edge.above.x), cell_of(edge.above.y));
        let (c1, r1) = (cell_of(edge.below.x), cell_of(edge.below.y));
        if (c0, r0) != (c1, r1) {
            // Diagonal branch connector between two adjacent rows.
            let slash = if c1 > c0 { '\\' } else { '/' };
            canvas[r0 * 2 + 1][c0 * 2 + 1] = slash;
        }
        // The bone runs straight down from the lower endpoint.
        let tail = (edge.length / CELL).round() as usize;
        for step in 0..tail {
            canvas[(r1 + step) * 2 + 1][c1 * 2] = '|';
        }
    }

    for node in &scene.nodes {
        let row = node.grid.row as usize * 2;
        let col = node.grid.col as usize * 2;
        canvas[row][col] = glyph(
            node.shape,
            node.on_current_track,
            node.tree_position == selection,
        );
    }

    for line in canvas {
        let text: String = line.into_iter().collect();
        println!("  {}", text.trim_end());
    }
}

fn main() {
    let (tree, selection) = build_tree();

    let settings = GraphSettings {
        cell_size: CELL,
        ..GraphSettings::default()
    };
    let recenter_delay = settings.recenter_delay;
    let mut engine = GraphEngine::new(settings, Size::new(160.0, 160.0));

    // The host announces where the user is in the game; the recenter is
    // debounced, so poll past the delay with the same clock.
    engine.handle_event(&tree, InputEvent::SelectionChanged(selection), 0);
    engine.poll(&tree, recenter_delay);

    let scene = engine.render(&tree);
    println!(
        "{} nodes, {} edges (camera at {:.0},{:.0})",
        scene.nodes.len(),
        scene.edges.len(),
        engine.camera().position.x,
        engine.camera().position.y,
    );
    println!("  @ selected   o move   x pass   # setup   . off the current path\n");
    print_scene(&scene, selection);

    // Clicks come back as events once the pointer position resolves to a
    // node. Convert a grid cell to screen space the same way a real host
    // converts mouse coordinates.
    let camera = engine.camera();
    let target = scene.nodes[0].position;
    let screen = Point::new(
        target.x - camera.position.x + camera.viewport_offset.x,
        target.y - camera.position.y + camera.viewport_offset.y,
    );
    let event = engine.handle_event(
        &tree,
        InputEvent::Click {
            position: screen,
            button: PointerButton::Primary,
        },
        400,
    );
    match event {
        Some(GraphEvent::NodeClicked(pos)) => {
            println!("\nclick at ({:.0},{:.0}) resolved to {pos:?}", screen.x, screen.y);
        }
        other => println!("\nclick did not resolve: {other:?}"),
    }
}
