// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine itself.

use kurbo::{Point, Size};

use gamegraph_camera::{Camera, Debounce, DragState, PointerButton, recenter};
use gamegraph_hit::resolve;
use gamegraph_matrix::LayoutCache;
use gamegraph_scene::{Scene, TrackMemo, render};
use gamegraph_tree::{MoveTree, TreePosition};

use crate::{GraphEvent, GraphSettings, InputEvent};

/// The embeddable graph engine. See the crate docs for the host protocol.
#[derive(Debug)]
pub struct GraphEngine {
    settings: GraphSettings,
    cache: LayoutCache,
    tracks: TrackMemo,
    camera: Camera,
    drag: DragState,
    recenter: Debounce,
    remeasure: Debounce,
    // Viewport metrics from the most recent resize, applied when the
    // remeasure deadline fires.
    pending_viewport: Option<(Size, Point)>,
    selection: Option<TreePosition>,
    dirty: bool,
}

impl GraphEngine {
    /// Creates an engine with the given settings and initial viewport size.
    #[must_use]
    pub fn new(settings: GraphSettings, viewport_size: Size) -> Self {
        let camera = Camera::new(settings.cell_size, viewport_size);
        let recenter = Debounce::new(settings.recenter_delay);
        let remeasure = Debounce::new(settings.remeasure_delay);
        Self {
            settings,
            cache: LayoutCache::new(),
            tracks: TrackMemo::new(),
            camera,
            drag: DragState::new(),
            recenter,
            remeasure,
            pending_viewport: None,
            selection: None,
            dirty: true,
        }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn settings(&self) -> &GraphSettings {
        &self.settings
    }

    /// The camera, for hosts that tween toward its target position.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The current selection, if the host has announced one.
    #[must_use]
    pub fn selection(&self) -> Option<TreePosition> {
        self.selection
    }

    /// Returns `true` when the last rendered scene is stale.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Feeds one host input event, returning a resolved click if any.
    ///
    /// `now` is the host's millisecond clock, the same one passed to
    /// [`GraphEngine::poll`].
    pub fn handle_event<T: MoveTree + ?Sized>(
        &mut self,
        tree: &T,
        event: InputEvent,
        now: u64,
    ) -> Option<GraphEvent> {
        match event {
            InputEvent::PointerDown { button } => {
                self.drag.on_down(button);
                None
            }
            InputEvent::PointerMove { delta, .. } => {
                if let Some(pan) = self.drag.on_move(delta) {
                    self.camera.pan(pan);
                    self.dirty = true;
                }
                None
            }
            InputEvent::PointerUp => {
                self.drag.on_up();
                None
            }
            InputEvent::Click { position, button } => {
                if self.drag.take_dragged() {
                    // The release of a pan is not a click.
                    return None;
                }
                if button != PointerButton::Primary {
                    return None;
                }
                self.hit(tree, position).map(GraphEvent::NodeClicked)
            }
            InputEvent::ContextClick { position } => {
                if self.drag.take_dragged() {
                    return None;
                }
                self.hit(tree, position).map(GraphEvent::NodeContextClicked)
            }
            InputEvent::Resize { size, offset } => {
                self.pending_viewport = Some((size, offset));
                self.remeasure.schedule(now);
                None
            }
            InputEvent::SelectionChanged(position) => {
                // The current path can change without the selected position
                // moving (the host switches a run's active child), so the
                // track memo is rebuilt even when the position is
                // re-announced. The rebuild is lazy; only the recenter is
                // worth skipping for an unchanged selection.
                self.tracks.invalidate();
                self.dirty = true;
                if self.selection != Some(position) {
                    self.selection = Some(position);
                    self.recenter.schedule(now);
                }
                None
            }
        }
    }

    /// Fires any due debounced actions. Hosts call this from their frame or
    /// timer tick with the same clock that stamps input events.
    pub fn poll<T: MoveTree + ?Sized>(&mut self, tree: &T, now: u64) {
        if self.remeasure.fire(now).is_some() {
            if let Some((size, offset)) = self.pending_viewport.take() {
                self.camera.viewport_size = size;
                self.camera.viewport_offset = offset;
                self.dirty = true;
            }
        }
        if self.recenter.fire(now).is_some() {
            // Recenter on whatever the selection is *now*; coalesced
            // schedulings deliberately use the latest data.
            if let Some(selection) = self.selection {
                let layout = self.cache.layout_for(tree);
                if recenter(&mut self.camera, layout, selection, self.settings.cell_size) {
                    self.dirty = true;
                }
            }
        }
    }

    /// Builds the draw descriptors for the current camera and selection,
    /// clearing the dirty flag.
    pub fn render<T: MoveTree + ?Sized>(&mut self, tree: &T) -> Scene {
        let layout = self.cache.layout_for(tree);
        let scene = render(
            tree,
            layout,
            &mut self.tracks,
            self.selection,
            self.camera.position,
            self.camera.viewport_size,
            self.settings.cell_size,
            &self.settings.style,
        );
        self.dirty = false;
        scene
    }

    fn hit<T: MoveTree + ?Sized>(&mut self, tree: &T, position: Point) -> Option<TreePosition> {
        let layout = self.cache.layout_for(tree);
        resolve(position, &self.camera, self.settings.cell_size, layout)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use gamegraph_tree::{ArenaTree, MoveColor, MoveNode, MoveTree, TreePosition};

    use super::GraphEngine;
    use crate::{GraphEvent, GraphSettings, InputEvent, PointerButton};

    const CELL: f64 = 10.0;

    fn settings() -> GraphSettings {
        GraphSettings {
            cell_size: CELL,
            recenter_delay: 300,
            remeasure_delay: 500,
            ..GraphSettings::default()
        }
    }

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

    fn engine() -> GraphEngine {
        GraphEngine::new(settings(), Size::new(200.0, 200.0))
    }

    /// Screen position of a grid cell's center for the engine's camera.
    fn screen_of(engine: &GraphEngine, col: i32, row: i32) -> Point {
        let camera = engine.camera();
        Point::new(
            f64::from(col) * CELL - camera.position.x + camera.viewport_offset.x,
            f64::from(row) * CELL - camera.position.y + camera.viewport_offset.y,
        )
    }

    #[test]
    fn render_clears_the_dirty_flag() {
        let tree = sample();
        let mut engine = engine();
        assert!(engine.is_dirty());

        let scene = engine.render(&tree);
        assert!(!scene.nodes.is_empty());
        assert!(!engine.is_dirty());
    }

    #[test]
    fn dragging_pans_and_marks_dirty() {
        let tree = sample();
        let mut engine = engine();
        engine.render(&tree);
        let before = engine.camera().position;

        engine.handle_event(&tree, InputEvent::PointerDown { button: PointerButton::Primary }, 0);
        engine.handle_event(
            &tree,
            InputEvent::PointerMove { position: Point::ORIGIN, delta: Vec2::new(7.0, -3.0) },
            5,
        );
        engine.handle_event(&tree, InputEvent::PointerUp, 10);

        assert_eq!(engine.camera().position, before + Vec2::new(-7.0, 3.0));
        assert!(engine.is_dirty());
    }

    #[test]
    fn secondary_button_never_pans() {
        let tree = sample();
        let mut engine = engine();
        engine.render(&tree);
        let before = engine.camera().position;

        engine.handle_event(&tree, InputEvent::PointerDown { button: PointerButton::Secondary }, 0);
        engine.handle_event(
            &tree,
            InputEvent::PointerMove { position: Point::ORIGIN, delta: Vec2::new(7.0, -3.0) },
            5,
        );
        assert_eq!(engine.camera().position, before);
        assert!(!engine.is_dirty());
    }

    #[test]
    fn clicks_resolve_to_tree_positions() {
        let tree = sample();
        let mut engine = engine();
        let target = screen_of(&engine, 0, 1);

        let event = engine.handle_event(
            &tree,
            InputEvent::Click { position: target, button: PointerButton::Primary },
            0,
        );
        assert_eq!(
            event,
            Some(GraphEvent::NodeClicked(TreePosition::new(tree.root(), 1)))
        );
    }

    #[test]
    fn context_clicks_carry_their_own_event() {
        let tree = sample();
        let mut engine = engine();
        let target = screen_of(&engine, 0, 0);

        let event = engine.handle_event(&tree, InputEvent::ContextClick { position: target }, 0);
        assert_eq!(
            event,
            Some(GraphEvent::NodeContextClicked(TreePosition::new(tree.root(), 0)))
        );
    }

    #[test]
    fn clicks_over_empty_grid_resolve_to_nothing() {
        let tree = sample();
        let mut engine = engine();
        let miss = screen_of(&engine, 40, 40);

        let event = engine.handle_event(
            &tree,
            InputEvent::Click { position: miss, button: PointerButton::Primary },
            0,
        );
        assert_eq!(event, None);
    }

    #[test]
    fn the_click_ending_a_drag_is_suppressed() {
        let tree = sample();
        let mut engine = engine();
        let target = screen_of(&engine, 0, 1);

        engine.handle_event(&tree, InputEvent::PointerDown { button: PointerButton::Primary }, 0);
        engine.handle_event(
            &tree,
            InputEvent::PointerMove { position: target, delta: Vec2::new(2.0, 0.0) },
            5,
        );
        engine.handle_event(&tree, InputEvent::PointerUp, 10);

        let suppressed = engine.handle_event(
            &tree,
            InputEvent::Click { position: screen_of(&engine, 0, 1), button: PointerButton::Primary },
            11,
        );
        assert_eq!(suppressed, None);

        // The next clean click goes through.
        let event = engine.handle_event(
            &tree,
            InputEvent::Click { position: screen_of(&engine, 0, 1), button: PointerButton::Primary },
            20,
        );
        assert!(event.is_some());
    }

    #[test]
    fn rapid_selection_changes_coalesce_into_one_recenter() {
        let tree = sample();
        let root = tree.root();
        let mut engine = engine();
        engine.render(&tree);

        let first = TreePosition::new(root, 0);
        let last = TreePosition::new(root, 2);
        engine.handle_event(&tree, InputEvent::SelectionChanged(first), 0);
        let camera_before = engine.camera().position;
        engine.handle_event(&tree, InputEvent::SelectionChanged(TreePosition::new(root, 1)), 100);
        engine.handle_event(&tree, InputEvent::SelectionChanged(last), 200);

        // The first two deadlines were superseded.
        engine.poll(&tree, 300);
        engine.poll(&tree, 400);
        assert_eq!(engine.camera().position, camera_before);

        // The surviving deadline recenters on the *last* selection.
        engine.poll(&tree, 500);
        let expected_y = 2.0 * CELL - 100.0;
        assert_eq!(engine.camera().position.y, expected_y);
    }

    #[test]
    fn recenter_centers_a_dead_center_node_without_bias() {
        // Row of width five; viewport wider than the row.
        let mut tree = ArenaTree::new();
        let root = tree.root();
        tree.push_move(root, MoveNode::with_move(MoveColor::Black, "dd"));
        let mut heads = alloc::vec::Vec::new();
        for _ in 0..5 {
            let run = tree.add_child(root, MoveNode::with_move(MoveColor::White, "pp"));
            heads.push(TreePosition::new(run, 0));
        }

        let mut engine = engine();
        engine.handle_event(&tree, InputEvent::SelectionChanged(heads[2]), 0);
        engine.poll(&tree, 300);

        // Node at column 2, row 2; no horizontal bias.
        assert_eq!(engine.camera().position.x, 2.0 * CELL - 100.0);
        assert_eq!(engine.camera().position.y, 2.0 * CELL - 100.0);
    }

    #[test]
    fn stale_selection_aborts_recenter_and_recovers() {
        let mut tree = sample();
        let a = tree.children(tree.root())[0];
        let mut engine = engine();
        engine.render(&tree);

        // Select a node, then shrink the tree out from under the selection
        // before the recenter fires... nothing moves, nothing panics.
        let stale = TreePosition::new(a, 99);
        engine.handle_event(&tree, InputEvent::SelectionChanged(stale), 0);
        let before = engine.camera().position;
        engine.poll(&tree, 300);
        assert_eq!(engine.camera().position, before);

        // A valid selection afterwards recenters normally.
        let valid = tree.push_move(a, MoveNode::with_move(MoveColor::Black, "ee"));
        engine.handle_event(&tree, InputEvent::SelectionChanged(valid), 400);
        engine.poll(&tree, 700);
        assert_ne!(engine.camera().position, before);
    }

    #[test]
    fn resize_applies_after_the_longer_debounce() {
        let tree = sample();
        let mut engine = engine();
        engine.render(&tree);

        let size = Size::new(400.0, 300.0);
        let offset = Point::new(12.0, 34.0);
        engine.handle_event(&tree, InputEvent::Resize { size, offset }, 0);

        // Not yet: the remeasure delay is longer than the recenter delay.
        engine.poll(&tree, 300);
        assert_ne!(engine.camera().viewport_size, size);

        engine.poll(&tree, 500);
        assert_eq!(engine.camera().viewport_size, size);
        assert_eq!(engine.camera().viewport_offset, offset);
        assert!(engine.is_dirty());
    }

    #[test]
    fn resize_storms_apply_only_the_last_metrics() {
        let tree = sample();
        let mut engine = engine();

        engine.handle_event(
            &tree,
            InputEvent::Resize { size: Size::new(1.0, 1.0), offset: Point::ORIGIN },
            0,
        );
        let final_size = Size::new(640.0, 480.0);
        engine.handle_event(
            &tree,
            InputEvent::Resize { size: final_size, offset: Point::ORIGIN },
            100,
        );

        engine.poll(&tree, 500);
        assert_ne!(engine.camera().viewport_size, Size::new(1.0, 1.0));
        engine.poll(&tree, 600);
        assert_eq!(engine.camera().viewport_size, final_size);
    }

    #[test]
    fn selection_changes_invalidate_track_classification() {
        let mut tree = sample();
        let root = tree.root();
        let b = tree.children(root)[1];
        let mut engine = engine();

        let scene = engine.render(&tree);
        let b_head = scene
            .nodes
            .iter()
            .find(|n| n.tree_position == TreePosition::new(b, 0))
            .unwrap();
        assert!(!b_head.on_current_track);

        // Host switches the active branch and announces the new selection.
        tree.set_current_child(root, 1);
        engine.handle_event(&tree, InputEvent::SelectionChanged(TreePosition::new(b, 0)), 0);
        assert!(engine.is_dirty());

        let scene = engine.render(&tree);
        let b_head = scene
            .nodes
            .iter()
            .find(|n| n.tree_position == TreePosition::new(b, 0))
            .unwrap();
        assert!(b_head.on_current_track);
    }

    #[test]
    fn current_path_change_under_an_unchanged_selection_is_picked_up() {
        let mut tree = sample();
        let root = tree.root();
        let b = tree.children(root)[1];
        let selection = TreePosition::new(root, 1);
        let mut engine = engine();

        engine.handle_event(&tree, InputEvent::SelectionChanged(selection), 0);
        let scene = engine.render(&tree);
        let b_head = scene
            .nodes
            .iter()
            .find(|n| n.tree_position == TreePosition::new(b, 0))
            .unwrap();
        assert!(!b_head.on_current_track);

        // The host switches the active branch above the selection and
        // re-announces the *same* selected position; the classification
        // must not survive from the previous path.
        tree.set_current_child(root, 1);
        engine.handle_event(&tree, InputEvent::SelectionChanged(selection), 100);
        assert!(engine.is_dirty());

        let scene = engine.render(&tree);
        let b_head = scene
            .nodes
            .iter()
            .find(|n| n.tree_position == TreePosition::new(b, 0))
            .unwrap();
        assert!(b_head.on_current_track);
    }

    #[test]
    fn reselecting_the_same_position_schedules_nothing() {
        let tree = sample();
        let pos = TreePosition::new(tree.root(), 1);
        let mut engine = engine();

        engine.handle_event(&tree, InputEvent::SelectionChanged(pos), 0);
        engine.poll(&tree, 300);
        let settled = engine.camera().position;

        engine.handle_event(&tree, InputEvent::SelectionChanged(pos), 400);
        engine.render(&tree);
        engine.poll(&tree, 700);
        assert_eq!(engine.camera().position, settled);
        assert!(!engine.is_dirty());
    }
}
