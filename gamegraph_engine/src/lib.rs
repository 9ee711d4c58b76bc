// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gamegraph Engine: the embeddable move-tree graph engine.
//!
//! [`GraphEngine`] ties the layered crates together into the object a host
//! application embeds next to its tree model:
//!
//! - it owns the layout cache, track memo, camera, drag state, and the
//!   debounced recenter/remeasure deadlines;
//! - the host feeds it [`InputEvent`]s (pointer, resize, selection) stamped
//!   with a millisecond clock, polls it so debounced actions can fire, and
//!   asks for a [`Scene`](gamegraph_scene::Scene) when
//!   [`GraphEngine::is_dirty`] says the last one is stale;
//! - clicks resolving to a node come back as [`GraphEvent`]s.
//!
//! The engine never talks to a windowing system, never spawns timers, and
//! never blocks: every operation completes within the call, which is what
//! makes the whole stack testable without an event loop.
//!
//! ## Minimal host loop
//!
//! ```
//! use gamegraph_engine::{GraphEngine, GraphSettings, InputEvent};
//! use gamegraph_tree::{ArenaTree, MoveColor, MoveNode, MoveTree, TreePosition};
//! use kurbo::Size;
//!
//! let mut tree = ArenaTree::new();
//! let pos = tree.push_move(tree.root(), MoveNode::with_move(MoveColor::Black, "dd"));
//!
//! let settings = GraphSettings::default();
//! let delay = settings.recenter_delay;
//! let mut engine = GraphEngine::new(settings, Size::new(240.0, 320.0));
//!
//! engine.handle_event(&tree, InputEvent::SelectionChanged(pos), 0);
//! engine.poll(&tree, delay); // the debounced recenter fires here
//!
//! let scene = engine.render(&tree);
//! assert!(!scene.nodes.is_empty());
//! assert!(!engine.is_dirty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod events;
mod settings;

pub use engine::GraphEngine;
pub use events::{GraphEvent, InputEvent};
pub use settings::GraphSettings;

pub use gamegraph_camera::PointerButton;
pub use gamegraph_scene::{EdgeDescriptor, GraphStyle, NodeDescriptor, NodeShape, Rgba, Scene};
