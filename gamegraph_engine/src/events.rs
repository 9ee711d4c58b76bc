// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing event interface.

use kurbo::{Point, Size, Vec2};

use gamegraph_camera::PointerButton;
use gamegraph_tree::TreePosition;

/// Input the host feeds into the engine.
///
/// The engine registers no listeners of its own; whatever windowing or
/// terminal layer the host runs on, it translates raw input into these and
/// stamps each with its millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer button was pressed over the graph.
    PointerDown {
        /// The pressed button.
        button: PointerButton,
    },
    /// The pointer moved.
    PointerMove {
        /// Pointer position in screen space.
        position: Point,
        /// Movement since the previous event.
        delta: Vec2,
    },
    /// The pointer button was released.
    PointerUp,
    /// A click was dispatched (down and up without leaving the graph).
    Click {
        /// Click position in screen space.
        position: Point,
        /// The clicking button.
        button: PointerButton,
    },
    /// A context (right-button) click was dispatched.
    ContextClick {
        /// Click position in screen space.
        position: Point,
    },
    /// The viewport was resized or moved on screen.
    Resize {
        /// New viewport size in pixels.
        size: Size,
        /// New screen offset of the viewport's top-left corner.
        offset: Point,
    },
    /// The host moved the selection to a new tree position.
    SelectionChanged(TreePosition),
}

/// Output events the engine hands back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphEvent {
    /// A click resolved to a node.
    NodeClicked(TreePosition),
    /// A context click resolved to a node.
    NodeContextClicked(TreePosition),
}

impl GraphEvent {
    /// The tree position the event refers to.
    #[must_use]
    pub const fn tree_position(self) -> TreePosition {
        match self {
            Self::NodeClicked(pos) | Self::NodeContextClicked(pos) => pos,
        }
    }
}
