// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag-panning state machine.

use kurbo::Vec2;

/// Which pointer button an event carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// The primary (usually left) button; the only one that pans.
    Primary,
    /// The secondary (usually right) button.
    Secondary,
    /// Any other button.
    Auxiliary,
}

/// Idle/dragging state machine over pointer events.
///
/// Pointer-down starts a drag with whatever button was pressed; only moves
/// while the *primary* button is down pan the camera. Moves in any other
/// state return `None` and clear the dragged flag, so a stale drag can never
/// leak movement into the camera.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    button: Option<PointerButton>,
    dragged: bool,
}

impl DragState {
    /// Creates an idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer press.
    pub fn on_down(&mut self, button: PointerButton) {
        self.button = Some(button);
    }

    /// Records a pointer release. The dragged flag survives until the click
    /// that follows the release consumes it.
    pub fn on_up(&mut self) {
        self.button = None;
    }

    /// Feeds a pointer movement, returning the camera pan to apply (the
    /// negated movement), or `None` when not primary-dragging.
    pub fn on_move(&mut self, delta: Vec2) -> Option<Vec2> {
        match self.button {
            Some(PointerButton::Primary) => {
                self.dragged = true;
                Some(-delta)
            }
            _ => {
                self.dragged = false;
                None
            }
        }
    }

    /// Returns `true` while a button is held.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.button.is_some()
    }

    /// Consumes the dragged flag. A click arriving while this returns `true`
    /// was the tail of a pan and must be suppressed.
    pub const fn take_dragged(&mut self) -> bool {
        let dragged = self.dragged;
        self.dragged = false;
        dragged
    }
}
