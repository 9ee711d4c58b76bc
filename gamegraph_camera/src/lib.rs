// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gamegraph Camera: panning, recentering, and debounced actions.
//!
//! The camera is a point in graph pixel space plus the viewport's size and
//! screen offset. Three things move it:
//!
//! - [`DragState`]: a small idle/dragging state machine over pointer events.
//!   Only primary-button drags pan; deltas arriving while idle or under
//!   another button are discarded rather than applied, so resetting drag
//!   state can never cause a jump. The machine also remembers that a drag
//!   happened, which the engine uses to suppress the click that ends a pan.
//! - [`recenter`]: places a selected node in the middle of the viewport, with
//!   a horizontal bias toward the emptier side of wide rows.
//! - [`Debounce`]: a schedule-with-replace deadline used to coalesce rapid
//!   selection changes (recenter) and resize storms (remeasure). Scheduling
//!   hands out a generation token and cancels whatever was pending; a stale
//!   generation can never fire after a newer one.
//!
//! There are no timers here: hosts supply millisecond timestamps with their
//! events and poll deadlines, which keeps every behavior deterministic under
//! test.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod debounce;
mod drag;
mod recenter;

pub use camera::Camera;
pub use debounce::{Debounce, DebounceToken};
pub use drag::{DragState, PointerButton};
pub use recenter::recenter;
