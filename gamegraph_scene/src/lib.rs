// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gamegraph Scene: from a grid layout to draw descriptors.
//!
//! This crate turns a laid-out tree into the two ordered lists the
//! presentation layer consumes each frame:
//!
//! - node descriptors: one per occupied cell inside the viewport, carrying a
//!   pixel position, a [`NodeShape`], a resolved fill color, and whether the
//!   node lies on the current path;
//! - edge descriptors: bones and branch connectors, pre-sorted so alternate
//!   lines precede current-path lines (last drawn wins the z-order).
//!
//! Two supporting pieces keep large trees interactive:
//!
//! - [`TrackMemo`] classifies each run as current or alternate at most once
//!   per render pass, propagating incrementally from parent classifications
//!   instead of re-walking ancestor chains for every visible node.
//! - [`visible_region`] computes the conservative grid rectangle worth
//!   scanning at the current camera position; [`render`] touches nothing
//!   outside it.
//!
//! Visual constants (colors, widths, annotation property names) live in
//! [`GraphStyle`]; the engine crate wraps this with timing configuration.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cull;
mod style;
mod track;

pub use cull::{EdgeDescriptor, NodeDescriptor, NodeShape, Scene, render, visible_region};
pub use style::{GraphStyle, Rgba};
pub use track::TrackMemo;
