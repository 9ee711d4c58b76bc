// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gamegraph Matrix: deterministic grid layout of branching move trees.
//!
//! Trees are laid out onto a sparse integer grid: each run's moves occupy
//! consecutive rows of a single column (its *bone*), the first child of a run
//! continues the parent's column, and later siblings fan out to the right,
//! each starting past the full width of the previous sibling's subtree.
//!
//! The layout is purely a function of tree topology and move counts, never of
//! selection state, so it can be cached by the tree's structural hash and
//! invalidated only on structural edits. [`LayoutCache`] wraps exactly that
//! policy; [`build`] is the underlying layout pass, linear in the number of
//! move nodes.
//!
//! A [`Layout`] answers both directions of the mapping:
//!
//! - grid cell → tree position, for viewport scans and hit testing,
//! - tree position → grid cell, for camera centering and edge endpoints,
//!
//! plus per-row occupied-span queries used for horizontal centering.
//!
//! This crate is `no_std` and uses `alloc`; pixel-space concerns (cameras,
//! descriptors) live in the crates layered on top.

#![no_std]

extern crate alloc;

mod builder;
mod cache;
mod layout;
pub mod snap;

pub use builder::build;
pub use cache::LayoutCache;
pub use layout::{GridPos, GridRect, Layout, RowSpan};
