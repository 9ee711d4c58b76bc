// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gamegraph Tree: the read-only move-tree contract.
//!
//! A game record is an ordered forest of *runs*: maximal straight sequences of
//! moves within one branch. Each run has a parent link, an ordered list of
//! move nodes, an ordered list of child runs, and the index of its currently
//! active child. The chain of runs reachable from the root by always following
//! the active-child index is the *current path*.
//!
//! This crate provides:
//!
//! - [`MoveTree`]: the trait the rest of the engine reads trees through. It is
//!   deliberately read-only; editing lives with the host application.
//! - [`MoveNode`]: an SGF-style property bag per node, with helpers deriving
//!   move/pass/setup classification from the properties actually present.
//! - [`TreePosition`]: a `(run, move index)` pair identifying one node.
//! - [`ArenaTree`]: a vec-arena implementation of [`MoveTree`] with just
//!   enough construction helpers for hosts and tests.
//!
//! The trait also provides two derived operations used throughout the engine:
//! [`MoveTree::step`], which walks the flattened move sequence (backwards
//! through parents, forwards through each run's active child), and
//! [`MoveTree::structural_hash`], a cache key over tree topology and move
//! counts that is unaffected by selection state.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod node;
mod tree;

pub use node::{MoveColor, MoveNode, NodeKind};
pub use tree::{ArenaTree, MoveTree, RunId, TreePosition};
