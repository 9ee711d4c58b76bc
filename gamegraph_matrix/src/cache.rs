// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural-hash keyed layout caching.

use gamegraph_tree::MoveTree;

use crate::{Layout, build};

/// Caches the most recent [`Layout`] keyed by the tree's structural hash.
///
/// Re-renders of an unchanged tree (panning, selection moves, resizes) reuse
/// the cached layout; only structural edits pay for a new layout pass. The
/// hash mismatch is the sole invalidation trigger, plus an explicit
/// [`LayoutCache::invalidate`] escape hatch for hosts that know better.
#[derive(Debug, Default)]
pub struct LayoutCache {
    hash: Option<u64>,
    layout: Layout,
}

impl LayoutCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the layout for `tree`, rebuilding it only if the tree's
    /// structural hash differs from the cached one.
    pub fn layout_for<T: MoveTree + ?Sized>(&mut self, tree: &T) -> &Layout {
        let hash = tree.structural_hash();
        if self.hash != Some(hash) {
            self.layout = build(tree);
            self.hash = Some(hash);
        }
        &self.layout
    }

    /// The cached layout, without consulting any tree.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Drops the cached layout; the next [`LayoutCache::layout_for`] rebuilds.
    pub fn invalidate(&mut self) {
        self.hash = None;
    }
}
