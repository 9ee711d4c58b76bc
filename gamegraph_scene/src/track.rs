// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Current-vs-alternate run classification, memoized per render pass.

use alloc::vec::Vec;

use hashbrown::HashSet;

use gamegraph_tree::{MoveTree, RunId};

/// Memoized classification of runs into current-path and alternate tracks.
///
/// The root run is current; a non-root run is current iff its parent is
/// current and the parent's active-child index selects it. During a viewport
/// scan most runs are reached right after their parent, so the parent's
/// cached answer settles them in O(1). When a run becomes visible without its
/// ancestor chain having been walked (scrolled deep into a branch), the memo
/// falls back to one ancestor walk, short-circuiting at the first classified
/// ancestor and recording every run it touched on the way back down.
///
/// The two memo sets are disjoint by construction. They describe one
/// selection path; the engine invalidates the memo whenever the selection
/// changes.
#[derive(Debug, Default)]
pub struct TrackMemo {
    current: HashSet<RunId>,
    alternate: HashSet<RunId>,
}

impl TrackMemo {
    /// Creates an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `run` lies on the current path.
    pub fn is_current<T: MoveTree + ?Sized>(&mut self, tree: &T, run: RunId) -> bool {
        if self.current.contains(&run) {
            return true;
        }
        if self.alternate.contains(&run) {
            return false;
        }

        // Climb until we hit a classified ancestor or the root, then unwind,
        // classifying every run on the chain.
        let mut chain = Vec::new();
        let mut cursor = run;
        let mut on_current = loop {
            match tree.parent(cursor) {
                None => break true,
                Some(parent) => {
                    chain.push((parent, cursor));
                    if self.current.contains(&parent) {
                        break true;
                    }
                    if self.alternate.contains(&parent) {
                        break false;
                    }
                    cursor = parent;
                }
            }
        };
        if chain.is_empty() {
            // `run` is the root itself.
            self.current.insert(run);
            return true;
        }
        for &(parent, child) in chain.iter().rev() {
            self.record(parent, on_current);
            on_current = on_current && tree.children(parent).get(tree.current_child(parent)) == Some(&child);
        }
        self.record(run, on_current);
        on_current
    }

    fn record(&mut self, run: RunId, on_current: bool) {
        if on_current {
            self.current.insert(run);
        } else {
            self.alternate.insert(run);
        }
    }

    /// Forgets all classifications; call when the selection path changes.
    pub fn invalidate(&mut self) {
        self.current.clear();
        self.alternate.clear();
    }

    /// Number of runs classified so far, for instrumentation and tests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len() + self.alternate.len()
    }

    /// Returns `true` if nothing has been classified yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.alternate.is_empty()
    }
}
