// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only tree contract and a vec-arena implementation.

use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash, Hasher};

use hashbrown::DefaultHashBuilder;

use crate::MoveNode;

/// Identifier for a run in the tree (arena index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(u32);

impl RunId {
    /// Creates an id from a raw arena index.
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// The raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A `(run, move index)` pair identifying one node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreePosition {
    /// The run containing the node.
    pub run: RunId,
    /// Index of the node within the run's move sequence.
    pub index: usize,
}

impl TreePosition {
    /// Creates a position.
    #[must_use]
    pub const fn new(run: RunId, index: usize) -> Self {
        Self { run, index }
    }
}

/// Read-only access to a branching move tree.
///
/// The engine never mutates trees; hosts own them and supply new inputs when
/// structure or selection changes. Implementations must keep ids stable for
/// the lifetime of a given tree value, and every run reachable from
/// [`MoveTree::root`] must hold at least one node.
pub trait MoveTree {
    /// The root run of the tree.
    fn root(&self) -> RunId;

    /// The parent of `run`, or `None` for the root.
    fn parent(&self, run: RunId) -> Option<RunId>;

    /// The child runs of `run`, in branch order.
    fn children(&self, run: RunId) -> &[RunId];

    /// Index into [`MoveTree::children`] of the currently active child.
    ///
    /// Unconstrained when `run` has no children.
    fn current_child(&self, run: RunId) -> usize;

    /// Number of move nodes in `run`.
    fn move_count(&self, run: RunId) -> usize;

    /// The node at `index` within `run`, if it exists.
    fn node(&self, run: RunId, index: usize) -> Option<&MoveNode>;

    /// Returns `true` if `pos` names an existing node.
    fn contains(&self, pos: TreePosition) -> bool {
        pos.index < self.move_count(pos.run)
    }

    /// Walks `delta` moves along the flattened move sequence from `pos`.
    ///
    /// Negative deltas climb through parent runs; positive deltas descend
    /// through each run's active child. Returns `None` when the walk runs off
    /// either end of the sequence.
    fn step(&self, pos: TreePosition, delta: isize) -> Option<TreePosition> {
        if !self.contains(pos) {
            return None;
        }
        let mut run = pos.run;
        let mut index = pos.index;
        let mut delta = delta;

        while delta < 0 {
            let back = delta.unsigned_abs();
            if back <= index {
                index -= back;
                delta = 0;
            } else {
                // Consume the remainder of this run, then land on the
                // parent's last node.
                delta += index as isize + 1;
                run = self.parent(run)?;
                let count = self.move_count(run);
                debug_assert!(count > 0, "runs must hold at least one node");
                index = count.saturating_sub(1);
            }
        }
        while delta > 0 {
            let count = self.move_count(run);
            let room = count.saturating_sub(1).saturating_sub(index);
            if (delta as usize) <= room {
                index += delta as usize;
                delta = 0;
            } else {
                delta -= (count - index) as isize;
                run = *self.children(run).get(self.current_child(run))?;
                index = 0;
            }
        }
        Some(TreePosition::new(run, index))
    }

    /// A cache key over tree *structure*: run ids, move counts, and subtree
    /// order. Selection state deliberately does not participate, so moving
    /// through an unchanged tree reuses cached layouts.
    fn structural_hash(&self) -> u64 {
        let mut hasher = DefaultHashBuilder::default().build_hasher();
        let mut stack = Vec::new();
        stack.push(self.root());
        while let Some(run) = stack.pop() {
            run.hash(&mut hasher);
            self.move_count(run).hash(&mut hasher);
            let children = self.children(run);
            children.len().hash(&mut hasher);
            for &child in children.iter().rev() {
                stack.push(child);
            }
        }
        hasher.finish()
    }
}

#[derive(Debug, Clone)]
struct RunData {
    parent: Option<RunId>,
    nodes: Vec<MoveNode>,
    children: Vec<RunId>,
    current: usize,
}

/// A vec-arena [`MoveTree`] with construction helpers.
///
/// This is enough tree for hosts that do not already have one, and for tests.
/// Editing beyond construction (splitting runs, deleting branches) is the
/// host's business and intentionally absent here.
///
/// ```
/// use gamegraph_tree::{ArenaTree, MoveColor, MoveNode, MoveTree};
///
/// let mut tree = ArenaTree::new();
/// let root = tree.root();
/// tree.push_move(root, MoveNode::with_move(MoveColor::Black, "dd"));
/// let branch = tree.add_child(root, MoveNode::with_move(MoveColor::White, "pp"));
/// tree.add_child(root, MoveNode::with_move(MoveColor::White, "qq"));
/// tree.set_current_child(root, 0);
///
/// assert_eq!(tree.children(root).len(), 2);
/// assert_eq!(tree.parent(branch), Some(root));
/// ```
#[derive(Debug, Clone)]
pub struct ArenaTree {
    runs: Vec<RunData>,
}

impl ArenaTree {
    /// Creates a tree whose root run holds a single setup node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            runs: alloc::vec![RunData {
                parent: None,
                nodes: alloc::vec![MoveNode::new()],
                children: Vec::new(),
                current: 0,
            }],
        }
    }

    fn run(&self, id: RunId) -> &RunData {
        &self.runs[id.index()]
    }

    fn run_mut(&mut self, id: RunId) -> &mut RunData {
        &mut self.runs[id.index()]
    }

    /// Appends a node to the end of `run`, returning its position.
    pub fn push_move(&mut self, run: RunId, node: MoveNode) -> TreePosition {
        let nodes = &mut self.run_mut(run).nodes;
        nodes.push(node);
        TreePosition::new(run, nodes.len() - 1)
    }

    /// Starts a new child run of `run` with `first` as its first node.
    ///
    /// The new run is appended after existing siblings.
    pub fn add_child(&mut self, run: RunId, first: MoveNode) -> RunId {
        debug_assert!(run.index() < self.runs.len(), "unknown parent run");
        let id = RunId::from_index(u32::try_from(self.runs.len()).unwrap_or(u32::MAX));
        self.runs.push(RunData {
            parent: Some(run),
            nodes: alloc::vec![first],
            children: Vec::new(),
            current: 0,
        });
        self.run_mut(run).children.push(id);
        id
    }

    /// Sets the active-child index of `run`.
    pub fn set_current_child(&mut self, run: RunId, index: usize) {
        debug_assert!(
            index < self.run(run).children.len(),
            "active-child index out of range"
        );
        self.run_mut(run).current = index;
    }

    /// Mutable access to a node, for annotating during construction.
    pub fn node_mut(&mut self, run: RunId, index: usize) -> Option<&mut MoveNode> {
        self.run_mut(run).nodes.get_mut(index)
    }

    /// Number of runs in the arena.
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }
}

impl Default for ArenaTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveTree for ArenaTree {
    fn root(&self) -> RunId {
        RunId::from_index(0)
    }

    fn parent(&self, run: RunId) -> Option<RunId> {
        self.run(run).parent
    }

    fn children(&self, run: RunId) -> &[RunId] {
        &self.run(run).children
    }

    fn current_child(&self, run: RunId) -> usize {
        self.run(run).current
    }

    fn move_count(&self, run: RunId) -> usize {
        self.run(run).nodes.len()
    }

    fn node(&self, run: RunId, index: usize) -> Option<&MoveNode> {
        self.run(run).nodes.get(index)
    }
}
