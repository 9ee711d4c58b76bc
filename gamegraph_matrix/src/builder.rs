// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pass: tree topology in, grid matrix out.

use alloc::vec::Vec;

use gamegraph_tree::{MoveTree, RunId, TreePosition};

use crate::{GridPos, Layout};

struct Frame {
    run: RunId,
    col: i32,
    child_row: i32,
    next_child: usize,
    // Rightmost column used anywhere in this run's subtree so far.
    max_col: i32,
}

/// Lays out `tree` onto the grid.
///
/// Column assignment: a run's moves occupy consecutive rows of one column;
/// the first child continues the parent's column, extending the bone; each
/// later sibling starts one column past the full width of the previous
/// sibling's subtree, so parallel branches never collide in any shared row.
/// Rows follow move depth: a child's first move sits on the row after its
/// parent's last move.
///
/// The pass is a single depth-first walk with an explicit stack — linear in
/// the number of move nodes and safe for degenerate, very deep records.
/// Selection state is never consulted, which is what makes the result
/// cacheable under [`MoveTree::structural_hash`].
#[must_use]
pub fn build<T: MoveTree + ?Sized>(tree: &T) -> Layout {
    let mut layout = Layout::new();
    let mut stack: Vec<Frame> = Vec::new();

    let root = tree.root();
    place_bone(&mut layout, tree, root, 0, 0);
    stack.push(Frame {
        run: root,
        col: 0,
        child_row: bone_len(tree, root),
        next_child: 0,
        max_col: 0,
    });

    while !stack.is_empty() {
        let top = stack.len() - 1;
        let children = tree.children(stack[top].run);
        if stack[top].next_child < children.len() {
            let nth = stack[top].next_child;
            stack[top].next_child += 1;

            let child = children[nth];
            let col = if nth == 0 {
                stack[top].col
            } else {
                stack[top].max_col + 1
            };
            let row = stack[top].child_row;

            place_bone(&mut layout, tree, child, col, row);
            stack.push(Frame {
                run: child,
                col,
                child_row: row + bone_len(tree, child),
                next_child: 0,
                max_col: col,
            });
        } else if let Some(finished) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.max_col = parent.max_col.max(finished.max_col);
            }
        }
    }

    layout
}

fn bone_len<T: MoveTree + ?Sized>(tree: &T, run: RunId) -> i32 {
    i32::try_from(tree.move_count(run)).unwrap_or(i32::MAX)
}

fn place_bone<T: MoveTree + ?Sized>(layout: &mut Layout, tree: &T, run: RunId, col: i32, row: i32) {
    let mut r = row;
    for index in 0..tree.move_count(run) {
        layout.insert(GridPos::new(col, r), TreePosition::new(run, index));
        r += 1;
    }
}
