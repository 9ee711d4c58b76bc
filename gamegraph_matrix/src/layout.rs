// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sparse grid matrix and its reverse dictionary.

use hashbrown::HashMap;

use gamegraph_tree::TreePosition;

/// A cell coordinate on the layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Column, growing rightwards with later branches.
    pub col: i32,
    /// Row, one per move along a bone, growing downwards.
    pub row: i32,
}

impl GridPos {
    /// Creates a grid coordinate.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// An inclusive rectangle of grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRect {
    /// Leftmost column (inclusive).
    pub min_col: i32,
    /// Topmost row (inclusive).
    pub min_row: i32,
    /// Rightmost column (inclusive).
    pub max_col: i32,
    /// Bottom row (inclusive).
    pub max_row: i32,
}

impl GridRect {
    /// Returns `true` if the rectangle contains `pos`.
    #[must_use]
    pub const fn contains(&self, pos: GridPos) -> bool {
        self.min_col <= pos.col
            && pos.col <= self.max_col
            && self.min_row <= pos.row
            && pos.row <= self.max_row
    }
}

/// Occupied-column span of one grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    /// Number of columns between the first and last occupied column,
    /// inclusive. Rows with gaps count the gaps; centering cares about the
    /// visual extent, not the population.
    pub width: i32,
    /// Column of the first occupied cell (the row's left padding).
    pub left_padding: i32,
}

/// The result of laying a tree out onto the grid.
///
/// Invariants, maintained by [`crate::build`]:
/// - every occupied cell maps to exactly one existing move node,
/// - the cell map and the position dictionary are mutual inverses,
/// - no two runs overlap within a row.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub(crate) cells: HashMap<(i32, i32), TreePosition>,
    pub(crate) dict: HashMap<TreePosition, GridPos>,
    pub(crate) spans: HashMap<i32, (i32, i32)>,
    pub(crate) columns: i32,
    pub(crate) rows: i32,
}

impl Layout {
    /// An empty layout, used before the first tree arrives.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The tree position occupying `pos`, if any.
    #[must_use]
    pub fn cell(&self, pos: GridPos) -> Option<TreePosition> {
        self.cells.get(&(pos.col, pos.row)).copied()
    }

    /// The grid cell holding `pos`, if it was laid out.
    #[must_use]
    pub fn position_of(&self, pos: TreePosition) -> Option<GridPos> {
        self.dict.get(&pos).copied()
    }

    /// The occupied span of `row`, or `None` for an empty row.
    #[must_use]
    pub fn width_of(&self, row: i32) -> Option<RowSpan> {
        let &(min, max) = self.spans.get(&row)?;
        Some(RowSpan {
            width: max - min + 1,
            left_padding: min,
        })
    }

    /// One past the rightmost occupied column.
    #[must_use]
    pub const fn columns(&self) -> i32 {
        self.columns
    }

    /// One past the bottom occupied row.
    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if nothing was laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over all occupied cells in unspecified order.
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, TreePosition)> + '_ {
        self.cells
            .iter()
            .map(|(&(col, row), &pos)| (GridPos::new(col, row), pos))
    }

    pub(crate) fn insert(&mut self, grid: GridPos, pos: TreePosition) {
        let prev = self.cells.insert((grid.col, grid.row), pos);
        debug_assert!(prev.is_none(), "layout placed two nodes in one cell");
        let prev = self.dict.insert(pos, grid);
        debug_assert!(prev.is_none(), "layout placed one node in two cells");

        self.spans
            .entry(grid.row)
            .and_modify(|(min, max)| {
                *min = (*min).min(grid.col);
                *max = (*max).max(grid.col);
            })
            .or_insert((grid.col, grid.col));
        self.columns = self.columns.max(grid.col + 1);
        self.rows = self.rows.max(grid.row + 1);
    }
}
