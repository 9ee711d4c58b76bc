// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SGF-style property bags for move nodes.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

/// Stone color of a move property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveColor {
    /// A black move (`B` property).
    Black,
    /// A white move (`W` property).
    White,
}

impl MoveColor {
    /// The property key carrying moves of this color.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Black => "B",
            Self::White => "W",
        }
    }
}

/// Coarse node classification derived from the properties present.
///
/// Records in the wild contain nodes that are neither clearly moves nor
/// clearly setup; those degrade to [`NodeKind::Move`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A normal move node (`B` or `W` with a board coordinate).
    Move,
    /// A pass: a move property whose first value is empty.
    Pass,
    /// A node without any move property (root or setup position).
    Setup,
}

/// One node of a game record: a bag of `property key → values` entries.
///
/// Property keys follow SGF conventions (`B`/`W` for moves, `C` for comments,
/// and so on), but this type does not interpret anything beyond the move
/// properties; annotation semantics are configured by the host through the
/// scene style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveNode {
    props: HashMap<String, SmallVec<[String; 1]>>,
}

impl MoveNode {
    /// Creates an empty node (classified as [`NodeKind::Setup`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a move node for `color` at the given board coordinate.
    #[must_use]
    pub fn with_move(color: MoveColor, coordinate: &str) -> Self {
        let mut node = Self::new();
        node.set_property(color.key(), coordinate);
        node
    }

    /// Creates a pass node for `color`.
    #[must_use]
    pub fn pass(color: MoveColor) -> Self {
        Self::with_move(color, "")
    }

    /// Replaces the property's values with a single value.
    pub fn set_property(&mut self, key: &str, value: &str) {
        let mut values = SmallVec::new();
        values.push(String::from(value));
        self.props.insert(String::from(key), values);
    }

    /// Appends a value to the property, creating it if absent.
    pub fn add_property_value(&mut self, key: &str, value: &str) {
        self.props
            .entry(String::from(key))
            .or_default()
            .push(String::from(value));
    }

    /// Removes a property entirely, returning its values if it was present.
    pub fn remove_property(&mut self, key: &str) -> Option<Vec<String>> {
        self.props.remove(key).map(SmallVec::into_vec)
    }

    /// Returns `true` if the property is present (even with no values).
    #[must_use]
    pub fn has_property(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    /// Returns `true` if any of the given properties is present.
    #[must_use]
    pub fn has_any_property<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        keys.iter().any(|key| self.has_property(key.as_ref()))
    }

    /// Returns the property's values, if present.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&[String]> {
        self.props.get(key).map(SmallVec::as_slice)
    }

    /// Returns the property's first value, if present.
    #[must_use]
    pub fn first_value(&self, key: &str) -> Option<&str> {
        self.props.get(key)?.first().map(String::as_str)
    }

    /// The move of this node as `(color, first value)`, if any.
    ///
    /// When both colors are present (malformed input), black wins.
    #[must_use]
    pub fn move_property(&self) -> Option<(MoveColor, Option<&str>)> {
        for color in [MoveColor::Black, MoveColor::White] {
            if self.has_property(color.key()) {
                return Some((color, self.first_value(color.key())));
            }
        }
        None
    }

    /// Classifies this node from the properties present.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self.move_property() {
            Some((_, Some(""))) => NodeKind::Pass,
            // A move property with a coordinate, or with no value at all
            // (malformed), is drawn as a normal move.
            Some(_) => NodeKind::Move,
            None => NodeKind::Setup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_pass_and_setup_classification() {
        assert_eq!(MoveNode::with_move(MoveColor::Black, "dd").kind(), NodeKind::Move);
        assert_eq!(MoveNode::with_move(MoveColor::White, "qq").kind(), NodeKind::Move);
        assert_eq!(MoveNode::pass(MoveColor::Black).kind(), NodeKind::Pass);
        assert_eq!(MoveNode::pass(MoveColor::White).kind(), NodeKind::Pass);
        assert_eq!(MoveNode::new().kind(), NodeKind::Setup);
    }

    #[test]
    fn malformed_move_degrades_to_normal_move() {
        // A move property that exists but carries no values is neither a
        // proper move nor a setup node; it draws as a normal move.
        let mut node = MoveNode::new();
        node.props.insert(String::from("B"), SmallVec::new());
        assert_eq!(node.kind(), NodeKind::Move);
    }

    #[test]
    fn property_accessors() {
        let mut node = MoveNode::with_move(MoveColor::Black, "dd");
        node.set_property("C", "a comment");
        node.add_property_value("TR", "aa");
        node.add_property_value("TR", "bb");

        assert!(node.has_property("C"));
        assert!(node.has_any_property(&["N", "C"]));
        assert!(!node.has_any_property(&["N", "GB"]));
        assert_eq!(node.first_value("C"), Some("a comment"));
        assert_eq!(node.property("TR").map(<[String]>::len), Some(2));
        assert_eq!(node.move_property(), Some((MoveColor::Black, Some("dd"))));

        assert!(node.remove_property("C").is_some());
        assert!(!node.has_property("C"));
    }

    #[test]
    fn both_colors_present_prefers_black() {
        let mut node = MoveNode::with_move(MoveColor::Black, "aa");
        node.set_property("W", "bb");
        assert_eq!(node.move_property(), Some((MoveColor::Black, Some("aa"))));
    }
}
