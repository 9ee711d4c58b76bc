// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual configuration for the graph.

use alloc::string::String;
use alloc::vec::Vec;

/// A straight RGBA color, 8 bits per channel.
///
/// The engine only selects and forwards colors; interpretation (sRGB or
/// otherwise) is up to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    /// An opaque color from RGB channels.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b, 0xff)
    }
}

/// Colors, sizes, and annotation property names for the graph.
///
/// Supplied by the host at engine construction; the engine never computes or
/// stores configuration itself. Defaults are tuned for a dark record-editor
/// sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStyle {
    /// Radius of a node glyph, in pixels.
    pub node_radius: f64,
    /// Stroke width of current-path edges.
    pub edge_width: f64,
    /// Stroke width of alternate-line edges.
    pub edge_inactive_width: f64,
    /// Color of current-path edges.
    pub edge_color: Rgba,
    /// Color of alternate-line edges.
    pub edge_inactive_color: Rgba,
    /// Fill of an ordinary node on the current path.
    pub node_color: Rgba,
    /// Fill of any node off the current path.
    pub node_inactive_color: Rgba,
    /// Fill of the selected node.
    pub node_selected_color: Rgba,
    /// Fill of a bookmarked node.
    pub node_bookmark_color: Rgba,
    /// Fill of a node carrying any of [`GraphStyle::comment_properties`].
    pub node_comment_color: Rgba,
    /// Property marking a node as bookmarked.
    pub bookmark_property: String,
    /// Properties whose presence marks a node as commented.
    pub comment_properties: Vec<String>,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            node_radius: 4.0,
            edge_width: 2.0,
            edge_inactive_width: 1.0,
            edge_color: Rgba::opaque(0xaa, 0xaa, 0xaa),
            edge_inactive_color: Rgba::opaque(0x55, 0x55, 0x55),
            node_color: Rgba::opaque(0xe0, 0xe0, 0xe0),
            node_inactive_color: Rgba::opaque(0x66, 0x66, 0x66),
            node_selected_color: Rgba::opaque(0x2e, 0x8b, 0xf0),
            node_bookmark_color: Rgba::opaque(0xd8, 0x7c, 0x2a),
            node_comment_color: Rgba::opaque(0x6c, 0xc2, 0x5b),
            bookmark_property: String::from("HO"),
            comment_properties: ["C", "CR", "GB", "GW", "HO", "MA", "N", "SQ", "TR", "UC"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
