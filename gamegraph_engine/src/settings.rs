// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use gamegraph_scene::GraphStyle;

/// Everything the host configures about the graph, injected at construction.
///
/// The engine only reads these values; storage and user preferences are the
/// host's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSettings {
    /// Grid cell edge length in pixels.
    pub cell_size: f64,
    /// Debounce delay before recentering on a selection change, in
    /// milliseconds. Short enough to feel responsive, long enough to
    /// coalesce held-down arrow-key repeats.
    pub recenter_delay: u64,
    /// Debounce delay before applying a viewport resize, in milliseconds.
    /// Longer than [`GraphSettings::recenter_delay`]: resize events arrive in
    /// storms and remeasuring is the coarser signal.
    pub remeasure_delay: u64,
    /// Suggested camera animation duration for hosts that tween, in
    /// milliseconds. The engine itself only produces target positions.
    pub animation_duration: u64,
    /// Colors, sizes, and annotation property names.
    pub style: GraphStyle,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            cell_size: 24.0,
            recenter_delay: 300,
            remeasure_delay: 500,
            animation_duration: 200,
            style: GraphStyle::default(),
        }
    }
}
