//! Grid placement and vertex pinning.

use crate::coordinate_system;
use crate::graphlib::Point;
use crate::indexed::IndexedGraph;
use crate::model::LayoutOptions;
use crate::order::Layers;
use crate::rank::Ranking;

/// Screen-space center of every vertex index.
///
/// Computed centers sit on a fixed grid: one pitch of `extent + nodesep` per in-layer position
/// and `extent + ranksep` per layer. A finite pinned `x` or `y` in the vertex data then replaces
/// the corresponding coordinate; each axis is pinned independently.
pub fn centers(
    g: &IndexedGraph<'_>,
    ranking: &Ranking,
    layers: &Layers,
    options: &LayoutOptions,
) -> Vec<Point> {
    let (extent_along, extent_across) = coordinate_system::vertex_extent(options);
    let (margin_along, margin_across) = coordinate_system::margins(options);
    let pitch_along = extent_along + options.nodesep;
    let pitch_across = extent_across + options.ranksep;

    (0..g.vertex_count())
        .map(|ix| {
            let along = margin_along + layers.order[ix] as f64 * pitch_along + extent_along / 2.0;
            let across =
                margin_across + ranking.layer[ix] as f64 * pitch_across + extent_across / 2.0;
            let computed = coordinate_system::to_screen(options.rankdir, along, across);
            pin(g, ix, computed)
        })
        .collect()
}

fn pin(g: &IndexedGraph<'_>, ix: usize, computed: Point) -> Point {
    let data = g.data(ix);
    Point {
        x: pinned_axis(g, ix, "x", data.x).unwrap_or(computed.x),
        y: pinned_axis(g, ix, "y", data.y).unwrap_or(computed.y),
    }
}

fn pinned_axis(g: &IndexedGraph<'_>, ix: usize, axis: &str, value: Option<f64>) -> Option<f64> {
    let value = value?;
    if value.is_finite() {
        return Some(value);
    }
    tracing::warn!(
        u = g.id(ix),
        axis,
        value,
        "ignoring non-finite pinned coordinate"
    );
    None
}
