//! Coordinate system adjustment helpers.
//!
//! Placement and routing work in rank space: `along` is the position inside a layer, `across` is
//! the position on the layer axis. [`RankDir::TB`] maps `along` to x and `across` to y;
//! [`RankDir::LR`] swaps them.

use crate::graphlib::Point;
use crate::model::{LayoutOptions, RankDir};

/// Vertex extent in rank space: `(along, across)`.
pub fn vertex_extent(options: &LayoutOptions) -> (f64, f64) {
    match options.rankdir {
        RankDir::TB => (options.vertex_width, options.vertex_height),
        RankDir::LR => (options.vertex_height, options.vertex_width),
    }
}

/// Margins in rank space: `(along, across)`.
pub fn margins(options: &LayoutOptions) -> (f64, f64) {
    match options.rankdir {
        RankDir::TB => (options.marginx, options.marginy),
        RankDir::LR => (options.marginy, options.marginx),
    }
}

pub fn to_screen(rankdir: RankDir, along: f64, across: f64) -> Point {
    match rankdir {
        RankDir::TB => Point::new(along, across),
        RankDir::LR => Point::new(across, along),
    }
}

/// Inverse of [`to_screen`]: `(along, across)`.
pub fn to_rank_space(rankdir: RankDir, p: Point) -> (f64, f64) {
    match rankdir {
        RankDir::TB => (p.x, p.y),
        RankDir::LR => (p.y, p.x),
    }
}
