//! Six-point edge routes.
//!
//! Every edge is drawn the same way between two layers: leave the source, run straight for
//! `bend`, curve over to a short straight segment of `2 * straddle` centered between the two
//! vertices, curve again, and run straight for `bend` into the target. Renderers rely on there
//! being exactly six points in this order.

use crate::coordinate_system;
use crate::graphlib::Point;
use crate::model::{LayoutOptions, Route};

/// Route between two vertex centers.
///
/// Points are computed in rank space from the source's far side (bottom for
/// [`RankDir::TB`](crate::RankDir::TB)) to the target's near side, so the same offsets apply to
/// every edge regardless of direction. Edges pointing back up the ladder keep these anchors and
/// simply fold back.
pub fn six_points(source: Point, target: Point, options: &LayoutOptions) -> Route {
    let rankdir = options.rankdir;
    let (_, extent_across) = coordinate_system::vertex_extent(options);
    let half_across = extent_across / 2.0;
    let (s_along, s_center) = coordinate_system::to_rank_space(rankdir, source);
    let (t_along, t_center) = coordinate_system::to_rank_space(rankdir, target);

    let start = s_center + half_across;
    let end = t_center - half_across;
    let mid_along = (s_along + t_along) / 2.0;
    let mid_across = (start + end) / 2.0;

    let at = |along: f64, across: f64| coordinate_system::to_screen(rankdir, along, across);
    [
        at(s_along, start),
        at(s_along, start + options.bend),
        at(mid_along, mid_across - options.straddle),
        at(mid_along, mid_across + options.straddle),
        at(t_along, end - options.bend),
        at(t_along, end),
    ]
}

/// A cached route from edge data, if it is usable as one.
pub fn cached(points: &[Point]) -> Option<Route> {
    let route: Route = points.try_into().ok()?;
    route
        .iter()
        .all(|p| p.x.is_finite() && p.y.is_finite())
        .then_some(route)
}
