//! Render-ready geometry: edge paths and vertex transforms.
//!
//! Everything here is a pure function of layout output. Interpolation helpers take a progress
//! value and return a value; the caller owns timing.

use crate::error::{Error, Result};
use crate::fmt::JsNumber;
use ladder_graphlib::Point;
use ladder_layout::{LayoutEdge, LayoutVertex, Route};
use std::fmt;

/// A quadratic Bézier piece in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub from: Point,
    pub control: Point,
    pub to: Point,
}

/// Soft S-shaped connector between two points.
///
/// Drawn as two quadratic pieces meeting at the midpoint. The first leaves `from` horizontally,
/// the second is its point reflection about the midpoint, so the tangent is continuous there
/// whatever the slope between the endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SBend {
    pub from: Point,
    pub to: Point,
}

impl SBend {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn midpoint(&self) -> Point {
        self.from.midpoint(self.to)
    }

    fn delta(&self) -> (f64, f64) {
        (self.to.x - self.from.x, self.to.y - self.from.y)
    }

    pub fn quads(&self) -> [Quad; 2] {
        let (dx, dy) = self.delta();
        let mid = self.midpoint();
        [
            Quad {
                from: self.from,
                control: Point::new(self.from.x + dx / 4.0, self.from.y),
                to: mid,
            },
            Quad {
                from: mid,
                control: Point::new(mid.x + dx / 4.0, mid.y + dy / 2.0),
                to: self.to,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(Point),
    Curve(SBend),
}

impl Segment {
    pub fn end(&self) -> Point {
        match self {
            Segment::Line(p) => *p,
            Segment::Curve(bend) => bend.to,
        }
    }
}

/// Drawable form of a six-point route: line, S-bend, line, S-bend, line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePath {
    start: Point,
    segments: [Segment; 5],
}

impl EdgePath {
    pub fn from_route(route: &Route) -> Self {
        let [p0, p1, p2, p3, p4, p5] = *route;
        Self {
            start: p0,
            segments: [
                Segment::Line(p1),
                Segment::Curve(SBend::new(p1, p2)),
                Segment::Line(p3),
                Segment::Curve(SBend::new(p3, p4)),
                Segment::Line(p5),
            ],
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.segments[4].end()
    }

    pub fn segments(&self) -> &[Segment; 5] {
        &self.segments
    }

    pub fn bends(&self) -> impl Iterator<Item = &SBend> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Curve(bend) => Some(bend),
            Segment::Line(_) => None,
        })
    }
}

/// Builds the path for a route given as a slice, as decoded from cached edge data.
pub fn build_edge_path(points: &[Point]) -> Result<EdgePath> {
    let route: &Route = points
        .try_into()
        .map_err(|_| Error::InvalidRoute { len: points.len() })?;
    Ok(EdgePath::from_route(route))
}

/// SVG path data, e.g. `M0 0 L0 10 q0 0,0 5 q0 5,0 5 L0 30 ...`.
impl fmt::Display for EdgePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{} {}", JsNumber(self.start.x), JsNumber(self.start.y))?;
        for segment in &self.segments {
            match segment {
                Segment::Line(p) => write!(f, " L{} {}", JsNumber(p.x), JsNumber(p.y))?,
                Segment::Curve(bend) => {
                    let (dx, dy) = bend.delta();
                    let dx4 = JsNumber(dx / 4.0);
                    let dx2 = JsNumber(dx / 2.0);
                    let dy2 = JsNumber(dy / 2.0);
                    write!(f, " q{dx4} 0,{dx2} {dy2} q{dx4} {dy2},{dx2} {dy2}")?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

impl Transform {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, scale: 1.0 }
    }

    pub fn lerp(self, to: Transform, t: f64) -> Transform {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Transform {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
        }
    }
}

/// SVG transform attribute, e.g. `translate(75,25)scale(1)`.
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({},{})scale({})",
            JsNumber(self.x),
            JsNumber(self.y),
            JsNumber(self.scale)
        )
    }
}

fn clamp_progress(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Movement of one vertex from its previous to its new layout position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexTransition {
    pub from: Transform,
    pub to: Transform,
}

impl VertexTransition {
    pub fn from_layout(vertex: &LayoutVertex) -> Self {
        Self {
            from: Transform::at(vertex.x0, vertex.y0),
            to: Transform::at(vertex.x, vertex.y),
        }
    }

    /// Transform at progress `t`; `t` is clamped to `[0, 1]`.
    pub fn at(&self, t: f64) -> Transform {
        self.from.lerp(self.to, clamp_progress(t))
    }

    pub fn is_still(&self) -> bool {
        self.from == self.to
    }
}

/// Movement of one edge route between layouts, point by point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeTransition {
    pub from: Route,
    pub to: Route,
}

impl EdgeTransition {
    pub fn from_layout(edge: &LayoutEdge) -> Self {
        Self {
            from: edge.points0,
            to: edge.points,
        }
    }

    pub fn route_at(&self, t: f64) -> Route {
        let t = clamp_progress(t);
        std::array::from_fn(|i| self.from[i].lerp(self.to[i], t))
    }

    pub fn at(&self, t: f64) -> EdgePath {
        EdgePath::from_route(&self.route_at(t))
    }
}
