//! Vertex and edge payloads.
//!
//! Only the fields the engine reads are typed. Anything else found in an exchange record is kept
//! in `extras` and written back unchanged, so payloads produced by newer editors survive a
//! load/save cycle.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, to: Point, t: f64) -> Point {
        Point {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }

    pub fn midpoint(self, other: Point) -> Point {
        self.lerp(other, 0.5)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexData {
    #[serde(default)]
    pub text: String,
    /// Pinned horizontal position; `None` lets the layout place the vertex.
    #[serde(default)]
    pub x: Option<f64>,
    /// Pinned vertical position.
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl VertexData {
    /// An unpinned construct with the given label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn pinned(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x: Some(x),
            y: Some(y),
            extras: Map::new(),
        }
    }

    /// Drops non-finite pins; JSON has no encoding for them.
    pub(crate) fn normalized(mut self) -> Self {
        self.x = self.x.filter(|x| x.is_finite());
        self.y = self.y.filter(|y| y.is_finite());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    /// Route cached by a previous layout, if any.
    #[serde(default)]
    pub points: Option<Vec<Point>>,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl EdgeData {
    pub fn with_points(points: Vec<Point>) -> Self {
        Self {
            points: Some(points),
            extras: Map::new(),
        }
    }

    /// Drops a cached route holding a non-finite coordinate, leaving the edge unrouted.
    pub(crate) fn normalized(mut self) -> Self {
        if self
            .points
            .as_ref()
            .is_some_and(|points| !points.iter().all(|p| p.is_finite()))
        {
            self.points = None;
        }
        self
    }
}
