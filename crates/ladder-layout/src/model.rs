//! Layout options and results.

use crate::graphlib::{Point, VertexId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankDir {
    /// Layers are rows; edges leave the bottom of the source and enter the top of the target.
    #[default]
    TB,
    /// Layers are columns; edges leave the right side and enter the left side.
    LR,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub rankdir: RankDir,
    pub vertex_width: f64,
    pub vertex_height: f64,
    /// Gap between neighbouring vertices of one layer.
    pub nodesep: f64,
    /// Gap between consecutive layers.
    pub ranksep: f64,
    pub marginx: f64,
    pub marginy: f64,
    /// Length of the straight run at both ends of a route.
    pub bend: f64,
    /// Half the length of the straight run centered between the two layers.
    pub straddle: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            vertex_width: 150.0,
            vertex_height: 50.0,
            nodesep: 50.0,
            ranksep: 50.0,
            marginx: 0.0,
            marginy: 0.0,
            bend: 10.0,
            straddle: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutVertex {
    pub u: VertexId,
    pub text: String,
    /// Center of the vertex.
    pub x: f64,
    pub y: f64,
    /// Center in the previous layout; the renderer animates from here.
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
    pub layer: usize,
    pub order: usize,
}

/// Start, bend-out, mid-top, mid-bottom, bend-in, end.
pub type Route = [Point; 6];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEdge {
    pub u: VertexId,
    pub v: VertexId,
    pub points: Route,
    pub points0: Route,
    /// Set when the edge was ignored for layering to break a cycle.
    pub reversed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub vertices: Vec<LayoutVertex>,
    pub edges: Vec<LayoutEdge>,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, u: VertexId) -> Option<&LayoutVertex> {
        self.vertices.iter().find(|v| v.u == u)
    }

    pub fn edge(&self, u: VertexId, v: VertexId) -> Option<&LayoutEdge> {
        self.edges.iter().find(|e| e.u == u && e.v == v)
    }

    /// Extent of the current vertex boxes and routes, `None` for an empty layout.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.vertices.first()?;
        let mut b = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for v in &self.vertices {
            b.include(v.x - v.width / 2.0, v.y - v.height / 2.0);
            b.include(v.x + v.width / 2.0, v.y + v.height / 2.0);
        }
        for p in self.edges.iter().flat_map(|e| e.points.iter()) {
            b.include(p.x, p.y);
        }
        Some(b)
    }
}
