#![forbid(unsafe_code)]

//! Layered ("ladder") layout for interview graphs.
//!
//! The pipeline mirrors a reduced Dagre: break cycles with a DFS feedback arc set, assign layers
//! by longest path, order each layer by discovery, then place vertices on a fixed grid and route
//! every edge through six points. Every step is deterministic for a given graph content, which
//! keeps animations stable and lets tests compare serialized output byte for byte.

pub use ladder_graphlib as graphlib;

pub mod acyclic;
pub mod coordinate_system;
pub mod engine;
pub mod indexed;
pub mod model;
pub mod order;
pub mod position;
pub mod rank;
pub mod route;

pub use engine::LayoutEngine;
pub use model::{Bounds, Layout, LayoutEdge, LayoutOptions, LayoutVertex, RankDir, Route};

use graphlib::{DirectedGraph, EdgeKey, Point, VertexId};
use indexed::IndexedGraph;
use rustc_hash::FxHashMap;

/// Lays out `g` with default options and no previous layout.
pub fn layout_graph<G: DirectedGraph>(g: &G) -> Layout {
    layout(g, &LayoutOptions::default(), None)
}

/// Lays out `g`, taking each vertex's and edge's previous geometry from `previous`.
///
/// This never fails: cycles are broken deterministically, unusable pinned coordinates are
/// ignored, and an empty graph yields an empty layout.
pub fn layout<G: DirectedGraph>(
    g: &G,
    options: &LayoutOptions,
    previous: Option<&Layout>,
) -> Layout {
    let ig = IndexedGraph::new(g);
    let back = acyclic::back_edges(&ig);
    let ranking = rank::longest_path(&ig, &back);
    let layers = order::layers(&ranking);
    let centers = position::centers(&ig, &ranking, &layers, options);

    tracing::debug!(
        vertices = ig.vertex_count(),
        edges = ig.edge_count(),
        back_edges = back.iter().filter(|&&b| b).count(),
        layers = layers.len(),
        "ladder layout"
    );

    let prev_vertices: FxHashMap<VertexId, &LayoutVertex> = previous
        .map(|p| p.vertices.iter().map(|v| (v.u, v)).collect())
        .unwrap_or_default();
    let prev_edges: FxHashMap<EdgeKey, &LayoutEdge> = previous
        .map(|p| p.edges.iter().map(|e| (EdgeKey::new(e.u, e.v), e)).collect())
        .unwrap_or_default();

    let vertices: Vec<LayoutVertex> = (0..ig.vertex_count())
        .map(|ix| {
            let u = ig.id(ix);
            let Point { x, y } = centers[ix];
            // A vertex seen for the first time enters from the top edge of the canvas.
            let (x0, y0) = prev_vertices.get(&u).map_or((x, 0.0), |p| (p.x, p.y));
            LayoutVertex {
                u,
                text: ig.data(ix).text.clone(),
                x,
                y,
                x0,
                y0,
                width: options.vertex_width,
                height: options.vertex_height,
                layer: ranking.layer[ix],
                order: layers.order[ix],
            }
        })
        .collect();

    let edges: Vec<LayoutEdge> = ig
        .edges()
        .iter()
        .enumerate()
        .map(|(e_ix, &(s, t))| {
            let key = ig.edge_key(e_ix);
            let points = route::six_points(
                Point::new(vertices[s].x, vertices[s].y),
                Point::new(vertices[t].x, vertices[t].y),
                options,
            );
            let points0 = match prev_edges.get(&key) {
                Some(prev) => prev.points,
                None => ig
                    .edge_data(e_ix)
                    .points
                    .as_deref()
                    .and_then(route::cached)
                    .unwrap_or_else(|| {
                        route::six_points(
                            Point::new(vertices[s].x0, vertices[s].y0),
                            Point::new(vertices[t].x0, vertices[t].y0),
                            options,
                        )
                    }),
            };
            LayoutEdge {
                u: key.u,
                v: key.v,
                points,
                points0,
                reversed: back[e_ix],
            }
        })
        .collect();

    Layout { vertices, edges }
}
