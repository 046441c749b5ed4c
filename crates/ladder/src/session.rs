//! One participant's editing session: history, layout cache, and the ladder operations the
//! interview screen calls.

use crate::error::{Error, Result};
use crate::history::{History, HistoryConfig};
use ladder_graphlib::{EdgeData, Graph, VertexData, VertexId, next_vertex_id};
use ladder_layout::{Layout, LayoutEngine, LayoutOptions};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub history: HistoryConfig,
    pub layout: LayoutOptions,
}

/// Adds one new vertex and the edge `u -> v` as a single history step.
///
/// Exactly one of `ud` and `vd` must be set: `ud` makes `u` the new vertex (laddering up to an
/// existing `v`), `vd` makes `v` the new vertex (laddering down from an existing `u`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddVertexWithEdge {
    pub u: VertexId,
    pub v: VertexId,
    #[serde(default)]
    pub ud: Option<VertexData>,
    #[serde(default)]
    pub vd: Option<VertexData>,
    #[serde(default)]
    pub d: EdgeData,
}

impl AddVertexWithEdge {
    fn apply(self, g: &Graph) -> Result<Graph> {
        let AddVertexWithEdge { u, v, ud, vd, d } = self;
        let g = match (ud, vd) {
            (Some(data), None) => g.add_vertex(u, data)?,
            (None, Some(data)) => g.add_vertex(v, data)?,
            _ => return Err(Error::InvalidLadderStep),
        };
        Ok(g.add_edge(u, v, d)?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    history: History,
    engine: LayoutEngine,
}

impl Session {
    pub fn new(graph: Graph) -> Self {
        Self::with_config(graph, SessionConfig::default())
    }

    pub fn with_config(graph: Graph, config: SessionConfig) -> Self {
        Self {
            history: History::with_config(graph, config.history),
            engine: LayoutEngine::new(config.layout),
        }
    }

    /// Starts a session from a saved structure. Blank input is a project with nothing saved yet
    /// and yields an empty graph.
    pub fn load_graph(json: &str) -> Result<Self> {
        Ok(Self::new(parse_saved(json)?))
    }

    /// Replaces the graph, clearing history and the cached layout.
    pub fn load(&mut self, graph: Graph) {
        self.history.load(graph);
        self.engine.reset();
    }

    pub fn graph(&self) -> &Graph {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn layout_options(&self) -> &LayoutOptions {
        self.engine.options()
    }

    pub fn set_layout_options(&mut self, options: LayoutOptions) {
        self.engine.set_options(options);
    }

    pub fn next_vertex_id(&self) -> VertexId {
        next_vertex_id(self.graph())
    }

    pub fn add_vertex(&mut self, id: VertexId, data: VertexData) -> Result<()> {
        self.history.apply(|g| g.add_vertex(id, data))?;
        Ok(())
    }

    /// Adds an unconnected, unpinned construct and returns its id.
    pub fn add_construct(&mut self, text: impl Into<String>) -> Result<VertexId> {
        let id = self.next_vertex_id();
        self.add_vertex(id, VertexData::new(text))?;
        Ok(id)
    }

    pub fn add_vertex_with_edge(&mut self, step: AddVertexWithEdge) -> Result<()> {
        self.history.apply(|g| step.apply(g))?;
        Ok(())
    }

    /// Adds a new construct `u` with an edge `u -> v`, and returns `u`.
    pub fn ladder_up(&mut self, v: VertexId, text: impl Into<String>) -> Result<VertexId> {
        let u = self.next_vertex_id();
        self.add_vertex_with_edge(AddVertexWithEdge {
            u,
            v,
            ud: Some(VertexData::new(text)),
            ..Default::default()
        })?;
        Ok(u)
    }

    /// Adds a new construct `v` with an edge `u -> v`, and returns `v`.
    pub fn ladder_down(&mut self, u: VertexId, text: impl Into<String>) -> Result<VertexId> {
        let v = self.next_vertex_id();
        self.add_vertex_with_edge(AddVertexWithEdge {
            u,
            v,
            vd: Some(VertexData::new(text)),
            ..Default::default()
        })?;
        Ok(v)
    }

    pub fn update_vertex(&mut self, id: VertexId, data: VertexData) -> Result<()> {
        self.history.apply(|g| g.update_vertex(id, data))?;
        Ok(())
    }

    pub fn remove_vertex(&mut self, id: VertexId) -> Result<()> {
        self.history.apply(|g| g.remove_vertex(id))?;
        Ok(())
    }

    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        self.history.apply(|g| g.remove_edge(u, v))?;
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Lays out the current graph, animating from the previous call's result.
    pub fn layout(&mut self) -> &Layout {
        self.engine.layout(self.history.current())
    }

    /// The current graph in the exchange format, ready to persist.
    pub fn save(&self) -> String {
        self.graph().to_json()
    }
}

fn parse_saved(json: &str) -> Result<Graph> {
    if json.trim().is_empty() {
        return Ok(Graph::new());
    }
    Ok(Graph::from_json(json)?)
}
