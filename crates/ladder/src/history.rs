//! Undo/redo over immutable graph snapshots.
//!
//! The store owns exactly one current snapshot plus two chains: the snapshots `undo` can return
//! to and the ones `redo` can restore. Snapshots are shared, so moving between them never copies
//! a graph.

use ladder_graphlib::Graph;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of undo steps kept. `None` keeps every step.
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    current: Arc<Graph>,
    /// Oldest first.
    undo: VecDeque<Arc<Graph>>,
    /// Next redo last.
    redo: Vec<Arc<Graph>>,
    config: HistoryConfig,
}

impl History {
    pub fn new(graph: Graph) -> Self {
        Self::with_config(graph, HistoryConfig::default())
    }

    pub fn with_config(graph: Graph, config: HistoryConfig) -> Self {
        Self {
            current: Arc::new(graph),
            undo: VecDeque::new(),
            redo: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Replaces the current snapshot and forgets both chains.
    pub fn load(&mut self, graph: Graph) {
        self.current = Arc::new(graph);
        self.undo.clear();
        self.redo.clear();
        tracing::debug!(
            vertices = self.current.vertex_count(),
            edges = self.current.edge_count(),
            "history loaded"
        );
    }

    pub fn current(&self) -> &Graph {
        &self.current
    }

    /// The current snapshot as a shared handle.
    pub fn snapshot(&self) -> Arc<Graph> {
        Arc::clone(&self.current)
    }

    /// Records `mutation(current)` as the new current snapshot and discards the redo chain.
    ///
    /// A failing mutation leaves the store untouched.
    pub fn apply<F, E>(&mut self, mutation: F) -> Result<&Graph, E>
    where
        F: FnOnce(&Graph) -> Result<Graph, E>,
    {
        let next = Arc::new(mutation(&self.current)?);
        let prev = std::mem::replace(&mut self.current, next);
        self.undo.push_back(prev);
        if let Some(limit) = self.config.limit {
            while self.undo.len() > limit {
                self.undo.pop_front();
            }
        }
        let discarded = self.redo.len();
        self.redo.clear();
        tracing::debug!(
            undo_depth = self.undo.len(),
            discarded,
            "history apply"
        );
        Ok(&self.current)
    }

    /// Steps back one snapshot. Returns `false` and does nothing when there is none.
    pub fn undo(&mut self) -> bool {
        let Some(prev) = self.undo.pop_back() else {
            tracing::debug!("history undo: nothing to undo");
            return false;
        };
        let current = std::mem::replace(&mut self.current, prev);
        self.redo.push(current);
        tracing::debug!(
            undo_depth = self.undo.len(),
            redo_depth = self.redo.len(),
            "history undo"
        );
        true
    }

    /// Steps forward one snapshot. Returns `false` and does nothing when there is none.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            tracing::debug!("history redo: nothing to redo");
            return false;
        };
        let current = std::mem::replace(&mut self.current, next);
        self.undo.push_back(current);
        tracing::debug!(
            undo_depth = self.undo.len(),
            redo_depth = self.redo.len(),
            "history redo"
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
