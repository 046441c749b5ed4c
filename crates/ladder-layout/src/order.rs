//! In-layer ordering.
//!
//! Each layer lists its vertices in discovery order. There is no crossing reduction, so adding a
//! construct never reorders vertices in unrelated layers.

use crate::rank::Ranking;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layers {
    /// Vertex indices per layer, left to right.
    pub rows: Vec<Vec<usize>>,
    /// Position of each vertex index inside its layer.
    pub order: Vec<usize>,
}

impl Layers {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn layers(ranking: &Ranking) -> Layers {
    let depth = ranking.layer.iter().copied().max().map_or(0, |max| max + 1);
    let mut rows: Vec<Vec<usize>> = vec![Vec::new(); depth];
    let mut order = vec![0usize; ranking.layer.len()];
    for &v in &ranking.discovery {
        let row = &mut rows[ranking.layer[v]];
        order[v] = row.len();
        row.push(v);
    }
    Layers { rows, order }
}
