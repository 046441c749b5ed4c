use ladder_layout::graphlib::{EdgeData, EdgeKey, Graph, VertexData, VertexId, alg};
use ladder_layout::indexed::IndexedGraph;
use ladder_layout::{acyclic, order, rank};

fn graph(vertices: &[VertexId], edges: &[(VertexId, VertexId)]) -> Graph {
    Graph::build(
        vertices.iter().map(|&id| (id, VertexData::default())),
        edges.iter().map(|&(u, v)| (u, v, EdgeData::default())),
    )
    .unwrap()
}

fn back_edge_keys(g: &Graph) -> Vec<EdgeKey> {
    let ig = IndexedGraph::new(g);
    acyclic::back_edges(&ig)
        .iter()
        .enumerate()
        .filter(|(_, b)| **b)
        .map(|(e_ix, _)| ig.edge_key(e_ix))
        .collect()
}

fn without(g: &Graph, edges: &[EdgeKey]) -> Graph {
    edges
        .iter()
        .fold(g.clone(), |g, e| g.remove_edge(e.u, e.v).unwrap())
}

#[test]
fn acyclic_does_not_flag_edges_of_a_dag() {
    let g = graph(&[0, 1, 2, 3], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
    assert!(back_edge_keys(&g).is_empty());
}

#[test]
fn acyclic_breaks_a_ring_at_the_edge_closing_it() {
    let g = graph(&[0, 1, 2, 3], &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    let back = back_edge_keys(&g);
    assert_eq!(back, vec![EdgeKey::new(3, 0)]);
    assert!(alg::is_acyclic(&without(&g, &back)));
}

#[test]
fn acyclic_starts_from_the_smallest_id() {
    // Inserted 2 first, but the DFS roots at 0, so 1 -> 0 closes the cycle.
    let g = graph(&[2, 1, 0], &[(1, 0), (0, 1), (2, 1)]);
    assert_eq!(back_edge_keys(&g), vec![EdgeKey::new(1, 0)]);
}

#[test]
fn acyclic_handles_interleaved_cycles() {
    let g = graph(
        &[0, 1, 2, 3, 4],
        &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 1), (3, 4), (4, 3), (4, 4)],
    );
    let back = back_edge_keys(&g);
    assert_eq!(
        back,
        vec![
            EdgeKey::new(2, 0),
            EdgeKey::new(3, 1),
            EdgeKey::new(4, 3),
            EdgeKey::new(4, 4),
        ]
    );
    assert!(alg::is_acyclic(&without(&g, &back)));
}

#[test]
fn acyclic_survives_a_deep_chain() {
    let n: VertexId = 50_000;
    let ids: Vec<VertexId> = (0..n).collect();
    let edges: Vec<(VertexId, VertexId)> = (1..n).map(|i| (i - 1, i)).chain([(n - 1, 0)]).collect();
    let g = graph(&ids, &edges);
    assert_eq!(back_edge_keys(&g), vec![EdgeKey::new(n - 1, 0)]);
}

#[test]
fn rank_and_order_follow_discovery() {
    let g = graph(&[3, 0, 1, 2], &[(0, 2), (0, 1), (3, 1), (1, 2)]);
    let ig = IndexedGraph::new(&g);
    let back = acyclic::back_edges(&ig);
    let ranking = rank::longest_path(&ig, &back);
    let layers = order::layers(&ranking);

    let ids = |row: &Vec<usize>| row.iter().map(|&ix| ig.id(ix)).collect::<Vec<_>>();
    let rows: Vec<Vec<VertexId>> = layers.rows.iter().map(ids).collect();
    assert_eq!(rows, vec![vec![0, 3], vec![1], vec![2]]);
}
