use ladder::graphlib::Error as GraphError;
use ladder::{Graph, History, HistoryConfig, VertexData};
use std::sync::Arc;

fn add(id: u32) -> impl FnOnce(&Graph) -> ladder::graphlib::Result<Graph> {
    move |g| g.add_vertex(id, VertexData::new(format!("c{id}")))
}

fn ids(h: &History) -> Vec<u32> {
    h.current().vertices().collect()
}

#[test]
fn history_starts_without_undo_or_redo() {
    let h = History::new(Graph::new());
    assert!(!h.can_undo());
    assert!(!h.can_redo());
    assert!(h.current().is_empty());
}

#[test]
fn history_walks_back_and_forth_through_snapshots() {
    let mut h = History::new(Graph::new());
    let s0 = h.snapshot();
    h.apply(add(0)).unwrap();
    let s1 = h.snapshot();
    h.apply(add(1)).unwrap();
    let s2 = h.snapshot();

    assert!(h.undo());
    assert!(Arc::ptr_eq(&h.snapshot(), &s1));
    assert!(h.undo());
    assert!(Arc::ptr_eq(&h.snapshot(), &s0));
    assert!(!h.can_undo());
    assert!(h.can_redo());

    assert!(h.redo());
    assert!(Arc::ptr_eq(&h.snapshot(), &s1));
    assert!(h.redo());
    assert!(Arc::ptr_eq(&h.snapshot(), &s2));
    assert!(!h.can_redo());
    assert_eq!(ids(&h), vec![0, 1]);
}

#[test]
fn history_apply_after_undo_discards_redo() {
    let mut h = History::new(Graph::new());
    h.apply(add(0)).unwrap();
    h.apply(add(1)).unwrap();
    h.apply(add(2)).unwrap();
    assert!(h.undo());
    assert!(h.undo());
    assert_eq!(h.redo_depth(), 2);

    h.apply(add(7)).unwrap();
    assert!(!h.can_redo());
    assert!(!h.redo());
    assert_eq!(ids(&h), vec![0, 7]);

    assert!(h.undo());
    assert_eq!(ids(&h), vec![0]);
}

#[test]
fn history_undo_and_redo_on_empty_chains_are_no_ops() {
    let mut h = History::new(Graph::new());
    let s0 = h.snapshot();
    assert!(!h.undo());
    assert!(!h.redo());
    assert!(Arc::ptr_eq(&h.snapshot(), &s0));
}

#[test]
fn history_failed_mutation_leaves_the_store_unchanged() {
    let mut h = History::new(Graph::new());
    h.apply(add(0)).unwrap();
    h.undo();
    let before = h.snapshot();

    let err = h
        .apply(|g| g.add_edge(0, 1, Default::default()))
        .unwrap_err();
    assert_eq!(err, GraphError::UnknownVertex { id: 0 });
    assert!(Arc::ptr_eq(&h.snapshot(), &before));
    // The redo chain survives a rejected edit.
    assert!(h.can_redo());
}

#[test]
fn history_load_clears_both_chains() {
    let mut h = History::new(Graph::new());
    h.apply(add(0)).unwrap();
    h.apply(add(1)).unwrap();
    h.undo();

    let loaded = Graph::new().add_vertex(9, VertexData::new("x")).unwrap();
    h.load(loaded.clone());
    assert_eq!(h.current(), &loaded);
    assert!(!h.can_undo());
    assert!(!h.can_redo());
}

#[test]
fn history_limit_drops_the_oldest_snapshots() {
    let mut h = History::with_config(Graph::new(), HistoryConfig { limit: Some(2) });
    assert_eq!(h.config().limit, Some(2));
    for id in 0..5 {
        h.apply(add(id)).unwrap();
    }
    assert_eq!(h.undo_depth(), 2);
    assert!(h.undo());
    assert!(h.undo());
    assert!(!h.undo());
    assert_eq!(ids(&h), vec![0, 1, 2]);

    assert!(h.redo());
    assert!(h.redo());
    assert_eq!(ids(&h), vec![0, 1, 2, 3, 4]);
}

#[test]
fn history_limit_of_zero_disables_undo() {
    let mut h = History::with_config(Graph::new(), HistoryConfig { limit: Some(0) });
    h.apply(add(0)).unwrap();
    assert!(!h.can_undo());
    assert_eq!(ids(&h), vec![0]);
}
