use ladder::graphlib::Error as GraphError;
use ladder::{
    AddVertexWithEdge, EdgeData, Error, Graph, LayoutOptions, RankDir, Session, SessionConfig,
    VertexData,
};

const SAVED: &str = r#"{"vertices":[{"u":0,"d":{"text":"cheap","x":null,"y":null}},{"u":3,"d":{"text":"saves money","x":null,"y":null}}],"edges":[{"u":0,"v":3,"d":{"points":null}}]}"#;

#[test]
fn session_loads_blank_input_as_an_empty_graph() {
    for blank in ["", "  \n\t"] {
        let session = Session::load_graph(blank).unwrap();
        assert!(session.graph().is_empty());
        assert_eq!(session.next_vertex_id(), 0);
    }
}

#[test]
fn session_load_then_save_round_trips() {
    let session = Session::load_graph(SAVED).unwrap();
    assert_eq!(session.graph().vertex_count(), 2);
    assert_eq!(session.next_vertex_id(), 4);
    assert!(!session.can_undo());
    assert_eq!(session.save(), SAVED);
}

#[test]
fn session_save_stays_loadable_after_non_finite_pins() {
    let mut session = Session::load_graph(SAVED).unwrap();
    session
        .update_vertex(
            3,
            VertexData {
                x: Some(f64::NAN),
                y: Some(f64::NEG_INFINITY),
                ..VertexData::new("saves money")
            },
        )
        .unwrap();
    let saved = session.save();
    assert_eq!(saved, SAVED);
    assert_eq!(Session::load_graph(&saved).unwrap().graph(), session.graph());
}

#[test]
fn session_rejects_corrupt_saved_data() {
    let err = Session::load_graph(r#"{"vertices":[{"u":0}],"edges":[{"u":0,"v":1}]}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::Graph(GraphError::MalformedExchangeData { .. })
    ));
}

#[test]
fn session_ladder_up_and_down_allocate_fresh_ids() {
    let mut session = Session::load_graph(SAVED).unwrap();
    let up = session.ladder_up(0, "quality").unwrap();
    let down = session.ladder_down(3, "freedom").unwrap();
    assert_eq!((up, down), (4, 5));

    let g = session.graph();
    assert!(g.has_edge(4, 0));
    assert!(g.has_edge(3, 5));
    assert_eq!(g.vertex(5).map(|d| d.text.as_str()), Some("freedom"));
    assert_eq!(g.edge(4, 0), Some(&EdgeData::default()));
    assert_eq!(session.history().undo_depth(), 2);
}

#[test]
fn session_add_vertex_with_edge_is_one_history_step() {
    let mut session = Session::new(Graph::new());
    let root = session.add_construct("root").unwrap();
    session
        .add_vertex_with_edge(AddVertexWithEdge {
            u: root,
            v: 1,
            vd: Some(VertexData::new("child")),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(session.graph().edge_count(), 1);

    assert!(session.undo());
    assert_eq!(session.graph().vertices().collect::<Vec<_>>(), vec![root]);
    assert_eq!(session.graph().edge_count(), 0);
}

#[test]
fn session_add_vertex_with_edge_needs_exactly_one_new_vertex() {
    let mut session = Session::load_graph(SAVED).unwrap();
    let both = AddVertexWithEdge {
        u: 10,
        v: 11,
        ud: Some(VertexData::new("a")),
        vd: Some(VertexData::new("b")),
        d: EdgeData::default(),
    };
    assert_eq!(session.add_vertex_with_edge(both), Err(Error::InvalidLadderStep));

    let neither = AddVertexWithEdge {
        u: 0,
        v: 3,
        ..Default::default()
    };
    assert_eq!(session.add_vertex_with_edge(neither), Err(Error::InvalidLadderStep));
    assert!(!session.can_undo());
}

#[test]
fn session_add_vertex_with_edge_is_atomic() {
    let mut session = Session::load_graph(SAVED).unwrap();
    // The new vertex would be fine, but the existing endpoint is missing.
    let err = session
        .add_vertex_with_edge(AddVertexWithEdge {
            u: 0,
            v: 9,
            ud: Some(VertexData::new("dup")),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err, Error::Graph(GraphError::DuplicateVertex { id: 0 }));

    let err = session
        .add_vertex_with_edge(AddVertexWithEdge {
            u: 8,
            v: 9,
            ud: Some(VertexData::new("orphan")),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err, Error::Graph(GraphError::UnknownVertex { id: 9 }));
    assert!(!session.graph().has_vertex(8));
    assert!(!session.can_undo());
}

#[test]
fn session_step_deserializes_from_the_editor_shape() {
    let step: AddVertexWithEdge = serde_json::from_str(
        r#"{"u":4,"v":0,"ud":{"text":"quality","x":null,"y":null},"d":{"points":null}}"#,
    )
    .unwrap();
    assert_eq!(step.ud, Some(VertexData::new("quality")));
    assert_eq!(step.vd, None);

    let mut session = Session::load_graph(SAVED).unwrap();
    session.add_vertex_with_edge(step).unwrap();
    assert!(session.graph().has_edge(4, 0));
}

#[test]
fn session_remove_and_update_are_undoable() {
    let mut session = Session::load_graph(SAVED).unwrap();
    session.remove_vertex(0).unwrap();
    assert_eq!(session.graph().edge_count(), 0);
    session
        .update_vertex(3, VertexData::pinned("pinned", 10.0, 20.0))
        .unwrap();

    assert!(session.undo());
    assert!(session.undo());
    assert_eq!(session.save(), SAVED);

    session.remove_edge(0, 3).unwrap();
    assert!(!session.can_redo());
    assert_eq!(
        session.remove_edge(0, 3),
        Err(Error::Graph(GraphError::UnknownEdge { u: 0, v: 3 }))
    );
}

#[test]
fn session_layout_animates_between_edits() {
    let mut session = Session::load_graph(SAVED).unwrap();
    let first = session.layout().clone();
    assert_eq!(first.vertex(3).map(|v| (v.x0, v.y0)), Some((75.0, 0.0)));

    let up = session.ladder_up(0, "quality").unwrap();
    let second = session.layout().clone();
    let moved = second.vertex(0).unwrap();
    assert_eq!((moved.x0, moved.y0), (75.0, 25.0));
    assert_eq!((moved.x, moved.y), (75.0, 125.0));
    assert_eq!(second.vertex(up).map(|v| v.layer), Some(0));

    // Undo animates back from where the vertices are now.
    assert!(session.undo());
    let third = session.layout();
    let back = third.vertex(0).unwrap();
    assert_eq!((back.x0, back.y0), (75.0, 125.0));
    assert_eq!((back.x, back.y), (75.0, 25.0));
}

#[test]
fn session_load_resets_layout_cache() {
    let mut session = Session::load_graph(SAVED).unwrap();
    session.layout();
    session.load(Graph::from_json(SAVED).unwrap());
    let l = session.layout();
    assert_eq!(l.vertex(0).map(|v| v.y0), Some(0.0));
}

#[test]
fn session_config_deserializes_with_defaults() {
    let config: SessionConfig =
        serde_json::from_str(r#"{ "history": { "limit": 1 }, "layout": { "rankdir": "lr" } }"#)
            .unwrap();
    assert_eq!(config.history.limit, Some(1));
    assert_eq!(config.layout.vertex_width, 150.0);

    let mut session = Session::with_config(Graph::new(), config);
    session.add_construct("a").unwrap();
    session.add_construct("b").unwrap();
    assert_eq!(session.history().undo_depth(), 1);
}

#[test]
fn session_layout_options_can_change_between_layouts() {
    let mut session = Session::load_graph(SAVED).unwrap();
    assert_eq!(session.layout_options().rankdir, RankDir::TB);
    session.layout();

    session.set_layout_options(LayoutOptions {
        rankdir: RankDir::LR,
        ..Default::default()
    });
    let l = session.layout();
    let v = l.vertex(3).unwrap();
    // The switch animates from the top-to-bottom position.
    assert_eq!((v.x0, v.y0), (75.0, 125.0));
    assert_eq!((v.x, v.y), (275.0, 25.0));
}
