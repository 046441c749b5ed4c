use ladder_graphlib::{EdgeData, Error, Graph, Point, VertexData};
use serde_json::json;

fn sample() -> Graph {
    Graph::new()
        .add_vertex(0, VertexData::new("cheap"))
        .unwrap()
        .add_vertex(1, VertexData::pinned("saves money", 120.0, 40.5))
        .unwrap()
        .add_edge(0, 1, EdgeData::default())
        .unwrap()
}

#[test]
fn exchange_writes_the_compact_record() {
    assert_eq!(
        sample().to_string(),
        concat!(
            r#"{"vertices":[{"u":0,"d":{"text":"cheap","x":null,"y":null}},"#,
            r#"{"u":1,"d":{"text":"saves money","x":120.0,"y":40.5}}],"#,
            r#""edges":[{"u":0,"v":1,"d":{"points":null}}]}"#
        )
    );
}

#[test]
fn exchange_round_trip_is_identical() {
    let g = sample();
    let text = g.to_json();
    let back = Graph::from_json(&text).unwrap();
    assert_eq!(back, g);
    assert_eq!(back.to_json(), text);
    assert_eq!(back.vertices().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn exchange_preserves_unknown_payload_fields() {
    let text = r#"{"vertices":[{"u":4,"d":{"text":"a","x":null,"y":null,"color":"red","weight":2}}],"edges":[{"u":4,"v":4,"d":{"points":[[0,0],[1,2]],"kind":"loop"}}]}"#;
    let g = Graph::from_json(text).unwrap();
    let d = g.vertex(4).unwrap();
    assert_eq!(d.extras.get("color"), Some(&json!("red")));
    assert_eq!(
        g.edge(4, 4).unwrap().points.as_deref(),
        Some(&[Point::new(0.0, 0.0), Point::new(1.0, 2.0)][..])
    );

    let again = Graph::from_json(&g.to_json()).unwrap();
    assert_eq!(again, g);
    assert_eq!(again.to_json(), g.to_json());
}

#[test]
fn exchange_fills_missing_payload_fields_with_defaults() {
    let g = Graph::from_value(json!({
        "vertices": [{ "u": 3, "d": { "text": "x" } }, { "u": 9 }],
        "edges": [{ "u": 3, "v": 9 }]
    }))
    .unwrap();
    assert_eq!(g.vertex(3), Some(&VertexData::new("x")));
    assert_eq!(g.vertex(9), Some(&VertexData::default()));
    assert_eq!(g.edge(3, 9), Some(&EdgeData::default()));
}

#[test]
fn exchange_accepts_an_empty_record() {
    let g = Graph::from_json(r#"{"vertices":[], "edges":[]}"#).unwrap();
    assert!(g.is_empty());
    assert_eq!(g.to_json(), r#"{"vertices":[],"edges":[]}"#);
}

#[test]
fn exchange_rejects_corrupt_records() {
    for text in [
        "",
        "42",
        r#"{"vertices":[{"u":-1,"d":{}}],"edges":[]}"#,
        r#"{"vertices":[{"u":1,"d":{}},{"u":1,"d":{}}],"edges":[]}"#,
        r#"{"vertices":[{"u":1,"d":{}}],"edges":[{"u":1,"v":2,"d":{}}]}"#,
        r#"{"vertices":[{"u":1,"d":{}},{"u":2,"d":{}}],"edges":[{"u":1,"v":2,"d":{}},{"u":1,"v":2,"d":{}}]}"#,
        r#"{"vertices":[{"u":1,"d":{"text":7}}],"edges":[]}"#,
    ] {
        let err = Graph::from_json(text).unwrap_err();
        assert!(
            matches!(err, Error::MalformedExchangeData { .. }),
            "{text:?} gave {err:?}"
        );
    }
}

#[test]
fn serde_deserialize_validates_structure_too() {
    let err = serde_json::from_str::<Graph>(
        r#"{"vertices":[{"u":1,"d":{}}],"edges":[{"u":2,"v":1,"d":{}}]}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("vertex 2 does not exist"), "{err}");
}

#[test]
fn exchange_pretty_output_reads_back() {
    let g = sample();
    let pretty = g.to_json_pretty();
    assert!(pretty.contains("\n  \"vertices\": ["));
    assert_eq!(Graph::from_json(&pretty).unwrap(), g);
}

#[test]
fn exchange_reads_back_graphs_given_non_finite_coordinates() {
    let g = sample()
        .update_vertex(
            0,
            VertexData {
                x: Some(f64::INFINITY),
                ..VertexData::new("cheap")
            },
        )
        .unwrap()
        .update_edge(0, 1, EdgeData::with_points(vec![Point::new(f64::NAN, 0.0); 6]))
        .unwrap();
    let text = g.to_json();
    assert!(!text.contains("null,"), "unexpected null coordinate: {text}");
    let back = Graph::from_json(&text).unwrap();
    assert_eq!(back, g);
    assert_eq!(back, sample());
}
