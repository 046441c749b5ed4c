//! The persisted/exchanged graph record.
//!
//! ```json
//! { "vertices": [ { "u": 0, "d": { "text": "cheap", "x": null, "y": null } } ],
//!   "edges":    [ { "u": 0, "v": 1, "d": { "points": null } } ] }
//! ```
//!
//! Decoding is all-or-nothing: a record with duplicate ids, duplicate edges, or dangling edge
//! endpoints is rejected with [`Error::MalformedExchangeData`] and no graph is produced.
//!
//! Encoding is infallible. Map keys are strings, ids are integers, and [`Graph`] never holds a
//! non-finite coordinate, so `serde_json` has nothing to reject and never writes `null` where the
//! decoder expects a number.

use crate::error::{Error, Result};
use crate::graph::{EdgeData, Graph, VertexData, VertexId};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Serialize)]
struct VertexRecordRef<'a> {
    u: VertexId,
    d: &'a VertexData,
}

#[derive(Serialize)]
struct EdgeRecordRef<'a> {
    u: VertexId,
    v: VertexId,
    d: &'a EdgeData,
}

#[derive(Debug, Deserialize)]
struct GraphRecord {
    #[serde(default)]
    vertices: Vec<VertexRecord>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
struct VertexRecord {
    u: VertexId,
    #[serde(default)]
    d: VertexData,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    u: VertexId,
    v: VertexId,
    #[serde(default)]
    d: EdgeData,
}

impl TryFrom<GraphRecord> for Graph {
    type Error = Error;

    fn try_from(record: GraphRecord) -> Result<Self> {
        Graph::build(
            record.vertices.into_iter().map(|r| (r.u, r.d)),
            record.edges.into_iter().map(|r| (r.u, r.v, r.d)),
        )
        .map_err(malformed)
    }
}

fn malformed(err: impl fmt::Display) -> Error {
    Error::MalformedExchangeData {
        message: err.to_string(),
    }
}

impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let vertices: Vec<VertexRecordRef<'_>> = self
            .vertex_entries()
            .map(|(u, d)| VertexRecordRef { u, d })
            .collect();
        let edges: Vec<EdgeRecordRef<'_>> = self
            .edge_entries()
            .map(|(e, d)| EdgeRecordRef { u: e.u, v: e.v, d })
            .collect();
        let mut st = serializer.serialize_struct("Graph", 2)?;
        st.serialize_field("vertices", &vertices)?;
        st.serialize_field("edges", &edges)?;
        st.end()
    }
}

impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = GraphRecord::deserialize(deserializer)?;
        Graph::try_from(record).map_err(serde::de::Error::custom)
    }
}

impl Graph {
    /// Parses the exchange record.
    pub fn from_json(text: &str) -> Result<Self> {
        let record: GraphRecord = serde_json::from_str(text).map_err(malformed)?;
        Graph::try_from(record)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let record: GraphRecord = serde_json::from_value(value).map_err(malformed)?;
        Graph::try_from(record)
    }

    /// Compact exchange JSON.
    pub fn to_json(&self) -> String {
        self.to_string()
    }

    pub fn to_json_pretty(&self) -> String {
        // Infallible, see the module docs.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
