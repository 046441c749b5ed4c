#![forbid(unsafe_code)]

//! `ladder` is the editing engine behind a laddering interview screen.
//!
//! A [`Session`] owns the undo [`History`] of one participant's graph and a
//! [`LayoutEngine`](ladder_layout::LayoutEngine) that remembers its last output, so every layout
//! carries both the old and the new positions. [`geometry`] turns those into SVG path data and
//! transforms; the host decides how long the animation takes.
//!
//! ```
//! use ladder::Session;
//!
//! let mut session = Session::load_graph("").unwrap();
//! let price = session.add_construct("low price").unwrap();
//! let saving = session.ladder_down(price, "saves money").unwrap();
//! assert_eq!(session.layout().vertex(saving).map(|v| v.layer), Some(1));
//!
//! assert!(session.undo());
//! assert_eq!(session.graph().vertex_count(), 1);
//! ```

pub use ladder_graphlib as graphlib;
pub use ladder_layout as layout;

pub mod error;
mod fmt;
pub mod geometry;
pub mod history;
pub mod session;
pub mod svg;

pub use error::{Error, Result};
pub use geometry::{EdgePath, EdgeTransition, SBend, Transform, VertexTransition, build_edge_path};
pub use history::{History, HistoryConfig};
pub use ladder_graphlib::{EdgeData, Graph, Point, VertexData, VertexId, next_vertex_id};
pub use ladder_layout::{Layout, LayoutOptions, RankDir, layout_graph};
pub use session::{AddVertexWithEdge, Session, SessionConfig};
pub use svg::{SvgOptions, render_svg};
