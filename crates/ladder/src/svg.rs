//! Standalone SVG for a finished layout.
//!
//! This is the static end state of what the editor animates: vertex boxes at their new
//! positions and one path per edge. Interactive chrome is left to the host.

use crate::fmt::{EscapeXml, JsNumber};
use crate::geometry::{EdgePath, Transform};
use ladder_layout::Layout;
use std::fmt::Write as _;

const CORNER_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Padding added around the layout bounds.
    pub padding: f64,
    pub vertex_stroke: String,
    pub edge_stroke: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            padding: 8.0,
            vertex_stroke: "#888".to_string(),
            edge_stroke: "black".to_string(),
        }
    }
}

pub fn render_svg(layout: &Layout, options: &SvgOptions) -> String {
    let pad = options.padding;
    let (x, y, w, h) = match layout.bounds() {
        Some(b) => (
            b.min_x - pad,
            b.min_y - pad,
            b.width() + 2.0 * pad,
            b.height() + 2.0 * pad,
        ),
        None => (0.0, 0.0, 2.0 * pad, 2.0 * pad),
    };

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{x} {y} {w} {h}">"#,
        w = JsNumber(w),
        h = JsNumber(h),
        x = JsNumber(x),
        y = JsNumber(y),
    );

    out.push_str("<g>");
    for edge in &layout.edges {
        let _ = write!(
            out,
            r#"<path data-u="{}" data-v="{}" d="{}" fill="none" stroke="{}" stroke-width="1"/>"#,
            edge.u,
            edge.v,
            EdgePath::from_route(&edge.points),
            EscapeXml(&options.edge_stroke),
        );
    }
    out.push_str("</g><g>");
    for v in &layout.vertices {
        let _ = write!(
            out,
            r#"<g data-u="{}" transform="{}"><rect x="{}" y="{}" rx="{}" width="{}" height="{}" stroke="{}" fill="none"/>"#,
            v.u,
            Transform::at(v.x, v.y),
            JsNumber(-v.width / 2.0),
            JsNumber(-v.height / 2.0),
            JsNumber(CORNER_RADIUS),
            JsNumber(v.width),
            JsNumber(v.height),
            EscapeXml(&options.vertex_stroke),
        );
        let _ = write!(
            out,
            r#"<text text-anchor="middle" dominant-baseline="central">{}</text></g>"#,
            EscapeXml(&v.text),
        );
    }
    out.push_str("</g></svg>");
    out
}
