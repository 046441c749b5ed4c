//! Text formatting shared by path data and SVG output.

use std::fmt;

/// Formats a number the way JavaScript's `String(n)` does: `1` rather than `1.0`, no `-0`.
/// Non-finite values print as `0` so a bad coordinate never produces unparsable path data.
#[derive(Debug, Clone, Copy)]
pub(crate) struct JsNumber(pub f64);

impl fmt::Display for JsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut v = self.0;
        if !v.is_finite() {
            return f.write_str("0");
        }
        if v == -0.0 {
            v = 0.0;
        }
        let mut buf = ryu_js::Buffer::new();
        f.write_str(buf.format_finite(v))
    }
}

pub(crate) struct EscapeXml<'a>(pub &'a str);

impl fmt::Display for EscapeXml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0;
        let mut start = 0usize;
        for (i, b) in text.bytes().enumerate() {
            let esc = match b {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                b'\'' => "&#39;",
                _ => continue,
            };
            if start < i {
                f.write_str(&text[start..i])?;
            }
            f.write_str(esc)?;
            start = i + 1;
        }
        if start < text.len() {
            f.write_str(&text[start..])?;
        }
        Ok(())
    }
}
