//! Stateful wrapper that remembers the previous layout.

use crate::graphlib::DirectedGraph;
use crate::model::{Layout, LayoutOptions};

/// Re-runs [`crate::layout`] and feeds it the previous result, so each new layout carries the
/// positions the renderer should animate from.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    options: LayoutOptions,
    last: Option<Layout>,
}

impl LayoutEngine {
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            last: None,
        }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Changing options keeps the cached layout, so the switch itself animates.
    pub fn set_options(&mut self, options: LayoutOptions) {
        self.options = options;
    }

    pub fn layout<G: DirectedGraph>(&mut self, g: &G) -> &Layout {
        let next = crate::layout(g, &self.options, self.last.as_ref());
        self.last.insert(next)
    }

    pub fn last(&self) -> Option<&Layout> {
        self.last.as_ref()
    }

    /// Forgets the cached layout; the next call animates every vertex in from the top.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
