use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{FxError, FxResult};

/// The scrollable page, as seen by scroll controllers.
pub trait Document {
    /// Absolute top of the element with `id`, in document coordinates.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Scroll to `y`, clamped to `[0, max_scroll]`.
    fn set_scroll_offset(&mut self, y: f64);

    /// Largest reachable scroll offset.
    fn max_scroll(&self) -> f64;
}

/// In-memory [`Document`]: a column of named sections under a fixed-height viewport.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageDocument {
    /// Total content height in px.
    pub content_height: f64,
    /// Visible viewport height in px.
    pub viewport_height: f64,
    #[serde(default)]
    pub elements: BTreeMap<String, f64>,
    #[serde(default)]
    scroll_offset: f64,
}

impl PageDocument {
    pub fn new(content_height: f64, viewport_height: f64) -> FxResult<Self> {
        if !content_height.is_finite() || !viewport_height.is_finite() {
            return Err(FxError::validation("document heights must be finite"));
        }
        if content_height < 0.0 || viewport_height <= 0.0 {
            return Err(FxError::validation(
                "document content_height must be >= 0 and viewport_height > 0",
            ));
        }
        Ok(Self {
            content_height,
            viewport_height,
            elements: BTreeMap::new(),
            scroll_offset: 0.0,
        })
    }

    /// Builder-style [`PageDocument::insert_element`].
    pub fn with_element(mut self, id: impl Into<String>, top: f64) -> Self {
        self.insert_element(id, top);
        self
    }

    pub fn insert_element(&mut self, id: impl Into<String>, top: f64) {
        self.elements.insert(id.into(), top);
    }

    pub fn remove_element(&mut self, id: &str) -> Option<f64> {
        self.elements.remove(id)
    }
}

impl Document for PageDocument {
    fn element_top(&self, id: &str) -> Option<f64> {
        self.elements.get(id).copied()
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, y: f64) {
        let y = if y.is_finite() { y } else { 0.0 };
        self.scroll_offset = y.clamp(0.0, self.max_scroll());
    }

    fn max_scroll(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/document.rs"]
mod tests;
