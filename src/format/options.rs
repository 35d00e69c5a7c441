//! Rendering options.

use serde::{Deserialize, Serialize};

/// Options controlling how a graph is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Put every chain on its own line.
    #[serde(default)]
    pub pretty: bool,
}

impl RenderOptions {
    /// Create default options (single-line output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable pretty printing.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
