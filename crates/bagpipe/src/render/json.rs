//! JSON hand-off of the render plan

use anyhow::Result;
use tracing::debug;

use super::Renderer;
use crate::layout::RenderPlan;

/// Serializes the render plan for an external drawing backend
#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    /// Pretty-printed output
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for JsonRenderer {
    type Output = String;

    fn render(&self, plan: &RenderPlan) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(plan)?
        } else {
            serde_json::to_string(plan)?
        };
        debug!(bytes = json.len(), pretty = self.pretty, "Serialized render plan");
        Ok(json)
    }

    fn name(&self) -> &'static str {
        "json"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "json"
    }
}
