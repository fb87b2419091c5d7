//! Renderers consume a [`RenderPlan`] and produce backend output
//!
//! Drawing proper (pixels, vector graphics, files) belongs to the backend.
//! The renderers shipped here cover the two common hand-offs: a JSON
//! document for an external plotting program and a text drawing for the
//! terminal.

mod json;
mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use anyhow::Result;

use crate::layout::RenderPlan;

/// Core trait for plan renderers
///
/// # Example
/// ```
/// use bagpipe::prelude::*;
///
/// let mut op = Operation::new("add x1, x2, x3");
/// op.at("D", 0).unwrap();
/// let mut pipeline = Pipeline::new();
/// pipeline.add_operation(op);
///
/// let json = pipeline.render(&JsonRenderer::new()).unwrap();
/// assert!(json.contains("\"label\": \"D\""));
/// ```
pub trait Renderer: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render a laid out pipeline
    fn render(&self, plan: &RenderPlan) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the produced output format
    fn format(&self) -> &'static str;
}
