//! Bagpipe - Processor pipeline diagrams from Rust code
//!
//! Describe instructions (operations), the pipeline stages they pass through
//! (slots at integer cycle times), and the dependencies between them (colored
//! edges along chains of slots). Bagpipe lays the diagram out on a grid, one
//! row per operation and one column per cycle, and hands the result to a
//! renderer.
//!
//! # Quick Start
//!
//! ```rust
//! use bagpipe::prelude::*;
//!
//! let mut i0 = Operation::new("add x1, x2, x3");
//! let mut i1 = Operation::new("orr x4, x5, x6");
//! let d0 = i0.at("D", 0).unwrap();
//! i0.at("E", 1).unwrap();
//! let d1 = i1.at("D", 1).unwrap();
//! i1.at("E", 2).unwrap();
//!
//! let mut pipeline = Pipeline::new();
//! pipeline
//!     .add_operation(i0)
//!     .add_operation(i1)
//!     .add_edge(Edge::new(d0 >> d1, "red").with_legend("in-order-dispatch"));
//!
//! let text = bagpipe::render_text(&pipeline).unwrap();
//! assert!(text.contains("0: add x1, x2, x3"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, lay out and render separately:
//!
//! ```rust
//! use bagpipe::prelude::*;
//!
//! let mut op = Operation::new("ldr x0, [x1]");
//! op.at("F", 0).unwrap();
//! op.at("D", 1).unwrap();
//! let mut pipeline = Pipeline::new();
//! pipeline.add_operation(op);
//!
//! let config = LayoutConfig::new().with_edge_center_offset(0.1).unwrap();
//! let plan = pipeline.layout_with(&LayoutEngine::with_config(config)).unwrap();
//! assert_eq!(plan.nodes.len(), 2);
//! assert_eq!(plan.y_axis.ticks.labels, vec!["0: ldr x0, [x1]"]);
//!
//! let json = JsonRenderer::compact().render(&plan).unwrap();
//! assert!(json.starts_with('{'));
//! ```

pub mod core;
pub mod layout;
pub mod model;
pub mod render;

pub use crate::core::*;
pub use layout::{LayoutEngine, RenderPlan};
pub use model::{Chain, Edge, Element, Operation, Pipeline, Slot, SlotRef};
pub use render::{JsonRenderer, Renderer, TextRenderer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{CharacterSet, LayoutConfig, PipelineError, RenderConfig};
    pub use crate::layout::{LayoutEngine, RenderPlan};
    pub use crate::model::{
        Chain, Edge, Element, Link, Operation, Pipeline, Slot, SlotEntry, SlotFactory, SlotRef,
    };
    pub use crate::render::{JsonRenderer, Renderer, TextRenderer};
}

/// Draw a pipeline as Unicode text with the default settings
///
/// # Example
/// ```rust
/// use bagpipe::{render_text, Operation, Pipeline};
///
/// let mut op = Operation::new("b.eq");
/// op.at("C", 3).unwrap();
/// let mut pipeline = Pipeline::new();
/// pipeline.add_operation(op);
///
/// let text = render_text(&pipeline).unwrap();
/// assert!(text.contains("b.eq"));
/// ```
pub fn render_text(pipeline: &Pipeline) -> anyhow::Result<String> {
    pipeline.render(&TextRenderer::new())
}

/// Draw a pipeline as text with a specific character set
///
/// ```rust
/// use bagpipe::{render_text_with_style, CharacterSet, Operation, Pipeline};
///
/// let mut op = Operation::new("nop");
/// op.at("F", 0).unwrap();
/// let mut pipeline = Pipeline::new();
/// pipeline.add_operation(op);
///
/// let ascii = render_text_with_style(&pipeline, CharacterSet::Ascii).unwrap();
/// assert!(ascii.is_ascii());
/// ```
pub fn render_text_with_style(pipeline: &Pipeline, style: CharacterSet) -> anyhow::Result<String> {
    pipeline.render(&TextRenderer::with_style(style))
}

/// Lay out a pipeline and serialize the plan as pretty-printed JSON
pub fn render_json(pipeline: &Pipeline) -> anyhow::Result<String> {
    pipeline.render(&JsonRenderer::new())
}
