//! Layout: from the model to a render plan

mod engine;
mod plan;

pub use engine::LayoutEngine;
pub use plan::{AxisPlan, EdgeDescriptor, NodeDescriptor, RenderPlan, Segment, TickPlan};
