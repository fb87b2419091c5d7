//! The pipeline document: ordered operations plus ordered edges

use std::collections::HashSet;
use std::ops::AddAssign;

use tracing::{debug, info, span, Level};

use super::{Edge, Element, Operation, OperationId};
use crate::core::{PipelineError, Result};
use crate::layout::{LayoutEngine, RenderPlan};
use crate::render::Renderer;

/// A processor-pipeline diagram
///
/// Operations are rows, top to bottom in insertion order. Edges are drawn
/// in insertion order, later edges over earlier ones.
///
/// ```rust
/// use bagpipe::prelude::*;
///
/// let mut i0 = Operation::new("add x1, x2, x3");
/// let mut i1 = Operation::new("orr x4, x5, x6");
/// let dispatch = i0.at("D", 0).unwrap() >> i1.at("D", 1).unwrap();
///
/// let mut pipeline = Pipeline::new();
/// pipeline
///     .add_operation(i0)
///     .add_operation(i1)
///     .add_edge(Edge::new(dispatch, "red").with_legend("in-order-dispatch"));
///
/// let plan = pipeline.layout().unwrap();
/// assert_eq!(plan.nodes.len(), 2);
/// assert_eq!(plan.edges[0].segments.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Pipeline {
    operations: Vec<Operation>,
    edges: Vec<Edge>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_operation(&mut self, operation: Operation) -> &mut Self {
        debug!(operation = operation.name(), row = self.operations.len(), "Added operation");
        self.operations.push(operation);
        self
    }

    pub fn add_edge(&mut self, edge: Edge) -> &mut Self {
        debug!(edge = %edge, "Added edge");
        self.edges.push(edge);
        self
    }

    /// Add an operation or an edge; any other element is rejected
    pub fn append(&mut self, item: impl Into<Element>) -> Result<&mut Self> {
        match item.into() {
            Element::Operation(operation) => Ok(self.add_operation(operation)),
            Element::Edge(edge) => Ok(self.add_edge(edge)),
            other => Err(PipelineError::unsupported_operand(
                other.kind(),
                "pipeline append",
            )),
        }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn operation(&self, index: usize) -> Option<&Operation> {
        self.operations.get(index)
    }

    /// Mutable access, e.g. to add slots after the operation was added
    pub fn operation_mut(&mut self, index: usize) -> Option<&mut Operation> {
        self.operations.get_mut(index)
    }

    /// Total number of slots over all operations
    pub fn slot_count(&self) -> usize {
        self.operations.iter().map(Operation::len).sum()
    }

    /// Check that every slot on every edge belongs to an operation of this
    /// pipeline
    pub fn validate(&self) -> Result<()> {
        let known: HashSet<OperationId> = self.operations.iter().map(Operation::id).collect();

        for edge in &self.edges {
            for slot in edge.slots() {
                if !known.contains(&slot.owner()) {
                    return Err(PipelineError::dangling_reference(
                        slot.label(),
                        slot.owner().to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Validate and lay out with the default engine
    pub fn layout(&self) -> Result<RenderPlan> {
        self.layout_with(&LayoutEngine::default())
    }

    /// Validate and lay out with `engine`
    pub fn layout_with(&self, engine: &LayoutEngine) -> Result<RenderPlan> {
        self.validate()?;
        engine.layout(&self.operations, &self.edges)
    }

    /// Lay out and hand the plan to `renderer`
    pub fn render<R: Renderer>(&self, renderer: &R) -> anyhow::Result<R::Output> {
        let render_span = span!(
            Level::INFO,
            "render_pipeline",
            renderer = renderer.name(),
            format = renderer.format()
        );
        let _enter = render_span.enter();

        let plan = self.layout()?;
        let output = renderer.render(&plan)?;
        info!("Pipeline rendered");
        Ok(output)
    }
}

impl AddAssign<Operation> for Pipeline {
    fn add_assign(&mut self, operation: Operation) {
        self.add_operation(operation);
    }
}

impl AddAssign<Edge> for Pipeline {
    fn add_assign(&mut self, edge: Edge) {
        self.add_edge(edge);
    }
}
