//! Maps operations and edges onto the diagram grid
//!
//! The layout is fully determined by the model: operation order picks the
//! row, slot time picks the column. Nothing is moved apart or routed around;
//! overlapping slots overlap.

use std::collections::{BTreeSet, HashMap};

use tracing::{info, span, trace, Level};

use super::{AxisPlan, EdgeDescriptor, NodeDescriptor, RenderPlan, Segment, TickPlan};
use crate::core::{LayoutConfig, PipelineError, Result, DEFAULT_SLOT_COLOR};
use crate::model::{Edge, Operation, OperationId, SlotRef};

/// Stateless layout algorithm for pipeline diagrams
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Row of the operation inserted at `index` out of `total`
    ///
    /// The first operation gets the highest row so it is drawn on top.
    pub fn row(index: usize, total: usize) -> usize {
        total - index
    }

    /// Lay out `operations` (in row order) and `edges` (in draw order)
    pub fn layout(&self, operations: &[Operation], edges: &[Edge]) -> Result<RenderPlan> {
        let layout_span = span!(
            Level::INFO,
            "layout_pipeline",
            operation_count = operations.len(),
            edge_count = edges.len()
        );
        let _enter = layout_span.enter();

        let total = operations.len();
        let rows: HashMap<OperationId, usize> = operations
            .iter()
            .enumerate()
            .map(|(index, op)| (op.id(), Self::row(index, total)))
            .collect();
        trace!(rows = rows.len(), "Assigned rows");

        let times: BTreeSet<i64> = operations
            .iter()
            .flat_map(Operation::slots)
            .map(|slot| slot.time())
            .collect();
        let (first, last) = match (times.first(), times.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(PipelineError::EmptyLayout),
        };

        let node_colors = Self::node_color_overrides(edges);

        let mut nodes = Vec::new();
        for (index, op) in operations.iter().enumerate() {
            let row = Self::row(index, total) as f64;
            for slot in op.slots() {
                let color = node_colors
                    .get(&(op.id(), slot.label()))
                    .copied()
                    .unwrap_or_else(|| slot.color());
                let color = if color.is_empty() {
                    DEFAULT_SLOT_COLOR
                } else {
                    color
                };
                nodes.push(NodeDescriptor {
                    x: slot.time() as f64,
                    y: row,
                    label: slot.label().to_string(),
                    color: color.to_string(),
                });
            }
        }
        trace!(node_count = nodes.len(), "Placed nodes");

        let mut x_ticks = TickPlan::default();
        for time in &times {
            x_ticks.push(*time as f64 + 0.5, time.to_string());
        }
        let x_axis = AxisPlan {
            min: first as f64 - 0.5,
            max: last as f64 + 0.5,
            ticks: x_ticks,
        };

        let mut y_ticks = TickPlan::default();
        for (index, op) in operations.iter().enumerate() {
            let row = Self::row(index, total) as f64;
            y_ticks.push(row - 0.5, format!("{}: {}", index, op.name()));
        }
        let y_axis = AxisPlan {
            min: 0.5,
            max: total as f64 + 0.5,
            ticks: y_ticks,
        };

        let edges = edges
            .iter()
            .map(|edge| self.layout_edge(edge, &rows))
            .collect::<Result<Vec<_>>>()?;

        let plan = RenderPlan {
            nodes,
            x_axis,
            y_axis,
            edges,
            cycles: times.into_iter().collect(),
        };

        info!(
            node_count = plan.nodes.len(),
            edge_count = plan.edges.len(),
            segment_count = plan.segment_count(),
            "Pipeline layout completed"
        );

        Ok(plan)
    }

    /// Later edges overwrite earlier ones, matching paint order
    fn node_color_overrides(edges: &[Edge]) -> HashMap<(OperationId, &str), &str> {
        let mut overrides = HashMap::new();
        for edge in edges {
            if let Some(color) = edge.node_color() {
                for slot in edge.slots() {
                    overrides.insert((slot.owner(), slot.label()), color);
                }
            }
        }
        overrides
    }

    fn layout_edge(
        &self,
        edge: &Edge,
        rows: &HashMap<OperationId, usize>,
    ) -> Result<EdgeDescriptor> {
        let points = edge
            .slots()
            .iter()
            .map(|slot| Self::position(slot, rows))
            .collect::<Result<Vec<_>>>()?;

        let segments = points
            .windows(2)
            .map(|pair| self.inset_segment(pair[0], pair[1]))
            .collect::<Vec<_>>();
        trace!(edge = %edge, segments = segments.len(), "Routed edge");

        Ok(EdgeDescriptor {
            color: edge.color().to_string(),
            legend: edge.legend().to_string(),
            segments,
        })
    }

    fn position(slot: &SlotRef, rows: &HashMap<OperationId, usize>) -> Result<(f64, f64)> {
        let row = rows.get(&slot.owner()).ok_or_else(|| {
            PipelineError::dangling_reference(slot.label(), slot.owner().to_string())
        })?;
        Ok((slot.time() as f64, *row as f64))
    }

    /// Pull both ends toward each other so the path starts and ends outside
    /// the node glyphs
    fn inset_segment(&self, from: (f64, f64), to: (f64, f64)) -> Segment {
        let offset = self.config.edge_center_offset;
        let dx = direction(to.0 - from.0) * offset;
        let dy = direction(to.1 - from.1) * offset;
        Segment::new((from.0 + dx, from.1 + dy), (to.0 - dx, to.1 - dy))
    }
}

fn direction(delta: f64) -> f64 {
    if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else {
        0.0
    }
}
