//! The render plan handed to drawing backends
//!
//! Everything here is plain data in diagram coordinates: one grid unit per
//! cycle on the x axis and one per operation row on the y axis. A backend
//! draws a square per [`NodeDescriptor`], an arrow per [`Segment`], and
//! places ticks and labels from the two [`AxisPlan`]s.

use serde::Serialize;

/// A slot placed on the grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDescriptor {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub color: String,
}

/// Tick positions and their labels, index-aligned
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TickPlan {
    pub positions: Vec<f64>,
    pub labels: Vec<String>,
}

impl TickPlan {
    pub fn push(&mut self, position: f64, label: impl Into<String>) {
        self.positions.push(position);
        self.labels.push(label.into());
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &str)> {
        self.positions
            .iter()
            .copied()
            .zip(self.labels.iter().map(String::as_str))
    }
}

/// Visible span of one axis plus its ticks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisPlan {
    pub min: f64,
    pub max: f64,
    pub ticks: TickPlan,
}

/// One directed straight piece of an edge path
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub fn new(from: (f64, f64), to: (f64, f64)) -> Self {
        Self {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
        }
    }

    pub fn start(&self) -> (f64, f64) {
        (self.x1, self.y1)
    }

    pub fn end(&self) -> (f64, f64) {
        (self.x2, self.y2)
    }
}

/// A styled edge path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeDescriptor {
    pub color: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub legend: String,
    pub segments: Vec<Segment>,
}

/// Complete, backend-agnostic description of a laid out pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub nodes: Vec<NodeDescriptor>,
    pub x_axis: AxisPlan,
    pub y_axis: AxisPlan,
    pub edges: Vec<EdgeDescriptor>,
    /// Distinct slot times, ascending
    pub cycles: Vec<i64>,
}

impl RenderPlan {
    /// `(color, legend)` for each edge with a legend, in draw order
    pub fn legend(&self) -> Vec<(&str, &str)> {
        self.edges
            .iter()
            .filter(|edge| !edge.legend.is_empty())
            .map(|edge| (edge.color.as_str(), edge.legend.as_str()))
            .collect()
    }

    pub fn segment_count(&self) -> usize {
        self.edges.iter().map(|edge| edge.segments.len()).sum()
    }
}
