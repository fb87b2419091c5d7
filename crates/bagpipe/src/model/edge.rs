//! Styled dependency paths through slots

use std::fmt;

use super::{Chain, SlotRef};

/// A colored, directed path through a chain of slots
///
/// The optional node color is applied to every slot on the path when the
/// pipeline is laid out; the slots themselves are never modified.
#[derive(Debug, Clone)]
pub struct Edge {
    chain: Chain,
    color: String,
    legend: String,
    node_color: Option<String>,
}

impl Edge {
    pub fn new(chain: impl Into<Chain>, color: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            color: color.into(),
            legend: String::new(),
            node_color: None,
        }
    }

    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = legend.into();
        self
    }

    /// Fill every slot on this path with `color` when drawn
    pub fn with_node_color(mut self, color: impl Into<String>) -> Self {
        self.node_color = Some(color.into());
        self
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = color.into();
        self
    }

    pub fn set_legend(&mut self, legend: impl Into<String>) -> &mut Self {
        self.legend = legend.into();
        self
    }

    pub fn set_node_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.node_color = Some(color.into());
        self
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn slots(&self) -> &[SlotRef] {
        self.chain.slots()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn legend(&self) -> &str {
        &self.legend
    }

    pub fn node_color(&self) -> Option<&str> {
        self.node_color.as_deref()
    }
}

/// Structural equality over chain, color, and legend
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.chain == other.chain && self.color == other.color && self.legend == other.legend
    }
}

impl Eq for Edge {}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({}, color={}", self.chain, self.color)?;
        if !self.legend.is_empty() {
            write!(f, ", legend={}", self.legend)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Operation;

    #[test]
    fn test_edge_from_chain_and_list_are_equal() {
        let mut i0 = Operation::new("add x1, x2, x3");
        let mut i1 = Operation::new("orr x4, x5, x6");
        let d0 = i0.at("d", 1).unwrap();
        let d1 = i1.at("d", 2).unwrap();
        let c1 = i1.at("c", 3).unwrap();

        let from_chain = Edge::new(&d0 >> &d1 >> &c1, "red");
        let from_list = Edge::new(vec![d0, d1, c1], "red");
        assert_eq!(from_chain, from_list);
    }

    #[test]
    fn test_equality_ignores_node_color() {
        let mut op = Operation::new("op");
        let d = op.at("D", 0).unwrap();
        let plain = Edge::new(d.clone(), "blue");
        let tinted = Edge::new(d, "blue").with_node_color("lightblue");
        assert_eq!(plain, tinted);
        assert_ne!(plain, plain.clone().with_legend("data-dependency"));
    }

    #[test]
    fn test_fluent_setters() {
        let mut op = Operation::new("op");
        let d = op.at("D", 0).unwrap();
        let mut edge = Edge::new(d, "black");
        edge.set_color("red")
            .set_legend("in-order-dispatch")
            .set_node_color("pink");
        assert_eq!(edge.color(), "red");
        assert_eq!(edge.legend(), "in-order-dispatch");
        assert_eq!(edge.node_color(), Some("pink"));
    }

    #[test]
    fn test_display() {
        let mut op = Operation::new("op");
        let d = op.at("D", 0).unwrap();
        let e = op.at("E", 1).unwrap();
        let edge = Edge::new(d >> e, "red").with_legend("dispatch");
        assert_eq!(edge.to_string(), "Edge(D@0 >> E@1, color=red, legend=dispatch)");
    }
}
