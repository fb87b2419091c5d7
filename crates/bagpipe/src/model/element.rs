//! Closed set of model values accepted by the dynamic entry points
//!
//! `>>` and the typed `Pipeline::add_*` methods only compile for valid
//! operand pairs. [`Element`] is for callers that hold values of mixed kinds
//! (for example when building a diagram from data) and need the checks at
//! run time instead.

use super::{Chain, Edge, Link, Operation, SlotRef};
use crate::core::{PipelineError, Result};

/// Any model value
#[derive(Debug)]
pub enum Element {
    Slot(SlotRef),
    Chain(Chain),
    Operation(Operation),
    Edge(Edge),
}

impl Element {
    /// Name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Slot(_) => "slot",
            Element::Chain(_) => "chain",
            Element::Operation(_) => "operation",
            Element::Edge(_) => "edge",
        }
    }

    /// Connect two elements; only slots and chains are chainable
    pub fn connect(self, rhs: impl Into<Element>) -> Result<Chain> {
        let lhs = self.into_link()?;
        let rhs = rhs.into().into_link()?;
        Ok(match lhs {
            Link::Slot(slot) => slot >> rhs,
            Link::Chain(chain) => chain >> rhs,
        })
    }

    fn into_link(self) -> Result<Link> {
        match self {
            Element::Slot(slot) => Ok(Link::Slot(slot)),
            Element::Chain(chain) => Ok(Link::Chain(chain)),
            other => Err(PipelineError::unsupported_operand(other.kind(), "connect")),
        }
    }
}

impl From<SlotRef> for Element {
    fn from(slot: SlotRef) -> Self {
        Element::Slot(slot)
    }
}

impl From<&SlotRef> for Element {
    fn from(slot: &SlotRef) -> Self {
        Element::Slot(slot.clone())
    }
}

impl From<Chain> for Element {
    fn from(chain: Chain) -> Self {
        Element::Chain(chain)
    }
}

impl From<Link> for Element {
    fn from(link: Link) -> Self {
        match link {
            Link::Slot(slot) => Element::Slot(slot),
            Link::Chain(chain) => Element::Chain(chain),
        }
    }
}

impl From<Operation> for Element {
    fn from(operation: Operation) -> Self {
        Element::Operation(operation)
    }
}

impl From<Edge> for Element {
    fn from(edge: Edge) -> Self {
        Element::Edge(edge)
    }
}
