//! The diagram model: slots, chains, operations, edges, and the pipeline

mod chain;
mod edge;
mod element;
mod operation;
mod pipeline;
mod slot;

pub use chain::{Chain, Link};
pub use edge::Edge;
pub use element::Element;
pub use operation::{Operation, SlotEntry, SlotFactory};
pub use pipeline::Pipeline;
pub use slot::{OperationId, Slot, SlotRef};
