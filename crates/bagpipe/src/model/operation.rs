//! Operations (diagram rows) and the lazy slot factory

use indexmap::IndexMap;
use tracing::debug;

use super::{OperationId, Slot, SlotRef};
use crate::core::{PipelineError, Result};

/// One instruction of the diagram, drawn as a row
///
/// An operation owns its slots, keyed by label. A label can be created once;
/// afterwards [`Operation::slot`] hands back the stored slot.
///
/// ```rust
/// use bagpipe::prelude::*;
///
/// let mut op = Operation::new("add x1, x2, x3");
/// let d = op.slot("D").or_create(0).unwrap();
///
/// // Later references by label alone return the stored slot.
/// let again = op.slot("D").existing().unwrap();
/// assert!(d.ptr_eq(&again));
/// ```
#[derive(Debug)]
pub struct Operation {
    id: OperationId,
    name: String,
    slots: IndexMap<String, SlotRef>,
}

impl Operation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: OperationId::next(),
            name: name.into(),
            slots: IndexMap::new(),
        }
    }

    pub fn id(&self) -> OperationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.slots.contains_key(label)
    }

    pub fn get(&self, label: &str) -> Option<&SlotRef> {
        self.slots.get(label)
    }

    /// Slots in creation order
    pub fn slots(&self) -> impl Iterator<Item = &SlotRef> {
        self.slots.values()
    }

    /// Look up `label`, returning the stored slot or a factory that creates it
    pub fn slot(&mut self, label: &str) -> SlotEntry<'_> {
        if let Some(existing) = self.slots.get(label) {
            return SlotEntry::Existing(existing.clone());
        }
        SlotEntry::Vacant(SlotFactory {
            operation: self,
            label: label.to_string(),
        })
    }

    /// Shorthand for `slot(label).or_create(time)`
    pub fn at(&mut self, label: &str, time: i64) -> Result<SlotRef> {
        self.slot(label).or_create(time)
    }

    /// The stored slot for `label`
    ///
    /// Fails when the label was never created: an uncreated slot is only a
    /// factory and cannot be chained.
    pub fn require(&self, label: &str) -> Result<SlotRef> {
        self.slots
            .get(label)
            .cloned()
            .ok_or_else(|| PipelineError::unsupported_operand("uncreated slot factory", "connect"))
    }

    /// Register a detached slot
    ///
    /// Fails with [`PipelineError::DuplicateSlot`] if the label is already
    /// present; the existing slot is left untouched. A blank label or color
    /// fails with [`PipelineError::InvalidArgument`], the same as for slots
    /// created through [`SlotFactory`].
    pub fn add_slot(&mut self, slot: Slot) -> Result<&mut Self> {
        self.insert(slot)?;
        Ok(self)
    }

    fn insert(&mut self, slot: Slot) -> Result<SlotRef> {
        if slot.label().trim().is_empty() {
            return Err(PipelineError::invalid_argument("slot label must not be empty"));
        }
        if slot.color().trim().is_empty() {
            return Err(PipelineError::invalid_argument(format!(
                "slot '{}' color must not be empty",
                slot.label()
            )));
        }
        if self.slots.contains_key(slot.label()) {
            return Err(PipelineError::duplicate_slot(slot.label(), &self.name));
        }

        debug!(
            operation = %self.name,
            label = slot.label(),
            time = slot.time(),
            color = slot.color(),
            "Registered slot"
        );
        let slot_ref = SlotRef::new(slot, self.id);
        self.slots
            .insert(slot_ref.label().to_string(), slot_ref.clone());
        Ok(slot_ref)
    }
}

/// Result of looking up a label on an operation
#[derive(Debug)]
pub enum SlotEntry<'a> {
    /// The label already has a stored slot
    Existing(SlotRef),
    /// The label is unknown; the factory creates it
    Vacant(SlotFactory<'a>),
}

impl<'a> SlotEntry<'a> {
    pub fn is_existing(&self) -> bool {
        matches!(self, SlotEntry::Existing(_))
    }

    /// The stored slot, if there is one
    pub fn existing(self) -> Option<SlotRef> {
        match self {
            SlotEntry::Existing(slot) => Some(slot),
            SlotEntry::Vacant(_) => None,
        }
    }

    /// Return the stored slot, or create it at `time` (first reference wins)
    pub fn or_create(self, time: i64) -> Result<SlotRef> {
        match self {
            SlotEntry::Existing(slot) => Ok(slot),
            SlotEntry::Vacant(factory) => factory.create(time),
        }
    }
}

/// Creation handle for a label that has no slot yet
///
/// Consumed by `create`, so a label is created at most once through it.
#[derive(Debug)]
pub struct SlotFactory<'a> {
    operation: &'a mut Operation,
    label: String,
}

impl<'a> SlotFactory<'a> {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Create the slot at `time` with the default color
    pub fn create(self, time: i64) -> Result<SlotRef> {
        self.operation.insert(Slot::new(self.label, time))
    }

    /// Create the slot at `time` filled with `color`
    pub fn create_with_color(self, time: i64, color: impl Into<String>) -> Result<SlotRef> {
        self.operation
            .insert(Slot::with_color(self.label, time, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_creation() {
        let op = Operation::new("test");
        assert_eq!(op.name(), "test");
        assert!(op.is_empty());
    }

    #[test]
    fn test_factory_creates_then_memoizes() {
        let mut op = Operation::new("test");
        let d = match op.slot("d") {
            SlotEntry::Vacant(factory) => {
                assert_eq!(factory.label(), "d");
                factory.create(1).unwrap()
            }
            SlotEntry::Existing(_) => panic!("label should be vacant"),
        };
        assert_eq!(d.label(), "d");
        assert_eq!(d.time(), 1);
        assert_eq!(d.owner(), op.id());

        let again = op.slot("d");
        assert!(again.is_existing());
        assert!(again.existing().unwrap().ptr_eq(&d));
        assert_eq!(op.len(), 1);
    }

    #[test]
    fn test_or_create_is_first_reference_wins() {
        let mut op = Operation::new("test");
        let first = op.at("e", 2).unwrap();
        let second = op.at("e", 9).unwrap();
        assert!(first.ptr_eq(&second));
        assert_eq!(second.time(), 2);
    }

    #[test]
    fn test_create_with_color() {
        let mut op = Operation::new("test");
        let slot = match op.slot("C") {
            SlotEntry::Vacant(factory) => factory.create_with_color(4, "pink").unwrap(),
            SlotEntry::Existing(_) => panic!("label should be vacant"),
        };
        assert_eq!(slot.color(), "pink");
        assert_eq!(op.get("C").unwrap().color(), "pink");
    }

    #[test]
    fn test_add_slot_is_fluent() {
        let mut op = Operation::new("test");
        op.add_slot(Slot::new("d", 1))
            .unwrap()
            .add_slot(Slot::new("c", 3))
            .unwrap();
        assert_eq!(op.len(), 2);
        assert_eq!(op.get("c").unwrap().time(), 3);
    }

    #[test]
    fn test_add_slot_rejects_blank_label_and_color() {
        let mut op = Operation::new("op");
        assert!(matches!(
            op.add_slot(Slot::new(" ", 1)),
            Err(PipelineError::InvalidArgument { .. })
        ));
        assert!(matches!(
            op.add_slot(Slot::with_color("d", 1, "")),
            Err(PipelineError::InvalidArgument { .. })
        ));
        assert!(op.is_empty());
    }

    #[test]
    fn test_add_slot_duplicate_never_overwrites() {
        let mut op = Operation::new("test");
        op.add_slot(Slot::new("d", 1)).unwrap();
        let err = op.add_slot(Slot::new("d", 7)).unwrap_err();
        assert_eq!(err, PipelineError::duplicate_slot("d", "test"));
        assert_eq!(op.get("d").unwrap().time(), 1);
        assert_eq!(op.len(), 1);
    }

    #[test]
    fn test_invalid_arguments() {
        let mut op = Operation::new("test");
        assert!(matches!(
            op.at("", 0),
            Err(PipelineError::InvalidArgument { .. })
        ));
        let blank_color = match op.slot("x") {
            SlotEntry::Vacant(factory) => factory.create_with_color(0, " "),
            SlotEntry::Existing(_) => panic!("label should be vacant"),
        };
        assert!(matches!(
            blank_color,
            Err(PipelineError::InvalidArgument { .. })
        ));
        assert!(op.is_empty());
    }

    #[test]
    fn test_require_uncreated_label() {
        let mut op = Operation::new("test");
        assert!(matches!(
            op.require("f"),
            Err(PipelineError::UnsupportedOperand { .. })
        ));
        op.at("f", 3).unwrap();
        assert_eq!(op.require("f").unwrap().time(), 3);
    }

    #[test]
    fn test_slots_iterate_in_creation_order() {
        let mut op = Operation::new("test");
        op.at("D", 0).unwrap();
        op.at("E", 1).unwrap();
        op.at("C", 2).unwrap();
        let labels: Vec<&str> = op.slots().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["D", "E", "C"]);
    }
}
