//! Slots: one pipeline stage of one operation at one cycle

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::DEFAULT_SLOT_COLOR;

static NEXT_OPERATION_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an [`Operation`](super::Operation)
///
/// Slots refer back to their operation through this id rather than a
/// pointer, so the layout engine can find a slot's row without the slot
/// owning (or borrowing) the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperationId(u64);

impl OperationId {
    pub(crate) fn next() -> Self {
        Self(NEXT_OPERATION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op#{}", self.0)
    }
}

/// A pipeline stage occurrence: `label` happening at cycle `time`
///
/// Two slots are equal when label, time, and color are all equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
    label: String,
    time: i64,
    color: String,
}

impl Slot {
    /// Create a detached slot with the default color
    pub fn new(label: impl Into<String>, time: i64) -> Self {
        Self::with_color(label, time, DEFAULT_SLOT_COLOR)
    }

    /// Create a detached slot with an explicit fill color
    pub fn with_color(label: impl Into<String>, time: i64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            time,
            color: color.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.label, self.time)
    }
}

/// Shared handle to a slot stored on an operation
///
/// Cloning is cheap. Equality is value equality of the underlying [`Slot`];
/// use [`SlotRef::ptr_eq`] to ask whether two handles name the same stored
/// slot.
#[derive(Debug, Clone)]
pub struct SlotRef {
    slot: Arc<Slot>,
    owner: OperationId,
}

impl SlotRef {
    pub(crate) fn new(slot: Slot, owner: OperationId) -> Self {
        Self {
            slot: Arc::new(slot),
            owner,
        }
    }

    /// The operation that created this slot
    pub fn owner(&self) -> OperationId {
        self.owner
    }

    /// True if both handles point at the same stored slot
    pub fn ptr_eq(&self, other: &SlotRef) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Deref for SlotRef {
    type Target = Slot;

    fn deref(&self) -> &Slot {
        &self.slot
    }
}

impl PartialEq for SlotRef {
    fn eq(&self, other: &Self) -> bool {
        *self.slot == *other.slot
    }
}

impl Eq for SlotRef {}

impl PartialEq<Slot> for SlotRef {
    fn eq(&self, other: &Slot) -> bool {
        *self.slot == *other
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.slot, f)
    }
}
