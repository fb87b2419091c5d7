//! Chains of slot references and the `>>` connect operator
//!
//! ```rust
//! use bagpipe::prelude::*;
//!
//! let mut op = Operation::new("add x1, x2, x3");
//! let d = op.at("D", 0).unwrap();
//! let e = op.at("E", 1).unwrap();
//! let c = op.at("C", 2).unwrap();
//!
//! let chain = &d >> &e >> &c;
//! assert_eq!(chain.len(), 3);
//! assert_eq!(chain, &d >> (&e >> &c));
//! assert_eq!(chain.to_string(), "D@0 >> E@1 >> C@2");
//! ```

use std::fmt;
use std::ops::Shr;

use super::SlotRef;

/// Right-hand side of a connection: either a single slot or a whole chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    Slot(SlotRef),
    Chain(Chain),
}

impl From<SlotRef> for Link {
    fn from(slot: SlotRef) -> Self {
        Link::Slot(slot)
    }
}

impl From<&SlotRef> for Link {
    fn from(slot: &SlotRef) -> Self {
        Link::Slot(slot.clone())
    }
}

impl From<Chain> for Link {
    fn from(chain: Chain) -> Self {
        Link::Chain(chain)
    }
}

impl From<&Chain> for Link {
    fn from(chain: &Chain) -> Self {
        Link::Chain(chain.clone())
    }
}

/// An ordered sequence of slot references
///
/// Order is path order. Duplicates are kept. Connecting never modifies an
/// operand that is still reachable by the caller; it always yields a new
/// chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    slots: Vec<SlotRef>,
}

impl Chain {
    /// An empty chain
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[SlotRef] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SlotRef> {
        self.slots.iter()
    }

    /// Consecutive `(from, to)` pairs along the chain
    pub fn hops(&self) -> impl Iterator<Item = (&SlotRef, &SlotRef)> {
        self.slots.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Return a new chain with `rhs` appended
    pub fn connect(&self, rhs: impl Into<Link>) -> Chain {
        self.clone().append(rhs.into())
    }

    fn append(mut self, rhs: Link) -> Chain {
        match rhs {
            Link::Slot(slot) => self.slots.push(slot),
            Link::Chain(chain) => self.slots.extend(chain.slots),
        }
        self
    }
}

impl SlotRef {
    /// Start a chain at this slot and append `rhs`
    pub fn connect(&self, rhs: impl Into<Link>) -> Chain {
        Chain::from(self.clone()).append(rhs.into())
    }
}

impl<R: Into<Link>> Shr<R> for SlotRef {
    type Output = Chain;

    fn shr(self, rhs: R) -> Chain {
        Chain::from(self).append(rhs.into())
    }
}

impl<R: Into<Link>> Shr<R> for &SlotRef {
    type Output = Chain;

    fn shr(self, rhs: R) -> Chain {
        self.connect(rhs)
    }
}

impl<R: Into<Link>> Shr<R> for Chain {
    type Output = Chain;

    fn shr(self, rhs: R) -> Chain {
        self.append(rhs.into())
    }
}

impl<R: Into<Link>> Shr<R> for &Chain {
    type Output = Chain;

    fn shr(self, rhs: R) -> Chain {
        self.connect(rhs)
    }
}

impl From<SlotRef> for Chain {
    fn from(slot: SlotRef) -> Self {
        Self { slots: vec![slot] }
    }
}

impl From<Vec<SlotRef>> for Chain {
    fn from(slots: Vec<SlotRef>) -> Self {
        Self { slots }
    }
}

impl From<&[SlotRef]> for Chain {
    fn from(slots: &[SlotRef]) -> Self {
        Self {
            slots: slots.to_vec(),
        }
    }
}

impl FromIterator<SlotRef> for Chain {
    fn from_iter<I: IntoIterator<Item = SlotRef>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a SlotRef;
    type IntoIter = std::slice::Iter<'a, SlotRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " >> ")?;
            }
            write!(f, "{}", slot)?;
        }
        Ok(())
    }
}
