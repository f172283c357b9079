use delegate::delegate;

use crate::{
    event::{Event, EventLess},
    heap::{self, Heap},
};

/// Pending events, earliest first.
///
/// Events at the same tick come out in an unspecified order, even when they target the same
/// wire. The order is deterministic for a given arity and push sequence, but may differ between
/// arities.
#[derive(Debug, Default)]
pub struct Schedule {
    inner: Heap<Event, EventLess>,
}

impl Schedule {
    pub fn new(arity: usize) -> Result<Self, heap::Error> {
        Ok(Self {
            inner: Heap::new(arity, EventLess)?,
        })
    }

    delegate! {
        to self.inner {
            pub fn push(&mut self, ev: Event);
            #[call(try_pop)]
            pub fn pop(&mut self) -> Option<Event>;
            pub fn peek(&self) -> Option<&Event>;
            pub fn is_empty(&self) -> bool;
            pub fn len(&self) -> usize;
        }
    }
}

impl Extend<Event> for Schedule {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}
