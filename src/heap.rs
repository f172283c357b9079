//! An m-ary heap ordered by a caller-supplied priority predicate.
//!
//! The tree is stored densely in a `Vec`. For a node at index `i`, its parent lives at
//! `(i - 1) / arity` and its `k`-th child (`1 <= k <= arity`) at `arity * i + k`.

use crate::compare::{Compare, Less};

/// The smallest arity that still forms a tree.
pub const MIN_ARITY: usize = 2;

/// A priority queue backed by a complete m-ary tree.
///
/// The element at the root is always a top-priority element according to `C`: no element has
/// strictly higher priority than its parent. Among elements of equal priority no order is
/// guaranteed, but the order is fully determined by the sequence of operations.
#[derive(Debug, Clone)]
pub struct Heap<T, C = Less> {
    arity: usize,
    compare: C,
    data: Vec<T>,
}

impl<T, C: Compare<T>> Heap<T, C> {
    /// Creates an empty heap with the given arity and comparator.
    ///
    /// Fails with [`Error::InvalidArity`] if `arity < 2`.
    pub fn new(arity: usize, compare: C) -> Result<Self, Error> {
        Self::with_capacity(arity, compare, 0)
    }

    /// Creates an empty heap with room for at least `capacity` elements.
    pub fn with_capacity(arity: usize, compare: C, capacity: usize) -> Result<Self, Error> {
        if arity < MIN_ARITY {
            return Err(Error::InvalidArity(arity));
        }
        Ok(Self {
            arity,
            compare,
            data: Vec::with_capacity(capacity),
        })
    }

    /// Creates an empty heap with the given arity and a default comparator.
    pub fn with_arity(arity: usize) -> Result<Self, Error>
    where
        C: Default,
    {
        Self::new(arity, C::default())
    }

    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.trickle_up(self.data.len() - 1);
    }

    /// Returns the top-priority element.
    ///
    /// Callers must not use interior mutability to change the element's priority through the
    /// returned reference; the heap cannot detect it.
    pub fn top(&self) -> Result<&T, Error> {
        self.data.first().ok_or(Error::Underflow(Op::Top))
    }

    /// Removes and returns the top-priority element.
    ///
    /// On an empty heap this fails with [`Error::Underflow`] and leaves the heap untouched.
    pub fn pop(&mut self) -> Result<T, Error> {
        if self.data.is_empty() {
            return Err(Error::Underflow(Op::Pop));
        }
        // Move the last element into the root slot, then repair downward
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.heapify_down(0);
        }
        Ok(top)
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn try_pop(&mut self) -> Option<T> {
        self.pop().ok()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the elements in storage order, which is not priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its elements in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.try_pop() {
            sorted.push(item);
        }
        sorted
    }

    fn parent(&self, i: usize) -> usize {
        // The root is its own parent
        i.saturating_sub(1) / self.arity
    }

    fn kth_child(&self, i: usize, k: usize) -> usize {
        self.arity * i + k
    }

    fn trickle_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = self.parent(i);
            if !self.compare.higher(&self.data[i], &self.data[p]) {
                break;
            }
            self.data.swap(i, p);
            i = p;
        }
    }

    // The leftmost child that strictly beats the best candidate seen so far wins. Equal siblings
    // never depose an earlier pick, which keeps extraction deterministic.
    fn heapify_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let mut best = i;
            for k in 1..=self.arity {
                let c = self.kth_child(i, k);
                if c >= n {
                    break;
                }
                if self.compare.higher(&self.data[c], &self.data[best]) {
                    best = c;
                }
            }
            if best == i {
                break;
            }
            self.data.swap(i, best);
            i = best;
        }
    }
}

impl<T, C: Compare<T> + Default> Default for Heap<T, C> {
    fn default() -> Self {
        Self {
            arity: MIN_ARITY,
            compare: C::default(),
            data: Vec::new(),
        }
    }
}

impl<T, C: Compare<T>> Extend<T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for Heap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

/// The operation that hit an empty heap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Op {
    #[display(fmt = "top")]
    Top,
    #[display(fmt = "pop")]
    Pop,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("heap arity must be at least 2, got {0}")]
    InvalidArity(usize),

    #[error("{0} on empty heap")]
    Underflow(Op),
}
