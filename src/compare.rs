/// A strict priority predicate.
///
/// `higher(a, b)` returns `true` iff `a` has strictly higher priority than `b`. Implementations
/// must be pure and consistent for as long as a heap holds them.
pub trait Compare<T> {
    fn higher(&self, a: &T, b: &T) -> bool;
}

/// Smaller values win. This yields a min-heap.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Less;

impl<T: Ord> Compare<T> for Less {
    fn higher(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Larger values win. This yields a max-heap.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Greater;

impl<T: Ord> Compare<T> for Greater {
    fn higher(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn higher(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
