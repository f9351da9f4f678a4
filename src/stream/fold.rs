//! Eager folds over finite streams.

use super::core::Stream;

impl<T: Clone + 'static> Stream<T> {
    /// Fold the whole stream into one value, starting from `zero`.
    ///
    /// Runs as the final element of the running-accumulation stream
    /// ([`scan`](Stream::scan) then [`last`](Stream::last)), so the
    /// empty stream folds to `zero`. Forces the entire receiver, which
    /// must therefore be finite. Where a bare operator is wanted, pass
    /// the binary fn path, e.g. `fold_left(0, std::ops::Add::add)`.
    pub fn fold_left<A, F>(&self, zero: A, combine: F) -> A
    where
        A: Clone + 'static,
        F: Fn(A, T) -> A + 'static,
    {
        self.scan(zero.clone(), combine).last().unwrap_or(zero)
    }

    /// Fold without an explicit zero: the first element seeds the
    /// accumulator and the remaining elements are combined into it.
    ///
    /// `None` on the empty stream, where no seed exists.
    pub fn reduce<F>(&self, combine: F) -> Option<T>
    where
        F: Fn(T, T) -> T + 'static,
    {
        match self {
            Stream::Cons { head, .. } => self.drop(1).scan(head.clone(), combine).last(),
            Stream::Empty => None,
        }
    }
}
