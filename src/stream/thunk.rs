//! Suspended tail computations.

use std::rc::Rc;

use super::core::Stream;

/// A zero-argument deferred computation producing the next stream node.
///
/// Forcing is not memoized: every call to [`force`](Thunk::force) runs
/// the suspended closure again. Cloning a `Thunk` shares the suspended
/// computation, never a result.
pub struct Thunk<T>(Rc<dyn Fn() -> Stream<T>>);

impl<T: 'static> Thunk<T> {
    /// Suspend `f` without calling it.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Stream<T> + 'static,
    {
        Thunk(Rc::new(f))
    }

    /// Run the suspended computation and return the next node.
    pub fn force(&self) -> Stream<T> {
        (self.0)()
    }
}

impl<T> Clone for Thunk<T> {
    fn clone(&self) -> Self {
        Thunk(Rc::clone(&self.0))
    }
}
