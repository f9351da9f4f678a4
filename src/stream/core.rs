//! The stream type and its lazy combinators.
//!
//! Every combinator pattern-matches the two variants and rebuilds at
//! most one node, deferring the rest of the work into the new node's
//! tail thunk. The exceptions are `drop` and `filter`'s scan-to-match,
//! which walk the chain eagerly; both are bounded by the skip distance,
//! not by the total stream length.

use std::fmt;
use std::rc::Rc;

use super::thunk::Thunk;

/// A lazy, possibly infinite, singly-linked stream.
///
/// A stream is either a [`Cons`](Stream::Cons) node pairing a realized
/// head with a suspended tail, or [`Empty`](Stream::Empty). Streams are
/// persistent values: combinators take `&self`, never mutate the
/// receiver, and share tails through reference-counted thunks. Nothing
/// is memoized; forcing the same tail twice reruns its computation.
///
/// The type is single-threaded by design (`Rc`-based, neither `Send`
/// nor `Sync`); laziness here means deferred pure computation, not
/// asynchrony.
pub enum Stream<T> {
    /// A realized head plus the suspended computation of the rest.
    Cons {
        /// The first element, fixed at construction.
        head: T,
        /// Produces the next stream when forced.
        tail: Thunk<T>,
    },
    /// The terminal variant; absorbing under [`tail`](Stream::tail).
    Empty,
}

impl<T: 'static> Stream<T> {
    /// Build a node from a realized head and an uncalled tail closure.
    ///
    /// The closure is stored, never invoked here; it runs each time the
    /// tail is asked for, and its result is not cached.
    pub fn new<F>(head: T, tail: F) -> Self
    where
        F: Fn() -> Stream<T> + 'static,
    {
        Stream::Cons {
            head,
            tail: Thunk::new(tail),
        }
    }

    /// The first element, or `None` on the empty stream.
    pub fn head(&self) -> Option<&T> {
        match self {
            Stream::Cons { head, .. } => Some(head),
            Stream::Empty => None,
        }
    }

    /// Force the suspended tail. The empty stream is its own tail.
    pub fn tail(&self) -> Stream<T> {
        match self {
            Stream::Cons { tail, .. } => tail.force(),
            Stream::Empty => Stream::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// Map every element through `f`, lazily.
    ///
    /// The head is mapped when a node is built; everything past it stays
    /// suspended until traversal reaches it.
    pub fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        self.map_inner(Rc::new(f))
    }

    fn map_inner<U: 'static>(&self, f: Rc<dyn Fn(T) -> U>) -> Stream<U> {
        match self {
            Stream::Cons { head, tail } => {
                let mapped = f(head.clone());
                let tail = tail.clone();
                Stream::Cons {
                    head: mapped,
                    tail: Thunk::new(move || tail.force().map_inner(Rc::clone(&f))),
                }
            }
            Stream::Empty => Stream::Empty,
        }
    }

    /// Keep only the elements satisfying `predicate`.
    ///
    /// The search for the next match is eager: non-matching elements are
    /// skipped immediately, so filtering an infinite stream with a
    /// predicate that never matches again does not return. Bound the
    /// stream first if that can happen.
    pub fn filter<P>(&self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.filter_inner(Rc::new(predicate))
    }

    fn filter_inner(&self, predicate: Rc<dyn Fn(&T) -> bool>) -> Stream<T> {
        let mut current = self.clone();
        let mut skipped = 0usize;
        loop {
            match current {
                Stream::Cons { head, tail } => {
                    if predicate(&head) {
                        if skipped > 0 {
                            log::trace!("filter: skipped {} elements before a match", skipped);
                        }
                        return Stream::Cons {
                            head,
                            tail: Thunk::new(move || {
                                tail.force().filter_inner(Rc::clone(&predicate))
                            }),
                        };
                    }
                    skipped += 1;
                    current = tail.force();
                }
                Stream::Empty => return Stream::Empty,
            }
        }
    }

    /// At most `n` elements, truncating lazily.
    ///
    /// Elements past the cutoff, and the cost of producing them, are
    /// never forced.
    pub fn take(&self, n: usize) -> Stream<T> {
        match self {
            Stream::Cons { head, tail } => {
                if n == 0 {
                    return Stream::Empty;
                }
                let head = head.clone();
                let tail = tail.clone();
                Stream::Cons {
                    head,
                    tail: Thunk::new(move || {
                        if n == 1 {
                            Stream::Empty
                        } else {
                            tail.force().take(n - 1)
                        }
                    }),
                }
            }
            Stream::Empty => Stream::Empty,
        }
    }

    /// Skip the first `n` elements.
    ///
    /// The skip happens now: `drop` walks `n` tail-steps before
    /// returning, unlike the fully lazy combinators. The remainder keeps
    /// its original laziness. Over-dropping a finite stream yields the
    /// empty stream.
    pub fn drop(&self, n: usize) -> Stream<T> {
        let mut current = self.clone();
        let mut remaining = n;
        while remaining > 0 {
            match current {
                Stream::Cons { tail, .. } => {
                    current = tail.force();
                    remaining -= 1;
                }
                Stream::Empty => return Stream::Empty,
            }
        }
        if n > 0 {
            log::trace!("drop: skipped {} elements eagerly", n);
        }
        current
    }

    /// The longest prefix whose elements satisfy `predicate`, lazily.
    ///
    /// The predicate is applied to each head as its node is built; the
    /// continuation stays suspended. The first failure ends the stream.
    pub fn take_while<P>(&self, predicate: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.take_while_inner(Rc::new(predicate))
    }

    fn take_while_inner(&self, predicate: Rc<dyn Fn(&T) -> bool>) -> Stream<T> {
        match self {
            Stream::Cons { head, tail } if predicate(head) => {
                let head = head.clone();
                let tail = tail.clone();
                Stream::Cons {
                    head,
                    tail: Thunk::new(move || {
                        tail.force().take_while_inner(Rc::clone(&predicate))
                    }),
                }
            }
            _ => Stream::Empty,
        }
    }

    /// The running accumulations of `combine`, seeded with `zero`.
    ///
    /// Element `i` of the output is the fold of the first `i` input
    /// elements; element 0 is `zero` itself, unconsumed. The empty
    /// stream still yields `zero` once.
    pub fn scan<A, F>(&self, zero: A, combine: F) -> Stream<A>
    where
        A: Clone + 'static,
        F: Fn(A, T) -> A + 'static,
    {
        self.scan_inner(zero, Rc::new(combine))
    }

    fn scan_inner<A>(&self, zero: A, combine: Rc<dyn Fn(A, T) -> A>) -> Stream<A>
    where
        A: Clone + 'static,
    {
        match self {
            Stream::Cons { head, tail } => {
                let head = head.clone();
                let tail = tail.clone();
                let seed = zero.clone();
                Stream::Cons {
                    head: zero,
                    tail: Thunk::new(move || {
                        let acc = combine(seed.clone(), head.clone());
                        tail.force().scan_inner(acc, Rc::clone(&combine))
                    }),
                }
            }
            Stream::Empty => Stream::Cons {
                head: zero,
                tail: Thunk::new(|| Stream::Empty),
            },
        }
    }
}

impl<T: Clone> Clone for Stream<T> {
    fn clone(&self) -> Self {
        match self {
            Stream::Cons { head, tail } => Stream::Cons {
                head: head.clone(),
                tail: tail.clone(),
            },
            Stream::Empty => Stream::Empty,
        }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Stream::Empty
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    /// Renders the realized head only; never forces the tail.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Cons { head, .. } => write!(f, "Stream({:?}, ?)", head),
            Stream::Empty => f.write_str("EmptyStream"),
        }
    }
}
