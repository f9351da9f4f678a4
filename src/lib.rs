//! A lazy, potentially infinite stream library.
//!
//! A [`Stream`] pairs a realized head with a suspended tail computation
//! (a [`Thunk`]). Combinators rebuild one node at a time and defer the
//! rest, so pipelines compose over infinite streams without diverging
//! until an element is actually demanded.
//!
//! ```
//! use lazy_stream::unfold;
//!
//! let naturals = unfold(1i64, |n| Some((n, n + 1)));
//! let squares = naturals.map(|n| n * n);
//! assert_eq!(squares.at(3), Some(16));
//! assert_eq!(squares.take(3).iter().collect::<Vec<_>>(), vec![1, 4, 9]);
//! ```
//!
//! Eager terminal operations (`each`, `length`, `last`, `fold_left`,
//! `reduce`, plain iteration) run until the stream ends; bound an
//! infinite stream with [`Stream::take`] or [`Stream::take_while`]
//! before calling them.

pub mod stream;

pub use stream::{continually, emit, empty, from_iter, unfold, Iter, Stream, Thunk};
