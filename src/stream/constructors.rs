//! Stream constructors: empty, emit, continually, from_iter, unfold.

use std::cell::RefCell;
use std::rc::Rc;

use super::core::Stream;
use super::thunk::Thunk;

/// The empty stream.
pub fn empty<T>() -> Stream<T> {
    Stream::Empty
}

/// A one-element stream.
pub fn emit<T: 'static>(value: T) -> Stream<T> {
    Stream::new(value, || Stream::Empty)
}

/// An infinite stream that invokes `generator` once per element produced.
///
/// The generator is shared by every node derived from this stream, so a
/// stateful generator advances whenever *any* tail is forced:
/// re-deriving the tail of a partially consumed stream calls the
/// generator again and observes its current state, not the state at
/// construction time.
///
/// # Examples
///
/// ```
/// use lazy_stream::continually;
///
/// let mut counter = 0;
/// let ticks = continually(move || {
///     counter += 1;
///     counter
/// });
/// assert_eq!(ticks.head(), Some(&1));
/// assert_eq!(ticks.tail().head(), Some(&2));
/// // Forcing the same tail again advances the shared generator.
/// assert_eq!(ticks.tail().head(), Some(&3));
/// ```
pub fn continually<T, G>(generator: G) -> Stream<T>
where
    T: 'static,
    G: FnMut() -> T + 'static,
{
    continually_shared(Rc::new(RefCell::new(generator)))
}

fn continually_shared<T: 'static>(generator: Rc<RefCell<dyn FnMut() -> T>>) -> Stream<T> {
    let head = (&mut *generator.borrow_mut())();
    Stream::Cons {
        head,
        tail: Thunk::new(move || continually_shared(Rc::clone(&generator))),
    }
}

/// A lazy stream over the items of `iter`.
///
/// The iterator is shared state, like a `continually` generator:
/// forcing any tail advances it. Exhaustion ends the stream.
pub fn from_iter<I>(iter: I) -> Stream<I::Item>
where
    I: IntoIterator,
    I::Item: 'static,
    I::IntoIter: 'static,
{
    from_iter_shared(Rc::new(RefCell::new(iter.into_iter())))
}

fn from_iter_shared<T: 'static>(iter: Rc<RefCell<dyn Iterator<Item = T>>>) -> Stream<T> {
    let next = iter.borrow_mut().next();
    match next {
        Some(head) => Stream::Cons {
            head,
            tail: Thunk::new(move || from_iter_shared(Rc::clone(&iter))),
        },
        None => Stream::Empty,
    }
}

/// Build a stream from a seed value and a step function.
///
/// `step` returns the next element together with the successor state,
/// or `None` to end the stream. State is threaded by value, so a tail
/// derived twice replays identically; nothing is shared, unlike
/// [`continually`].
///
/// # Examples
///
/// ```
/// use lazy_stream::unfold;
///
/// let fibonacci = unfold((0i64, 1i64), |(a, b)| Some((a, (b, a + b))));
/// let first_ten: Vec<i64> = fibonacci.take(10).iter().collect();
/// assert_eq!(first_ten, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
/// ```
pub fn unfold<T, S, F>(init: S, step: F) -> Stream<T>
where
    T: 'static,
    S: Clone + 'static,
    F: Fn(S) -> Option<(T, S)> + 'static,
{
    unfold_shared(init, Rc::new(step))
}

fn unfold_shared<T, S>(state: S, step: Rc<dyn Fn(S) -> Option<(T, S)>>) -> Stream<T>
where
    T: 'static,
    S: Clone + 'static,
{
    match step(state) {
        Some((head, next)) => Stream::Cons {
            head,
            tail: Thunk::new(move || unfold_shared(next.clone(), Rc::clone(&step))),
        },
        None => Stream::Empty,
    }
}
