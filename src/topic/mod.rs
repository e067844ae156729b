//! The topicalizer: produce a batch, then yield it through a queue.
//!
//! The batch flowing through a pipeline is its *topic*. This module
//! composes the extraction protocol with a producer function and the
//! yield fold, so one call covers the whole lifecycle of an invocation:
//!
//! - [`run_with_topic`]: extract → produce → yield
//! - [`yield_with_default_topic`]: yield with an explicit, caller-supplied
//!   default topic used only when no input batch is given
//!
//! There is no ambient topic: every batch is passed explicitly. The
//! default-topic form exists for call sites that conventionally yield
//! "whatever the current topic is" — the default is an ordinary
//! parameter, never hidden state.
//!
//! # Examples
//!
//! ```rust
//! use yieldback::extract::Arg;
//! use yieldback::stage::Stage;
//! use yieldback::topic::run_with_topic;
//!
//! let args = vec![
//!     Arg::Value(2),
//!     Arg::Value(3),
//!     Arg::Stage(Stage::item_wise(|value: i32| [value * 10])),
//! ];
//!
//! let result = run_with_topic(
//!     |residual| vec![residual.into_iter().filter_map(Arg::value).sum::<i32>()],
//!     args,
//! );
//! assert_eq!(result, vec![50]);
//! ```

use crate::extract::{Arg, extract};
use crate::queue::{StageQueue, yield_through};

/// Runs a producer on the residual arguments and yields its result.
///
/// Pure composition of the extraction protocol and the fold:
/// the trailing stages of `args` become the queue, the producer
/// computes the initial topic from the residual arguments, and the
/// topic is threaded through the queue in stored order.
///
/// # Arguments
///
/// * `producer` - Computes the initial topic from the residual arguments
/// * `args` - The full argument list, trailing stages included
///
/// # Examples
///
/// ```rust
/// use yieldback::extract::Arg;
/// use yieldback::stage::Stage;
/// use yieldback::topic::run_with_topic;
///
/// // No trailing stages: the producer's result is returned unchanged.
/// let result = run_with_topic(
///     |residual| residual.into_iter().filter_map(Arg::value).collect(),
///     vec![Arg::Value(1), Arg::Value(2)],
/// );
/// assert_eq!(result, vec![1, 2]);
/// ```
pub fn run_with_topic<T, P>(producer: P, args: Vec<Arg<T>>) -> Vec<T>
where
    P: FnOnce(Vec<Arg<T>>) -> Vec<T>,
{
    let (queue, residual) = extract(args);
    queue.run(producer(residual))
}

/// Yields an input batch, falling back to an explicit default topic.
///
/// When `input` is `None`, the caller-supplied `default_topic` feeds
/// the fold instead. The fallback is opt-in and visible at the call
/// site; the queue itself never substitutes a topic. An absent queue
/// behaves as an empty queue, as with
/// [`yield_through`](crate::queue::yield_through).
///
/// # Examples
///
/// ```rust
/// use yieldback::queue::StageQueue;
/// use yieldback::stage::Stage;
/// use yieldback::topic::yield_with_default_topic;
///
/// let queue = StageQueue::from(Stage::item_wise(|value: i32| [value + 1]));
/// assert_eq!(yield_with_default_topic(queue, None, vec![10]), vec![11]);
///
/// let queue = StageQueue::from(Stage::item_wise(|value: i32| [value + 1]));
/// assert_eq!(yield_with_default_topic(queue, Some(vec![5]), vec![10]), vec![6]);
/// ```
pub fn yield_with_default_topic<T, Q>(
    queue: Q,
    input: Option<Vec<T>>,
    default_topic: Vec<T>,
) -> Vec<T>
where
    Q: Into<Option<StageQueue<T>>>,
{
    yield_through(queue, input.unwrap_or(default_topic))
}
