//! The callback queue and its fold.
//!
//! A [`StageQueue`] holds the ordered stages extracted from one
//! invocation's trailing arguments. It is built once, consumed exactly
//! once by [`StageQueue::run`], and discarded; it has no identity
//! beyond a single call.
//!
//! # Invariants
//!
//! - **Stored order**: stages run in the left-to-right order they held
//!   in the original argument list.
//! - **Single owner**: the queue does not implement `Clone`; ownership
//!   semantics rule out sharing or reuse between invocations.
//! - **Identity on empty**: running an empty (or absent) queue returns
//!   the input unchanged.

use smallvec::SmallVec;

use crate::stage::Stage;

/// Stage chains this short are stored inline without heap allocation.
const STAGE_INLINE_CAPACITY: usize = 4;

/// An ordered queue of pipeline stages, owned by a single invocation.
///
/// The queue is assembled either by the extractor or manually through
/// the consuming builder [`StageQueue::then`], then folded over once
/// with [`StageQueue::run`].
///
/// # Type Parameters
///
/// * `T` - The element type flowing through the pipeline
///
/// # Examples
///
/// ```rust
/// use yieldback::queue::StageQueue;
/// use yieldback::stage::Stage;
///
/// let queue = StageQueue::new()
///     .then(Stage::item_wise(|value: i32| [value + 1]))
///     .then(Stage::item_wise(|value: i32| [value * 10]));
///
/// assert_eq!(queue.run(vec![1, 2]), vec![20, 30]);
/// ```
pub struct StageQueue<T> {
    stages: SmallVec<[Stage<T>; STAGE_INLINE_CAPACITY]>,
}

impl<T> StageQueue<T> {
    /// Creates a new empty stage queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yieldback::queue::StageQueue;
    ///
    /// let queue: StageQueue<i32> = StageQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            stages: SmallVec::new(),
        }
    }

    /// Returns `true` if the queue holds no stages.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Returns the number of stages in the queue.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Appends a stage, returning the extended queue.
    ///
    /// This is the fluent assembly form: the queue is moved in and
    /// moved back out, so a chain of `then` calls builds the queue in
    /// left-to-right run order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yieldback::queue::StageQueue;
    /// use yieldback::stage::Stage;
    ///
    /// let queue = StageQueue::new()
    ///     .then(Stage::identity())
    ///     .then(Stage::item_wise(|value: i32| [value * 2]));
    /// assert_eq!(queue.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn then(mut self, stage: Stage<T>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Concatenates two queues, preserving both stored orders.
    ///
    /// Running the result is equivalent to running `self` and feeding
    /// its output to `other`:
    /// `self.chain(other).run(input) == other.run(self.run(input))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yieldback::queue::StageQueue;
    /// use yieldback::stage::Stage;
    ///
    /// let first = StageQueue::from(Stage::item_wise(|value: i32| [value + 1]));
    /// let second = StageQueue::from(Stage::item_wise(|value: i32| [value * 10]));
    ///
    /// assert_eq!(first.chain(second).run(vec![1]), vec![20]);
    /// ```
    #[inline]
    #[must_use]
    pub fn chain(mut self, other: Self) -> Self {
        self.stages.extend(other.stages);
        self
    }

    /// Threads a batch through every stage in stored order.
    ///
    /// Folds left over the queue: each stage receives the entire
    /// current batch and returns the replacement batch handed to the
    /// next stage. An empty queue returns `input` unchanged. The queue
    /// is consumed; a stage runs at most once.
    ///
    /// The library only sequences the calls: side effects performed by
    /// a stage are neither isolated, inspected, nor retried.
    ///
    /// # Arguments
    ///
    /// * `input` - The initial batch
    ///
    /// # Returns
    ///
    /// The batch produced by the final stage, or `input` itself when
    /// the queue is empty.
    ///
    /// # Panics
    ///
    /// Does not panic itself; a panic raised by a stage unwinds through
    /// this call unmodified and later stages never execute.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yieldback::queue::StageQueue;
    /// use yieldback::stage::Stage;
    ///
    /// let queue = StageQueue::new()
    ///     .then(Stage::item_wise(|value: i32| [value + 1]))
    ///     .then(Stage::list_wise(|batch: Vec<i32>| vec![batch.iter().sum()]));
    ///
    /// assert_eq!(queue.run(vec![1, 2, 3]), vec![9]);
    /// ```
    ///
    /// # Identity on the empty queue
    ///
    /// ```rust
    /// use yieldback::queue::StageQueue;
    ///
    /// let queue: StageQueue<i32> = StageQueue::new();
    /// assert_eq!(queue.run(vec![1, 2, 3]), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn run(self, input: Vec<T>) -> Vec<T> {
        self.stages
            .into_iter()
            .fold(input, |current, stage| stage.apply(current))
    }
}

impl<T> Default for StageQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Stage<T>> for StageQueue<T> {
    fn from_iter<I: IntoIterator<Item = Stage<T>>>(iterable: I) -> Self {
        Self {
            stages: iterable.into_iter().collect(),
        }
    }
}

impl<T> From<Stage<T>> for StageQueue<T> {
    fn from(stage: Stage<T>) -> Self {
        Self::new().then(stage)
    }
}

impl<T> std::fmt::Debug for StageQueue<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("StageQueue")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Threads a batch through a queue that may be absent.
///
/// Call sites that skip extraction may hold no queue at all; an absent
/// (`None`) queue is not a fault and behaves exactly like an empty
/// queue. A bare [`StageQueue`] is accepted as well.
///
/// # Examples
///
/// ```rust
/// use yieldback::queue::{StageQueue, yield_through};
/// use yieldback::stage::Stage;
///
/// let queue = StageQueue::from(Stage::item_wise(|value: i32| [value * 2]));
/// assert_eq!(yield_through(queue, vec![1, 2]), vec![2, 4]);
///
/// // An unset queue is identity, not an error.
/// assert_eq!(yield_through(None, vec![1, 2]), vec![1, 2]);
/// ```
pub fn yield_through<T, Q>(queue: Q, input: Vec<T>) -> Vec<T>
where
    Q: Into<Option<StageQueue<T>>>,
{
    match queue.into() {
        Some(queue) => queue.run(input),
        None => input,
    }
}

static_assertions::assert_not_impl_any!(StageQueue<i32>: Clone, Send, Sync);
