//! The stage type and its wrap combinators.
//!
//! A [`Stage`] is one link of a callback queue: a single-shot function
//! from a whole batch of values to a replacement batch. Stages come in
//! two shapes:
//!
//! - **List-wise** ([`Stage::list_wise`]): the wrapped function receives
//!   the entire batch once. This is the natural shape of a stage.
//! - **Item-wise** ([`Stage::item_wise`]): the wrapped function receives
//!   one element at a time and may return zero, one, or many
//!   replacements; results are flattened in source order.
//!
//! # Design
//!
//! A stage owns `Box<dyn FnOnce(Vec<T>) -> Vec<T>>` and is consumed by
//! [`Stage::apply`]. The `FnOnce` bound encodes the lifecycle contract:
//! a queue is built once per invocation, each member runs at most once,
//! and the queue is discarded afterwards.

use std::fmt;

/// A single pipeline stage: a batch-to-batch transformation.
///
/// The batch arity may change freely between stages; a stage may
/// filter, expand, or replace the batch wholesale. The element type `T`
/// is opaque to the library: stages are the only code that inspects it.
///
/// # Type Parameters
///
/// * `T` - The element type flowing through the pipeline
///
/// # Examples
///
/// ```rust
/// use yieldback::stage::Stage;
///
/// let double = Stage::item_wise(|element: i32| [element * 2]);
/// assert_eq!(double.apply(vec![1, 2, 3]), vec![2, 4, 6]);
/// ```
pub struct Stage<T> {
    function: Box<dyn FnOnce(Vec<T>) -> Vec<T>>,
}

impl<T> Stage<T> {
    /// Wraps a function so the stage invokes it once with the whole batch.
    ///
    /// This is the natural stage shape: the returned stage passes the
    /// entire current batch to `function` and uses its result directly
    /// as the replacement batch. Queueing `list_wise(function)` is
    /// equivalent to queueing `function` itself; the combinator exists
    /// for symmetry with [`Stage::item_wise`] at composition sites.
    ///
    /// # Arguments
    ///
    /// * `function` - The batch-to-batch transformation to wrap
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yieldback::stage::Stage;
    ///
    /// let count = Stage::list_wise(|batch: Vec<i32>| vec![batch.len() as i32]);
    /// assert_eq!(count.apply(vec![10, 20, 30]), vec![3]);
    /// ```
    #[must_use]
    pub fn list_wise<F>(function: F) -> Self
    where
        F: FnOnce(Vec<T>) -> Vec<T> + 'static,
    {
        Self {
            function: Box::new(function),
        }
    }

    /// Wraps a function so the stage applies it to each element in turn.
    ///
    /// The wrapped function receives exactly one element per call, in
    /// strict left-to-right batch order, and returns any number of
    /// replacement elements. The stage concatenates all returned
    /// elements; the relative order of surviving and generated elements
    /// tracks the order of their source elements.
    ///
    /// Returning an empty collection drops the element (filtering),
    /// a one-element collection maps it, and a longer collection
    /// expands it.
    ///
    /// # Arguments
    ///
    /// * `function` - The per-element transformation to wrap
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yieldback::stage::Stage;
    ///
    /// // 1:1 mapping
    /// let double = Stage::item_wise(|element: i32| [element * 2]);
    /// assert_eq!(double.apply(vec![1, 2, 3]), vec![2, 4, 6]);
    /// ```
    ///
    /// # Filtering via zero-length returns
    ///
    /// ```rust
    /// use yieldback::stage::Stage;
    ///
    /// let keep_even = Stage::item_wise(|element: i32| {
    ///     if element % 2 == 0 { vec![element] } else { vec![] }
    /// });
    /// assert_eq!(keep_even.apply(vec![1, 2, 3, 4]), vec![2, 4]);
    /// ```
    ///
    /// # Expansion
    ///
    /// ```rust
    /// use yieldback::stage::Stage;
    ///
    /// let duplicate = Stage::item_wise(|element: i32| [element, element]);
    /// assert_eq!(duplicate.apply(vec![1, 2]), vec![1, 1, 2, 2]);
    /// ```
    #[must_use]
    pub fn item_wise<F, I>(function: F) -> Self
    where
        F: FnMut(T) -> I + 'static,
        I: IntoIterator<Item = T>,
    {
        Self {
            function: Box::new(move |batch: Vec<T>| {
                batch.into_iter().flat_map(function).collect()
            }),
        }
    }

    /// Returns the no-op marker stage.
    ///
    /// Equivalent to `Stage::list_wise(|batch| batch)`: the batch passes
    /// through unchanged. Useful as a neutral element when a stage slot
    /// must be filled unconditionally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yieldback::stage::Stage;
    ///
    /// let stage = Stage::identity();
    /// assert_eq!(stage.apply(vec![1, 2, 3]), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn identity() -> Self {
        Self::list_wise(|batch| batch)
    }

    /// Applies this stage to a batch, consuming the stage.
    ///
    /// # Arguments
    ///
    /// * `batch` - The current pipeline batch
    ///
    /// # Returns
    ///
    /// The replacement batch produced by the wrapped function.
    ///
    /// # Panics
    ///
    /// Does not panic itself; a panic raised by the wrapped function
    /// unwinds through this call unmodified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yieldback::stage::Stage;
    ///
    /// let reverse = Stage::list_wise(|mut batch: Vec<i32>| {
    ///     batch.reverse();
    ///     batch
    /// });
    /// assert_eq!(reverse.apply(vec![1, 2, 3]), vec![3, 2, 1]);
    /// ```
    pub fn apply(self, batch: Vec<T>) -> Vec<T> {
        (self.function)(batch)
    }
}

impl<T> fmt::Debug for Stage<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Stage").finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(Stage<i32>: Clone, Send, Sync);
