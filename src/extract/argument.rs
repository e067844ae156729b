//! Runtime-tagged pipeline arguments.
//!
//! An argument list handed to the extractor mixes plain values with
//! trailing stages. [`Arg`] is the explicit tag distinguishing the two:
//! where a dynamic language would ask "is this value callable?", this
//! library matches on the tag. Treating a plain value as a stage is a
//! configuration error, raised immediately at conversion time.

use crate::queue::StageQueue;
use crate::stage::{NotCallableError, Stage};

/// One element of an argument list: a plain value or a pipeline stage.
///
/// # Type Parameters
///
/// * `T` - The element type flowing through the pipeline
///
/// # Examples
///
/// ```rust
/// use yieldback::extract::Arg;
/// use yieldback::stage::Stage;
///
/// let value: Arg<i32> = Arg::Value(42);
/// assert!(value.is_value());
///
/// let stage: Arg<i32> = Arg::Stage(Stage::identity());
/// assert!(stage.is_stage());
/// ```
#[derive(Debug)]
pub enum Arg<T> {
    /// A positional argument carrying data for the wrapped function.
    Value(T),
    /// A pipeline stage intended for the callback queue.
    Stage(Stage<T>),
}

impl<T> Arg<T> {
    /// Returns `true` if this argument is a plain value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yieldback::extract::Arg;
    ///
    /// let argument: Arg<i32> = Arg::Value(1);
    /// assert!(argument.is_value());
    /// assert!(!argument.is_stage());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this argument is a pipeline stage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yieldback::extract::Arg;
    /// use yieldback::stage::Stage;
    ///
    /// let argument: Arg<i32> = Arg::Stage(Stage::identity());
    /// assert!(argument.is_stage());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_stage(&self) -> bool {
        matches!(self, Self::Stage(_))
    }

    /// Converts the argument into an `Option<T>`, consuming it.
    ///
    /// Returns `Some(value)` if this is `Value(value)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yieldback::extract::Arg;
    ///
    /// let argument: Arg<i32> = Arg::Value(7);
    /// assert_eq!(argument.value(), Some(7));
    /// ```
    #[must_use]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Stage(_) => None,
        }
    }

    /// Converts the argument into an `Option<Stage<T>>`, consuming it.
    ///
    /// Returns `Some(stage)` if this is `Stage(stage)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yieldback::extract::Arg;
    /// use yieldback::stage::Stage;
    ///
    /// let argument: Arg<i32> = Arg::Stage(Stage::identity());
    /// assert!(argument.stage().is_some());
    ///
    /// let argument: Arg<i32> = Arg::Value(7);
    /// assert!(argument.stage().is_none());
    /// ```
    #[must_use]
    pub fn stage(self) -> Option<Stage<T>> {
        match self {
            Self::Value(_) => None,
            Self::Stage(stage) => Some(stage),
        }
    }

    /// Returns a reference to the value, if this argument is one.
    #[inline]
    #[must_use]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Stage(_) => None,
        }
    }
}

impl<T> From<Stage<T>> for Arg<T> {
    fn from(stage: Stage<T>) -> Self {
        Self::Stage(stage)
    }
}

/// The validated untyped boundary: a stage argument converts, a plain
/// value fails with a configuration error at conversion time, never at
/// fold time.
///
/// # Examples
///
/// ```rust
/// use yieldback::extract::Arg;
/// use yieldback::stage::Stage;
///
/// let argument: Arg<i32> = Arg::Value(3);
/// let converted = Stage::try_from(argument);
/// assert!(converted.is_err());
/// ```
impl<T> TryFrom<Arg<T>> for Stage<T> {
    type Error = NotCallableError;

    fn try_from(argument: Arg<T>) -> Result<Self, Self::Error> {
        match argument {
            Arg::Stage(stage) => Ok(stage),
            Arg::Value(_) => Err(NotCallableError {
                operation: "Stage::try_from",
            }),
        }
    }
}

/// Treats an entire argument list as a queue: every position must hold
/// a stage. The first plain value aborts the conversion with a
/// configuration error; no stage runs.
///
/// Use [`extract`](crate::extract::extract) instead when the list mixes
/// values and stages.
///
/// # Examples
///
/// ```rust
/// use yieldback::extract::Arg;
/// use yieldback::queue::StageQueue;
/// use yieldback::stage::Stage;
///
/// let args = vec![
///     Arg::Stage(Stage::item_wise(|value: i32| [value + 1])),
///     Arg::Stage(Stage::item_wise(|value: i32| [value * 10])),
/// ];
/// let queue = StageQueue::try_from(args).expect("all positions hold stages");
/// assert_eq!(queue.run(vec![1]), vec![20]);
///
/// let mixed = vec![Arg::Value(1), Arg::Stage(Stage::identity())];
/// assert!(StageQueue::try_from(mixed).is_err());
/// ```
impl<T> TryFrom<Vec<Arg<T>>> for StageQueue<T> {
    type Error = NotCallableError;

    fn try_from(args: Vec<Arg<T>>) -> Result<Self, Self::Error> {
        args.into_iter()
            .map(|argument| match argument {
                Arg::Stage(stage) => Ok(stage),
                Arg::Value(_) => Err(NotCallableError {
                    operation: "StageQueue::try_from",
                }),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn value_predicates() {
        let argument: Arg<i32> = Arg::Value(1);
        assert!(argument.is_value());
        assert!(!argument.is_stage());
    }

    #[rstest]
    fn stage_predicates() {
        let argument: Arg<i32> = Arg::Stage(Stage::identity());
        assert!(argument.is_stage());
        assert!(!argument.is_value());
    }

    #[rstest]
    fn value_extraction() {
        let argument: Arg<i32> = Arg::Value(7);
        assert_eq!(argument.value(), Some(7));

        let argument: Arg<i32> = Arg::Stage(Stage::identity());
        assert_eq!(argument.value(), None);
    }

    #[rstest]
    fn stage_extraction_preserves_behavior() {
        let argument: Arg<i32> = Arg::Stage(Stage::item_wise(|value: i32| [value * 3]));
        let stage = argument.stage().expect("should hold a stage");
        assert_eq!(stage.apply(vec![2]), vec![6]);
    }

    #[rstest]
    fn value_ref_borrows() {
        let argument: Arg<i32> = Arg::Value(9);
        assert_eq!(argument.value_ref(), Some(&9));
        assert_eq!(argument.value(), Some(9));
    }

    #[rstest]
    fn from_stage_tags_as_stage() {
        let argument: Arg<i32> = Stage::identity().into();
        assert!(argument.is_stage());
    }

    #[rstest]
    fn try_from_stage_argument_succeeds() {
        let argument: Arg<i32> = Arg::Stage(Stage::item_wise(|value: i32| [value + 1]));
        let stage = Stage::try_from(argument).expect("stage argument must convert");
        assert_eq!(stage.apply(vec![1]), vec![2]);
    }

    #[rstest]
    fn try_from_value_argument_fails_immediately() {
        let argument: Arg<i32> = Arg::Value(5);
        let error = Stage::try_from(argument).expect_err("value argument must not convert");
        assert_eq!(error.operation, "Stage::try_from");
    }

    #[rstest]
    fn try_from_all_stage_list_builds_queue() {
        let args: Vec<Arg<i32>> = vec![
            Arg::Stage(Stage::item_wise(|value: i32| [value + 1])),
            Arg::Stage(Stage::item_wise(|value: i32| [value * 10])),
        ];
        let queue = StageQueue::try_from(args).expect("all positions hold stages");
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.run(vec![1]), vec![20]);
    }

    #[rstest]
    fn try_from_empty_list_builds_empty_queue() {
        let args: Vec<Arg<i32>> = vec![];
        let queue = StageQueue::try_from(args).expect("empty list is a valid queue");
        assert!(queue.is_empty());
    }

    #[rstest]
    fn try_from_list_with_value_fails_immediately() {
        let args: Vec<Arg<i32>> = vec![
            Arg::Stage(Stage::identity()),
            Arg::Value(5),
            Arg::Stage(Stage::identity()),
        ];
        let error = StageQueue::try_from(args).expect_err("plain value must abort");
        assert_eq!(error.operation, "StageQueue::try_from");
    }

    #[rstest]
    fn debug_renders_both_variants() {
        let value: Arg<i32> = Arg::Value(1);
        let stage: Arg<i32> = Arg::Stage(Stage::identity());
        assert!(format!("{value:?}").contains("Value"));
        assert!(format!("{stage:?}").contains("Stage"));
    }
}
