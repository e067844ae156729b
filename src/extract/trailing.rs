//! The trailing-run extractor.
//!
//! Splits an argument list into the callback queue and the residual
//! positional arguments. Only a contiguous run of stages at the very
//! end of the list joins the queue; a stage that sits before any plain
//! value stays in the residual like any other argument.

use crate::queue::StageQueue;

use super::argument::Arg;

/// Splits the maximal trailing run of stages from an argument list.
///
/// Scans `args` from the right: while the rightmost unconsumed element
/// is a stage, it moves into the queue. The scan stops at the first
/// plain value, even if stages occur further left; those stay in the
/// residual. The queue preserves the left-to-right order the stages had
/// in `args`, and the residual keeps the remaining elements in their
/// original order.
///
/// The argument list is consumed; the caller keeps no alias that could
/// observe mutation.
///
/// # Returns
///
/// The pair `(queue, residual)`.
///
/// # Examples
///
/// ```rust
/// use yieldback::extract::{Arg, extract};
/// use yieldback::stage::Stage;
///
/// let args = vec![
///     Arg::Value(1),
///     Arg::Value(2),
///     Arg::Stage(Stage::item_wise(|value: i32| [value * 2])),
///     Arg::Stage(Stage::item_wise(|value: i32| [value + 1])),
/// ];
///
/// let (queue, residual) = extract(args);
/// assert_eq!(queue.len(), 2);
/// assert_eq!(residual.len(), 2);
/// // Queue order matches the argument order: double, then increment.
/// assert_eq!(queue.run(vec![10]), vec![21]);
/// ```
///
/// # Only the contiguous trailing run counts
///
/// ```rust
/// use yieldback::extract::{Arg, extract};
/// use yieldback::stage::Stage;
///
/// let args = vec![
///     Arg::Stage(Stage::<i32>::identity()), // callable, but not trailing
///     Arg::Value(1),
///     Arg::Stage(Stage::item_wise(|value: i32| [value + 1])),
/// ];
///
/// let (queue, residual) = extract(args);
/// assert_eq!(queue.len(), 1);
/// assert!(residual[0].is_stage());
/// assert!(residual[1].is_value());
/// ```
#[must_use]
pub fn extract<T>(mut args: Vec<Arg<T>>) -> (StageQueue<T>, Vec<Arg<T>>) {
    let boundary = args
        .iter()
        .rposition(Arg::is_value)
        .map_or(0, |index| index + 1);
    let queue = args.drain(boundary..).filter_map(Arg::stage).collect();
    (queue, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;
    use rstest::rstest;

    fn marker_stage(marker: i32) -> Arg<i32> {
        Arg::Stage(Stage::list_wise(move |mut batch: Vec<i32>| {
            batch.push(marker);
            batch
        }))
    }

    #[rstest]
    fn empty_args_produce_empty_pair() {
        let (queue, residual) = extract(Vec::<Arg<i32>>::new());
        assert!(queue.is_empty());
        assert!(residual.is_empty());
    }

    #[rstest]
    fn all_stages_fill_the_queue() {
        let args = vec![marker_stage(1), marker_stage(2), marker_stage(3)];
        let (queue, residual) = extract(args);

        assert!(residual.is_empty());
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.run(vec![]), vec![1, 2, 3]);
    }

    #[rstest]
    fn no_trailing_stage_leaves_args_untouched() {
        let args = vec![Arg::Value(1), marker_stage(9), Arg::Value(2)];
        let (queue, residual) = extract(args);

        assert!(queue.is_empty());
        assert_eq!(residual.len(), 3);
        assert!(residual[0].is_value());
        assert!(residual[1].is_stage());
        assert!(residual[2].is_value());
    }

    #[rstest]
    fn trailing_run_preserves_argument_order() {
        let args = vec![Arg::Value(0), marker_stage(1), marker_stage(2)];
        let (queue, _residual) = extract(args);

        assert_eq!(queue.run(vec![]), vec![1, 2]);
    }

    #[rstest]
    fn run_breaks_at_first_value_from_the_right() {
        // [stage, value, stage] -> only the last stage is trailing.
        let args = vec![marker_stage(1), Arg::Value(7), marker_stage(2)];
        let (queue, residual) = extract(args);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.run(vec![]), vec![2]);

        assert_eq!(residual.len(), 2);
        assert!(residual[0].is_stage());
        assert_eq!(residual[1].value_ref(), Some(&7));
    }

    #[rstest]
    fn single_value_yields_empty_queue() {
        let (queue, residual) = extract(vec![Arg::Value(42)]);
        assert!(queue.is_empty());
        assert_eq!(residual.len(), 1);
    }

    #[rstest]
    fn single_stage_yields_empty_residual() {
        let (queue, residual) = extract(vec![marker_stage(1)]);
        assert_eq!(queue.len(), 1);
        assert!(residual.is_empty());
    }
}
