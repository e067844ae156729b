//! # yieldback
//!
//! Caller-extensible return-value pipelines: a function's callers append
//! transformation stages to the end of its argument list, and the
//! function threads its result through that chain before returning it.
//!
//! ## Overview
//!
//! The library provides the four operations of the extraction protocol:
//!
//! - **Extraction**: [`extract`](extract::extract) splits the maximal
//!   trailing run of stages from an argument list into a callback queue
//!   plus residual arguments.
//! - **Yield**: [`StageQueue::run`](queue::StageQueue::run) and
//!   [`yield_through`](queue::yield_through) fold a batch through every
//!   stage in stored order; an empty or absent queue is identity.
//! - **Combinators**: [`Stage::item_wise`](stage::Stage::item_wise) and
//!   [`Stage::list_wise`](stage::Stage::list_wise) wrap a user function
//!   to operate per element (with flattening) or on the whole batch.
//! - **Topicalizer**: [`run_with_topic`](topic::run_with_topic) composes
//!   extraction, a producer call, and the yield fold into one entry
//!   point.
//!
//! ## Feature Flags
//!
//! - `stage`: Stages and the wrap combinators
//! - `queue`: The callback queue and the yield fold
//! - `extract`: Tagged arguments and trailing-run extraction
//! - `topic`: The composed topicalizer entry points
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use yieldback::prelude::*;
//!
//! // A caller assembles positional arguments plus trailing stages...
//! let args = vec![
//!     Arg::Value(1),
//!     Arg::Value(2),
//!     Arg::Value(3),
//!     Arg::Stage(Stage::item_wise(|value: i32| [value * value])),
//!     Arg::Stage(Stage::list_wise(|batch: Vec<i32>| vec![batch.iter().sum()])),
//! ];
//!
//! // ...and the wrapped function computes from the residual arguments,
//! // then yields the result through the extracted queue.
//! let result = run_with_topic(
//!     |residual| residual.into_iter().filter_map(Arg::value).collect(),
//!     args,
//! );
//!
//! // 1 + 4 + 9
//! assert_eq!(result, vec![14]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use yieldback::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "stage")]
    pub use crate::stage::*;

    #[cfg(feature = "queue")]
    pub use crate::queue::*;

    #[cfg(feature = "extract")]
    pub use crate::extract::*;

    #[cfg(feature = "topic")]
    pub use crate::topic::*;
}

#[cfg(feature = "stage")]
pub mod stage;

#[cfg(feature = "queue")]
pub mod queue;

#[cfg(feature = "extract")]
pub mod extract;

#[cfg(feature = "topic")]
pub mod topic;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
