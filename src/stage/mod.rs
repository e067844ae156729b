//! Pipeline stages and their wrap combinators.
//!
//! This module provides the building block of a callback queue:
//!
//! - [`Stage`]: a single-shot batch-to-batch transformation
//! - [`Stage::list_wise`]: wrap a function operating on the whole batch
//! - [`Stage::item_wise`]: wrap a function operating per element, with
//!   flattening
//! - [`NotCallableError`] / [`StageError`]: the configuration error
//!   raised when a plain value stands where a stage is required
//!
//! # Examples
//!
//! ## Item-wise filtering
//!
//! ```rust
//! use yieldback::stage::Stage;
//!
//! let keep_positive = Stage::item_wise(|value: i32| {
//!     if value > 0 { vec![value] } else { vec![] }
//! });
//! assert_eq!(keep_positive.apply(vec![-1, 2, -3, 4]), vec![2, 4]);
//! ```
//!
//! ## List-wise summarizing
//!
//! ```rust
//! use yieldback::stage::Stage;
//!
//! let total = Stage::list_wise(|batch: Vec<i32>| vec![batch.iter().sum()]);
//! assert_eq!(total.apply(vec![1, 2, 3]), vec![6]);
//! ```

mod combinator;
mod error;

pub use combinator::Stage;
pub use error::{NotCallableError, StageError};
