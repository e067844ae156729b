//! The callback queue and the yield fold.
//!
//! This module provides:
//!
//! - [`StageQueue`]: the ordered, single-owner queue of stages built
//!   once per invocation
//! - [`StageQueue::run`]: the fold threading a batch through every
//!   stage in stored order
//! - [`yield_through`]: the fold for call sites whose queue may be
//!   absent; `None` behaves as an empty queue
//!
//! # Examples
//!
//! ```rust
//! use yieldback::queue::StageQueue;
//! use yieldback::stage::Stage;
//!
//! let queue = StageQueue::new()
//!     .then(Stage::item_wise(|value: i32| [value + 1]))
//!     .then(Stage::list_wise(|batch: Vec<i32>| vec![batch.iter().sum()]));
//!
//! assert_eq!(queue.run(vec![1, 2, 3]), vec![9]);
//! ```

mod stage_queue;

pub use stage_queue::{StageQueue, yield_through};
