//! Argument tagging and trailing-run extraction.
//!
//! This module provides the extraction protocol:
//!
//! - [`Arg`]: a runtime-tagged argument, either a plain value or a stage
//! - [`extract`]: splits the maximal trailing run of stages from an
//!   argument list into a callback queue plus residual arguments
//!
//! Stages intended for the pipeline must form a contiguous run at the
//! end of the argument list; that placement convention is the only
//! contract between a caller and the extraction protocol.
//!
//! # Examples
//!
//! ```rust
//! use yieldback::extract::{Arg, extract};
//! use yieldback::stage::Stage;
//!
//! let args = vec![
//!     Arg::Value("a"),
//!     Arg::Stage(Stage::item_wise(|text: &str| [text, text])),
//! ];
//!
//! let (queue, residual) = extract(args);
//! assert_eq!(residual.len(), 1);
//! assert_eq!(queue.run(vec!["x"]), vec!["x", "x"]);
//! ```

mod argument;
mod trailing;

pub use argument::Arg;
pub use trailing::extract;
