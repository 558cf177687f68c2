//! # pipe-compose
//!
//! Left-to-right application of single-argument operators.
//!
//! ## Overview
//!
//! Given an initial value and an ordered list of operators, this crate
//! produces the result of applying them one after another:
//!
//! - **Eager**: [`pipe!`] / [`compose::pipe`] apply the chain immediately
//! - **Deferred**: [`compose!`] / [`compose::compose`] build a reusable function
//! - **Fallible**: [`try_pipe!`], [`try_compose!`] stop at the first `Err`
//! - **Async**: [`pipe_async!`] / [`compose::pipe_async`] await every step in order
//!
//! Every step's output type is checked against the next step's input type at
//! compile time. The macros thread types through chains of any length; the
//! function API is implemented for tuples of up to
//! [`MAX_TYPED_ARITY`](compose::MAX_TYPED_ARITY) operators and falls back to
//! homogeneous `Vec` chains or an [`ErasedChain`](compose::ErasedChain) beyond it.
//!
//! ## Feature Flags
//!
//! - `compose`: sync operators, chains and macros
//! - `async`: async operators, chains and macros (pulls in `futures`)
//! - `tracing`: TRACE-level events for function-API chain runs
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pipe_compose::{compose, pipe};
//!
//! let result = pipe!(1, |v| v * 2, |v| v * 2, |v| v * 2);
//! assert_eq!(result, 8);
//!
//! let quadruple = compose!(|v: i32| v * 2, |v| v * 2);
//! assert_eq!(quadruple(1), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use pipe_compose::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "compose")]
pub mod compose;
