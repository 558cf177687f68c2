//! Left-to-right piping and composition.
//!
//! This module provides macros, traits and functions for applying an ordered
//! chain of single-argument operators to a value.
//!
//! # Overview
//!
//! - [`pipe!`]: Apply operators to a value immediately, left to right
//! - [`compose!`]: Build a reusable function applying operators left to right
//! - [`try_pipe!`] / [`try_compose!`]: Same, for operators returning `Result`
//! - [`pipe_async!`] / [`try_pipe_async!`]: Await every step in order (`async` feature)
//!
//! The function API mirrors the macros and takes the chain as a tuple:
//!
//! - [`pipe`], [`compose`], [`try_pipe`], [`try_compose`]
//! - [`pipe_async`], [`try_pipe_async`], [`compose_async`] (`async` feature)
//!
//! # Examples
//!
//! ## Pipeline
//!
//! ```
//! use pipe_compose::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(x, f, g) = g(f(x))
//! let result = pipe!(5, double, add_one);
//! assert_eq!(result, 11);
//! ```
//!
//! ## Composition
//!
//! ```
//! use pipe_compose::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = g(f(x))
//! let composed = compose!(double, add_one);
//! assert_eq!(composed(5), 11);
//! ```
//!
//! ## Tuple chains
//!
//! ```
//! use pipe_compose::compose::{compose, pipe};
//!
//! let to_length = (|v: i32| v.to_string(), |v: String| v.len());
//! assert_eq!(pipe(12345, to_length), 5);
//!
//! let quadruple = compose((|v: i32| v * 2, |v: i32| v * 2));
//! assert_eq!(quadruple(1), 4);
//! ```
//!
//! # Arity Bound
//!
//! Rust has no variadic generics, so the chain traits are implemented for
//! tuples of up to [`MAX_TYPED_ARITY`] operators. Longer chains use one of:
//!
//! - the macros, which recurse and have no bound
//! - a `Vec` of operators sharing one value type `V -> V`
//! - an [`ErasedChain`], where the caller names the final type with
//!   [`ErasedChain::run_as`]
//!
//! # Laws
//!
//! - **Left Identity**: `pipe!(x, identity, f) == pipe!(x, f)`
//! - **Right Identity**: `pipe!(x, f, identity) == pipe!(x, f)`
//! - **Equivalence**: `compose!(f, g)(x) == pipe!(x, f, g)`

#[cfg(feature = "async")]
mod async_chain;
#[cfg(feature = "async")]
mod async_evaluate;
#[cfg(feature = "async")]
mod async_operator;
mod chain;
mod compose_macro;
mod erased;
mod error;
mod evaluate;
mod operator;
#[cfg(feature = "async")]
mod pipe_async_macro;
mod pipe_macro;

/// The longest tuple chain with step-by-step type threading.
///
/// Tuples longer than this do not implement [`Chain`] and friends.
pub const MAX_TYPED_ARITY: usize = 20;

pub use chain::{Chain, ReusableChain, ReusableTryChain, TryChain};
pub use erased::{ErasedChain, ErasedOperator, Unknown};
pub use error::ChainError;
pub use evaluate::{compose, pipe, try_compose, try_pipe};
pub use operator::{Operator, identity};

#[cfg(feature = "async")]
pub use async_chain::{AsyncChain, ReusableAsyncChain, TryAsyncChain};
#[cfg(feature = "async")]
pub use async_evaluate::{AsyncComposed, compose_async, pipe_async, try_pipe_async};
#[cfg(feature = "async")]
pub use async_operator::{AsyncOperator, lift};

#[doc(hidden)]
pub use operator::{__apply, __try_apply};
#[cfg(feature = "async")]
#[doc(hidden)]
pub use pipe_async_macro::{__ready_step, __then_step, __try_then_step};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
#[cfg(feature = "async")]
pub use crate::pipe_async;
pub use crate::try_compose;
pub use crate::try_pipe;
#[cfg(feature = "async")]
pub use crate::try_pipe_async;
