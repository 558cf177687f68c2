//! Errors raised by the erased fallback chain.
//!
//! Typed chains never produce errors of their own; operator errors are
//! returned unchanged. [`ChainError`] only exists because an
//! [`ErasedChain`](super::ErasedChain) moves type checking to run time.

use thiserror::Error;

/// A runtime type mismatch inside an [`ErasedChain`](super::ErasedChain).
///
/// # Examples
///
/// ```rust
/// use pipe_compose::compose::ChainError;
///
/// let error = ChainError::InputMismatch { step: 2, expected: "i32" };
/// assert_eq!(
///     format!("{error}"),
///     "operator at step 2 expected an input of type `i32`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The value reaching an operator was not of the operator's input type.
    #[error("operator at step {step} expected an input of type `{expected}`")]
    InputMismatch {
        /// Zero-based position of the operator in the chain.
        step: usize,
        /// Name of the type the operator accepts.
        expected: &'static str,
    },

    /// The chain produced a value of a different type than the caller asked for.
    #[error("chain output is not of type `{expected}`")]
    OutputMismatch {
        /// Name of the type requested by the caller.
        expected: &'static str,
    },
}
