//! Type-erased chains for operator lists beyond the typed arity bound.
//!
//! Every operator in an [`ErasedChain`] maps an [`Unknown`] value to an
//! [`Unknown`] value, so chains of any length and any mix of types can be
//! built. Adjacent types are checked when the chain runs instead of when it
//! compiles, and the caller names the final type with
//! [`ErasedChain::run_as`].

use std::any::{Any, type_name};
use std::fmt;

use super::{Chain, ChainError, ReusableChain};

/// A value whose type is only known at run time.
pub type Unknown = Box<dyn Any + Send>;

type ErasedFunction = Box<dyn Fn(Unknown) -> Result<Unknown, Unknown> + Send + Sync>;

/// An operator with its input and output types erased.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::ErasedOperator;
///
/// let operator = ErasedOperator::new(|v: i32| v.to_string());
/// assert_eq!(operator.input_type(), "i32");
/// assert_eq!(operator.output_type(), "alloc::string::String");
/// ```
pub struct ErasedOperator {
    input: &'static str,
    output: &'static str,
    function: ErasedFunction,
}

impl ErasedOperator {
    /// Erases the types of `operator`.
    pub fn new<A, B, F>(operator: F) -> Self
    where
        A: Any + Send,
        B: Any + Send,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Self {
            input: type_name::<A>(),
            output: type_name::<B>(),
            function: Box::new(move |value: Unknown| {
                value
                    .downcast::<A>()
                    .map(|value| Box::new(operator(*value)) as Unknown)
            }),
        }
    }

    /// Name of the type this operator accepts.
    pub const fn input_type(&self) -> &'static str {
        self.input
    }

    /// Name of the type this operator produces.
    pub const fn output_type(&self) -> &'static str {
        self.output
    }

    // Hands the value back untouched when it has the wrong type.
    fn apply(&self, value: Unknown) -> Result<Unknown, Unknown> {
        (self.function)(value)
    }
}

impl fmt::Debug for ErasedOperator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ErasedOperator")
            .field("input", &self.input)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

/// An ordered chain of type-erased operators.
///
/// Use it when a chain is longer than
/// [`MAX_TYPED_ARITY`](super::MAX_TYPED_ARITY) and its operators do not share a
/// single value type. The chain implements [`Chain`] and [`ReusableChain`] for
/// any `V: Any + Send`, producing `Result<Unknown, ChainError>`.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::{ChainError, ErasedChain};
///
/// let chain = ErasedChain::new()
///     .then(|v: i32| v * 2)
///     .then(|v: i32| v.to_string())
///     .then(|v: String| v.len());
///
/// assert_eq!(chain.run_as::<i32, usize>(500), Ok(4));
/// assert_eq!(
///     chain.run_as::<&str, usize>("500"),
///     Err(ChainError::InputMismatch { step: 0, expected: "i32" })
/// );
/// ```
#[derive(Debug, Default)]
pub struct ErasedChain {
    operators: Vec<ErasedOperator>,
}

impl ErasedChain {
    /// Creates an empty chain.
    pub const fn new() -> Self {
        Self {
            operators: Vec::new(),
        }
    }

    /// Appends `operator` to the end of the chain.
    #[must_use]
    pub fn then<A, B, F>(mut self, operator: F) -> Self
    where
        A: Any + Send,
        B: Any + Send,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        self.operators.push(ErasedOperator::new(operator));
        self
    }

    /// Appends an already erased operator to the end of the chain.
    pub fn push(&mut self, operator: ErasedOperator) {
        self.operators.push(operator);
    }

    /// Number of operators in the chain.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Returns `true` if the chain has no operators.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Runs the chain on an already erased value.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InputMismatch`] for the first operator whose input
    /// type differs from the value it receives. Later operators are not run.
    pub fn run_erased(&self, value: Unknown) -> Result<Unknown, ChainError> {
        self.operators
            .iter()
            .enumerate()
            .try_fold(value, |value, (step, operator)| {
                operator.apply(value).map_err(|_| {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        step,
                        expected = operator.input,
                        "erased operator rejected its input"
                    );
                    ChainError::InputMismatch {
                        step,
                        expected: operator.input,
                    }
                })
            })
    }

    /// Runs the chain on `value` and recovers the final value as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InputMismatch`] when two adjacent operators do not
    /// line up, and [`ChainError::OutputMismatch`] when the final value is not
    /// a `T`.
    pub fn run_as<V, T>(&self, value: V) -> Result<T, ChainError>
    where
        V: Any + Send,
        T: Any,
    {
        self.run_erased(Box::new(value))?
            .downcast::<T>()
            .map(|output| *output)
            .map_err(|_| ChainError::OutputMismatch {
                expected: type_name::<T>(),
            })
    }
}

impl FromIterator<ErasedOperator> for ErasedChain {
    fn from_iter<I: IntoIterator<Item = ErasedOperator>>(operators: I) -> Self {
        Self {
            operators: operators.into_iter().collect(),
        }
    }
}

impl Extend<ErasedOperator> for ErasedChain {
    fn extend<I: IntoIterator<Item = ErasedOperator>>(&mut self, operators: I) {
        self.operators.extend(operators);
    }
}

impl<V> Chain<V> for ErasedChain
where
    V: Any + Send,
{
    type Output = Result<Unknown, ChainError>;

    fn run(self, value: V) -> Self::Output {
        self.run_ref(value)
    }
}

impl<V> ReusableChain<V> for ErasedChain
where
    V: Any + Send,
{
    fn run_ref(&self, value: V) -> Self::Output {
        self.run_erased(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_returns_input() {
        let chain = ErasedChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.run_as::<i32, i32>(7), Ok(7));
    }

    #[test]
    fn test_mismatch_stops_before_later_operators() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let chain = ErasedChain::new()
            .then(|v: i32| v + 1)
            .then(|v: u8| v)
            .then(move |v: u8| {
                counter.fetch_add(1, Ordering::SeqCst);
                v
            });

        assert_eq!(
            chain.run_as::<i32, u8>(1),
            Err(ChainError::InputMismatch {
                step: 1,
                expected: "u8"
            })
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_output_mismatch() {
        let chain = ErasedChain::new().then(|v: i32| v * 2);
        assert_eq!(
            chain.run_as::<i32, String>(1),
            Err(ChainError::OutputMismatch {
                expected: type_name::<String>()
            })
        );
    }

    #[test]
    fn test_collects_from_operators() {
        let chain: ErasedChain = (0..3).map(|_| ErasedOperator::new(|v: i32| v + 1)).collect();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.run_as::<i32, i32>(0), Ok(3));
    }

    #[test]
    fn test_debug_lists_types() {
        let operator = ErasedOperator::new(|v: bool| u8::from(v));
        let rendered = format!("{operator:?}");
        assert!(rendered.contains("bool"));
        assert!(rendered.contains("u8"));
    }
}
