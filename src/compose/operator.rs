//! The operator abstraction for synchronous chains.
//!
//! An operator is any single-argument callable. [`Operator`] gives the
//! callable a name and an associated output type so that chains can thread
//! types through `where` clauses.

/// A single-argument mapping from `A` to [`Operator::Output`].
///
/// Every `FnOnce(A) -> B` is an operator, so plain functions and closures can
/// be used anywhere an operator is expected. The engine imposes no contract on
/// side effects and never inspects the value.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::Operator;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(double.apply(21), 42);
/// assert_eq!((|s: &str| s.len()).apply("four"), 4);
/// ```
pub trait Operator<A> {
    /// The value produced by this operator.
    type Output;

    /// Applies the operator to `value`.
    fn apply(self, value: A) -> Self::Output;
}

impl<A, B, F> Operator<A> for F
where
    F: FnOnce(A) -> B,
{
    type Output = B;

    #[inline]
    fn apply(self, value: A) -> B {
        self(value)
    }
}

/// Returns the value unchanged.
///
/// `identity` is the unit of piping: inserting it anywhere in a chain does not
/// change the result.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::identity;
/// use pipe_compose::pipe;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(5, identity, double), pipe!(5, double));
/// assert_eq!(pipe!(5, double, identity), pipe!(5, double));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

// The macros expand to nested calls of these helpers rather than calling the
// operator expression directly: the `FnOnce(A)` bound gives an unannotated
// closure its parameter type from the previous step.

#[doc(hidden)]
#[inline]
pub fn __apply<A, B, F>(value: A, operator: F) -> B
where
    F: FnOnce(A) -> B,
{
    operator(value)
}

#[doc(hidden)]
#[inline]
pub fn __try_apply<A, B, E, F>(result: Result<A, E>, operator: F) -> Result<B, E>
where
    F: FnOnce(A) -> Result<B, E>,
{
    result.and_then(operator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_apply_consumes_captured_environment() {
        let captured = String::from("captured");
        let operator = move |suffix: &str| captured + suffix;
        assert_eq!(operator.apply("!"), "captured!");
    }

    #[test]
    fn test_try_apply_skips_operator_after_error() {
        let mut called = false;
        let result: Result<i32, &str> = __try_apply(Err("boom"), |v: i32| {
            called = true;
            Ok(v)
        });
        assert_eq!(result, Err("boom"));
        assert!(!called);
    }
}
