//! Eager and deferred evaluation of synchronous chains.

use super::{Chain, ReusableChain, ReusableTryChain, TryChain};

/// Applies `chain` to `value` immediately, left to right.
///
/// `pipe(x, (f, g, h))` is `h(g(f(x)))`, and `pipe(x, ())` is `x`.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::pipe;
///
/// assert_eq!(pipe(1, ()), 1);
/// assert_eq!(pipe(1, (|v: i32| v * 2,)), 2);
/// assert_eq!(pipe(1, (|v: i32| v * 2, |v: i32| v * 2, |v: i32| v * 2)), 8);
/// ```
#[inline]
pub fn pipe<V, C>(value: V, chain: C) -> C::Output
where
    C: Chain<V>,
{
    chain.run(value)
}

/// Builds a reusable function that applies `chain` to its argument.
///
/// No operator runs until the returned function is called, and every call
/// runs the whole chain again from scratch.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::compose;
///
/// let to_length = compose((|v: i32| v * 2, |v: i32| v.to_string(), |v: String| v.len()));
/// assert_eq!(to_length(1), 1);
/// assert_eq!(to_length(500), 4);
/// ```
pub fn compose<V, C>(chain: C) -> impl Fn(V) -> C::Output
where
    C: ReusableChain<V>,
{
    move |value| chain.run_ref(value)
}

/// Applies a chain of fallible operators to `value` immediately.
///
/// # Errors
///
/// Returns the error of the first failing operator, unchanged. Operators
/// after it are not invoked.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::try_pipe;
///
/// let checked = (
///     |v: i32| v.checked_mul(2).ok_or("overflow"),
///     |v: i32| v.checked_add(1).ok_or("overflow"),
/// );
/// assert_eq!(try_pipe(20, checked), Ok(41));
/// ```
#[inline]
pub fn try_pipe<V, E, C>(value: V, chain: C) -> Result<C::Output, E>
where
    C: TryChain<V, E>,
{
    chain.try_run(value)
}

/// Builds a reusable function applying a chain of fallible operators.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::try_compose;
///
/// let parse_positive = try_compose((
///     |v: &str| v.parse::<i64>().map_err(|error| error.to_string()),
///     |v: i64| if v > 0 { Ok(v) } else { Err(format!("{v} is not positive")) },
/// ));
/// assert_eq!(parse_positive("12"), Ok(12));
/// assert_eq!(parse_positive("-3"), Err(String::from("-3 is not positive")));
/// ```
pub fn try_compose<V, E, C>(chain: C) -> impl Fn(V) -> Result<C::Output, E>
where
    C: ReusableTryChain<V, E>,
{
    move |value| chain.try_run_ref(value)
}
