//! The `pipe!` and `try_pipe!` macros for left-to-right function application.
//!
//! This module provides the [`pipe!`] macro which applies functions
//! from left to right, following the data flow style of programming,
//! and [`try_pipe!`] which does the same for functions returning `Result`.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// The value flows through the operators in the order they are written.
/// Each operator receives the previous result, and its parameter type is
/// inferred from that result, so closures usually need no annotations.
/// There is no limit on the number of operators.
///
/// # Relationship with compose!
///
/// `pipe!(x, f, g, h)` is equivalent to `compose!(f, g, h)(x)`.
///
/// While [`compose!`](crate::compose!) creates a new function, `pipe!` immediately
/// applies the transformations to a value.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g)` - Returns `g(f(x))`
/// - `pipe!(x, f, g, h, ...)` - Returns `...h(g(f(x)))`
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each function
/// is called exactly once. This allows using functions that consume their
/// captured environment.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use pipe_compose::pipe;
///
/// assert_eq!(pipe!(1), 1);
/// assert_eq!(pipe!(1, |v| v * 2), 2);
/// assert_eq!(pipe!(1, |v| v * 2, |v| v * 2, |v| v * 2), 8);
/// ```
///
/// ## Type conversion through pipeline
///
/// ```
/// use pipe_compose::pipe;
///
/// // `v` is an i32, then a String, then a usize
/// let result = pipe!(12345_i32, |v| v.to_string(), |v| v.len(), |v| v * 10);
/// assert_eq!(result, 50);
/// ```
///
/// ## With consuming closures
///
/// ```
/// use pipe_compose::pipe;
///
/// fn consume_and_double(v: Vec<i32>) -> Vec<i32> {
///     v.into_iter().map(|x| x * 2).collect()
/// }
///
/// fn consume_and_filter(v: Vec<i32>) -> Vec<i32> {
///     v.into_iter().filter(|x| *x > 5).collect()
/// }
///
/// let result = pipe!(
///     vec![1, 2, 3, 4, 5],
///     consume_and_double,
///     consume_and_filter
/// );
/// assert_eq!(result, vec![6, 8, 10]);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $crate::compose::__apply($value, $function)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($crate::compose::__apply($value, $function), $($remaining_functions),+)
    };
}

/// Pipes a value through a series of fallible functions from left to right.
///
/// Every function returns `Result<_, E>` with the same `E`. The first `Err`
/// stops the pipeline: the remaining functions are not called and the error
/// is returned as it was produced.
///
/// # Syntax
///
/// - `try_pipe!(x)` - Returns `Ok(x)`
/// - `try_pipe!(x, f)` - Returns `f(x)`
/// - `try_pipe!(x, f, g, ...)` - Returns `f(x).and_then(g)...`
///
/// # Examples
///
/// ```
/// use pipe_compose::try_pipe;
///
/// fn parse(text: &str) -> Result<i32, String> {
///     text.parse().map_err(|_| format!("cannot parse {text:?}"))
/// }
///
/// fn halve(value: i32) -> Result<i32, String> {
///     if value % 2 == 0 { Ok(value / 2) } else { Err(format!("{value} is odd")) }
/// }
///
/// assert_eq!(try_pipe!("84", parse, halve, halve), Ok(21));
/// assert_eq!(try_pipe!("42", parse, halve, halve), Err(String::from("21 is odd")));
/// assert_eq!(try_pipe!("forty", parse, halve), Err(String::from("cannot parse \"forty\"")));
/// ```
#[macro_export]
macro_rules! try_pipe {
    // Value only: wrap in Ok
    ($value:expr $(,)?) => {
        ::core::result::Result::Ok($value)
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $crate::compose::__apply($value, $function)
    };

    // Multiple functions: bind left to right
    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::__try_pipe_bind!($crate::compose::__apply($value, $function), $($remaining_functions),+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __try_pipe_bind {
    ($result:expr, $function:expr $(,)?) => {
        $crate::compose::__try_apply($result, $function)
    };

    ($result:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::__try_pipe_bind!($crate::compose::__try_apply($result, $function), $($remaining_functions),+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_value_only() {
        let result = pipe!(42);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_pipe_single() {
        let double = |x: i32| x * 2;
        let result = pipe!(5, double);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_pipe_three() {
        let square = |x: i32| x * x;
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        // square(3) = 9, double(9) = 18, add_one(18) = 19
        let result = pipe!(3, square, double, add_one);
        assert_eq!(result, 19);
    }

    #[test]
    fn test_try_pipe_value_only() {
        let result: Result<i32, ()> = try_pipe!(42);
        assert_eq!(result, Ok(42));
    }

    #[test]
    fn test_try_pipe_infers_intermediate_types() {
        let result = try_pipe!(
            "7",
            |v| v.parse::<u8>().map_err(|_| "parse"),
            |v| v.checked_mul(3).ok_or("overflow"),
            |v| Ok(v.to_string())
        );
        assert_eq!(result, Ok(String::from("21")));
    }
}
