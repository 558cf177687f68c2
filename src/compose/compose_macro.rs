//! The `compose!` and `try_compose!` macros for function composition.
//!
//! This module provides the [`compose!`] macro which composes functions
//! from left to right into a reusable function, and [`try_compose!`] for
//! functions returning `Result`.

/// Composes functions from left to right.
///
/// `compose!(f, g, h)(x)` is equivalent to `h(g(f(x)))`, which is also
/// `pipe!(x, f, g, h)`.
///
/// Building the composed function calls none of the operators. Every call of
/// the composed function runs the whole chain again; no state is shared
/// between calls.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
/// - **Pipe Equivalence**: `compose!(f, g)(x) == pipe!(x, f, g)`
///
/// # Syntax
///
/// - `compose!(f)` - Returns a function equivalent to `f`
/// - `compose!(f, g)` - Returns `|x| g(f(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Type Requirements
///
/// All functions must implement the [`Fn`] trait. The output type of each
/// function must match the input type of the next function in the chain.
/// Each operator is bound before the composed function is called, so
/// closures calling methods on their argument need a parameter annotation.
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use pipe_compose::compose;
///
/// let quadruple = compose!(|v: i32| v * 2, |v| v * 2);
/// assert_eq!(quadruple(1), 4);
/// assert_eq!(quadruple(5), 20);
/// ```
///
/// ## Type conversion
///
/// ```
/// use pipe_compose::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// // Types flow through the composition
/// let composed = compose!(to_string, get_length);
/// assert_eq!(composed(12345), 5);
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use pipe_compose::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let left = compose!(f, compose!(g, h));
/// let right = compose!(compose!(f, g), h);
///
/// assert_eq!(left(10), right(10));
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: wrap it so the result is always a closure
    ($function:expr $(,)?) => {{
        let function = $function;
        move |input| function(input)
    }};

    // Two or more functions: compose!(f, g, ...) = |x| compose!(g, ...)(f(x))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining_composed = $crate::compose!($($remaining_functions),+);
        move |input| remaining_composed(first(input))
    }};
}

/// Composes fallible functions from left to right.
///
/// `try_compose!(f, g)(x)` is equivalent to `try_pipe!(x, f, g)`. The first
/// `Err` is returned unchanged and stops the chain.
///
/// # Examples
///
/// ```
/// use pipe_compose::try_compose;
///
/// let parse_and_halve = try_compose!(
///     |text: &str| text.parse::<i32>().map_err(|error| error.to_string()),
///     |value: i32| if value % 2 == 0 { Ok(value / 2) } else { Err(format!("{value} is odd")) },
/// );
///
/// assert_eq!(parse_and_halve("10"), Ok(5));
/// assert_eq!(parse_and_halve("7"), Err(String::from("7 is odd")));
/// ```
#[macro_export]
macro_rules! try_compose {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |input| function(input)
    }};

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining_composed = $crate::try_compose!($($remaining_functions),+);
        move |input| first(input).and_then(|value| remaining_composed(value))
    }};
}
