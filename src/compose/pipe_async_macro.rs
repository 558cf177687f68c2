//! The `pipe_async!` and `try_pipe_async!` macros for asynchronous
//! left-to-right function application.
//!
//! Both macros build a future. Every step is awaited before the next operator
//! is invoked, so the operators run strictly one after another, and none of
//! them runs before the future is first polled.
//!
//! # Step syntax
//!
//! - **Comma** (`, f`): `f` returns something [`IntoFuture`]; the result is awaited
//! - **Lift** (`, => f`): `f` returns a bare value that is passed on directly
//!
//! # Examples
//!
//! ```
//! use pipe_compose::pipe_async;
//!
//! async fn fetch_score(user_id: u32) -> u32 {
//!     user_id * 10
//! }
//!
//! # futures::executor::block_on(async {
//! let badge = pipe_async!(
//!     4_u32,
//!     fetch_score,
//!     => |score| score + 2,
//!     |score| async move { format!("score: {score}") }
//! )
//! .await;
//! assert_eq!(badge, "score: 42");
//! # });
//! ```
//!
//! ## Deferred execution
//!
//! ```
//! use pipe_compose::pipe_async;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! # futures::executor::block_on(async {
//! let executed = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&executed);
//!
//! let workflow = pipe_async!(5, move |x: i32| {
//!     flag.store(true, Ordering::SeqCst);
//!     async move { x * 2 }
//! });
//!
//! // Not executed yet
//! assert!(!executed.load(Ordering::SeqCst));
//!
//! assert_eq!(workflow.await, 10);
//! assert!(executed.load(Ordering::SeqCst));
//! # });
//! ```

use std::future::{Future, IntoFuture};

use futures::FutureExt;

/// Pipes a value through a series of async operators from left to right.
///
/// The result is a future resolving to the output of the last operator.
///
/// # Syntax
///
/// - `pipe_async!(value)` - A completed future of `value`
/// - `pipe_async!(value, f)` - Awaits `f(value)`
/// - `pipe_async!(value, => f)` - Applies `f` to `value` without awaiting
/// - `pipe_async!(value, f, => g, h, ...)` - Chains any number of steps
///
/// # Type Constraints
///
/// - For comma steps: `FnOnce(A) -> R` with `R: IntoFuture`
/// - For `=>` steps: `FnOnce(A) -> B`
///
/// Parameter types of closures are inferred from the previous step.
///
/// # Examples
///
/// ```
/// use pipe_compose::pipe_async;
///
/// # futures::executor::block_on(async {
/// assert_eq!(pipe_async!(42).await, 42);
/// assert_eq!(pipe_async!(5, |x| async move { x * 2 }).await, 10);
/// assert_eq!(pipe_async!(5, => |x| x + 1, => |x| x * 2).await, 12);
/// # });
/// ```
#[macro_export]
macro_rules! pipe_async {
    // Value only: a completed future
    ($value:expr $(,)?) => {
        ::core::future::ready($value)
    };

    ($value:expr, $($steps:tt)+) => {
        $crate::__pipe_async_steps!(::core::future::ready($value), $($steps)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __pipe_async_steps {
    // Lift operator (terminal case)
    ($future:expr, => $function:expr $(,)?) => {
        $crate::compose::__ready_step($future, $function)
    };

    // Lift operator with continuation
    ($future:expr, => $function:expr, $($rest:tt)+) => {
        $crate::__pipe_async_steps!($crate::compose::__ready_step($future, $function), $($rest)+)
    };

    // Awaited operator (terminal case)
    ($future:expr, $function:expr $(,)?) => {
        $crate::compose::__then_step($future, $function)
    };

    // Awaited operator with continuation
    ($future:expr, $function:expr, $($rest:tt)+) => {
        $crate::__pipe_async_steps!($crate::compose::__then_step($future, $function), $($rest)+)
    };
}

/// Pipes a value through a series of fallible async operators.
///
/// Every operator returns something whose future resolves to `Result<_, E>`.
/// The first `Err` resolves the whole future to that error; later operators
/// are never invoked.
///
/// # Syntax
///
/// - `try_pipe_async!(value)` - A completed future of `Ok(value)`
/// - `try_pipe_async!(value, f, g, ...)` - Awaits each operator in turn
///
/// # Examples
///
/// ```
/// use pipe_compose::try_pipe_async;
///
/// async fn reserve(seats: u32) -> Result<u32, String> {
///     if seats <= 4 { Ok(seats) } else { Err(format!("{seats} seats unavailable")) }
/// }
///
/// # futures::executor::block_on(async {
/// let booked = try_pipe_async!(3_u32, reserve, |seats| async move { Ok(seats * 25) }).await;
/// assert_eq!(booked, Ok(75));
///
/// let rejected = try_pipe_async!(9_u32, reserve, |seats| async move { Ok(seats * 25) }).await;
/// assert_eq!(rejected, Err(String::from("9 seats unavailable")));
/// # });
/// ```
#[macro_export]
macro_rules! try_pipe_async {
    ($value:expr $(,)?) => {
        ::core::future::ready(::core::result::Result::Ok($value))
    };

    ($value:expr, $($functions:expr),+ $(,)?) => {
        $crate::__try_pipe_async_steps!(
            ::core::future::ready(::core::result::Result::Ok($value)),
            $($functions),+
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __try_pipe_async_steps {
    ($future:expr, $function:expr $(,)?) => {
        $crate::compose::__try_then_step($future, $function)
    };

    ($future:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::__try_pipe_async_steps!(
            $crate::compose::__try_then_step($future, $function),
            $($remaining_functions),+
        )
    };
}

#[doc(hidden)]
pub fn __then_step<Fut, F, R>(future: Fut, operator: F) -> impl Future<Output = R::Output>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> R,
    R: IntoFuture,
{
    future.then(move |value| operator(value).into_future())
}

#[doc(hidden)]
pub fn __ready_step<Fut, F, B>(future: Fut, operator: F) -> impl Future<Output = B>
where
    Fut: Future,
    F: FnOnce(Fut::Output) -> B,
{
    future.map(operator)
}

#[doc(hidden)]
pub fn __try_then_step<Fut, A, B, E, F, R>(future: Fut, operator: F) -> impl Future<Output = Result<B, E>>
where
    Fut: Future<Output = Result<A, E>>,
    F: FnOnce(A) -> R,
    R: IntoFuture<Output = Result<B, E>>,
{
    async move {
        match future.await {
            Ok(value) => operator(value).await,
            Err(error) => Err(error),
        }
    }
}
