//! Evaluation of asynchronous chains.

use std::future::Future;

use super::{AsyncChain, ReusableAsyncChain, TryAsyncChain};

/// Pipes `value` through a chain of async operators.
///
/// The returned future awaits each operator before invoking the next one.
/// Nothing runs until the future is polled.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::pipe_async;
///
/// # futures::executor::block_on(async {
/// let result = pipe_async(1, (
///     |v: i32| async move { v * 2 },
///     |v: i32| async move { v + 1 },
/// ))
/// .await;
/// assert_eq!(result, 3);
/// # });
/// ```
pub fn pipe_async<V, C>(value: V, chain: C) -> impl Future<Output = C::Output>
where
    C: AsyncChain<V>,
{
    chain.run_async(value)
}

/// Pipes `value` through a chain of fallible async operators.
///
/// # Errors
///
/// The future resolves to the error of the first operator that fails.
/// Operators after it are never invoked.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::try_pipe_async;
///
/// # futures::executor::block_on(async {
/// let chain = (
///     |v: i32| async move { Ok::<_, String>(v * 2) },
///     |v: i32| async move { if v > 10 { Err(format!("{v} is too large")) } else { Ok(v) } },
/// );
/// assert_eq!(try_pipe_async(8, chain).await, Err(String::from("16 is too large")));
/// # });
/// ```
pub fn try_pipe_async<V, E, C>(value: V, chain: C) -> impl Future<Output = Result<C::Output, E>>
where
    C: TryAsyncChain<V, E>,
{
    chain.try_run_async(value)
}

/// Defers a chain of async operators until a value is supplied.
///
/// Building the composition invokes nothing. Each [`AsyncComposed::call`]
/// returns an independent future that runs the whole chain.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::compose_async;
///
/// # futures::executor::block_on(async {
/// let describe = compose_async((
///     |v: u32| async move { v + 1 },
///     |v: u32| async move { format!("#{v}") },
/// ));
/// assert_eq!(describe.call(1).await, "#2");
/// assert_eq!(describe.call(41).await, "#42");
/// # });
/// ```
pub const fn compose_async<C>(chain: C) -> AsyncComposed<C> {
    AsyncComposed { chain }
}

/// A chain of async operators waiting for its input.
///
/// Created by [`compose_async`].
#[derive(Debug, Clone, Copy)]
pub struct AsyncComposed<C> {
    chain: C,
}

impl<C> AsyncComposed<C> {
    /// Runs the chain on `value`.
    pub fn call<V>(&self, value: V) -> impl Future<Output = C::Output>
    where
        C: ReusableAsyncChain<V>,
    {
        self.chain.run_ref_async(value)
    }

    /// Returns the wrapped chain.
    pub fn into_inner(self) -> C {
        self.chain
    }
}
