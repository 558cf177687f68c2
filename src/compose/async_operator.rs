//! The operator abstraction for asynchronous chains.

use std::future::{Future, IntoFuture, Ready, ready};

/// A single-argument mapping from `A` to a future of [`AsyncOperator::Output`].
///
/// Every `FnOnce(A) -> R` where `R: IntoFuture` is an async operator: async
/// closures, functions returning `impl Future`, and closures returning an
/// `async` block all qualify. An operator whose result is already available
/// returns a completed future, for example via [`lift`].
pub trait AsyncOperator<A> {
    /// The value produced once the operator's future completes.
    type Output;

    /// The future returned by the operator.
    type Future: Future<Output = Self::Output>;

    /// Invokes the operator on `value`.
    fn invoke(self, value: A) -> Self::Future;
}

impl<A, F, R> AsyncOperator<A> for F
where
    F: FnOnce(A) -> R,
    R: IntoFuture,
{
    type Output = R::Output;
    type Future = R::IntoFuture;

    #[inline]
    fn invoke(self, value: A) -> Self::Future {
        self(value).into_future()
    }
}

/// Turns a synchronous operator into an async operator that completes
/// immediately.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::{lift, pipe_async};
///
/// # futures::executor::block_on(async {
/// let result = pipe_async(1, (lift(|v: i32| v * 2), |v: i32| async move { v + 1 })).await;
/// assert_eq!(result, 3);
/// # });
/// ```
pub fn lift<A, B, F>(operator: F) -> impl Fn(A) -> Ready<B>
where
    F: Fn(A) -> B,
{
    move |value| ready(operator(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invoke_awaits_async_block() {
        let operator = |v: i32| async move { v * 3 };
        assert_eq!(operator.invoke(2).await, 6);
    }

    #[tokio::test]
    async fn test_lift_completes_immediately() {
        use futures::FutureExt;

        let lifted = lift(|v: &str| v.len());
        assert_eq!(lifted("four").now_or_never(), Some(4));
    }
}
