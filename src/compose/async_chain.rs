//! Typed chains of asynchronous operators.
//!
//! The async counterpart of [`Chain`](super::Chain): every step is awaited to
//! completion before the next operator is invoked, so no two operators ever
//! run at the same time. The traits are implemented for `()`, for tuples of up
//! to [`MAX_TYPED_ARITY`](super::MAX_TYPED_ARITY) operators, and for `Vec`s of
//! operators mapping `V` to a future of `V`.

use std::future::{Future, IntoFuture, ready};

use super::AsyncOperator;
use super::chain::{for_each_prefix, for_each_typed_arity, last_output, trace_chain};

/// An ordered chain of async operators that can be awaited once.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::AsyncChain;
///
/// # futures::executor::block_on(async {
/// let chain = (
///     |v: i32| async move { v * 2 },
///     |v: i32| async move { v.to_string() },
/// );
/// assert_eq!(chain.run_async(21).await, "42");
/// # });
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a chain of async operators accepting `{V}`",
    label = "not an async chain for `{V}`",
    note = "every operator must return a future whose output is the next operator's input",
    note = "tuple chains hold at most 20 operators; for longer chains use `pipe_async!` or a `Vec` of operators mapping `V` to a future of `V`"
)]
pub trait AsyncChain<V> {
    /// The output of the last operator's future, or `V` for the empty chain.
    type Output;

    /// Invokes and awaits every operator in order.
    ///
    /// Operators run when the returned future is polled.
    fn run_async(self, value: V) -> impl Future<Output = Self::Output>;
}

/// An async chain whose operators can be invoked any number of times.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a reusable chain of async operators accepting `{V}`",
    label = "not a reusable async chain for `{V}`",
    note = "every operator must implement `Fn` and return a future of the next operator's input"
)]
pub trait ReusableAsyncChain<V>: AsyncChain<V> {
    /// Invokes and awaits every operator in order without consuming the chain.
    fn run_ref_async(&self, value: V) -> impl Future<Output = Self::Output>;
}

/// An ordered chain of fallible async operators sharing the error type `E`.
///
/// The first operator resolving to `Err` ends the chain; later operators are
/// never invoked and the error is returned unchanged.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a chain of fallible async operators accepting `{V}` and failing with `{E}`",
    label = "not a fallible async chain for `{V}`",
    note = "every operator must return a future of `Result<_, {E}>`"
)]
pub trait TryAsyncChain<V, E> {
    /// The success type of the last operator, or `V` for the empty chain.
    type Output;

    /// Invokes and awaits the operators in order until one fails.
    fn try_run_async(self, value: V) -> impl Future<Output = Result<Self::Output, E>>;
}

// =============================================================================
// Empty chain
// =============================================================================

impl<V> AsyncChain<V> for () {
    type Output = V;

    fn run_async(self, value: V) -> impl Future<Output = V> {
        ready(value)
    }
}

impl<V> ReusableAsyncChain<V> for () {
    fn run_ref_async(&self, value: V) -> impl Future<Output = V> {
        ready(value)
    }
}

impl<V, E> TryAsyncChain<V, E> for () {
    type Output = V;

    fn try_run_async(self, value: V) -> impl Future<Output = Result<V, E>> {
        ready(Ok(value))
    }
}

// =============================================================================
// Tuple chains
// =============================================================================

macro_rules! impl_tuple_async_chain {
    ($(($operator:ident $input:ident $output:ident))+) => {
        paste::paste! {
            impl<V, $($operator, $output),+> AsyncChain<V> for ($($operator,)+)
            where
                $($operator: AsyncOperator<$input, Output = $output>),+
            {
                type Output = last_output!($(($operator $input $output))+);

                fn run_async(self, value: V) -> impl Future<Output = Self::Output> {
                    trace_chain!("async", [$(stringify!($operator)),+].len());
                    let ($([<$operator:lower>],)+) = self;
                    async move {
                        $(let value = [<$operator:lower>].invoke(value).await;)+
                        value
                    }
                }
            }

            impl<V, $($operator, [<$operator Step>], $output),+> ReusableAsyncChain<V> for ($($operator,)+)
            where
                $(
                    $operator: Fn($input) -> [<$operator Step>],
                    [<$operator Step>]: IntoFuture<Output = $output>,
                )+
            {
                fn run_ref_async(&self, value: V) -> impl Future<Output = Self::Output> {
                    trace_chain!("async", [$(stringify!($operator)),+].len());
                    let ($([<$operator:lower>],)+) = self;
                    async move {
                        $(let value = [<$operator:lower>](value).await;)+
                        value
                    }
                }
            }

            impl<V, E, $($operator, $output),+> TryAsyncChain<V, E> for ($($operator,)+)
            where
                $($operator: AsyncOperator<$input, Output = Result<$output, E>>),+
            {
                type Output = last_output!($(($operator $input $output))+);

                fn try_run_async(self, value: V) -> impl Future<Output = Result<Self::Output, E>> {
                    trace_chain!("try_async", [$(stringify!($operator)),+].len());
                    let ($([<$operator:lower>],)+) = self;
                    async move {
                        $(let value = [<$operator:lower>].invoke(value).await?;)+
                        Ok::<_, E>(value)
                    }
                }
            }
        }
    };
}

for_each_typed_arity!(impl_tuple_async_chain);

// =============================================================================
// Homogeneous chains of any length
// =============================================================================

impl<V, F, R> AsyncChain<V> for Vec<F>
where
    F: FnOnce(V) -> R,
    R: IntoFuture<Output = V>,
{
    type Output = V;

    fn run_async(self, value: V) -> impl Future<Output = V> {
        trace_chain!("async_vec", self.len());
        async move {
            let mut value = value;
            for operator in self {
                value = operator(value).await;
            }
            value
        }
    }
}

impl<V, F, R> ReusableAsyncChain<V> for Vec<F>
where
    F: Fn(V) -> R,
    R: IntoFuture<Output = V>,
{
    fn run_ref_async(&self, value: V) -> impl Future<Output = V> {
        trace_chain!("async_vec", self.len());
        async move {
            let mut value = value;
            for operator in self {
                value = operator(value).await;
            }
            value
        }
    }
}

impl<V, E, F, R> TryAsyncChain<V, E> for Vec<F>
where
    F: FnOnce(V) -> R,
    R: IntoFuture<Output = Result<V, E>>,
{
    type Output = V;

    fn try_run_async(self, value: V) -> impl Future<Output = Result<V, E>> {
        trace_chain!("async_vec", self.len());
        async move {
            let mut value = value;
            for operator in self {
                value = operator(value).await?;
            }
            Ok(value)
        }
    }
}
