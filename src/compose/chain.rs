//! Typed chains of synchronous operators.
//!
//! A chain is an ordered sequence of operators where the output type of each
//! operator is the input type of the next. The traits in this module are
//! implemented for:
//!
//! - `()`, the empty chain, which returns the value unchanged
//! - tuples `(F1, ..., Fn)` for `1 <= n <= 20`, with one type parameter per
//!   intermediate value
//! - `Vec<F>` where every operator maps `V -> V`, for chains of any length
//!
//! Tuples longer than [`MAX_TYPED_ARITY`](super::MAX_TYPED_ARITY) implement
//! none of these traits.

use super::Operator;

/// An ordered chain of operators that can be applied once to a `V`.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::Chain;
///
/// let chain = (|v: i32| v + 1, |v: i32| v.to_string(), |v: String| v.len());
/// assert_eq!(chain.run(99), 3);
///
/// assert_eq!(().run("unchanged"), "unchanged");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a chain of operators accepting `{V}`",
    label = "not a typed chain for `{V}`",
    note = "each operator's input type must match the previous operator's output type",
    note = "tuple chains hold at most 20 operators; for longer chains use `pipe!`, a `Vec` of `V -> V` operators, or an `ErasedChain`"
)]
pub trait Chain<V> {
    /// The output type of the last operator, or `V` for the empty chain.
    type Output;

    /// Applies every operator in order, feeding each result to the next.
    fn run(self, value: V) -> Self::Output;
}

/// A chain whose operators can be applied any number of times.
///
/// Implemented when every operator is [`Fn`]. Each call to
/// [`run_ref`](ReusableChain::run_ref) is independent; nothing is cached
/// between calls.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a reusable chain of operators accepting `{V}`",
    label = "not a reusable chain for `{V}`",
    note = "every operator must implement `Fn`, and each input type must match the previous output type",
    note = "tuple chains hold at most 20 operators; for longer chains use `compose!`, a `Vec` of `V -> V` operators, or an `ErasedChain`"
)]
pub trait ReusableChain<V>: Chain<V> {
    /// Applies every operator in order without consuming the chain.
    fn run_ref(&self, value: V) -> Self::Output;
}

/// An ordered chain of fallible operators sharing the error type `E`.
///
/// Evaluation stops at the first `Err`: later operators are not invoked and
/// the error is returned as it was produced.
///
/// # Examples
///
/// ```
/// use pipe_compose::compose::TryChain;
///
/// let parse_then_halve = (
///     |v: &str| v.parse::<i32>().map_err(|_| "not a number"),
///     |v: i32| if v % 2 == 0 { Ok(v / 2) } else { Err("odd") },
/// );
/// assert_eq!(parse_then_halve.try_run("42"), Ok(21));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a chain of fallible operators accepting `{V}` and failing with `{E}`",
    label = "not a fallible chain for `{V}`",
    note = "every operator must return `Result<_, {E}>` and accept the previous operator's success type",
    note = "tuple chains hold at most 20 operators; for longer chains use `try_pipe!` or a `Vec` of `V -> Result<V, E>` operators"
)]
pub trait TryChain<V, E> {
    /// The success type of the last operator, or `V` for the empty chain.
    type Output;

    /// Applies the operators in order until one fails.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by an operator, unchanged.
    fn try_run(self, value: V) -> Result<Self::Output, E>;
}

/// A fallible chain whose operators can be applied any number of times.
pub trait ReusableTryChain<V, E>: TryChain<V, E> {
    /// Applies the operators in order until one fails, without consuming the chain.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by an operator, unchanged.
    fn try_run_ref(&self, value: V) -> Result<Self::Output, E>;
}

macro_rules! trace_chain {
    ($kind:literal, $operators:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(kind = $kind, operators = $operators, "running chain");
    };
}

pub(crate) use trace_chain;

macro_rules! last_output {
    (($operator:ident $input:ident $output:ident)) => {
        $output
    };
    ($head:tt $($tail:tt)+) => {
        last_output!($($tail)+)
    };
}

pub(crate) use last_output;

// =============================================================================
// Empty chain
// =============================================================================

impl<V> Chain<V> for () {
    type Output = V;

    #[inline]
    fn run(self, value: V) -> V {
        value
    }
}

impl<V> ReusableChain<V> for () {
    #[inline]
    fn run_ref(&self, value: V) -> V {
        value
    }
}

impl<V, E> TryChain<V, E> for () {
    type Output = V;

    #[inline]
    fn try_run(self, value: V) -> Result<V, E> {
        Ok(value)
    }
}

impl<V, E> ReusableTryChain<V, E> for () {
    #[inline]
    fn try_run_ref(&self, value: V) -> Result<V, E> {
        Ok(value)
    }
}

// =============================================================================
// Tuple chains
// =============================================================================

// Each step is written `(Operator Input Output)`; the input of step i is the
// output of step i - 1, and the input of step 1 is `V`.
macro_rules! impl_tuple_chain {
    ($(($operator:ident $input:ident $output:ident))+) => {
        paste::paste! {
            impl<V, $($operator, $output),+> Chain<V> for ($($operator,)+)
            where
                $($operator: Operator<$input, Output = $output>),+
            {
                type Output = last_output!($(($operator $input $output))+);

                #[inline]
                fn run(self, value: V) -> Self::Output {
                    trace_chain!("sync", [$(stringify!($operator)),+].len());
                    let ($([<$operator:lower>],)+) = self;
                    $(let value = [<$operator:lower>].apply(value);)+
                    value
                }
            }

            impl<V, $($operator, $output),+> ReusableChain<V> for ($($operator,)+)
            where
                $($operator: Fn($input) -> $output),+
            {
                #[inline]
                fn run_ref(&self, value: V) -> Self::Output {
                    trace_chain!("sync", [$(stringify!($operator)),+].len());
                    let ($([<$operator:lower>],)+) = self;
                    $(let value = [<$operator:lower>](value);)+
                    value
                }
            }

            impl<V, E, $($operator, $output),+> TryChain<V, E> for ($($operator,)+)
            where
                $($operator: FnOnce($input) -> Result<$output, E>),+
            {
                type Output = last_output!($(($operator $input $output))+);

                #[inline]
                fn try_run(self, value: V) -> Result<Self::Output, E> {
                    trace_chain!("try", [$(stringify!($operator)),+].len());
                    let ($([<$operator:lower>],)+) = self;
                    $(let value = [<$operator:lower>](value)?;)+
                    Ok(value)
                }
            }

            impl<V, E, $($operator, $output),+> ReusableTryChain<V, E> for ($($operator,)+)
            where
                $($operator: Fn($input) -> Result<$output, E>),+
            {
                #[inline]
                fn try_run_ref(&self, value: V) -> Result<Self::Output, E> {
                    trace_chain!("try", [$(stringify!($operator)),+].len());
                    let ($([<$operator:lower>],)+) = self;
                    $(let value = [<$operator:lower>](value)?;)+
                    Ok(value)
                }
            }
        }
    };
}

// Invokes `$callback!` once per prefix of the step list, so every arity from 1
// up to the length of the list is covered.
macro_rules! for_each_prefix {
    ($callback:ident; [$($done:tt)*]) => {};
    ($callback:ident; [$($done:tt)*] $next:tt $($rest:tt)*) => {
        $callback!($($done)* $next);
        for_each_prefix!($callback; [$($done)* $next] $($rest)*);
    };
}

pub(crate) use for_each_prefix;

// One step per arity up to `MAX_TYPED_ARITY`.
macro_rules! for_each_typed_arity {
    ($callback:ident) => {
        for_each_prefix!($callback; []
            (F1 V T1) (F2 T1 T2) (F3 T2 T3) (F4 T3 T4) (F5 T4 T5)
            (F6 T5 T6) (F7 T6 T7) (F8 T7 T8) (F9 T8 T9) (F10 T9 T10)
            (F11 T10 T11) (F12 T11 T12) (F13 T12 T13) (F14 T13 T14) (F15 T14 T15)
            (F16 T15 T16) (F17 T16 T17) (F18 T17 T18) (F19 T18 T19) (F20 T19 T20)
        );
    };
}

pub(crate) use for_each_typed_arity;

for_each_typed_arity!(impl_tuple_chain);

// =============================================================================
// Homogeneous chains of any length
// =============================================================================

impl<V, F> Chain<V> for Vec<F>
where
    F: FnOnce(V) -> V,
{
    type Output = V;

    fn run(self, value: V) -> V {
        trace_chain!("vec", self.len());
        self.into_iter().fold(value, |value, operator| operator(value))
    }
}

impl<V, F> ReusableChain<V> for Vec<F>
where
    F: Fn(V) -> V,
{
    fn run_ref(&self, value: V) -> V {
        trace_chain!("vec", self.len());
        self.iter().fold(value, |value, operator| operator(value))
    }
}

impl<V, E, F> TryChain<V, E> for Vec<F>
where
    F: FnOnce(V) -> Result<V, E>,
{
    type Output = V;

    fn try_run(self, value: V) -> Result<V, E> {
        trace_chain!("vec", self.len());
        self.into_iter()
            .try_fold(value, |value, operator| operator(value))
    }
}

impl<V, E, F> ReusableTryChain<V, E> for Vec<F>
where
    F: Fn(V) -> Result<V, E>,
{
    fn try_run_ref(&self, value: V) -> Result<V, E> {
        trace_chain!("vec", self.len());
        self.iter().try_fold(value, |value, operator| operator(value))
    }
}
