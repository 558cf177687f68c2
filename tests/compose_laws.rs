#![cfg(feature = "compose")]
//! Property-based tests for piping and composition laws.
//!
//! ## Pipe Laws
//! - **Identity**: `pipe!(x) == x` and `pipe(x, ()) == x`
//! - **Left Fold**: `pipe!(x, f1, ..., fn) == fn(...f1(x))`
//!
//! ## Composition Laws
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Pipe Equivalence**: `compose!(f, g)(x) == pipe!(x, f, g)`
//!
//! Using proptest, we generate random inputs and random operator lists to
//! verify these laws across a wide range of values.

// Each name brings in both the macro and the function form
use pipe_compose::compose::{compose, identity, pipe, try_compose, try_pipe};
use proptest::prelude::*;

// =============================================================================
// Operator generation
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Step {
    Add(i64),
    Multiply(i64),
    Negate,
}

impl Step {
    fn apply(self, value: i64) -> i64 {
        match self {
            Self::Add(amount) => value.wrapping_add(amount),
            Self::Multiply(factor) => value.wrapping_mul(factor),
            Self::Negate => value.wrapping_neg(),
        }
    }

    fn into_operator(self) -> Box<dyn Fn(i64) -> i64> {
        Box::new(move |value| self.apply(value))
    }
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (-100_i64..100).prop_map(Step::Add),
        (-10_i64..10).prop_map(Step::Multiply),
        Just(Step::Negate),
    ]
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    /// Identity Law: pipe!(x) == x
    #[test]
    fn prop_pipe_identity(x in any::<i64>()) {
        prop_assert_eq!(pipe!(x), x);
        prop_assert_eq!(pipe(x, ()), x);
    }

    /// Left Fold Law: piping equals folding the operators left to right
    #[test]
    fn prop_pipe_is_left_fold(
        x in any::<i64>(),
        steps in prop::collection::vec(step_strategy(), 0..64),
    ) {
        let expected = steps.iter().fold(x, |value, step| step.apply(value));
        let operators: Vec<_> = steps.iter().map(|step| step.into_operator()).collect();

        prop_assert_eq!(pipe(x, operators), expected);
    }

    /// Tuple and macro forms agree with nested application
    #[test]
    fn prop_pipe_tuple_matches_nesting(x in any::<i64>(), a in step_strategy(), b in step_strategy(), c in step_strategy()) {
        let (f, g, h) = (a.into_operator(), b.into_operator(), c.into_operator());
        let nested = h(g(f(x)));

        prop_assert_eq!(pipe(x, (&f, &g, &h)), nested);
        prop_assert_eq!(pipe!(x, &f, &g, &h), nested);
    }
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Left Identity Law: compose!(identity, f)(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i64>(), a in step_strategy()) {
        let function = a.into_operator();
        let composed = compose!(identity, &function);

        prop_assert_eq!(composed(x), function(x));
    }

    /// Right Identity Law: compose!(f, identity)(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i64>(), a in step_strategy()) {
        let function = a.into_operator();
        let composed = compose!(&function, identity);

        prop_assert_eq!(composed(x), function(x));
    }

    /// Associativity Law: compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)
    #[test]
    fn prop_compose_associativity(x in any::<i64>(), a in step_strategy(), b in step_strategy(), c in step_strategy()) {
        let (f, g, h) = (a.into_operator(), b.into_operator(), c.into_operator());

        let left = compose!(&f, compose!(&g, &h));
        let right = compose!(compose!(&f, &g), &h);

        prop_assert_eq!(left(x), right(x));
    }

    /// Pipe Equivalence Law: compose!(f, g)(x) == pipe!(x, f, g)
    #[test]
    fn prop_compose_equals_pipe(
        x in any::<i64>(),
        steps in prop::collection::vec(step_strategy(), 1..64),
    ) {
        let operators: Vec<_> = steps.iter().map(|step| step.into_operator()).collect();
        let composed = compose(operators);

        let piped = pipe(x, steps.iter().map(|step| step.into_operator()).collect::<Vec<_>>());
        prop_assert_eq!(composed(x), piped);
        // A second call sees no state left over from the first
        prop_assert_eq!(composed(x), piped);
    }
}

// =============================================================================
// Fallible Laws
// =============================================================================

proptest! {
    /// The error of the first failing operator is returned unchanged
    #[test]
    fn prop_try_pipe_returns_first_error(x in 0_u32..1000, limit in 0_u32..1000) {
        let check = |v: u32| if v <= limit { Ok(v) } else { Err(v) };
        let result = try_pipe!(x, check, |v| Ok(v + 1), check);

        let expected = if x > limit {
            Err(x)
        } else if x + 1 > limit {
            Err(x + 1)
        } else {
            Ok(x + 1)
        };
        prop_assert_eq!(result, expected);
    }

    /// try_compose(chain)(x) == try_pipe(x, chain)
    #[test]
    fn prop_try_compose_equals_try_pipe(x in any::<i32>()) {
        let chain = (
            |v: i32| v.checked_mul(3).ok_or("overflow"),
            |v: i32| v.checked_sub(7).ok_or("underflow"),
        );
        let composed = try_compose(chain);

        prop_assert_eq!(composed(x), try_pipe(x, chain));
    }
}
