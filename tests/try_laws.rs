//! Property-based tests for the Try combinator algebra.
//!
//! This module verifies that Try satisfies:
//!
//! - **Extraction**: `success(v).get() == Ok(v)`, `failure(c).get() == Err(c)`
//! - **Functor Law** for `map` with an infallible function
//! - **Short-Circuit**: combinators on a failure never run their argument
//! - **Capture**: errors and panics from a unit of work become the failure cause
//! - **Flattening**: `flat_map` never nests failures
//! - **Recovery** and **Observation** semantics of `recover` and `on_failure`

use attempt::control::{Cause, Try};
use proptest::prelude::*;
use std::cell::Cell;

fn cause_strategy() -> impl Strategy<Value = Cause> {
    "[a-z ]{1,24}".prop_map(Cause::msg)
}

// =============================================================================
// Extraction
// =============================================================================

proptest! {
    #[test]
    fn prop_success_get_returns_value(value in any::<i64>()) {
        prop_assert_eq!(Try::success(value).get().ok(), Some(value));
    }
}

proptest! {
    #[test]
    fn prop_failure_get_returns_cause(cause in cause_strategy()) {
        let raised = Try::<i64>::failure(cause.clone()).get().err();
        prop_assert_eq!(raised, Some(cause));
    }
}

// =============================================================================
// Functor Law
// =============================================================================

proptest! {
    #[test]
    fn prop_map_equals_success_of_applied(value in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3).wrapping_add(1);
        prop_assert_eq!(
            Try::success(value).map(|n| Ok(function(n))),
            Try::success(function(value))
        );
    }
}

// =============================================================================
// Short-Circuit
// =============================================================================

proptest! {
    #[test]
    fn prop_failure_short_circuits_map_and_flat_map(
        cause in cause_strategy(),
        repeats in 1_usize..8,
    ) {
        let calls = Cell::new(0);
        let mut current: Try<i32> = Try::failure(cause.clone());

        for _ in 0..repeats {
            current = current
                .map(|n| {
                    calls.set(calls.get() + 1);
                    Ok(n + 1)
                })
                .flat_map(|n| {
                    calls.set(calls.get() + 1);
                    Try::success(n + 1)
                });
        }

        prop_assert_eq!(current, Try::failure(cause));
        prop_assert_eq!(calls.get(), 0);
    }
}

proptest! {
    #[test]
    fn prop_success_ignores_on_failure_and_recover(value in any::<i32>(), repeats in 1_usize..8) {
        let calls = Cell::new(0);
        let mut current = Try::success(value);

        for _ in 0..repeats {
            current = current
                .on_failure(|_| {
                    calls.set(calls.get() + 1);
                    Ok(())
                })
                .recover(|_| {
                    calls.set(calls.get() + 1);
                    Ok(0)
                });
        }

        prop_assert_eq!(current, Try::success(value));
        prop_assert_eq!(calls.get(), 0);
    }
}

// =============================================================================
// Capture
// =============================================================================

proptest! {
    #[test]
    fn prop_map_captures_returned_error(value in any::<i32>(), cause in cause_strategy()) {
        let expected = cause.clone();
        let mapped: Try<i32> = Try::success(value).map(move |_| Err(cause));
        prop_assert_eq!(mapped, Try::failure(expected));
    }
}

proptest! {
    #[test]
    fn prop_map_captures_panic(value in any::<i32>(), message in "[a-z]{1,16}") {
        let panic_message = message.clone();
        let mapped: Try<i32> = Try::success(value).map(move |_| panic!("{panic_message}"));
        let cause = mapped.into_cause();
        prop_assert!(cause.as_ref().is_some_and(Cause::is_panic));
        prop_assert_eq!(cause.map(|c| c.to_string()), Some(message));
    }
}

// =============================================================================
// Flattening
// =============================================================================

proptest! {
    #[test]
    fn prop_flat_map_flattens_failure(value in any::<i32>(), cause in cause_strategy()) {
        let expected = cause.clone();
        let result: Try<i32> = Try::success(value).flat_map(move |_| Try::failure(cause));
        prop_assert_eq!(result, Try::failure(expected));
    }
}

// =============================================================================
// Recovery and Observation
// =============================================================================

proptest! {
    #[test]
    fn prop_recover_success(cause in cause_strategy(), substitute in any::<i32>()) {
        prop_assert_eq!(
            Try::<i32>::failure(cause).recover(move |_| Ok(substitute)),
            Try::success(substitute)
        );
    }
}

proptest! {
    #[test]
    fn prop_recover_failure_replaces_cause(
        cause in cause_strategy(),
        replacement in cause_strategy(),
    ) {
        let expected = replacement.clone();
        let result = Try::<i32>::failure(cause).recover(move |_| Err(replacement));
        prop_assert_eq!(result, Try::failure(expected));
    }
}

proptest! {
    #[test]
    fn prop_on_failure_observes_only(cause in cause_strategy()) {
        let seen = Cell::new(false);
        let result = Try::<i32>::failure(cause.clone()).on_failure(|_| {
            seen.set(true);
            Ok(())
        });
        prop_assert!(seen.get());
        prop_assert_eq!(result, Try::failure(cause));
    }
}

proptest! {
    #[test]
    fn prop_on_failure_error_supersedes(
        cause in cause_strategy(),
        replacement in cause_strategy(),
    ) {
        let expected = replacement.clone();
        let result = Try::<i32>::failure(cause).on_failure(move |_| Err(replacement));
        prop_assert_eq!(result, Try::failure(expected));
    }
}
