//! Property-based tests for `Either` and the evaluator.
//!
//! These tests use proptest to generate payloads and bind sequences and
//! verify:
//! 1. The variant laws of `map`, `map_left` and `flat_map`
//! 2. Both evaluator forms return the first failure of a bind sequence, or
//!    the sum of all successes
//! 3. No bind after the first failure is ever evaluated
//! 4. A body that swallows failed binds still returns the first failure

#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use shunt::prelude::*;
use std::cell::Cell;

// -- Strategies --

/// A bind outcome: `Ok` binds a success, `Err` binds a failure.
fn bind_strategy() -> impl Strategy<Value = Result<i64, u8>> {
    prop_oneof![
        3 => (-1000_i64..1000).prop_map(Ok),
        1 => any::<u8>().prop_map(Err),
    ]
}

fn binds_strategy() -> impl Strategy<Value = Vec<Result<i64, u8>>> {
    prop::collection::vec(bind_strategy(), 0..24)
}

/// What a correct evaluator must return for `binds`.
fn expected(binds: &[Result<i64, u8>]) -> Either<u8, i64> {
    let mut total = 0;
    for bind in binds {
        match bind {
            Ok(n) => total += n,
            Err(e) => return Either::Left(*e),
        }
    }
    Either::Right(total)
}

/// Number of binds a short-circuiting evaluator evaluates.
fn evaluated_count(binds: &[Result<i64, u8>]) -> usize {
    binds
        .iter()
        .position(Result::is_err)
        .map_or(binds.len(), |i| i + 1)
}

// -- Either laws --

proptest! {
    #[test]
    fn predicates_are_exclusive(v in any::<i32>()) {
        let right: Either<i32, i32> = Either::right(v);
        let left: Either<i32, i32> = Either::left(v);
        prop_assert!(right.is_right() && !right.is_left());
        prop_assert!(left.is_left() && !left.is_right());
    }

    #[test]
    fn map_applies_only_to_right(v in any::<i32>()) {
        let f = |n: i32| n.wrapping_mul(3);
        prop_assert_eq!(Either::<i32, i32>::right(v).map(f).into_inner(), f(v));

        let calls = Cell::new(0);
        let mapped = Either::<i32, i32>::left(v).map(|n| { calls.set(calls.get() + 1); f(n) });
        prop_assert_eq!(mapped.into_inner(), v);
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn map_left_applies_only_to_left(v in any::<i32>()) {
        let f = |n: i32| n.wrapping_sub(7);
        prop_assert_eq!(Either::<i32, i32>::left(v).map_left(f).into_inner(), f(v));

        let calls = Cell::new(0);
        let mapped = Either::<i32, i32>::right(v).map_left(|n| { calls.set(calls.get() + 1); f(n) });
        prop_assert_eq!(mapped.into_inner(), v);
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn flat_map_applies_only_to_right(v in any::<i32>()) {
        let f = |n: i32| if n % 2 == 0 { Either::right(n / 2) } else { Either::left(n) };
        prop_assert_eq!(Either::<i32, i32>::right(v).flat_map(f), f(v));

        let calls = Cell::new(0);
        let chained = Either::<i32, i32>::left(v).flat_map(|n| { calls.set(calls.get() + 1); f(n) });
        prop_assert_eq!(chained, Either::left(v));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn result_round_trip(v in any::<Result<u16, i8>>()) {
        prop_assert_eq!(Either::from(v).into_result(), v);
    }
}

// -- Evaluator --

proptest! {
    #[test]
    fn run_suspending_returns_first_failure(binds in binds_strategy()) {
        let evaluated = Cell::new(0_usize);
        let result: Either<u8, i64> = run_suspending(|cx| {
            let mut total = 0;
            for bind in &binds {
                let bound = cx.bind(Either::from({
                    evaluated.set(evaluated.get() + 1);
                    *bind
                }))?;
                total += bound;
            }
            Ok(total)
        });

        prop_assert_eq!(result, expected(&binds));
        prop_assert_eq!(evaluated.get(), evaluated_count(&binds));
    }

    #[test]
    fn swallowed_failures_still_return_first_failure(binds in binds_strategy()) {
        let issued = Cell::new(0_usize);
        let result: Either<u8, i64> = run_suspending(|cx| {
            let mut total = 0;
            for bind in &binds {
                let bound = cx.bind(Either::from(*bind)).unwrap_or_default();
                total += bound;
            }
            issued.set(cx.binds());
            Ok(total)
        });

        prop_assert_eq!(result, expected(&binds));
        prop_assert_eq!(issued.get(), binds.len());
    }

    #[test]
    fn pipeline_returns_first_failure(binds in binds_strategy()) {
        let evaluated = Cell::new(0_usize);
        let mut pipeline = Pipeline::new(0_i64);
        for bind in binds.iter().copied() {
            let evaluated = &evaluated;
            pipeline = pipeline.then(move |total| {
                evaluated.set(evaluated.get() + 1);
                Either::from(bind).map(|n| total + n)
            });
        }

        prop_assert_eq!(pipeline.run(), expected(&binds));
        prop_assert_eq!(evaluated.get(), evaluated_count(&binds));
    }
}
