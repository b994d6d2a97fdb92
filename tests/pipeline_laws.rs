#![cfg(feature = "pipeline")]
//! Property-based tests for the pipeline.
//!
//! ## Laws
//! - **Map Equivalence**: accepting everything delivers `map(mapper, source)`
//! - **Rejection**: rejecting everything never calls `mapper` or `block`
//! - **Mapper Count**: `mapper` runs once per accepted element
//! - **Adapter Equivalence**: `process_elements(s, p, f, b) == s.filter(p).map(f).for_each(b)`
//! - **Identity Mapper**: `process_matching(s, p, b) == process_elements(s, p, identity, b)`
//! - **Fallible Agreement**: never-failing `try_` callbacks deliver the same values
//! - **Fail-fast**: an error from any stage at position `k` leaves elements after `k` untested

use proptest::prelude::*;
use sift::pipeline::{process_elements, process_matching, try_process_elements};
use std::cell::Cell;

// =============================================================================
// Acceptance Laws
// =============================================================================

proptest! {
    /// Accepting every element delivers exactly map(mapper, source), in order.
    #[test]
    fn prop_accept_all_is_map(source in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut delivered = Vec::new();

        process_elements(&source, |_| true, |number| number.wrapping_mul(3), |value| delivered.push(value));

        let expected: Vec<i32> = source.iter().map(|number| number.wrapping_mul(3)).collect();
        prop_assert_eq!(delivered, expected);
    }

    /// Rejecting every element calls neither mapper nor block.
    #[test]
    fn prop_reject_all_calls_nothing(source in prop::collection::vec(any::<i32>(), 0..64)) {
        let mapper_calls = Cell::new(0_usize);
        let block_calls = Cell::new(0_usize);

        process_elements(
            &source,
            |_| false,
            |number| {
                mapper_calls.set(mapper_calls.get() + 1);
                *number
            },
            |_| block_calls.set(block_calls.get() + 1),
        );

        prop_assert_eq!(mapper_calls.get(), 0);
        prop_assert_eq!(block_calls.get(), 0);
    }

    /// The mapper runs exactly once per accepted element.
    #[test]
    fn prop_mapper_count_equals_accepted_count(
        source in prop::collection::vec(any::<i32>(), 0..64),
        divisor in 1_i32..8,
    ) {
        let mapper_calls = Cell::new(0_usize);

        process_elements(
            &source,
            |number| *number % divisor == 0,
            |number| {
                mapper_calls.set(mapper_calls.get() + 1);
                *number
            },
            |_| {},
        );

        let accepted = source.iter().filter(|number| **number % divisor == 0).count();
        prop_assert_eq!(mapper_calls.get(), accepted);
    }
}

// =============================================================================
// Equivalence Laws
// =============================================================================

proptest! {
    /// The pipeline agrees with the filter/map/for_each adapter chain.
    #[test]
    fn prop_matches_iterator_adapters(
        source in prop::collection::vec("[a-z]{0,8}", 0..32),
        minimum_length in 0_usize..8,
    ) {
        let mut from_pipeline = Vec::new();
        process_elements(
            &source,
            |word| word.len() >= minimum_length,
            |word| word.to_uppercase(),
            |word| from_pipeline.push(word),
        );

        let mut from_adapters = Vec::new();
        source
            .iter()
            .filter(|word| word.len() >= minimum_length)
            .map(|word| word.to_uppercase())
            .for_each(|word| from_adapters.push(word));

        prop_assert_eq!(from_pipeline, from_adapters);
    }

    /// process_matching is process_elements with the identity mapper.
    #[test]
    fn prop_matching_is_identity_mapped(source in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut matched = Vec::new();
        process_matching(source.clone(), |byte| byte.is_ascii_digit(), |byte| matched.push(byte));

        let mut mapped = Vec::new();
        process_elements(source, |byte| byte.is_ascii_digit(), |byte| byte, |byte| mapped.push(byte));

        prop_assert_eq!(matched, mapped);
    }

    /// Callbacks that never fail deliver the same values as the infallible pass.
    #[test]
    fn prop_fallible_agrees_when_nothing_fails(source in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut infallible = Vec::new();
        process_elements(&source, |number| **number > 0, |number| number / 2, |half| infallible.push(half));

        let mut fallible = Vec::new();
        let result: Result<(), String> = try_process_elements(
            &source,
            |number| Ok(**number > 0),
            |number| Ok(number / 2),
            |half| {
                fallible.push(half);
                Ok(())
            },
        );

        prop_assert_eq!(result, Ok(()));
        prop_assert_eq!(fallible, infallible);
    }
}

// =============================================================================
// Fail-fast Law
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Tester,
    Mapper,
    Block,
}

fn arb_stage() -> impl Strategy<Value = Stage> {
    prop_oneof![Just(Stage::Tester), Just(Stage::Mapper), Just(Stage::Block)]
}

proptest! {
    /// An error from any stage at element k stops the pass: later stages for k
    /// are skipped and elements after k are never tested.
    #[test]
    fn prop_error_stops_the_pass(
        source in prop::collection::vec(any::<i32>(), 1..64),
        failing_index in any::<prop::sample::Index>(),
        stage in arb_stage(),
    ) {
        let failing = failing_index.index(source.len());
        let tested = Cell::new(0_usize);
        let mapped = Cell::new(0_usize);
        let mut consumed = Vec::new();

        let result = try_process_elements(
            source.iter().enumerate(),
            |(index, _)| {
                tested.set(tested.get() + 1);
                if stage == Stage::Tester && *index == failing { Err((stage, *index)) } else { Ok(true) }
            },
            |(index, number)| {
                mapped.set(mapped.get() + 1);
                if stage == Stage::Mapper && index == failing { Err((stage, index)) } else { Ok((index, *number)) }
            },
            |(index, number)| {
                if stage == Stage::Block && index == failing {
                    return Err((stage, index));
                }
                consumed.push(number);
                Ok(())
            },
        );

        let expected_mapped = if stage == Stage::Tester { failing } else { failing + 1 };
        prop_assert_eq!(result, Err((stage, failing)));
        prop_assert_eq!(tested.get(), failing + 1);
        prop_assert_eq!(mapped.get(), expected_mapped);
        prop_assert_eq!(consumed, source[..failing].to_vec());
    }
}
