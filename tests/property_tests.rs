//! Property-based tests for jester
//!
//! These tests verify invariants that must hold for all inputs:
//! - Validators and formatters never panic
//! - Randomness-backed tools stay within their declared value sets
//! - Text transforms satisfy their algebraic properties
//!
//! Run with: cargo test --test property_tests

use proptest::prelude::*;

// ============================================================================
// CONFIG LOADER
// ============================================================================

mod config_tests {
    use super::*;
    use jester::config::Config;

    proptest! {
        /// Invariant: load_from never panics, whatever the environment holds
        #[test]
        fn never_panics(key in ".*", size in ".*", effort in ".*") {
            let lookup = |name: &str| match name {
                "OPENAI_API_KEY" => Some(key.clone()),
                "SEARCH_CONTEXT_SIZE" => Some(size.clone()),
                "REASONING_EFFORT" => Some(effort.clone()),
                _ => None,
            };
            let _ = Config::load_from(lookup);
        }

        /// Invariant: same environment, same configuration
        #[test]
        fn deterministic(key in "[a-zA-Z0-9-]{1,32}", size in 0i64..1_000_000) {
            let lookup = |name: &str| match name {
                "OPENAI_API_KEY" => Some(key.clone()),
                "SEARCH_CONTEXT_SIZE" => Some(size.to_string()),
                _ => None,
            };
            let a = Config::load_from(&lookup);
            let b = Config::load_from(&lookup);
            prop_assert_eq!(a.unwrap(), b.unwrap());
        }
    }
}

// ============================================================================
// SCHEMA VALIDATION
// ============================================================================

mod schema_tests {
    use super::*;
    use jester::schema::{FieldSpec, InputSchema};
    use serde_json::json;

    proptest! {
        /// Invariant: validation never panics on arbitrary string arguments
        #[test]
        fn never_panics(value in ".*") {
            let schema = InputSchema::new(vec![
                FieldSpec::string("text"),
                FieldSpec::enumeration("mode", &["a", "b"]).default_value(json!("a")),
            ]);
            let _ = schema.validate(&json!({ "text": value, "mode": value }));
        }

        /// Invariant: a valid string input round-trips unchanged
        #[test]
        fn passthrough(value in ".*") {
            let schema = InputSchema::new(vec![FieldSpec::string("text")]);
            let args = schema.validate(&json!({ "text": value.clone() })).unwrap();
            prop_assert_eq!(args.get("text").unwrap(), &json!(value));
        }
    }
}

// ============================================================================
// TEXT TRANSFORMS
// ============================================================================

mod transform_tests {
    use super::*;
    use jester::tools::text::apply;

    proptest! {
        /// Invariant: reverse is an involution over chars
        #[test]
        fn reverse_twice_is_identity(s in "\\PC*") {
            prop_assert_eq!(apply(&apply(&s, "reverse"), "reverse"), s);
        }

        /// Invariant: leet output contains none of the replaced vowels
        #[test]
        fn leet_strips_vowels(s in "\\PC*") {
            let out = apply(&s, "leet");
            prop_assert!(!out.contains(&['a', 'e', 'i', 'o', 'A', 'E', 'I', 'O'][..]));
        }

        /// Invariant: upper is idempotent
        #[test]
        fn upper_idempotent(s in "\\PC*") {
            let once = apply(&s, "upper");
            prop_assert_eq!(apply(&once, "upper"), once);
        }
    }
}

// ============================================================================
// RANDOMNESS-BACKED TOOLS
// ============================================================================

mod dice_tests {
    use super::*;
    use jester::context::Context;
    use jester::tools::dice::{parse_dice, roll};

    proptest! {
        /// Invariant: parsing never panics on arbitrary expressions
        #[test]
        fn parse_never_panics(s in ".*") {
            let _ = parse_dice(&s);
        }

        /// Invariant: every roll stays within [count, count * sides]
        #[test]
        fn sum_in_bounds(count in 1i64..=10, sides in 2i64..=20, seed in any::<u64>()) {
            let ctx = Context::with_seed(seed);
            let expr = format!("{}d{}", count, sides);
            let line = roll(&ctx, &expr).unwrap();
            let sum: i64 = line.rsplit("= ").next().unwrap().parse().unwrap();
            prop_assert!(sum >= count && sum <= count * sides);
        }
    }
}

mod emoji_tests {
    use super::*;
    use jester::tools::emoji::convert;

    proptest! {
        /// Invariant: conversion is idempotent (output words are already
        /// lowercase emoji or plain words)
        #[test]
        fn convert_idempotent(s in "[a-z ]{0,60}") {
            let once = convert(&s);
            prop_assert_eq!(convert(&once), once);
        }
    }
}
