//! Property tests for the containers using proptest.
//!
//! Invariants checked for arbitrary inputs:
//!
//! 1. `to_optional` maps present values to `Some` and null to `None`
//! 2. Mappers and combiners run at most once, and only when applicable
//! 3. `Outcome::combine` keeps every error, left first
//! 4. `OptionalPair::from_both` names exactly the present inputs
//! 5. A variant's payload cannot be changed through a copy

use std::cell::Cell;

use proptest::prelude::*;
use varia_core::{to_optional, Optional, OptionalPair, Outcome, Value, Variant};

fn arb_optional() -> impl Strategy<Value = Optional<i64>> {
    prop::option::of(any::<i64>()).prop_map(Optional::from)
}

fn arb_outcome() -> impl Strategy<Value = Outcome<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(Outcome::Ok),
        "[a-z]{1,8}".prop_map(Outcome::Err),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e6f64..1.0e6).prop_map(Value::Number),
        "[a-z]{0,6}".prop_map(Value::Text),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_to_optional_tracks_presence(input in prop::option::of(any::<i64>())) {
        match input {
            Some(v) => prop_assert_eq!(to_optional(input), Optional::Some(v)),
            None => prop_assert_eq!(to_optional(input), Optional::NONE),
        }
    }

    #[test]
    fn prop_value_null_is_the_only_absent_value(value in arb_value()) {
        let is_null = value.is_null();
        prop_assert_eq!(to_optional(value).is_none(), is_null);
    }

    #[test]
    fn prop_map_runs_once_on_some_never_on_none(opt in arb_optional()) {
        let calls = Cell::new(0);
        let mapped = opt.map(|v| {
            calls.set(calls.get() + 1);
            v.wrapping_add(1)
        });
        match opt {
            Optional::Some(v) => {
                prop_assert_eq!(calls.get(), 1);
                prop_assert_eq!(mapped, Optional::Some(v.wrapping_add(1)));
            }
            Optional::None => {
                prop_assert_eq!(calls.get(), 0);
                prop_assert_eq!(mapped, Optional::None);
            }
        }
    }

    #[test]
    fn prop_map_returning_optional_is_not_rewrapped(v in any::<i64>(), inner in arb_optional()) {
        prop_assert_eq!(Optional::Some(v).map(|_| inner), inner);
    }

    #[test]
    fn prop_combine_runs_only_for_two_somes(a in arb_optional(), b in arb_optional()) {
        let calls = Cell::new(0);
        let combined = a.combine(b, |x, y| {
            calls.set(calls.get() + 1);
            x.wrapping_add(y)
        });
        match (a, b) {
            (Optional::Some(x), Optional::Some(y)) => {
                prop_assert_eq!(calls.get(), 1);
                prop_assert_eq!(combined, Optional::Some(x.wrapping_add(y)));
            }
            _ => {
                prop_assert_eq!(calls.get(), 0);
                prop_assert_eq!(combined, Optional::None);
            }
        }
    }

    #[test]
    fn prop_outcome_to_optional_drops_error(outcome in arb_outcome()) {
        let expected = match &outcome {
            Outcome::Ok(v) => Optional::Some(*v),
            Outcome::Err(_) => Optional::None,
        };
        prop_assert_eq!(outcome.to_optional(), expected);
    }

    #[test]
    fn prop_combine_keeps_all_errors(a in arb_outcome(), b in arb_outcome()) {
        let combined = a.clone().combine(b.clone(), |x, y| x.wrapping_add(y));
        match (a, b) {
            (Outcome::Ok(x), Outcome::Ok(y)) => {
                prop_assert_eq!(combined, Outcome::Ok(x.wrapping_add(y)));
            }
            (Outcome::Err(ea), Outcome::Ok(_)) => prop_assert_eq!(combined, Outcome::Err(vec![ea])),
            (Outcome::Ok(_), Outcome::Err(eb)) => prop_assert_eq!(combined, Outcome::Err(vec![eb])),
            (Outcome::Err(ea), Outcome::Err(eb)) => {
                prop_assert_eq!(combined, Outcome::Err(vec![ea, eb]));
            }
        }
    }

    #[test]
    fn prop_from_both_names_present_inputs(a in arb_optional(), b in arb_optional()) {
        let pair = OptionalPair::from_both(a, b);
        prop_assert_eq!(pair.first(), a);
        prop_assert_eq!(pair.second(), b);
        prop_assert_eq!(pair.both().is_some(), a.is_some() && b.is_some());
        prop_assert_eq!(matches!(pair, OptionalPair::Neither), a.is_none() && b.is_none());
    }

    #[test]
    fn prop_variant_payload_is_frozen(values in prop::collection::vec(arb_value(), 0..6)) {
        let variant = Variant::new("Row", values.clone()).expect("variant");
        let mut copy = variant.values().to_vec();
        for slot in copy.iter_mut() {
            *slot = Value::Bool(true);
        }
        prop_assert_eq!(variant.values(), values.as_slice());
        prop_assert_eq!(variant.arity(), values.len());
    }
}
