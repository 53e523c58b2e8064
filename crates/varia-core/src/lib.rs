//! Varia - Core Library
//!
//! Tagged-union runtime plus the `Optional`, `OptionalPair` and `Outcome`
//! containers built on it.

pub mod error;
pub mod config;
pub mod runtime;
pub mod payload;
pub mod optional;
pub mod optional_pair;
pub mod outcome;
pub mod pipe;

// Re-export commonly used types
pub use error::{VariantError, VariantResult};
pub use config::VariantConfig;
pub use runtime::{match_value, variant, Matcher, Schema, Tagged, Value, Variant, CATCH_ALL};
pub use payload::Payload;
pub use optional::{optional_combiner, optional_mapper, to_optional, IntoOptional, Optional};
pub use optional_pair::{to_optional_pair, OptionalPair};
pub use outcome::{to_outcome, IntoOutcome, Outcome};
pub use pipe::Pipe;

#[cfg(test)]
mod tests {
    use super::*;

    fn a(text: &str) -> Variant {
        variant!("A", text).expect("A")
    }

    fn b(n: i32, flag: bool) -> Variant {
        variant!("B", n, flag).expect("B")
    }

    fn c() -> Variant {
        variant!("C").expect("C")
    }

    fn describe(value: &Variant) -> VariantResult<String> {
        Matcher::new()
            .on("A", |values: &[Value]| format!("A: {}", values[0]))
            .on("B", |values: &[Value]| format!("B: {} | {}", values[0], values[1]))
            .on("C", |_| "C".to_string())
            .dispatch_variant(value)
    }

    #[test]
    fn exhaustive_matcher_describes_every_case() {
        assert_eq!(describe(&a("string")).unwrap(), "A: \"string\"");
        assert_eq!(describe(&b(123, true)).unwrap(), "B: 123 | true");
        assert_eq!(describe(&c()).unwrap(), "C");
    }

    #[test]
    fn reserved_kind_cannot_be_constructed() {
        assert_eq!(
            variant!(CATCH_ALL, 1),
            Err(VariantError::InvalidKind("_".to_string()))
        );
        assert!(variant("_", vec![]).is_err());
    }

    #[test]
    fn partial_matcher_with_catch_all() {
        let matcher = Matcher::new()
            .on("A", |_| "A")
            .otherwise(|_| "B or C");
        assert_eq!(matcher.dispatch_variant(&a("string")).unwrap(), "A");
        assert_eq!(matcher.dispatch_variant(&b(123, true)).unwrap(), "B or C");
        assert_eq!(matcher.dispatch_variant(&c()).unwrap(), "B or C");
    }

    #[test]
    fn variant_payload_is_frozen() {
        let original = b(5, false);
        let mut copy = original.values().to_vec();
        copy[0] = Value::Null;
        assert_eq!(original.values()[0], Value::Number(5.0));

        let shared = original.clone();
        assert_eq!(shared, original);
    }

    #[test]
    fn typed_values_dispatch_through_runtime() {
        let matcher = Matcher::new()
            .on("Some", |values: &[Value]| values[0].as_number())
            .on("None", |_| None);

        let some = Value::from(Optional::Some(2.5));
        let none = Value::from(Optional::<f64>::NONE);
        assert_eq!(matcher.dispatch(&some).unwrap(), Some(2.5));
        assert_eq!(matcher.dispatch(&none).unwrap(), None);

        let schema = Schema::of::<Optional<f64>>();
        assert!(schema.check_exhaustive(&matcher).is_ok());
    }

    #[test]
    fn outcome_combine_merges_error_channels() {
        let parse = |s: &str| -> Outcome<i32, String> {
            s.parse::<i32>().map_err(|e| format!("{s}: {e}")).into()
        };

        let sum = parse("1").combine(parse("2"), |x, y| x + y);
        assert_eq!(sum, Outcome::Ok(3));

        let failed = parse("x").combine(parse("y"), |x, y| x + y);
        match failed {
            Outcome::Err(errors) => assert_eq!(errors.len(), 2),
            Outcome::Ok(_) => panic!("expected both failures"),
        }
    }

    #[test]
    fn optional_and_outcome_convert_into_each_other() {
        let present: Outcome<i32, &str> = Optional::Some(1).to_outcome(|| "missing");
        assert_eq!(present.to_optional(), Optional::Some(1));

        let absent: Outcome<i32, &str> = Optional::None.to_outcome(|| "missing");
        assert_eq!(absent, Outcome::Err("missing"));
        assert_eq!(absent.to_optional(), Optional::NONE);
    }
}
