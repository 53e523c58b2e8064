use std::cell::Cell;

use varia_core::{
    variant, Matcher, Outcome, Schema, Value, Variant, VariantError, VariantResult, CATCH_ALL,
};

// A three-case sum type declared at runtime: A(text), B(number, bool), C().
fn abc() -> VariantResult<Schema> {
    Schema::new("ABC").case("A", 1)?.case("B", 2)?.case("C", 0)
}

fn samples(schema: &Schema) -> Vec<Value> {
    vec![
        Value::from(schema.construct("A", vec![Value::from("test")]).expect("A")),
        Value::from(
            schema
                .construct("B", vec![Value::from(5), Value::from(false)])
                .expect("B"),
        ),
        Value::from(schema.construct("C", vec![]).expect("C")),
    ]
}

#[test]
fn two_branches_of_three_is_unhandled_for_the_third() {
    let schema = abc().expect("schema");
    let matcher = Matcher::new().on("A", |_| 'a').on("B", |_| 'b');

    let results: Vec<_> = samples(&schema)
        .iter()
        .map(|v| schema.dispatch(&matcher, v))
        .collect();

    assert_eq!(results[0], Ok('a'));
    assert_eq!(results[1], Ok('b'));
    assert_eq!(
        results[2],
        Err(VariantError::UnhandledVariant {
            kind: "C".to_string()
        })
    );
    assert_eq!(
        schema.check_exhaustive(&matcher),
        Err(VariantError::NonExhaustive {
            schema: "ABC".to_string(),
            missing: vec!["C".to_string()],
        })
    );
}

#[test]
fn catch_all_receives_unlisted_variant() {
    let schema = abc().expect("schema");
    let seen = Cell::new(0);
    let matcher = Matcher::new().on("A", |_| None).otherwise(|v: &Variant| {
        seen.set(seen.get() + 1);
        Some(v.clone())
    });

    let values = samples(&schema);
    assert_eq!(schema.dispatch(&matcher, &values[0]), Ok(None));
    let routed = schema.dispatch(&matcher, &values[2]).expect("dispatch");
    assert_eq!(routed.as_ref().map(Variant::kind), Some("C"));
    assert_eq!(seen.get(), 1);
}

#[test]
fn reserved_branch_key_backs_up_partial_matchers() {
    let schema = abc().expect("schema");
    let matcher = Matcher::new()
        .on("B", |values: &[Value]| values.len())
        .on(CATCH_ALL, |values: &[Value]| 100 + values.len());

    assert!(schema.check_exhaustive(&matcher).is_ok());
    let results: Vec<_> = samples(&schema)
        .iter()
        .map(|v| matcher.dispatch(v).expect("dispatch"))
        .collect();
    assert_eq!(results, vec![101, 2, 100]);
}

#[test]
fn handlers_see_values_in_declared_order() {
    let b = variant!("B", 5, false).expect("B");
    let matcher = Matcher::new().on("B", |values: &[Value]| match values {
        [Value::Number(n), Value::Bool(flag)] => format!("{n}/{flag}"),
        other => format!("unexpected {other:?}"),
    });
    assert_eq!(matcher.dispatch_variant(&b), Ok("5/false".to_string()));
}

#[test]
fn non_variants_are_rejected_before_any_handler() {
    let calls = Cell::new(0);
    let matcher = Matcher::new().otherwise(|_| calls.set(calls.get() + 1));

    for value in [Value::Null, Value::from(1), Value::from("kind"), Value::List(vec![])] {
        assert!(matches!(
            matcher.dispatch(&value),
            Err(VariantError::InvalidVariant { .. })
        ));
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn outcome_schema_matches_typed_cases() {
    let schema = Schema::of::<Outcome<Value, Value>>();
    assert_eq!(schema.name(), "Outcome");
    assert_eq!(schema.kinds().collect::<Vec<_>>(), vec!["Ok", "Err"]);

    let ok = Value::from(Outcome::<i32, &str>::Ok(7));
    let matcher = Matcher::new()
        .on("Ok", |values: &[Value]| values[0].as_number().unwrap_or_default())
        .on("Err", |_| -1.0);
    assert!(schema.check_exhaustive(&matcher).is_ok());
    assert_eq!(schema.dispatch(&matcher, &ok), Ok(7.0));
}
