use apis_validators::{FieldError, FieldErrorExt};
use proptest::prelude::*;

fn arb_error() -> impl Strategy<Value = FieldError> {
    (
        prop_oneof![
            Just("missing field(s)".to_string()),
            Just("expected exactly one, got both".to_string()),
            "[a-z ]{1,12}",
        ],
        prop::collection::vec("[a-z][a-z0-9]{0,6}", 0..4),
        prop::option::of("[a-z ]{1,12}"),
    )
        .prop_map(|(message, paths, details)| {
            let err = FieldError::new(message, paths);
            match details {
                Some(d) => err.with_details(d),
                None => err,
            }
        })
}

fn arb_aggregate() -> impl Strategy<Value = Option<FieldError>> {
    prop::option::of(
        prop::collection::vec(arb_error(), 1..4).prop_map(|errs| {
            errs.into_iter()
                .reduce(|acc, err| acc.also(err))
                .expect("at least one error")
        }),
    )
}

fn issue_count(errs: &Option<FieldError>) -> usize {
    errs.as_ref().map_or(0, |e| e.issues().len())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn also_is_associative(a in arb_aggregate(), b in arb_aggregate(), c in arb_aggregate()) {
        let left = a.clone().also(b.clone()).also(c.clone());
        let right = a.also(b.also(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn also_keeps_every_issue(a in arb_aggregate(), b in arb_aggregate()) {
        let expected = issue_count(&a) + issue_count(&b);
        prop_assert_eq!(issue_count(&a.also(b)), expected);
    }

    #[test]
    fn none_is_identity(a in arb_aggregate()) {
        prop_assert_eq!(None::<FieldError>.also(a.clone()).error_string(), a.error_string());
        prop_assert_eq!(a.clone().also(None), a);
    }

    #[test]
    fn via_field_prefixes_every_path(err in arb_error(), name in "[a-z][a-zA-Z0-9]{0,8}") {
        let nested = err.clone().via_field(&name);
        for (before, after) in err.issues().iter().zip(nested.issues()) {
            prop_assert_eq!(&before.message, &after.message);
            for (p, q) in before.paths.iter().zip(&after.paths) {
                prop_assert_eq!(q, &format!("{}.{}", name, p));
            }
        }
    }
}
