use apis_validators::{FieldErrorExt, Validate, validate};
use proptest::prelude::*;

#[derive(Validate, Debug, Clone)]
struct Sample {
    #[validate("Required")]
    name: String,
    #[validate("QualifiedName")]
    label: String,
    #[validate("OneOf,source")]
    url: Option<String>,
    #[validate("OneOf,source")]
    path: Option<String>,
    #[validate("-")]
    note: String,
}

fn arb_sample() -> impl Strategy<Value = Sample> {
    (
        "[a-z]{0,4}",
        "\\PC{0,10}",
        prop::option::of("[a-z]{0,4}"),
        prop::option::of("[a-z]{0,4}"),
        "\\PC{0,10}",
    )
        .prop_map(|(name, label, url, path, note)| Sample {
            name,
            label,
            url,
            path,
            note,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn validation_is_idempotent(sample in arb_sample()) {
        prop_assert_eq!(validate(&sample), validate(&sample));
    }

    #[test]
    fn skipped_field_never_changes_the_outcome(sample in arb_sample(), note in "\\PC{0,10}") {
        let mut other = sample.clone();
        other.note = note;
        prop_assert_eq!(validate(&sample).error_string(), validate(&other).error_string());
    }

    #[test]
    fn one_of_fails_unless_exactly_one_is_set(sample in arb_sample()) {
        let set = [sample.url.is_some(), sample.path.is_some()]
            .iter()
            .filter(|s| **s)
            .count();
        let rendered = sample.validate().error_string();
        prop_assert_eq!(rendered.contains("expected exactly one"), set != 1);
    }
}
