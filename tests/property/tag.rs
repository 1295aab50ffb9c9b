use apis_validators::tag::{TagOptions, parse_tag};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn arbitrary_tag_never_panics(s in "\\PC{0,40}") {
        let tag = parse_tag(&s);
        let _ = tag.options.contains("Required");
        let _ = tag.options.first();
    }

    #[test]
    fn name_never_contains_a_delimiter(s in "[A-Za-z,;]{0,20}") {
        let tag = parse_tag(&s);
        prop_assert!(!tag.name.contains([',', ';']));
        prop_assert!(s.starts_with(tag.name));
    }

    #[test]
    fn every_token_is_contained(tokens in prop::collection::vec("[A-Za-z0-9]{1,8}", 1..6)) {
        let raw = tokens.join(",");
        let opts = TagOptions::new(&raw);
        for token in &tokens {
            prop_assert!(opts.contains(token), "{:?} should contain {:?}", raw, token);
        }
    }

    #[test]
    fn extended_tokens_are_not_contained(tokens in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let raw = tokens.join(";");
        let opts = TagOptions::new(&raw);
        for token in &tokens {
            let longer = format!("{}X", token);
            prop_assert!(!opts.contains(&longer));
        }
    }
}
