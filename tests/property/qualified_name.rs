use apis_validators::validators::is_qualified_name;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn grammar_conforming_names_are_accepted(
        name in "[A-Za-z0-9]([-A-Za-z0-9_.]{0,61}[A-Za-z0-9])?"
    ) {
        let errs = is_qualified_name(&name);
        prop_assert!(errs.is_empty(), "{:?} rejected: {:?}", name, errs);
    }

    #[test]
    fn names_with_forbidden_characters_are_rejected(
        head in "[a-z]{1,10}",
        bad in "[@ !#$%^&*()+=]",
        tail in "[a-z]{1,10}",
    ) {
        let name = format!("{}{}{}", head, bad, tail);
        prop_assert!(!is_qualified_name(&name).is_empty());
    }

    #[test]
    fn arbitrary_input_never_panics(s in "\\PC{0,80}") {
        let _ = is_qualified_name(&s);
    }
}
