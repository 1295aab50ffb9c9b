#![no_main]

use apis_validators::{FieldError, FieldErrorExt};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Missing(Vec<String>),
    Also(Vec<String>),
    Field(String),
    Index(usize),
    Key(String),
    Details(String),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut errs: Option<FieldError> = None;
    let mut issues = 0usize;

    for op in ops {
        errs = match op {
            Op::Missing(paths) => {
                issues = 1;
                Some(FieldError::missing_field(paths))
            }
            Op::Also(paths) => {
                issues += 1;
                errs.also(Some(FieldError::missing_field(paths)))
            }
            Op::Field(name) => errs.via_field(&name),
            Op::Index(index) => errs.via_index(index),
            Op::Key(key) => errs.via_key(&key),
            Op::Details(details) => errs.map(|e| e.with_details(details)),
        };
    }

    // Path rewriting never adds or drops issues.
    assert_eq!(errs.as_ref().map_or(0, |e| e.issues().len()), issues);
    let _ = errs.error_string();
});
