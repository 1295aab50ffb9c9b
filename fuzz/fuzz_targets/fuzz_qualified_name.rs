#![no_main]

use apis_validators::validators::{FieldValidator, QualifiedName, is_qualified_name};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let errs = is_qualified_name(&s);
    let result = QualifiedName { required: true }.validate(&s);

    match result {
        None => assert!(errs.is_empty(), "{:?} accepted despite {:?}", s, errs),
        Some(_) => assert!(s.is_empty() || !errs.is_empty()),
    }
});
