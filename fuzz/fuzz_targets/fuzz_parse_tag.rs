#![no_main]

use apis_validators::tag::parse_tag;
use apis_validators::validators::{FieldValidator, Validator};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // The first byte picks where the tag ends and the probed option begins.
    let split = data[0] as usize % data.len();
    let (tag_bytes, opt_bytes) = data[1..].split_at(split.min(data.len() - 1));

    let raw = String::from_utf8_lossy(tag_bytes);
    let opt = String::from_utf8_lossy(opt_bytes);

    let tag = parse_tag(&raw);
    if tag.options.contains(&opt) && !opt.is_empty() {
        assert!(
            tag.options.tokens().any(|t| t == opt),
            "contains({:?}) on {:?} without a matching token",
            opt,
            raw
        );
    }

    let validator = Validator::from_tag(&raw);
    let _ = validator.validate(&opt);
});
