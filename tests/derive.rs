use apis_validators::{Fields, Validate, Value, validate};
use serde::Serialize;
use std::collections::BTreeMap;

fn names(obj: &dyn Fields) -> Vec<&'static str> {
    obj.fields().iter().map(|f| f.name()).collect()
}

/// A hand-written `Value` with no `Fields`.
#[derive(Default)]
struct Opaque(u8);

impl Value for Opaque {
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// ─── Field enumeration ──────────────────────────────────────────────────────

#[derive(Validate, Default)]
struct Plain {
    first: String,
    #[validate("Required")]
    second: u64,
    #[validate("-")]
    hidden: Opaque,
    third: BTreeMap<String, String>,
}

#[test]
fn fields_are_listed_in_declaration_order() {
    let obj = Plain::default();
    let fields = obj.fields();
    assert_eq!(names(&obj), vec!["first", "second", "third"]);
    assert_eq!(fields[0].tag, None);
    assert_eq!(fields[1].tag, Some("Required"));
    assert_eq!(fields[1].json, None);
}

#[test]
fn struct_zero_value_covers_every_field() {
    let mut obj = Plain::default();
    assert!(obj.is_zero());
    obj.third.insert("k".into(), "v".into());
    assert!(!obj.is_zero());
    assert!(obj.as_fields().is_some());
}

#[test]
fn skipped_field_is_unlisted_but_counts_toward_zero() {
    let obj = Plain {
        hidden: Opaque(7),
        ..Default::default()
    };
    assert!(!obj.is_zero());
    assert_eq!(names(&obj), vec!["first", "second", "third"]);
    assert!(obj.fields().iter().all(|f| f.tag != Some("-")));
}

// ─── Naming ─────────────────────────────────────────────────────────────────

#[derive(Validate, Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct Camel {
    #[validate("Required")]
    service_account_name: String,
    #[serde(rename = "image")]
    container_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename(serialize = "pullPolicy", deserialize = "pull_policy"))]
    pull_policy: Option<String>,
    #[serde(rename = "-")]
    dashed: String,
}

#[test]
fn serde_names_take_precedence() {
    let obj = Camel::default();
    assert_eq!(
        names(&obj),
        vec!["serviceAccountName", "image", "pullPolicy", "dashed"]
    );
    assert_eq!(
        validate(&obj).map(|e| e.issues()[0].paths.clone()),
        Some(vec!["serviceAccountName".to_string()])
    );
}

#[derive(Validate, Default)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
struct Screaming {
    max_surge: u8,
}

#[derive(Validate, Default)]
#[serde(rename_all = "PascalCase")]
struct Pascal {
    max_surge: u8,
}

#[test]
fn rename_all_rules() {
    assert_eq!(names(&Screaming::default()), vec!["MAX-SURGE"]);
    assert_eq!(names(&Pascal::default()), vec!["MaxSurge"]);
}

#[derive(Validate)]
struct Keyword {
    #[validate("Required")]
    r#type: String,
}

#[test]
fn raw_identifiers_are_unescaped() {
    let obj = Keyword {
        r#type: String::new(),
    };
    assert_eq!(names(&obj), vec!["type"]);
    assert_eq!(
        obj.validate().map(|e| e.to_string()),
        Some("missing field(s): type".to_string())
    );
}

// ─── Shapes ─────────────────────────────────────────────────────────────────

#[derive(Validate)]
struct Pair(#[validate("Required")] String, String);

#[derive(Validate)]
struct Unit;

#[test]
fn tuple_structs_use_positions() {
    let obj = Pair(String::new(), "x".into());
    assert_eq!(names(&obj), vec!["0", "1"]);
    assert_eq!(
        validate(&obj).map(|e| e.to_string()),
        Some("missing field(s): 0".to_string())
    );
}

#[test]
fn unit_structs_are_always_zero_and_valid() {
    assert!(Unit.fields().is_empty());
    assert!(Unit.is_zero());
    assert_eq!(validate(&Unit), None);
}

#[derive(Validate)]
struct Wrapper<'a, T> {
    #[validate("Required")]
    value: T,
    #[validate("QualifiedName")]
    label: &'a str,
}

#[test]
fn generic_structs() {
    let obj = Wrapper {
        value: 0u32,
        label: "ok",
    };
    assert_eq!(
        validate(&obj).map(|e| e.to_string()),
        Some("missing field(s): value".to_string())
    );

    let obj = Wrapper {
        value: Some("set"),
        label: "not ok",
    };
    assert_eq!(
        validate(&obj).map(|e| e.issues()[0].paths.clone()),
        Some(vec!["label".to_string()])
    );
}
