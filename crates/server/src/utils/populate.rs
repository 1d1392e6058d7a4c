use serde_json::{Map, Value};

/// Merges a caller-supplied populate spec with the relations an endpoint
/// always attaches. The required names are added without dropping or
/// overriding anything the caller asked for.
///
/// A plain string spec (a framework shorthand such as `"deep"`) is returned
/// unchanged and assumed to already expand to every required relation;
/// nothing verifies that assumption, so an exotic shorthand can
/// under-populate. Known limitation, kept as-is.
pub fn merge_populate(existing: Option<Value>, required: &[&str]) -> Value {
    match existing {
        None => required_object(required),
        Some(Value::String(shorthand)) => Value::String(shorthand),
        Some(Value::Array(names)) => {
            let mut merged: Vec<Value> = Vec::with_capacity(names.len() + required.len());
            for name in names {
                if !merged.contains(&name) {
                    merged.push(name);
                }
            }
            for key in required {
                let candidate = Value::String((*key).to_owned());
                if !merged.contains(&candidate) {
                    merged.push(candidate);
                }
            }
            Value::Array(merged)
        }
        Some(Value::Object(mut spec)) => {
            for key in required {
                if !spec.contains_key(*key) {
                    spec.insert((*key).to_owned(), Value::Bool(true));
                }
            }
            Value::Object(spec)
        }
        // Defensive fallback for shapes we do not understand
        Some(other) => other,
    }
}

fn required_object(required: &[&str]) -> Value {
    let mut spec = Map::new();
    for key in required {
        spec.insert((*key).to_owned(), Value::Bool(true));
    }
    Value::Object(spec)
}

/// Decodes the raw `populate` query parameter into a spec value: a JSON
/// object/array when it parses as one, otherwise a comma-separated name
/// list, otherwise a bare shorthand string.
pub fn parse_populate(raw: &str) -> Value {
    if let Ok(value) = serde_json::from_str::<Value>(raw)
        && (value.is_array() || value.is_object())
    {
        return value;
    }

    if raw.contains(',') {
        Value::Array(
            raw.split(',')
                .map(|name| Value::String(name.trim().to_owned()))
                .collect(),
        )
    } else {
        Value::String(raw.to_owned())
    }
}

/// Whether a normalized spec requests the given relation. A string
/// shorthand counts as requesting everything.
pub fn includes(spec: &Value, relation: &str) -> bool {
    match spec {
        Value::String(_) => true,
        Value::Array(names) => names.iter().any(|name| name.as_str() == Some(relation)),
        Value::Object(map) => map
            .get(relation)
            .is_some_and(|nested| nested != &Value::Bool(false)),
        _ => false,
    }
}

/// Whether a nested populate under `relation` asks for `nested`,
/// e.g. `{"modules": {"populate": {"lessons": true}}}`
pub fn includes_nested(spec: &Value, relation: &str, nested: &str) -> bool {
    match spec {
        Value::String(_) => true,
        Value::Object(map) => map
            .get(relation)
            .and_then(|inner| inner.get("populate"))
            .map(|inner| includes(inner, nested))
            .unwrap_or(false),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const REQUIRED: &[&str] = &["thumbnail"];

    #[test]
    fn absent_spec_becomes_required_object() {
        let merged = merge_populate(None, REQUIRED);
        assert_eq!(merged, json!({"thumbnail": true}));
    }

    #[test]
    fn string_shorthand_passes_through_unchanged() {
        let merged = merge_populate(Some(json!("deep")), REQUIRED);
        assert_eq!(merged, json!("deep"));
        assert!(includes(&merged, "thumbnail"));
    }

    #[test]
    fn array_spec_gains_required_without_duplicates() {
        let merged = merge_populate(
            Some(json!(["instructor", "thumbnail", "instructor"])),
            REQUIRED,
        );
        assert_eq!(merged, json!(["instructor", "thumbnail"]));
    }

    #[test]
    fn array_spec_is_superset_of_both_inputs() {
        let merged = merge_populate(Some(json!(["instructor", "tags"])), REQUIRED);
        for name in ["instructor", "tags", "thumbnail"] {
            assert!(includes(&merged, name), "missing {name}");
        }
    }

    #[test]
    fn object_spec_keeps_callers_nested_spec() {
        let nested = json!({"modules": {"populate": {"lessons": true}}});
        let merged = merge_populate(Some(nested.clone()), &["thumbnail", "modules"]);

        // "modules" was present, so the richer nested spec survives
        assert_eq!(merged["modules"], nested["modules"]);
        assert_eq!(merged["thumbnail"], json!(true));
    }

    #[test]
    fn required_names_are_always_included_for_every_shape() {
        for existing in [
            None,
            Some(json!("deep")),
            Some(json!(["instructor"])),
            Some(json!({"category": true})),
        ] {
            let merged = merge_populate(existing, REQUIRED);
            assert!(includes(&merged, "thumbnail"));
        }
    }

    #[test]
    fn unexpected_shapes_fall_through_unchanged() {
        assert_eq!(merge_populate(Some(json!(42)), REQUIRED), json!(42));
        assert!(!includes(&json!(42), "thumbnail"));
    }

    #[test]
    fn parses_comma_list_json_and_shorthand() {
        assert_eq!(
            parse_populate("instructor, course"),
            json!(["instructor", "course"])
        );
        assert_eq!(
            parse_populate(r#"{"modules": {"populate": {"lessons": true}}}"#),
            json!({"modules": {"populate": {"lessons": true}}})
        );
        assert_eq!(parse_populate("deep"), json!("deep"));
    }

    #[test]
    fn nested_lookup_follows_populate_key() {
        let spec = json!({"modules": {"populate": {"lessons": true}}});
        assert!(includes_nested(&spec, "modules", "lessons"));
        assert!(!includes_nested(&json!({"modules": true}), "modules", "lessons"));
        assert!(includes_nested(&json!("deep"), "modules", "lessons"));
    }
}
