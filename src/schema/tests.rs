//! Schema inference tests

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Scalar inference
// ============================================================================

#[test_case("user@example.com", Some("email"); "email by at sign")]
#[test_case("2024-01-01", Some("date"); "strict date")]
#[test_case("2024-01-01T10:00:00", Some("date-time"); "datetime prefix")]
#[test_case("2024-01-01T10:00:00.123Z", Some("date-time"); "datetime with millis")]
#[test_case("550e8400-e29b-41d4-a716-446655440000", Some("uuid"); "canonical uuid")]
#[test_case("not-a-date", None; "plain string")]
#[test_case("2024-1-1", None; "loose date does not match")]
#[test_case("550E8400-E29B-41D4-A716-44665544000", None; "truncated uuid")]
fn test_string_formats(input: &str, format: Option<&str>) {
    let schema = infer_value(&json!(input));
    assert_eq!(schema.schema_type, Some(SchemaType::String));
    assert_eq!(schema.format.as_deref(), format);
}

#[test]
fn test_format_priority_email_wins() {
    // Contains '@', so the email probe wins even though the rest looks
    // like a date
    let schema = infer_value(&json!("2024-01-01@example"));
    assert_eq!(schema.format.as_deref(), Some("email"));
}

#[test]
fn test_number_inference() {
    assert_eq!(infer_value(&json!(42)), Schema::integer());
    assert_eq!(infer_value(&json!(-7)), Schema::integer());
    assert_eq!(infer_value(&json!(3.5)), Schema::number());
    // No fractional component means integer, even for a float literal
    assert_eq!(infer_value(&json!(3.0)), Schema::integer());
}

#[test]
fn test_boolean_inference() {
    assert_eq!(infer_value(&json!(true)), Schema::boolean());
}

#[test]
fn test_null_falls_back_to_string() {
    assert_eq!(infer_value(&json!(null)), Schema::string());
}

#[test]
fn test_standalone_object_does_not_recurse() {
    let schema = infer_value(&json!({"nested": {"deep": 1}}));
    assert_eq!(schema, Schema::object());
    assert!(schema.properties.is_none());
}

#[test]
fn test_array_first_element_only() {
    // Heterogeneous arrays are typed by their first element
    let schema = infer_value(&json!(["text", 42, true]));
    assert_eq!(schema.schema_type, Some(SchemaType::Array));
    assert_eq!(*schema.items.unwrap(), Schema::string());
}

#[test]
fn test_empty_array() {
    let schema = infer_value(&json!([]));
    assert_eq!(schema.schema_type, Some(SchemaType::Array));
    assert_eq!(*schema.items.unwrap(), Schema::unconstrained());
}

// ============================================================================
// Recursive synthesis
// ============================================================================

#[test]
fn test_synthesize_object() {
    let schema = synthesize(&json!({
        "id": 1,
        "tags": ["a"],
        "active": true
    }));

    assert_eq!(schema.schema_type, Some(SchemaType::Object));
    let properties = schema.properties.as_ref().unwrap();
    assert_eq!(properties["id"], Schema::integer());
    assert_eq!(properties["tags"], Schema::array(Schema::string()));
    assert_eq!(properties["active"], Schema::boolean());

    assert!(schema.required.contains(&"id".to_string()));
    assert!(schema.required.contains(&"tags".to_string()));
    assert!(schema.required.contains(&"active".to_string()));
}

#[test]
fn test_synthesize_null_property_not_required() {
    let schema = synthesize(&json!({
        "name": "John",
        "middle_name": null
    }));

    assert!(schema.required.contains(&"name".to_string()));
    assert!(!schema.required.contains(&"middle_name".to_string()));

    // The null property itself still gets the string fallback schema
    let properties = schema.properties.unwrap();
    assert_eq!(properties["middle_name"], Schema::string());
}

#[test]
fn test_synthesize_nested() {
    let schema = synthesize(&json!({
        "user": {
            "email": "john@example.com",
            "scores": [1, 2, 3]
        }
    }));

    let user = &schema.properties.as_ref().unwrap()["user"];
    let user_props = user.properties.as_ref().unwrap();
    assert_eq!(user_props["email"], Schema::string_with_format("email"));
    assert_eq!(user_props["scores"], Schema::array(Schema::integer()));
    assert_eq!(user.required, vec!["email", "scores"]);
}

#[test]
fn test_synthesize_array_of_objects() {
    let schema = synthesize(&json!([{"id": 1}, {"id": 2, "extra": true}]));

    assert_eq!(schema.schema_type, Some(SchemaType::Array));
    let items = schema.items.unwrap();
    // Only the first element shapes the item schema
    assert!(items.properties.as_ref().unwrap().contains_key("id"));
    assert!(!items.properties.as_ref().unwrap().contains_key("extra"));
}

#[test]
fn test_synthesize_depth_bound() {
    // Build a value nested beyond the synthesis bound
    let mut value = json!("leaf");
    for _ in 0..(MAX_SYNTHESIS_DEPTH + 8) {
        value = json!({ "inner": value });
    }

    let mut schema = synthesize(&value);
    let mut depth = 0;
    while let Some(properties) = schema.properties {
        match properties.into_iter().next() {
            Some((_, inner)) => {
                schema = inner;
                depth += 1;
            }
            None => break,
        }
    }

    // Truncated subtree degrades to a bare object schema at the bound,
    // well short of the input's own nesting
    assert_eq!(schema.schema_type, Some(SchemaType::Object));
    assert_eq!(depth, MAX_SYNTHESIS_DEPTH);
}

// ============================================================================
// Named registration
// ============================================================================

#[test]
fn test_named_registration_for_composites() {
    let mut registry = SchemaRegistry::new();

    let result = synthesize_named(&json!({"id": 1}), "CreateUser_Schema", &mut registry);
    assert_eq!(result, SchemaOrRef::named("CreateUser_Schema_0"));
    assert_eq!(registry.len(), 1);
    assert!(registry.get("CreateUser_Schema_0").is_some());

    let result = synthesize_named(&json!([1, 2]), "ListIds_Schema", &mut registry);
    assert_eq!(result, SchemaOrRef::named("ListIds_Schema_1"));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_scalar_roots_stay_inline() {
    let mut registry = SchemaRegistry::new();

    let result = synthesize_named(&json!(42), "Answer_Schema", &mut registry);
    assert_eq!(result, SchemaOrRef::Inline(Schema::integer()));
    assert!(registry.is_empty());

    let result = synthesize_named(&json!("hello"), "Greeting_Schema", &mut registry);
    assert_eq!(result, SchemaOrRef::Inline(Schema::string()));
    assert!(registry.is_empty());
}

#[test]
fn test_registry_counter_disambiguates() {
    let mut registry = SchemaRegistry::new();
    let first = registry.register("Thing_Schema", Schema::object());
    let second = registry.register("Thing_Schema", Schema::object());

    assert_ne!(first, second);
    assert_eq!(first, "Thing_Schema_0");
    assert_eq!(second, "Thing_Schema_1");
}

// ============================================================================
// Serialization shape
// ============================================================================

#[test]
fn test_schema_serialization() {
    let schema = Schema::string_with_format("email");
    assert_eq!(
        serde_json::to_value(&schema).unwrap(),
        json!({"type": "string", "format": "email"})
    );

    assert_eq!(
        serde_json::to_value(Schema::unconstrained()).unwrap(),
        json!({})
    );

    let array = Schema::array(Schema::unconstrained());
    assert_eq!(
        serde_json::to_value(&array).unwrap(),
        json!({"type": "array", "items": {}})
    );
}

#[test]
fn test_ref_serialization() {
    let reference = SchemaOrRef::named("User_Schema_0");
    assert_eq!(
        serde_json::to_value(&reference).unwrap(),
        json!({"$ref": "#/components/schemas/User_Schema_0"})
    );
}
