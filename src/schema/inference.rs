//! Schema inference from JSON values

use super::types::{Schema, SchemaOrRef, SchemaRegistry};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Maximum nesting depth for recursive synthesis
///
/// Input past this depth degrades to a bare `object` schema instead of
/// recursing further, so adversarially deep payloads cannot overflow
/// the stack. Real request/response bodies never get close.
pub const MAX_SYNTHESIS_DEPTH: usize = 32;

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static DATETIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").unwrap());

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

/// Infer the most specific scalar-level schema for a single value
///
/// Total: every input maps to some schema, with unrecognized shapes
/// degrading to the least specific applicable type. Standalone objects
/// reduce to a bare `object` schema; only [`synthesize`] recurses into
/// their properties.
pub fn infer_value(value: &Value) -> Schema {
    match value {
        Value::String(s) => infer_string(s),
        Value::Number(n) => {
            if is_integral(n) {
                Schema::integer()
            } else {
                Schema::number()
            }
        }
        Value::Bool(_) => Schema::boolean(),
        Value::Array(items) => match items.first() {
            // Item schema comes from the first element only; later
            // elements are not inspected.
            Some(first) => Schema::array(infer_value(first)),
            None => Schema::array(Schema::unconstrained()),
        },
        Value::Object(_) => Schema::object(),
        // Null has no useful structural type; fall back to string.
        Value::Null => Schema::string(),
    }
}

/// String format probes, in fixed priority order: first match wins
fn infer_string(s: &str) -> Schema {
    if s.contains('@') {
        Schema::string_with_format("email")
    } else if DATE_REGEX.is_match(s) {
        Schema::string_with_format("date")
    } else if DATETIME_REGEX.is_match(s) {
        Schema::string_with_format("date-time")
    } else if UUID_REGEX.is_match(s) {
        Schema::string_with_format("uuid")
    } else {
        Schema::string()
    }
}

/// Integer when the value carries no fractional component
fn is_integral(n: &serde_json::Number) -> bool {
    if n.is_i64() || n.is_u64() {
        return true;
    }
    n.as_f64().is_some_and(|f| f.fract() == 0.0)
}

/// Recursively synthesize a structural schema for a JSON value
///
/// Objects get a property map and a required list; a property counts as
/// required when its value is non-null in this one example. Arrays take
/// their item schema from the first element. Scalars delegate to
/// [`infer_value`].
pub fn synthesize(value: &Value) -> Schema {
    synthesize_at(value, 0)
}

fn synthesize_at(value: &Value, depth: usize) -> Schema {
    if depth >= MAX_SYNTHESIS_DEPTH {
        return Schema::object();
    }

    match value {
        Value::Array(items) => match items.first() {
            Some(first) => Schema::array(synthesize_at(first, depth + 1)),
            None => Schema::array(Schema::unconstrained()),
        },
        Value::Object(map) => {
            let mut properties = indexmap::IndexMap::new();
            let mut required = Vec::new();

            for (key, val) in map {
                properties.insert(key.clone(), synthesize_at(val, depth + 1));
                if !val.is_null() {
                    required.push(key.clone());
                }
            }

            Schema::object_with(properties, required)
        }
        scalar => infer_value(scalar),
    }
}

/// Synthesize a schema and, for composite roots, register it
///
/// Object and array roots are stored in the registry under a
/// disambiguated `{base_name}_{n}` name and returned as a `$ref`.
/// Scalar roots are returned inline and never registered.
pub fn synthesize_named(
    value: &Value,
    base_name: &str,
    registry: &mut SchemaRegistry,
) -> SchemaOrRef {
    let schema = synthesize(value);

    if schema.is_composite() {
        let name = registry.register(base_name, schema);
        SchemaOrRef::named(&name)
    } else {
        SchemaOrRef::Inline(schema)
    }
}
