//! Schema types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaType::String => write!(f, "string"),
            SchemaType::Number => write!(f, "number"),
            SchemaType::Integer => write!(f, "integer"),
            SchemaType::Boolean => write!(f, "boolean"),
            SchemaType::Object => write!(f, "object"),
            SchemaType::Array => write!(f, "array"),
        }
    }
}

/// An inferred structural schema
///
/// Every field is optional so the unconstrained schema serializes to
/// `{}`, which is how OpenAPI spells "any value".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Schema type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    /// Format hint (e.g. "date-time", "email", "uuid")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Array items schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Nested properties (for objects)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,

    /// Required property names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    /// The unconstrained schema, `{}`
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Plain string schema
    pub fn string() -> Self {
        Self::typed(SchemaType::String)
    }

    /// String schema with a format hint
    pub fn string_with_format(format: &str) -> Self {
        Self {
            format: Some(format.to_string()),
            ..Self::typed(SchemaType::String)
        }
    }

    /// Integer schema
    pub fn integer() -> Self {
        Self::typed(SchemaType::Integer)
    }

    /// Floating-point number schema
    pub fn number() -> Self {
        Self::typed(SchemaType::Number)
    }

    /// Boolean schema
    pub fn boolean() -> Self {
        Self::typed(SchemaType::Boolean)
    }

    /// Object schema with no inferred properties
    pub fn object() -> Self {
        Self::typed(SchemaType::Object)
    }

    /// Object schema with properties and a required list
    pub fn object_with(properties: IndexMap<String, Schema>, required: Vec<String>) -> Self {
        Self {
            properties: Some(properties),
            required,
            ..Self::typed(SchemaType::Object)
        }
    }

    /// Array schema wrapping an item schema
    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::typed(SchemaType::Array)
        }
    }

    fn typed(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    /// Whether this is a composite (object or array) schema
    pub fn is_composite(&self) -> bool {
        matches!(
            self.schema_type,
            Some(SchemaType::Object | SchemaType::Array)
        )
    }
}

/// A `$ref` pointer into the document's reusable components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl Reference {
    /// Reference to a named schema under `#/components/schemas`
    pub fn schema(name: &str) -> Self {
        Self {
            reference: format!("#/components/schemas/{name}"),
        }
    }

    /// Reference to a named example under `#/components/examples`
    pub fn example(name: &str) -> Self {
        Self {
            reference: format!("#/components/examples/{name}"),
        }
    }
}

/// Either an inline schema or a reference to a registered one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref(Reference),
    Inline(Schema),
}

impl SchemaOrRef {
    /// Inline string schema shorthand, the universal fallback
    pub fn string() -> Self {
        SchemaOrRef::Inline(Schema::string())
    }

    /// Reference shorthand for a registered schema name
    pub fn named(name: &str) -> Self {
        SchemaOrRef::Ref(Reference::schema(name))
    }
}

/// Document-wide registry of named schemas
///
/// Append-only for the duration of one export run. Names are made
/// unique by suffixing a monotonically increasing counter, so a
/// registered schema is never overwritten or mutated.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    entries: IndexMap<String, Schema>,
    counter: usize,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under `{base_name}_{counter}` and return the
    /// generated name
    pub fn register(&mut self, base_name: &str, schema: Schema) -> String {
        let name = format!("{base_name}_{}", self.counter);
        self.counter += 1;
        tracing::debug!(schema = %name, "registered named schema");
        self.entries.insert(name.clone(), schema);
        name
    }

    /// Look up a registered schema
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.entries.get(name)
    }

    /// Number of registered schemas
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the registry, yielding the name → schema map in
    /// registration order
    pub fn into_entries(self) -> IndexMap<String, Schema> {
        self.entries
    }
}
