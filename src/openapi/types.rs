//! OpenAPI document types

use crate::error::Result;
use crate::schema::{Reference, Schema, SchemaOrRef};
use crate::types::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The OpenAPI version emitted in every document
pub const OPENAPI_VERSION: &str = "3.1.0";

// ============================================================================
// Document Root
// ============================================================================

/// An OpenAPI 3.1 document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version, always [`OPENAPI_VERSION`]
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// Distinct servers seen across the collection, first-seen order
    #[serde(default)]
    pub servers: Vec<Server>,

    /// Path template → operations, in traversal order
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    /// Reusable schemas, security schemes, and examples
    #[serde(default)]
    pub components: Components,

    /// Tag metadata collected from folder descriptions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl OpenApiDocument {
    /// Serialize to a JSON value
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to a pretty-printed JSON string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of operations across all paths
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.operations().count()).sum()
    }
}

/// API metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

/// Contact information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A server entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Tag metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub description: String,
}

// ============================================================================
// Paths and Operations
// ============================================================================

/// Operations available on one path, keyed by method
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
}

impl PathItem {
    /// Insert an operation, silently replacing any existing one at the
    /// same method
    pub fn insert(&mut self, method: Method, operation: Operation) {
        *self.slot_mut(method) = Some(operation);
    }

    /// The operation registered for a method, if any
    pub fn operation(&self, method: Method) -> Option<&Operation> {
        match method {
            Method::Get => self.get.as_ref(),
            Method::Post => self.post.as_ref(),
            Method::Put => self.put.as_ref(),
            Method::Delete => self.delete.as_ref(),
            Method::Options => self.options.as_ref(),
            Method::Head => self.head.as_ref(),
            Method::Patch => self.patch.as_ref(),
            Method::Trace => self.trace.as_ref(),
        }
    }

    /// Iterate over the populated (method, operation) slots
    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
        Method::ALL
            .into_iter()
            .filter_map(move |method| self.operation(method).map(|op| (method, op)))
    }

    fn slot_mut(&mut self, method: Method) -> &mut Option<Operation> {
        match method {
            Method::Get => &mut self.get,
            Method::Post => &mut self.post,
            Method::Put => &mut self.put,
            Method::Delete => &mut self.delete,
            Method::Options => &mut self.options,
            Method::Head => &mut self.head,
            Method::Patch => &mut self.patch,
            Method::Trace => &mut self.trace,
        }
    }
}

/// One (path, method) operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBodyObject>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, ResponseObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
}

/// A security requirement: scheme name → required scopes
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

// ============================================================================
// Parameters
// ============================================================================

/// Where a parameter lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
}

/// An operation parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub schema: Schema,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

// ============================================================================
// Bodies and Responses
// ============================================================================

/// A request body description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBodyObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub required: bool,

    pub content: IndexMap<String, MediaTypeObject>,
}

/// Schema + example for one media type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaTypeObject {
    pub schema: SchemaOrRef,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,

    /// References into the document's reusable example registry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, Reference>>,
}

/// One response entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseObject {
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, HeaderObject>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaTypeObject>>,
}

/// A documented response header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub schema: Schema,
}

// ============================================================================
// Components
// ============================================================================

/// Reusable document components
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,

    #[serde(rename = "securitySchemes", default)]
    pub security_schemes: IndexMap<String, SecurityScheme>,

    #[serde(default)]
    pub examples: IndexMap<String, ExampleObject>,
}

/// A reusable example value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleObject {
    pub value: serde_json::Value,
}

/// A security scheme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SecurityScheme {
    /// HTTP auth (`basic`, `bearer`)
    #[serde(rename = "http")]
    Http { scheme: String },

    /// API key in a header
    #[serde(rename = "apiKey")]
    ApiKey {
        #[serde(rename = "in")]
        location: String,
        name: String,
    },

    /// OAuth2 flows
    #[serde(rename = "oauth2")]
    OAuth2 { flows: OAuthFlows },
}

impl SecurityScheme {
    /// HTTP scheme shorthand
    pub fn http(scheme: &str) -> Self {
        SecurityScheme::Http {
            scheme: scheme.to_string(),
        }
    }

    /// Header API key shorthand
    pub fn api_key_header(name: impl Into<String>) -> Self {
        SecurityScheme::ApiKey {
            location: "header".to_string(),
            name: name.into(),
        }
    }

    /// OAuth2 implicit-flow shorthand with no scopes
    pub fn oauth2_implicit(authorization_url: impl Into<String>) -> Self {
        SecurityScheme::OAuth2 {
            flows: OAuthFlows {
                implicit: OAuthFlowImplicit {
                    authorization_url: authorization_url.into(),
                    scopes: IndexMap::new(),
                },
            },
        }
    }
}

/// OAuth flow container (only the implicit flow is described)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthFlows {
    pub implicit: OAuthFlowImplicit,
}

/// The implicit OAuth2 flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthFlowImplicit {
    #[serde(rename = "authorizationUrl")]
    pub authorization_url: String,

    pub scopes: IndexMap<String, String>,
}
