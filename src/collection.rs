//! Collection input model
//!
//! These types describe the in-memory API collection handed to the
//! exporter: a recursive tree of folders holding request definitions.
//! The exporter never mutates them; persistence and editing live in the
//! calling application.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Collection Tree
// ============================================================================

/// A named, recursive tree of folders and request definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collection {
    /// Collection or folder name
    pub name: String,

    /// Optional description; folder descriptions become tag descriptions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Requests held directly by this folder, in declared order
    #[serde(default)]
    pub requests: Vec<Request>,

    /// Child folders, in declared order
    #[serde(default)]
    pub folders: Vec<Collection>,
}

// ============================================================================
// Request
// ============================================================================

/// A single saved HTTP request definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {
    /// Request name, used for operation summaries and generated names
    pub name: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// HTTP method as entered by the author
    ///
    /// Kept as a string so the model can hold anything; validation
    /// against the supported set happens when the operation is built.
    #[serde(default)]
    pub method: String,

    /// Raw endpoint URL, possibly containing `<<placeholder>>` segments
    #[serde(default)]
    pub endpoint: String,

    /// Request headers, in declared order
    #[serde(default)]
    pub headers: Vec<KeyValueEntry>,

    /// Query/path parameters, in declared order
    #[serde(default)]
    pub params: Vec<KeyValueEntry>,

    /// Optional request body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,

    /// Optional authentication descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthDescriptor>,

    /// Named saved responses, in declared order
    #[serde(default)]
    pub responses: IndexMap<String, SavedResponse>,
}

/// A header or parameter entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyValueEntry {
    pub key: String,

    #[serde(default)]
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Entries with `active == Some(false)` are excluded from the
    /// operation; an absent flag means active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl KeyValueEntry {
    /// Create an entry with just a key and value
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            description: None,
            active: None,
        }
    }

    /// Whether this entry participates in the export
    pub fn is_active(&self) -> bool {
        self.active != Some(false)
    }
}

// ============================================================================
// Request Body
// ============================================================================

/// Request body: a content-type tag plus a payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
    /// Declared content type (e.g. `application/json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// The payload itself; shape depends on the content type
    pub payload: BodyPayload,
}

/// Body payload variants
///
/// Text-like content types carry raw text; multipart bodies carry a
/// structured key/value list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BodyPayload {
    Text(String),
    Multipart(Vec<FormEntry>),
}

/// One part of a multipart body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormEntry {
    pub key: String,

    #[serde(default)]
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

// ============================================================================
// Authentication
// ============================================================================

/// Authentication attached to a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthDescriptor {
    /// Inactive auth is recorded on the request but not exported
    #[serde(default = "default_true")]
    pub active: bool,

    /// The concrete scheme and its credentials
    #[serde(flatten)]
    pub scheme: AuthScheme,
}

fn default_true() -> bool {
    true
}

/// Authentication scheme families
///
/// Closed dispatch over the known auth types; anything unrecognized
/// lands in `Other` and attaches no security requirement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "auth_type", rename_all = "kebab-case")]
pub enum AuthScheme {
    #[default]
    None,

    /// HTTP basic auth
    Basic { username: String, password: String },

    /// HTTP bearer token
    Bearer { token: String },

    /// OAuth2 implicit flow
    #[serde(rename = "oauth-2")]
    OAuth2 {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        authorization_url: Option<String>,
    },

    /// API key sent in a header
    ApiKey {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        header_name: Option<String>,
        #[serde(default)]
        value: String,
    },

    /// Unrecognized auth type tag
    #[serde(other)]
    Other,
}

// ============================================================================
// Saved Responses
// ============================================================================

/// A response captured alongside a request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedResponse {
    /// HTTP status code; 200 when unspecified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,

    /// Response headers, in captured order
    #[serde(default)]
    pub headers: Vec<KeyValueEntry>,

    /// Raw response body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
