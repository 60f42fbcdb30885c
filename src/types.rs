//! Common types used throughout the exporter
//!
//! This module contains shared type definitions and utility types
//! used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// HTTP Method
// ============================================================================

/// HTTP method supported by the exporter
///
/// Requests carry their method as a free-form string; it is validated
/// against this fixed set when the operation is built. Anything outside
/// the set causes the request to be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl Method {
    /// All supported methods, in the order they appear in a path item
    pub const ALL: [Method; 8] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Options,
        Method::Head,
        Method::Patch,
        Method::Trace,
    ];

    /// Parse a method string (case-insensitive)
    ///
    /// Returns `None` for anything outside the supported set.
    pub fn parse(s: &str) -> Option<Method> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Some(Method::Get),
            "post" => Some(Method::Post),
            "put" => Some(Method::Put),
            "delete" => Some(Method::Delete),
            "options" => Some(Method::Options),
            "head" => Some(Method::Head),
            "patch" => Some(Method::Patch),
            "trace" => Some(Method::Trace),
            _ => None,
        }
    }

    /// Lowercase name as used for path item keys
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
            Method::Options => "options",
            Method::Head => "head",
            Method::Patch => "patch",
            Method::Trace => "trace",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Content-Type Families
// ============================================================================

/// Content-type families the exporter distinguishes
///
/// JSON-family payloads get structural schema inference; multipart
/// payloads carry a key/value list instead of raw text; everything else
/// is treated as an opaque string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// `application/json` or any `…+json` media type
    Json,
    /// `multipart/form-data`
    Multipart,
    /// Any other media type, kept as an opaque string
    Opaque,
}

impl ContentKind {
    /// Classify a content-type string, ignoring parameters like charset
    pub fn classify(content_type: &str) -> ContentKind {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence == "application/json" || essence.ends_with("+json") {
            ContentKind::Json
        } else if essence == "multipart/form-data" {
            ContentKind::Multipart
        } else {
            ContentKind::Opaque
        }
    }

    /// Whether structural JSON inference applies
    pub fn is_json(self) -> bool {
        self == ContentKind::Json
    }
}
