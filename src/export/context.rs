//! Run-scoped export context

use crate::error::Error;
use crate::openapi::{ExampleObject, SecurityScheme};
use crate::schema::SchemaRegistry;
use indexmap::{IndexMap, IndexSet};

/// A request omitted from the document, with the reason
///
/// Kept for diagnosability; not part of the emitted document.
#[derive(Debug)]
pub struct SkippedRequest {
    /// Name of the offending request
    pub request: String,
    /// Why it was skipped
    pub reason: Error,
}

/// Accumulating state for one export run
///
/// Owned by the assembler for the duration of a single call, never
/// shared: every export constructs a fresh context, so concurrent
/// exports need no coordination.
#[derive(Debug, Default)]
pub struct ExportContext {
    /// Named-schema registry
    pub schemas: SchemaRegistry,

    /// Reusable example registry
    pub examples: IndexMap<String, ExampleObject>,

    /// Distinct base URLs, first-seen order
    pub servers: IndexSet<String>,

    /// Folder name → tag description, first writer wins
    pub tag_descriptions: IndexMap<String, String>,

    /// Security schemes, one per scheme kind
    pub security_schemes: IndexMap<String, SecurityScheme>,

    /// Requests omitted from the document
    pub skipped: Vec<SkippedRequest>,
}

impl ExportContext {
    /// Create a fresh context
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a base URL; empty bases (degraded URL parses) are ignored
    pub fn add_server(&mut self, base_url: &str) {
        if !base_url.is_empty() {
            self.servers.insert(base_url.to_string());
        }
    }

    /// Record a folder's tag description; the first writer wins
    pub fn add_tag_description(&mut self, name: &str, description: &str) {
        self.tag_descriptions
            .entry(name.to_string())
            .or_insert_with(|| description.to_string());
    }

    /// Store a reusable example value
    pub fn add_example(&mut self, name: String, value: serde_json::Value) {
        self.examples.insert(name, ExampleObject { value });
    }

    /// Register a security scheme once per kind; later requests of the
    /// same kind reuse the first definition
    pub fn add_security_scheme(&mut self, name: &str, scheme: SecurityScheme) {
        if !self.security_schemes.contains_key(name) {
            tracing::debug!(scheme = %name, "registered security scheme");
            self.security_schemes.insert(name.to_string(), scheme);
        }
    }

    /// Record an omitted request
    pub fn record_skip(&mut self, request: &str, reason: Error) {
        self.skipped.push(SkippedRequest {
            request: request.to_string(),
            reason,
        });
    }
}
