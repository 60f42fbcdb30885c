//! # openapi-export
//!
//! Convert an in-memory API request collection into an OpenAPI 3.1
//! document.
//!
//! ## Features
//!
//! - **Schema Inference**: reverse-engineers structural schemas from
//!   example values, with string sub-formats (email, date, date-time,
//!   uuid)
//! - **URL Normalization**: turns raw endpoint strings with
//!   `<<placeholder>>` segments into `{name}` path templates plus
//!   path/query parameter lists
//! - **Document Assembly**: merges independently-authored requests into
//!   one consistent document with shared servers, a deduplicated schema
//!   registry, and unified security schemes
//! - **Best-Effort Export**: a malformed request is logged and skipped;
//!   the export itself never fails
//!
//! ## Quick Start
//!
//! ```rust
//! use openapi_export::{export_collection, Collection, Request};
//!
//! let collection = Collection {
//!     name: "Pet Store".to_string(),
//!     requests: vec![Request {
//!         name: "Get pet".to_string(),
//!         method: "GET".to_string(),
//!         endpoint: "https://api.example.com/pets/<<id>>".to_string(),
//!         ..Request::default()
//!     }],
//!     ..Collection::default()
//! };
//!
//! let document = export_collection(&collection);
//! assert!(document.paths.contains_key("/pets/{id}"));
//! let json = document.to_json_pretty().unwrap();
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the exporter
pub mod error;

/// Common types and type aliases
pub mod types;

/// Collection input model
pub mod collection;

/// Endpoint URL decomposition
pub mod endpoint;

/// Schema inference from example values
pub mod schema;

/// OpenAPI 3.1 document model
pub mod openapi;

/// Export pipeline: operation builder and document assembler
pub mod export;

// ============================================================================
// Re-exports
// ============================================================================

pub use collection::{Collection, Request};
pub use error::{Error, Result};
pub use export::{export_collection, export_requests};
pub use openapi::OpenApiDocument;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
