//! Export pipeline
//!
//! Walks a collection tree, builds one operation per request, and
//! assembles the final OpenAPI document.
//!
//! # Overview
//!
//! The assembler owns a fresh [`ExportContext`] per run; the operation
//! builder threads it through every request to accumulate servers,
//! named schemas, reusable examples, security schemes, and tag
//! descriptions. A request that cannot be built is logged, recorded in
//! the context's skip list, and dropped; the export itself never fails.

mod assembler;
mod context;
mod operation;

pub use assembler::{export_collection, export_requests};
pub use context::{ExportContext, SkippedRequest};
