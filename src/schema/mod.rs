//! Schema inference module
//!
//! Reverse-engineers structural schemas from example JSON values.
//!
//! # Features
//!
//! - **Scalar Inference**: string/number/integer/boolean with string
//!   sub-formats (email, date, date-time, uuid)
//! - **Recursive Synthesis**: nested object/array schemas with a
//!   required-field list derived from the example
//! - **Named Registration**: composite root schemas are registered in a
//!   document-wide registry and referenced by `$ref`

mod inference;
mod types;

pub use inference::{infer_value, synthesize, synthesize_named, MAX_SYNTHESIS_DEPTH};
pub use types::{Reference, Schema, SchemaOrRef, SchemaRegistry, SchemaType};

#[cfg(test)]
mod tests;
