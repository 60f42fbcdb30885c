//! OpenAPI 3.1 document model
//!
//! Typed representation of the output document: paths, operations,
//! parameters, responses, security schemes, and reusable components.
//! Serializes directly to the OpenAPI 3.1 JSON object shape; the
//! exporter builds these values, the caller decides where they go.

mod types;

pub use types::{
    Components, Contact, ExampleObject, HeaderObject, Info, MediaTypeObject, OAuthFlowImplicit,
    OAuthFlows, OpenApiDocument, Operation, Parameter, ParameterLocation, PathItem,
    RequestBodyObject, ResponseObject, SecurityRequirement, SecurityScheme, Server, Tag,
    OPENAPI_VERSION,
};
