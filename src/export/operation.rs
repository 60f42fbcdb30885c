//! Operation builder
//!
//! Turns one request definition into one OpenAPI operation, combining
//! URL decomposition, parameter inference, body and response schema
//! synthesis, and security-scheme attachment.

use super::context::ExportContext;
use crate::collection::{AuthScheme, BodyPayload, Request, SavedResponse};
use crate::endpoint::{self, DecomposedUrl};
use crate::error::{Error, Result};
use crate::openapi::{
    HeaderObject, MediaTypeObject, Operation, Parameter, ParameterLocation, RequestBodyObject,
    ResponseObject, SecurityRequirement, SecurityScheme,
};
use crate::schema::{infer_value, synthesize_named, Reference, Schema, SchemaOrRef};
use crate::types::{ContentKind, Method};
use indexmap::IndexMap;
use serde_json::Value;
use url::Url;

/// Authorization URL used when an OAuth2 descriptor doesn't carry one
const DEFAULT_AUTHORIZATION_URL: &str = "https://example.com/oauth/authorize";

/// Header name used when an API-key descriptor doesn't carry one
const DEFAULT_API_KEY_HEADER: &str = "X-API-KEY";

/// A request successfully turned into an operation
#[derive(Debug)]
pub(crate) struct BuiltOperation {
    pub path: String,
    pub method: Method,
    pub operation: Operation,
}

/// Build the operation for one request
///
/// The base URL is registered in the server set even when the request
/// is later rejected for an unsupported method, mirroring the order in
/// which the pieces are discovered.
pub(crate) fn build_operation(
    request: &Request,
    folder_name: Option<&str>,
    ctx: &mut ExportContext,
) -> Result<BuiltOperation> {
    let decomposed = endpoint::decompose(&request.endpoint);
    ctx.add_server(&decomposed.base_url);

    let method = Method::parse(&request.method)
        .ok_or_else(|| Error::unsupported_method(&request.method))?;

    let parameters = build_parameters(request, &decomposed);
    let request_body = build_request_body(request, method, ctx)?;
    let responses = build_responses(request, ctx);
    let security = build_security(request, ctx);

    let description = request
        .description
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(&request.name)
        .to_string();

    let operation = Operation {
        summary: Some(request.name.clone()),
        description: Some(description),
        tags: build_tags(folder_name, &decomposed.base_url),
        parameters: (!parameters.is_empty()).then_some(parameters),
        request_body,
        responses,
        security,
    };

    Ok(BuiltOperation {
        path: decomposed.path,
        method,
        operation,
    })
}

// ============================================================================
// Parameters
// ============================================================================

fn build_parameters(request: &Request, decomposed: &DecomposedUrl) -> Vec<Parameter> {
    let mut parameters = Vec::new();

    for param in request.params.iter().filter(|p| p.is_active()) {
        let is_path_variable = decomposed.path_variables.iter().any(|v| v == &param.key);
        let (location, kind) = if is_path_variable {
            (ParameterLocation::Path, "Path")
        } else {
            (ParameterLocation::Query, "Query")
        };

        parameters.push(Parameter {
            name: param.key.clone(),
            location,
            required: is_path_variable,
            description: Some(described(param.description.as_deref(), || {
                format!("{kind} parameter: {}", param.key)
            })),
            schema: infer_value(&Value::String(param.value.clone())),
            example: Some(Value::String(param.value.clone())),
        });
    }

    // Every path variable must surface as a required path parameter,
    // even when the request's own list omitted it.
    let mut synthesized: Vec<&str> = Vec::new();
    for variable in &decomposed.path_variables {
        let covered = request
            .params
            .iter()
            .any(|p| p.is_active() && p.key == *variable);
        if covered || synthesized.contains(&variable.as_str()) {
            continue;
        }
        synthesized.push(variable);

        parameters.push(Parameter {
            name: variable.clone(),
            location: ParameterLocation::Path,
            required: true,
            description: Some(format!("Path parameter: {variable}")),
            schema: Schema::string(),
            example: None,
        });
    }

    for header in request.headers.iter().filter(|h| h.is_active()) {
        parameters.push(Parameter {
            name: header.key.clone(),
            location: ParameterLocation::Header,
            required: true,
            description: Some(described(header.description.as_deref(), || {
                format!("Header: {}", header.key)
            })),
            schema: infer_value(&Value::String(header.value.clone())),
            example: None,
        });
    }

    parameters
}

fn described(explicit: Option<&str>, fallback: impl FnOnce() -> String) -> String {
    match explicit.map(str::trim).filter(|text| !text.is_empty()) {
        Some(text) => text.to_string(),
        None => fallback(),
    }
}

// ============================================================================
// Request Body
// ============================================================================

fn build_request_body(
    request: &Request,
    method: Method,
    ctx: &mut ExportContext,
) -> Result<Option<RequestBodyObject>> {
    if method == Method::Get {
        return Ok(None);
    }
    let Some(body) = &request.body else {
        return Ok(None);
    };
    let Some(content_type) = body.content_type.as_deref().filter(|ct| !ct.is_empty()) else {
        return Ok(None);
    };

    let (schema, example) = match &body.payload {
        BodyPayload::Text(text) if text.is_empty() => return Ok(None),
        BodyPayload::Text(text) if ContentKind::classify(content_type).is_json() => {
            match serde_json::from_str::<Value>(text) {
                Ok(parsed) => {
                    let base = format!("{}_Schema", sanitize_compact(&request.name));
                    let schema = synthesize_named(&parsed, &base, &mut ctx.schemas);
                    (schema, parsed)
                }
                // Unparseable JSON degrades to an opaque string body
                Err(_) => (SchemaOrRef::string(), Value::String(text.clone())),
            }
        }
        BodyPayload::Text(text) => (SchemaOrRef::string(), Value::String(text.clone())),
        BodyPayload::Multipart(entries) => {
            (SchemaOrRef::string(), serde_json::to_value(entries)?)
        }
    };

    let mut content = IndexMap::new();
    content.insert(
        content_type.to_string(),
        MediaTypeObject {
            schema,
            example: Some(example),
            examples: None,
        },
    );

    Ok(Some(RequestBodyObject {
        description: Some(format!("{} request body", request.name)),
        required: true,
        content,
    }))
}

// ============================================================================
// Responses
// ============================================================================

fn build_responses(request: &Request, ctx: &mut ExportContext) -> IndexMap<String, ResponseObject> {
    let mut responses = IndexMap::new();

    if request.responses.is_empty() {
        responses.insert(
            "200".to_string(),
            ResponseObject {
                description: "Successful response".to_string(),
                headers: None,
                content: None,
            },
        );
        return responses;
    }

    for (response_name, saved) in &request.responses {
        let status = saved.code.unwrap_or(200);
        responses.insert(
            status.to_string(),
            build_response(request, response_name, saved, ctx),
        );
    }

    responses
}

fn build_response(
    request: &Request,
    response_name: &str,
    saved: &SavedResponse,
    ctx: &mut ExportContext,
) -> ResponseObject {
    let content_type = saved
        .headers
        .iter()
        .find(|h| h.key.eq_ignore_ascii_case("content-type"))
        .map(|h| h.value.clone())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "application/json".to_string());

    let content = saved.body.as_deref().filter(|b| !b.is_empty()).map(|body| {
        let (schema, example) = if ContentKind::classify(&content_type).is_json() {
            match serde_json::from_str::<Value>(body) {
                Ok(parsed) => {
                    let base = format!(
                        "{}_Response_{}",
                        sanitize_compact(&request.name),
                        sanitize_compact(response_name)
                    );
                    let schema = synthesize_named(&parsed, &base, &mut ctx.schemas);
                    (schema, parsed)
                }
                Err(_) => (SchemaOrRef::string(), Value::String(body.to_string())),
            }
        } else {
            (SchemaOrRef::string(), Value::String(body.to_string()))
        };

        // Every response body also lands in the reusable example
        // registry and is referenced from this content entry.
        let example_name = format!("{}_{response_name}", sanitize_loose(&request.name));
        let example_value =
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
        ctx.add_example(example_name.clone(), example_value);

        let mut example_refs = IndexMap::new();
        example_refs.insert(response_name.to_string(), Reference::example(&example_name));

        let mut media = IndexMap::new();
        media.insert(
            content_type.clone(),
            MediaTypeObject {
                schema,
                example: Some(example),
                examples: Some(example_refs),
            },
        );
        media
    });

    let headers = if saved.headers.is_empty() {
        None
    } else {
        let map: IndexMap<String, HeaderObject> = saved
            .headers
            .iter()
            .map(|h| {
                (
                    h.key.clone(),
                    HeaderObject {
                        description: Some(described(h.description.as_deref(), || {
                            format!("Header {}", h.key)
                        })),
                        schema: infer_value(&Value::String(h.value.clone())),
                    },
                )
            })
            .collect();
        Some(map)
    };

    let description = match saved
        .description
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
    {
        Some(text) => format!("{response_name}: {text}"),
        None => response_name.to_string(),
    };

    ResponseObject {
        description,
        headers,
        content,
    }
}

// ============================================================================
// Tags and Security
// ============================================================================

fn build_tags(folder_name: Option<&str>, base_url: &str) -> Option<Vec<String>> {
    let mut tags = Vec::new();

    if let Some(folder) = folder_name {
        tags.push(folder.to_string());
    }

    if !base_url.is_empty() {
        if let Ok(parsed) = Url::parse(base_url) {
            if let Some(host) = parsed.host_str() {
                if !tags.iter().any(|t| t == host) {
                    tags.push(host.to_string());
                }
            }
        }
    }

    (!tags.is_empty()).then_some(tags)
}

fn build_security(
    request: &Request,
    ctx: &mut ExportContext,
) -> Option<Vec<SecurityRequirement>> {
    let auth = request.auth.as_ref().filter(|a| a.active)?;

    let (name, scheme) = match &auth.scheme {
        AuthScheme::Basic { .. } => ("basicAuth", SecurityScheme::http("basic")),
        AuthScheme::Bearer { .. } => ("bearerAuth", SecurityScheme::http("bearer")),
        AuthScheme::OAuth2 { authorization_url } => (
            "oauth2",
            SecurityScheme::oauth2_implicit(
                authorization_url
                    .as_deref()
                    .unwrap_or(DEFAULT_AUTHORIZATION_URL),
            ),
        ),
        AuthScheme::ApiKey { header_name, .. } => (
            "apiKey",
            SecurityScheme::api_key_header(
                header_name.as_deref().unwrap_or(DEFAULT_API_KEY_HEADER),
            ),
        ),
        // No auth, or a type this exporter doesn't describe
        AuthScheme::None | AuthScheme::Other => return None,
    };

    ctx.add_security_scheme(name, scheme);

    let mut requirement = SecurityRequirement::new();
    requirement.insert(name.to_string(), Vec::new());
    Some(vec![requirement])
}

// ============================================================================
// Name sanitizers
// ============================================================================

/// Strip everything but ASCII alphanumerics (schema name material)
fn sanitize_compact(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Replace non-alphanumerics with underscores (example name material)
fn sanitize_loose(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
