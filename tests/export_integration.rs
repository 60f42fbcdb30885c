//! End-to-end export tests
//!
//! Builds collections in memory, runs the full export, and checks the
//! serialized document shape.

use openapi_export::collection::{
    AuthDescriptor, AuthScheme, BodyPayload, Collection, KeyValueEntry, Request, RequestBody,
    SavedResponse,
};
use openapi_export::{export_collection, export_requests};
use pretty_assertions::assert_eq;
use serde_json::json;

fn request(name: &str, method: &str, endpoint: &str) -> Request {
    Request {
        name: name.to_string(),
        method: method.to_string(),
        endpoint: endpoint.to_string(),
        ..Request::default()
    }
}

fn petstore() -> Collection {
    Collection {
        name: "Pet Store".to_string(),
        description: Some("Pet management API".to_string()),
        requests: vec![request("Health", "GET", "https://api.petstore.dev/health")],
        folders: vec![
            Collection {
                name: "Pets".to_string(),
                description: Some("CRUD for pets".to_string()),
                requests: vec![
                    request("List pets", "GET", "https://api.petstore.dev/pets?limit=10"),
                    {
                        let mut req =
                            request("Create pet", "POST", "https://api.petstore.dev/pets");
                        req.body = Some(RequestBody {
                            content_type: Some("application/json".to_string()),
                            payload: BodyPayload::Text(
                                r#"{"name": "Rex", "age": 3, "vaccinated": true}"#.to_string(),
                            ),
                        });
                        req.responses.insert(
                            "Created".to_string(),
                            SavedResponse {
                                code: Some(201),
                                headers: vec![KeyValueEntry::new(
                                    "Content-Type",
                                    "application/json",
                                )],
                                body: Some(r#"{"id": 1, "name": "Rex"}"#.to_string()),
                                description: None,
                            },
                        );
                        req
                    },
                    request(
                        "Get pet",
                        "GET",
                        "https://api.petstore.dev/pets/<<petId>>",
                    ),
                ],
                folders: Vec::new(),
            },
            Collection {
                name: "Admin".to_string(),
                description: None,
                requests: vec![{
                    let mut req =
                        request("Purge", "DELETE", "https://admin.petstore.dev/purge");
                    req.auth = Some(AuthDescriptor {
                        active: true,
                        scheme: AuthScheme::Bearer {
                            token: "admin-token".to_string(),
                        },
                    });
                    req
                }],
                folders: Vec::new(),
            },
        ],
    }
}

#[test]
fn test_full_collection_export() {
    let document = export_collection(&petstore());

    assert_eq!(document.openapi, "3.1.0");
    assert_eq!(document.info.title, "Pet Store");
    assert_eq!(
        document.info.description.as_deref(),
        Some("Pet management API")
    );

    // Two distinct hosts across five requests
    let server_urls: Vec<&str> = document.servers.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(
        server_urls,
        vec!["https://api.petstore.dev", "https://admin.petstore.dev"]
    );

    // One path entry per distinct path; /pets holds two operations
    assert_eq!(document.paths.len(), 4);
    assert!(document.paths.contains_key("/health"));
    assert!(document.paths.contains_key("/pets"));
    assert!(document.paths.contains_key("/pets/{petId}"));
    assert!(document.paths.contains_key("/purge"));

    // Operation count never exceeds the supported-method request count
    assert!(document.operation_count() <= 5);
    assert_eq!(document.operation_count(), 5);

    // Folder descriptions became tags; folders without one don't
    let tags = document.tags.as_ref().unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "Pets");
    assert_eq!(tags[0].description, "CRUD for pets");

    // Bearer auth registered once
    assert!(document.components.security_schemes.contains_key("bearerAuth"));
}

#[test]
fn test_path_variable_becomes_required_parameter() {
    let document = export_collection(&petstore());
    let value = document.to_json_value().unwrap();

    let parameters = &value["paths"]["/pets/{petId}"]["get"]["parameters"];
    let path_params: Vec<&serde_json::Value> = parameters
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["in"] == "path" && p["name"] == "petId")
        .collect();

    assert_eq!(path_params.len(), 1);
    assert_eq!(path_params[0]["required"], json!(true));
    assert_eq!(path_params[0]["schema"], json!({"type": "string"}));
}

#[test]
fn test_query_string_stripped_from_path() {
    let document = export_collection(&petstore());
    let value = document.to_json_value().unwrap();

    // The query string never leaks into the path template, and URL
    // query keys alone don't become parameter entries
    assert_eq!(value["paths"]["/pets"]["get"]["summary"], "List pets");
    assert!(value["paths"]["/pets"]["get"].get("parameters").is_none());
    assert!(value["paths"]
        .as_object()
        .unwrap()
        .keys()
        .all(|path| !path.contains('?')));
}

#[test]
fn test_body_schema_reference_round_trip() {
    let document = export_collection(&petstore());
    let value = document.to_json_value().unwrap();

    let media = &value["paths"]["/pets"]["post"]["requestBody"]["content"]["application/json"];
    let reference = media["schema"]["$ref"].as_str().unwrap();
    let schema_name = reference.rsplit('/').next().unwrap();

    // The reference resolves inside the same document
    let registered = &value["components"]["schemas"][schema_name];
    assert_eq!(registered["type"], "object");
    assert_eq!(registered["properties"]["name"], json!({"type": "string"}));
    assert_eq!(registered["properties"]["age"], json!({"type": "integer"}));
    assert_eq!(
        registered["properties"]["vaccinated"],
        json!({"type": "boolean"})
    );

    // Response schema registered separately, never mutated into the first
    let response_media =
        &value["paths"]["/pets"]["post"]["responses"]["201"]["content"]["application/json"];
    let response_ref = response_media["schema"]["$ref"].as_str().unwrap();
    assert_ne!(reference, response_ref);

    // Saved response body became a reusable example
    assert!(value["components"]["examples"]["Create_pet_Created"].is_object());
}

#[test]
fn test_format_inference_end_to_end() {
    let mut req = request("Invite", "POST", "https://api.example.com/invites");
    req.body = Some(RequestBody {
        content_type: Some("application/json".to_string()),
        payload: BodyPayload::Text(
            r#"{
                "email": "user@example.com",
                "starts": "2024-01-01",
                "created_at": "2024-01-01T10:00:00",
                "note": "not-a-date"
            }"#
            .to_string(),
        ),
    });

    let document = export_requests(&[req]);
    let value = document.to_json_value().unwrap();

    let (_, schema) = value["components"]["schemas"]
        .as_object()
        .unwrap()
        .iter()
        .next()
        .unwrap();
    let properties = &schema["properties"];

    assert_eq!(
        properties["email"],
        json!({"type": "string", "format": "email"})
    );
    assert_eq!(
        properties["starts"],
        json!({"type": "string", "format": "date"})
    );
    assert_eq!(
        properties["created_at"],
        json!({"type": "string", "format": "date-time"})
    );
    assert_eq!(properties["note"], json!({"type": "string"}));
}

#[test]
fn test_inactive_header_excluded_active_included() {
    let mut with_inactive = request("A", "GET", "https://api.example.com/a");
    with_inactive.headers = vec![KeyValueEntry {
        active: Some(false),
        ..KeyValueEntry::new("X-Debug", "1")
    }];

    let document = export_requests(&[with_inactive]);
    let value = document.to_json_value().unwrap();
    assert!(value["paths"]["/a"]["get"].get("parameters").is_none());

    let mut with_active = request("A", "GET", "https://api.example.com/a");
    with_active.headers = vec![KeyValueEntry::new("X-Debug", "1")];

    let document = export_requests(&[with_active]);
    let value = document.to_json_value().unwrap();
    let parameters = value["paths"]["/a"]["get"]["parameters"].as_array().unwrap();
    let debug_headers: Vec<_> = parameters
        .iter()
        .filter(|p| p["name"] == "X-Debug" && p["in"] == "header")
        .collect();
    assert_eq!(debug_headers.len(), 1);
}

#[test]
fn test_malformed_endpoint_still_exported() {
    let document = export_requests(&[request("Odd", "GET", "not a url at all")]);

    // Degraded mode: the literal input becomes the path, no server entry
    assert!(document.paths.contains_key("not a url at all"));
    assert!(document.servers.is_empty());
    assert_eq!(document.operation_count(), 1);
}

#[test]
fn test_deterministic_across_runs() {
    let collection = petstore();

    let first = export_collection(&collection).to_json_value().unwrap();
    let second = export_collection(&collection).to_json_value().unwrap();

    // Counters restart per call, so the documents are identical
    assert_eq!(first, second);
}

#[test]
fn test_multipart_body_kept_as_entries() {
    use openapi_export::collection::FormEntry;

    let mut req = request("Upload", "POST", "https://api.example.com/files");
    req.body = Some(RequestBody {
        content_type: Some("multipart/form-data".to_string()),
        payload: BodyPayload::Multipart(vec![FormEntry {
            key: "file".to_string(),
            value: "contents".to_string(),
            active: None,
        }]),
    });

    let document = export_requests(&[req]);
    let value = document.to_json_value().unwrap();

    let media = &value["paths"]["/files"]["post"]["requestBody"]["content"]["multipart/form-data"];
    assert_eq!(media["schema"], json!({"type": "string"}));
    assert_eq!(media["example"][0]["key"], "file");
}
