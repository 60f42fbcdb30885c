//! Document assembler
//!
//! Walks the collection tree depth-first, builds one operation per
//! request, and materializes the accumulated registries into the final
//! document. Always returns a document: requests that cannot be built
//! are logged and skipped, never fatal.

use super::context::ExportContext;
use super::operation::build_operation;
use crate::collection::{Collection, Request};
use crate::openapi::{
    Components, Info, OpenApiDocument, PathItem, Server, Tag, OPENAPI_VERSION,
};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Document description used when the input carries none
const DEFAULT_DESCRIPTION: &str = "Generated from an API request collection";

/// Title used for a flat request list with no collection around it
const DEFAULT_TITLE: &str = "API Collection";

/// Export a collection tree into an OpenAPI document
///
/// Never fails; a request that cannot be built is omitted and the rest
/// of the document is still produced.
pub fn export_collection(collection: &Collection) -> OpenApiDocument {
    let mut assembler = Assembler::new();
    assembler.walk(collection, None);

    let description = collection
        .description
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string();

    assembler.finish(Info {
        title: collection.name.clone(),
        version: "1.0.0".to_string(),
        description: Some(description),
        contact: None,
    })
}

/// Export a flat request list, treated as one implicit unnamed collection
pub fn export_requests(requests: &[Request]) -> OpenApiDocument {
    let mut assembler = Assembler::new();
    assembler.process_requests(requests, None);

    assembler.finish(Info {
        title: DEFAULT_TITLE.to_string(),
        version: "1.0.0".to_string(),
        description: Some(DEFAULT_DESCRIPTION.to_string()),
        contact: None,
    })
}

/// One export run: the accumulating context plus the paths map
struct Assembler {
    ctx: ExportContext,
    paths: IndexMap<String, PathItem>,
}

impl Assembler {
    fn new() -> Self {
        Self {
            ctx: ExportContext::new(),
            paths: IndexMap::new(),
        }
    }

    /// Depth-first traversal in declared tree order
    fn walk(&mut self, collection: &Collection, folder_name: Option<&str>) {
        self.process_requests(&collection.requests, folder_name);

        for folder in &collection.folders {
            if let Some(description) = folder
                .description
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
            {
                self.ctx.add_tag_description(&folder.name, description);
            }

            self.walk(folder, Some(&folder.name));
        }
    }

    fn process_requests(&mut self, requests: &[Request], folder_name: Option<&str>) {
        for request in requests {
            self.process_request(request, folder_name);
        }
    }

    fn process_request(&mut self, request: &Request, folder_name: Option<&str>) {
        match build_operation(request, folder_name, &mut self.ctx) {
            Ok(built) => {
                debug!(request = %request.name, path = %built.path, method = %built.method, "built operation");
                // A later request at the same (path, method) silently
                // replaces the earlier one.
                self.paths
                    .entry(built.path)
                    .or_default()
                    .insert(built.method, built.operation);
            }
            Err(reason) => {
                warn!(request = %request.name, %reason, "skipping request");
                self.ctx.record_skip(&request.name, reason);
            }
        }
    }

    fn finish(self, info: Info) -> OpenApiDocument {
        let servers = self
            .ctx
            .servers
            .iter()
            .map(|url| Server {
                url: url.clone(),
                description: Some(format!("Server for {url}")),
            })
            .collect();

        let tags = if self.ctx.tag_descriptions.is_empty() {
            None
        } else {
            Some(
                self.ctx
                    .tag_descriptions
                    .iter()
                    .map(|(name, description)| Tag {
                        name: name.clone(),
                        description: description.clone(),
                    })
                    .collect(),
            )
        };

        OpenApiDocument {
            openapi: OPENAPI_VERSION.to_string(),
            info,
            servers,
            paths: self.paths,
            components: Components {
                schemas: self.ctx.schemas.into_entries(),
                security_schemes: self.ctx.security_schemes,
                examples: self.ctx.examples,
            },
            tags,
        }
    }
}
