//! Endpoint URL decomposition
//!
//! Splits a raw endpoint string into a base server URL, a normalized
//! path template, and the path-variable and query-parameter names found
//! in it. Collections use `<<name>>` for path variables; the template
//! output uses the `{name}` convention.
//!
//! Malformed URLs never fail the export: anything the URL parser
//! rejects degrades to a best-effort split where the literal remainder
//! becomes the path and no parameters are extracted.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Regex for `<<name>>` path-variable placeholders
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<<(.+?)>>").unwrap());

/// Loose `scheme://host` split used when strict parsing fails
static LOOSE_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(https?://[^/]+)(/.*)?$").unwrap());

/// The decomposed parts of an endpoint URL
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecomposedUrl {
    /// Scheme + host (+ port), with no path or query; empty when the
    /// input had no recognizable base
    pub base_url: String,

    /// Path template with placeholders rewritten to `{name}`
    pub path: String,

    /// The full input with placeholders rewritten to `{name}`
    pub normalized_url: String,

    /// Path-variable names in left-to-right order, duplicates preserved
    pub path_variables: Vec<String>,

    /// Query-string keys, each reported once in first-seen order
    pub query_params: Vec<String>,
}

/// Decompose a raw endpoint string
///
/// Total: every input produces a usable result. Strictly parseable
/// URLs get placeholder extraction and query-key collection; anything
/// else takes the degraded path described in the module docs.
pub fn decompose(raw: &str) -> DecomposedUrl {
    match Url::parse(raw) {
        Ok(parsed) => decompose_parsed(raw, &parsed),
        Err(_) => decompose_loose(raw),
    }
}

fn decompose_parsed(raw: &str, parsed: &Url) -> DecomposedUrl {
    // Placeholder work happens on the raw text: the parser percent-encodes
    // angle brackets, so `parsed.path()` no longer contains `<<name>>`.
    let raw_path = raw_path_of(raw);

    let path_variables = PLACEHOLDER_REGEX
        .captures_iter(raw_path)
        .map(|captures| captures[1].to_string())
        .collect();

    let path = PLACEHOLDER_REGEX.replace_all(raw_path, "{$1}").into_owned();
    let normalized_url = PLACEHOLDER_REGEX.replace_all(raw, "{$1}").into_owned();

    let mut query_params: Vec<String> = Vec::new();
    for (key, _) in parsed.query_pairs() {
        let key = key.into_owned();
        if !query_params.contains(&key) {
            query_params.push(key);
        }
    }

    let mut base_url = format!("{}://", parsed.scheme());
    if let Some(host) = parsed.host_str() {
        base_url.push_str(host);
    }
    if let Some(port) = parsed.port() {
        base_url.push(':');
        base_url.push_str(&port.to_string());
    }

    DecomposedUrl {
        base_url,
        path,
        normalized_url,
        path_variables,
        query_params,
    }
}

/// Slice the path out of the raw URL text: everything between the end of
/// the authority and the start of the query or fragment
fn raw_path_of(raw: &str) -> &str {
    let without_fragment = raw.split('#').next().unwrap_or(raw);
    let after_scheme = match without_fragment.find("://") {
        Some(idx) => &without_fragment[idx + 3..],
        None => without_fragment,
    };
    let authority_end = after_scheme
        .find(['/', '?'])
        .unwrap_or(after_scheme.len());
    let rest = &after_scheme[authority_end..];
    let path_end = rest.find('?').unwrap_or(rest.len());
    let path = &rest[..path_end];

    if path.is_empty() {
        "/"
    } else {
        path
    }
}

fn decompose_loose(raw: &str) -> DecomposedUrl {
    match LOOSE_URL_REGEX.captures(raw) {
        Some(captures) => DecomposedUrl {
            base_url: captures[1].to_string(),
            path: captures
                .get(2)
                .map_or_else(|| "/".to_string(), |m| m.as_str().to_string()),
            normalized_url: raw.to_string(),
            ..DecomposedUrl::default()
        },
        None => DecomposedUrl {
            base_url: String::new(),
            path: raw.to_string(),
            normalized_url: raw.to_string(),
            ..DecomposedUrl::default()
        },
    }
}
