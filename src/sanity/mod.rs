//! Request descriptors for the Sanity content platform.
//!
//! Building a request is pure: this module decides the endpoint URL and the
//! JSON body, and hands the descriptor to a
//! [`ContentTransport`](crate::enrich::ContentTransport) that performs the
//! call. Two query languages are supported:
//!
//! | Kind    | Endpoint                                                          | Body                    | Data under |
//! |---------|-------------------------------------------------------------------|-------------------------|------------|
//! | GROQ    | `https://{project}.{api,apicdn}.sanity.io/v{version}/data/query/{dataset}` | `{query, params}`       | `result`   |
//! | GraphQL | `https://{project}.api.sanity.io/{version}/graphql/{dataset}/default`      | `{query, variables}`    | `data`     |

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::config::ClientConfig;

/// Which content query language a request uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Groq,
    GraphQl,
}

/// A fully described request to the content platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRequest {
    pub kind: QueryKind,
    pub url: String,
    pub body: Value,
    /// Bearer token for the transport to attach, if the dataset is private.
    #[serde(skip)]
    pub token: Option<String>,
}

/// Prefix `version` with `v` unless it already starts with one.
#[must_use]
pub fn normalize_api_version(version: &str) -> String {
    if version.starts_with('v') {
        version.to_string()
    } else {
        format!("v{version}")
    }
}

impl ContentRequest {
    /// Describe a GROQ query.
    ///
    /// Uses the CDN host when `useCdn` is set.
    #[must_use]
    pub fn groq(config: &ClientConfig, query: &str, params: Map<String, Value>) -> Self {
        let host = if config.use_cdn() { "apicdn" } else { "api" };
        let url = format!(
            "https://{}.{}.sanity.io/{}/data/query/{}",
            config.project_id(),
            host,
            normalize_api_version(config.api_version()),
            config.dataset()
        );
        Self {
            kind: QueryKind::Groq,
            url,
            body: json!({ "query": query, "params": params }),
            token: config.token().map(str::to_string),
        }
    }

    /// Describe a GraphQL query against the dataset's default tag.
    #[must_use]
    pub fn graphql(config: &ClientConfig, query: &str, variables: Map<String, Value>) -> Self {
        let url = format!(
            "https://{}.api.sanity.io/{}/graphql/{}/default",
            config.project_id(),
            config.api_version(),
            config.dataset()
        );
        Self {
            kind: QueryKind::GraphQl,
            url,
            body: json!({ "query": query, "variables": variables }),
            token: config.token().map(str::to_string),
        }
    }

    /// Pull the content document out of a raw response body.
    ///
    /// GROQ answers carry it under `result`, GraphQL answers under `data`.
    /// A missing field yields `None`.
    #[must_use]
    pub fn unwrap_response(&self, mut response: Value) -> Option<Value> {
        let field = match self.kind {
            QueryKind::Groq => "result",
            QueryKind::GraphQl => "data",
        };
        response.get_mut(field).map(Value::take)
    }
}
