use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{headers::Headers, method::Method, route::Route};

/// A request as handed over by the invocation shell.
///
/// Deserializes from the event shape used by function-style invocations:
/// `httpMethod`, `path`, `headers` (which may be `null`) and an optional `body`.
/// Header entries whose value is not a string are treated as not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(rename = "httpMethod", alias = "method")]
    pub method: Method,
    pub path: String,
    #[serde(default, deserialize_with = "string_headers")]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

fn string_headers<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let headers = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?;

    Ok(headers
        .into_iter()
        .flatten()
        .filter_map(|(name, value)| match value {
            Value::String(value) => Some((name, value)),
            _ => None,
        })
        .collect())
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Build the case-insensitive header view and classify the route.
    pub fn normalize(&self) -> NormalizedRequest<'_> {
        NormalizedRequest {
            route: Route::classify(&self.path),
            method: self.method,
            headers: Headers::from_pairs(&self.headers),
            body: self.body.as_deref(),
        }
    }
}

/// A request after header normalization and route classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest<'a> {
    pub route: Route,
    pub method: Method,
    pub headers: Headers,
    pub body: Option<&'a str>,
}
