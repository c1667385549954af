//! A minimal owned request.
//!
//! [`SimpleRequest`] is enough to drive views outside a framework, in tests
//! or in adapters that have already parsed the request. Query strings and
//! bodies are parsed as `application/x-www-form-urlencoded`.

use url::form_urlencoded;
use yacbv_core::ViewRequest;

/// An owned request with a method, query parameters and body parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRequest {
    method: String,
    query: Vec<(String, String)>,
    body: Vec<(String, String)>,
}

impl SimpleRequest {
    /// Create a request with the given method and no parameters.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            query: Vec::new(),
            body: Vec::new(),
        }
    }

    /// A `GET` request.
    pub fn get() -> Self {
        Self::new("GET")
    }

    /// A `POST` request.
    pub fn post() -> Self {
        Self::new("POST")
    }

    /// Append the pairs of an encoded query string (without the `?`).
    pub fn with_query(mut self, query: &str) -> Self {
        self.query.extend(parse(query));
        self
    }

    /// Append the pairs of an encoded form body.
    pub fn with_body(mut self, body: &str) -> Self {
        self.body.extend(parse(body));
        self
    }

    /// Append one query parameter.
    pub fn query_pair(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append one body parameter.
    pub fn body_pair(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.body.push((name.into(), value.into()));
        self
    }
}

fn parse(input: &str) -> impl Iterator<Item = (String, String)> + '_ {
    form_urlencoded::parse(input.as_bytes()).map(|(k, v)| (k.into_owned(), v.into_owned()))
}

// Repeated keys resolve to the last value.
fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

impl ViewRequest for SimpleRequest {
    fn method(&self) -> &str {
        &self.method
    }

    fn query_param(&self, name: &str) -> Option<&str> {
        lookup(&self.query, name)
    }

    fn body_param(&self, name: &str) -> Option<&str> {
        lookup(&self.body, name)
    }
}
