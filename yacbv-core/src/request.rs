//! Request-side inputs of a view.
//!
//! The request itself belongs to the surrounding framework. Views only read
//! the HTTP method and parameters from it, through [`ViewRequest`].

use std::collections::BTreeMap;

/// Read access to the parts of a framework request that predicates inspect.
///
/// # Parameter precedence
///
/// [`param`](ViewRequest::param) is the merged lookup used by parameter
/// predicates. When a key exists in both the body and the query string, the
/// body value wins.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a view request",
    label = "missing `ViewRequest` implementation",
    note = "Implement `method`, `query_param` and `body_param` for `{Self}`."
)]
pub trait ViewRequest: Send + Sync + 'static {
    /// The HTTP method as sent by the client, e.g. `"GET"`.
    fn method(&self) -> &str;

    /// Look up a query-string parameter.
    fn query_param(&self, name: &str) -> Option<&str>;

    /// Look up a form body parameter.
    fn body_param(&self, name: &str) -> Option<&str>;

    /// Look up a parameter in the body, then in the query string.
    fn param(&self, name: &str) -> Option<&str> {
        self.body_param(name).or_else(|| self.query_param(name))
    }

    /// Whether the parameter is present in either source.
    fn has_param(&self, name: &str) -> bool {
        self.param(name).is_some()
    }
}

/// URL captures forwarded verbatim to handlers.
///
/// The router of the surrounding framework fills these in; the dispatch
/// layer never looks at them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlArgs {
    positional: Vec<String>,
    named: BTreeMap<String, String>,
}

impl UrlArgs {
    /// Create empty URL arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional capture.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Add a named capture.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Get a positional capture by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Get a named capture.
    pub fn named(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }

    /// All positional captures in order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Whether there are no captures at all.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Req {
        query: Vec<(&'static str, &'static str)>,
        body: Vec<(&'static str, &'static str)>,
    }

    impl ViewRequest for Req {
        fn method(&self) -> &str {
            "GET"
        }

        fn query_param(&self, name: &str) -> Option<&str> {
            self.query.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
        }

        fn body_param(&self, name: &str) -> Option<&str> {
            self.body.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
        }
    }

    #[test]
    fn test_body_wins_in_merged_lookup() {
        let req = Req {
            query: vec![("q", "from-query"), ("page", "2")],
            body: vec![("q", "from-body")],
        };

        assert_eq!(req.param("q"), Some("from-body"));
        assert_eq!(req.param("page"), Some("2"));
        assert!(!req.has_param("missing"));
    }

    #[test]
    fn test_url_args() {
        let args = UrlArgs::new().arg("42").kwarg("slug", "hello");

        assert_eq!(args.get(0), Some("42"));
        assert_eq!(args.get(1), None);
        assert_eq!(args.named("slug"), Some("hello"));
        assert!(!args.is_empty());
        assert!(UrlArgs::new().is_empty());
    }
}
