//! Parameter presence predicate.

use yacbv_core::{Predicate, ViewRequest};

/// Where a [`ParamPredicate`] looks for its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamSource {
    /// The merged lookup: body, then query string.
    #[default]
    Any,
    /// Only the query string.
    Query,
    /// Only the form body.
    Body,
}

/// Accepts requests that carry the configured parameter.
///
/// Only presence is checked; an empty value (`?q=`) still matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamPredicate {
    name: String,
    source: ParamSource,
}

impl ParamPredicate {
    /// Match on presence in either the body or the query string.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_source(name, ParamSource::Any)
    }

    /// Match on presence in a specific source.
    pub fn with_source(name: impl Into<String>, source: ParamSource) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the parameter is looked up.
    pub fn source(&self) -> ParamSource {
        self.source
    }
}

impl<Req: ViewRequest> Predicate<Req> for ParamPredicate {
    fn test(&self, request: &Req) -> bool {
        match self.source {
            ParamSource::Any => request.has_param(&self.name),
            ParamSource::Query => request.query_param(&self.name).is_some(),
            ParamSource::Body => request.body_param(&self.name).is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::SimpleRequest;

    #[test]
    fn test_presence_ignores_method() {
        let q = ParamPredicate::new("q");

        assert!(q.test(&SimpleRequest::get().with_query("q=anything")));
        assert!(q.test(&SimpleRequest::new("DELETE").with_query("q=")));
        assert!(q.test(&SimpleRequest::post().with_body("q=1")));
        assert!(!q.test(&SimpleRequest::get().with_query("query=1")));
    }

    #[test]
    fn test_accessors() {
        let any = ParamPredicate::new("q");
        assert_eq!(any.name(), "q");
        assert_eq!(any.source(), ParamSource::Any);

        let body = ParamPredicate::with_source("token", ParamSource::Body);
        assert_eq!(body.name(), "token");
        assert_eq!(body.source(), ParamSource::Body);
    }

    #[test]
    fn test_source_restriction() {
        let request = SimpleRequest::post().with_query("page=2").with_body("q=x");

        assert!(ParamPredicate::with_source("q", ParamSource::Body).test(&request));
        assert!(!ParamPredicate::with_source("q", ParamSource::Query).test(&request));
        assert!(ParamPredicate::with_source("page", ParamSource::Query).test(&request));
        assert!(!ParamPredicate::with_source("page", ParamSource::Body).test(&request));
    }
}
