//! HTTP method predicate.

use yacbv_core::{Predicate, ViewRequest};

/// Accepts requests whose HTTP method equals the configured one,
/// ignoring ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodPredicate {
    method: String,
}

impl MethodPredicate {
    /// Create a new method predicate.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }

    /// The configured method, as given.
    pub fn method(&self) -> &str {
        &self.method
    }
}

impl<Req: ViewRequest> Predicate<Req> for MethodPredicate {
    fn test(&self, request: &Req) -> bool {
        request.method().eq_ignore_ascii_case(&self.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::SimpleRequest;

    #[test]
    fn test_case_insensitive() {
        let get = MethodPredicate::new("get");

        assert!(get.test(&SimpleRequest::new("GET")));
        assert!(get.test(&SimpleRequest::new("Get")));
        assert!(!get.test(&SimpleRequest::new("POST")));
    }

    #[test]
    fn test_uppercase_config() {
        let post = MethodPredicate::new("POST");

        assert!(post.test(&SimpleRequest::new("post")));
        assert!(!post.test(&SimpleRequest::new("postx")));
    }
}
