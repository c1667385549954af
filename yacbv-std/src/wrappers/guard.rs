//! Predicate Guard - Only run a handler when every predicate passes.

use yacbv_core::{
    BoxEndpoint, BoxPredicate, Endpoint, EndpointResult, Outcome, Predicate, UrlArgs, View,
    Wrapper,
};

/// A wrapper that gates its inner endpoint behind a conjunction of
/// predicates.
///
/// When every predicate accepts the request, the inner endpoint runs and its
/// result is returned unchanged. Otherwise the wrapped endpoint answers
/// [`Outcome::NotMatched`] without calling the inner endpoint. An empty guard
/// accepts everything.
///
/// # Example
///
/// ```rust,ignore
/// use yacbv_std::{predicates::MethodPredicate, wrappers::PredicateGuard};
///
/// let guard = PredicateGuard::<SearchView>::new()
///     .with(MethodPredicate::new("get"))
///     .with(|req: &SimpleRequest| req.has_param("q"));
/// ```
pub struct PredicateGuard<V: View> {
    predicates: Vec<BoxPredicate<V::Request>>,
}

impl<V: View> PredicateGuard<V> {
    /// Create a guard with no predicates.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Add a predicate. Predicates are evaluated in insertion order.
    pub fn with<P: Predicate<V::Request>>(mut self, predicate: P) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Append already boxed predicates.
    pub fn extend(
        mut self,
        predicates: impl IntoIterator<Item = BoxPredicate<V::Request>>,
    ) -> Self {
        self.predicates.extend(predicates);
        self
    }

    /// Number of predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the guard has no predicates.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Evaluate the predicates against a request.
    pub fn check(&self, request: &V::Request) -> bool {
        self.predicates.iter().enumerate().all(|(index, predicate)| {
            let passed = predicate.test(request);
            #[cfg(feature = "tracing")]
            {
                if !passed {
                    tracing::trace!(index, "predicate rejected request");
                }
            }
            #[cfg(not(feature = "tracing"))]
            {
                let _ = index;
            }
            passed
        })
    }
}

impl<V: View> Default for PredicateGuard<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: View> std::fmt::Debug for PredicateGuard<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateGuard")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

impl<V: View> Wrapper<V> for PredicateGuard<V> {
    fn wrap(self: Box<Self>, inner: BoxEndpoint<V>) -> BoxEndpoint<V> {
        Box::new(Guarded { guard: *self, inner })
    }
}

struct Guarded<V: View> {
    guard: PredicateGuard<V>,
    inner: BoxEndpoint<V>,
}

impl<V: View> Endpoint<V> for Guarded<V> {
    fn call(&self, view: &V, request: &V::Request, args: &UrlArgs) -> EndpointResult<V::Response> {
        if self.guard.check(request) {
            self.inner.call(view, request, args)
        } else {
            Ok(Outcome::NotMatched)
        }
    }
}
