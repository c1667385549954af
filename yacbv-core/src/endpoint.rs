//! # Endpoints and Wrappers
//!
//! An [`Endpoint`] is one fully wrapped candidate: given the view instance,
//! the request and the URL captures, it either declines
//! ([`Outcome::NotMatched`]) or produces a [`ViewOutput`].
//!
//! A [`Wrapper`] turns one endpoint into another. Predicate guards and
//! template rendering are both wrappers; so is any
//! `FnOnce(BoxEndpoint<V>) -> BoxEndpoint<V>`.

use crate::{
    error::BoxError,
    request::UrlArgs,
    response::ViewOutput,
    view::View,
};

/// Result of offering a request to one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The candidate accepted the request and produced a value.
    Matched(T),
    /// The candidate declined; the dispatch loop should try the next one.
    NotMatched,
}

impl<T> Outcome<T> {
    /// Whether the candidate accepted the request.
    pub fn is_matched(&self) -> bool {
        matches!(self, Outcome::Matched(_))
    }

    /// Maps the matched value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Matched(t) => Outcome::Matched(f(t)),
            Outcome::NotMatched => Outcome::NotMatched,
        }
    }

    /// The matched value, if any.
    pub fn matched(self) -> Option<T> {
        match self {
            Outcome::Matched(t) => Some(t),
            Outcome::NotMatched => None,
        }
    }
}

/// What an endpoint returns.
pub type EndpointResult<R> = Result<Outcome<ViewOutput<R>>, BoxError>;

/// One wrapped candidate of a view.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an endpoint of view `{V}`",
    label = "missing `Endpoint<{V}>` implementation",
    note = "Closures `Fn(&V, &V::Request, &UrlArgs) -> EndpointResult<V::Response>` are endpoints."
)]
pub trait Endpoint<V: View>: Send + Sync + 'static {
    /// Offer the request to this candidate.
    fn call(&self, view: &V, request: &V::Request, args: &UrlArgs) -> EndpointResult<V::Response>;
}

/// A type-erased endpoint.
pub type BoxEndpoint<V> = Box<dyn Endpoint<V>>;

impl<V, F> Endpoint<V> for F
where
    V: View,
    F: Fn(&V, &V::Request, &UrlArgs) -> EndpointResult<V::Response> + Send + Sync + 'static,
{
    fn call(&self, view: &V, request: &V::Request, args: &UrlArgs) -> EndpointResult<V::Response> {
        (self)(view, request, args)
    }
}

/// Decorates an endpoint.
///
/// Wrappers are consumed when applied; each configured handler gets its own
/// wrapper instances.
pub trait Wrapper<V: View>: Send + Sync + 'static {
    /// Wrap `inner`, returning the decorated endpoint.
    fn wrap(self: Box<Self>, inner: BoxEndpoint<V>) -> BoxEndpoint<V>;
}

/// A type-erased wrapper.
pub type BoxWrapper<V> = Box<dyn Wrapper<V>>;

impl<V, F> Wrapper<V> for F
where
    V: View,
    F: FnOnce(BoxEndpoint<V>) -> BoxEndpoint<V> + Send + Sync + 'static,
{
    fn wrap(self: Box<Self>, inner: BoxEndpoint<V>) -> BoxEndpoint<V> {
        (*self)(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_map() {
        assert_eq!(Outcome::Matched(2).map(|x| x * 2), Outcome::Matched(4));
        assert_eq!(Outcome::<i32>::NotMatched.map(|x| x * 2), Outcome::NotMatched);
        assert!(!Outcome::<()>::NotMatched.is_matched());
        assert_eq!(Outcome::Matched("a").matched(), Some("a"));
    }
}
