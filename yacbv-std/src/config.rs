//! # Handler Configuration
//!
//! [`ViewConfig`] is the declarative description of one candidate: which
//! HTTP method it answers, which parameter must be present, which extra
//! predicates apply, and which template renders its context.
//!
//! Applying a configuration to a handler produces the wrapped
//! [`BoxEndpoint`]. The handler itself is untouched and stays directly
//! callable, so its business logic can be unit tested without going
//! through dispatch.
//!
//! # Wrapper assembly
//!
//! The configuration is turned into a wrapper sequence by an assembler
//! function, [`base_wrappers`] by default. The raw handler is the innermost
//! endpoint and each wrapper in the sequence wraps the previous result, so
//! the last wrapper assembled is the outermost. Supply a different
//! assembler with [`ViewConfig::wrappers_with`] to replace the policy
//! entirely.

use crate::{
    predicates::{MethodPredicate, ParamPredicate, ParamSource},
    wrappers::{PredicateGuard, RenderTemplate},
};
use std::marker::PhantomData;
use yacbv_core::{
    BoxEndpoint, BoxPredicate, BoxWrapper, Endpoint, EndpointResult, IntoViewOutput, Outcome,
    Predicate, UrlArgs, View, Wrapper,
};

/// The method a configuration answers when none is given.
pub const DEFAULT_METHOD: &str = "get";

/// The configuration fields handed to a [`WrapperAssembler`].
pub struct WrapperParts<V: View> {
    /// HTTP method to match.
    pub method: String,
    /// Template to render returned contexts with, if any.
    pub template_name: Option<String>,
    /// Parameter that must be present, if any.
    pub param: Option<ParamPredicate>,
    /// Extra predicates, in declaration order.
    pub predicates: Vec<BoxPredicate<V::Request>>,
}

/// Builds the wrapper sequence for one configured handler.
pub type WrapperAssembler<V> = fn(WrapperParts<V>) -> Vec<BoxWrapper<V>>;

/// The default wrapper policy.
///
/// Produces a [`PredicateGuard`] checking, in order, the method, the
/// required parameter and the extra predicates, followed by a
/// [`RenderTemplate`] when a template is configured.
pub fn base_wrappers<V: View>(parts: WrapperParts<V>) -> Vec<BoxWrapper<V>> {
    let WrapperParts {
        method,
        template_name,
        param,
        predicates,
    } = parts;

    let mut guard = PredicateGuard::<V>::new().with(MethodPredicate::new(method));
    if let Some(param) = param {
        guard = guard.with(param);
    }
    let guard = guard.extend(predicates);

    let mut wrappers: Vec<BoxWrapper<V>> = vec![Box::new(guard)];
    if let Some(template_name) = template_name {
        wrappers.push(Box::new(RenderTemplate::new(template_name)));
    }
    wrappers
}

/// Declarative configuration of one view candidate.
///
/// # Example
///
/// ```rust,ignore
/// let config = ViewConfig::new()
///     .method("post")
///     .param("q")
///     .template("search.html");
/// ```
pub struct ViewConfig<V: View> {
    method: String,
    template_name: Option<String>,
    param: Option<ParamPredicate>,
    predicates: Vec<BoxPredicate<V::Request>>,
    assembler: WrapperAssembler<V>,
}

impl<V: View> ViewConfig<V> {
    /// A configuration matching `GET` with no other checks.
    pub fn new() -> Self {
        Self {
            method: DEFAULT_METHOD.to_owned(),
            template_name: None,
            param: None,
            predicates: Vec::new(),
            assembler: base_wrappers::<V>,
        }
    }

    /// Set the HTTP method to match (case-insensitive).
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Render returned contexts with this template.
    pub fn template(mut self, template_name: impl Into<String>) -> Self {
        self.template_name = Some(template_name.into());
        self
    }

    /// Require a parameter in the body or query string.
    pub fn param(self, name: impl Into<String>) -> Self {
        self.param_in(name, ParamSource::Any)
    }

    /// Require a parameter in a specific source.
    pub fn param_in(mut self, name: impl Into<String>, source: ParamSource) -> Self {
        self.param = Some(ParamPredicate::with_source(name, source));
        self
    }

    /// Add an extra predicate, checked after the method and parameter.
    pub fn predicate<P: Predicate<V::Request>>(mut self, predicate: P) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Replace the wrapper assembly policy.
    pub fn wrappers_with(mut self, assembler: WrapperAssembler<V>) -> Self {
        self.assembler = assembler;
        self
    }

    /// The configured method.
    pub fn configured_method(&self) -> &str {
        &self.method
    }

    /// The configured template, if any.
    pub fn template_name(&self) -> Option<&str> {
        self.template_name.as_deref()
    }

    /// Assemble the wrapper sequence for this configuration.
    pub fn wrappers(self) -> Vec<BoxWrapper<V>> {
        (self.assembler)(WrapperParts {
            method: self.method,
            template_name: self.template_name,
            param: self.param,
            predicates: self.predicates,
        })
    }

    /// Wrap a handler with this configuration.
    pub fn apply<F, O>(self, handler: F) -> BoxEndpoint<V>
    where
        F: Fn(&V, &V::Request, &UrlArgs) -> O + Send + Sync + 'static,
        O: IntoViewOutput<V::Response> + 'static,
    {
        let endpoint: BoxEndpoint<V> = Box::new(HandlerEndpoint::new(handler));
        self.wrappers()
            .into_iter()
            .fold(endpoint, |inner, wrapper| wrapper.wrap(inner))
    }
}

impl<V: View> Default for ViewConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: View> std::fmt::Debug for ViewConfig<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewConfig")
            .field("method", &self.method)
            .field("template_name", &self.template_name)
            .field("param", &self.param)
            .field("predicates", &self.predicates.len())
            .finish_non_exhaustive()
    }
}

/// Adapts a plain handler into the innermost endpoint of a chain.
///
/// The handler always matches; declining is the job of the wrappers.
pub struct HandlerEndpoint<F, O> {
    handler: F,
    _output: PhantomData<fn() -> O>,
}

impl<F, O> HandlerEndpoint<F, O> {
    /// Create a new handler endpoint.
    pub const fn new(handler: F) -> Self {
        Self {
            handler,
            _output: PhantomData,
        }
    }
}

impl<V, F, O> Endpoint<V> for HandlerEndpoint<F, O>
where
    V: View,
    F: Fn(&V, &V::Request, &UrlArgs) -> O + Send + Sync + 'static,
    O: IntoViewOutput<V::Response> + 'static,
{
    fn call(&self, view: &V, request: &V::Request, args: &UrlArgs) -> EndpointResult<V::Response> {
        (self.handler)(view, request, args)
            .into_view_output()
            .map(Outcome::Matched)
    }
}
