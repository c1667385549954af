//! Template rendering wrapper.

use yacbv_core::{
    BoxEndpoint, Endpoint, EndpointResult, Outcome, TemplateResponse, UrlArgs, View, ViewOutput,
    Wrapper,
};

/// A wrapper that renders a configured template from a returned context.
///
/// If the inner endpoint matches with a [`ViewOutput::Context`], the context
/// becomes a [`TemplateResponse`] for the configured template and the view's
/// [`View::template_response`] builds the final response. Finished responses,
/// declined requests and errors pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTemplate {
    template_name: String,
}

impl RenderTemplate {
    /// Create a renderer for the given template.
    pub fn new(template_name: impl Into<String>) -> Self {
        Self {
            template_name: template_name.into(),
        }
    }

    /// The configured template name.
    pub fn template_name(&self) -> &str {
        &self.template_name
    }
}

impl<V: View> Wrapper<V> for RenderTemplate {
    fn wrap(self: Box<Self>, inner: BoxEndpoint<V>) -> BoxEndpoint<V> {
        Box::new(Rendered {
            template_name: self.template_name,
            inner,
        })
    }
}

struct Rendered<V: View> {
    template_name: String,
    inner: BoxEndpoint<V>,
}

impl<V: View> Endpoint<V> for Rendered<V> {
    fn call(&self, view: &V, request: &V::Request, args: &UrlArgs) -> EndpointResult<V::Response> {
        match self.inner.call(view, request, args)? {
            Outcome::Matched(ViewOutput::Context(context)) => {
                let template = TemplateResponse::new(self.template_name.clone(), context);
                Ok(Outcome::Matched(ViewOutput::Response(V::template_response(
                    request, template,
                ))))
            }
            other => Ok(other),
        }
    }
}
