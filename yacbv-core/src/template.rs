//! Template responses.
//!
//! A [`TemplateResponse`] is the lazy pairing of a template name and its
//! [`Context`]. The view turns it into a framework response through
//! [`View::template_response`]; actual rendering happens whenever the
//! framework asks a [`TemplateEngine`] for it.
//!
//! [`View::template_response`]: crate::View::template_response

use crate::{
    context::Context,
    error::{BoxError, TemplateError},
};

/// A template name plus the context to render it with.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateResponse {
    template_name: String,
    context: Context,
}

impl TemplateResponse {
    /// Create a new template response.
    pub fn new(template_name: impl Into<String>, context: Context) -> Self {
        Self {
            template_name: template_name.into(),
            context,
        }
    }

    /// The template to render.
    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    /// The template context.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Split into name and context.
    pub fn into_parts(self) -> (String, Context) {
        (self.template_name, self.context)
    }

    /// Render through the given engine.
    pub fn render<T: TemplateEngine + ?Sized>(&self, engine: &T) -> Result<String, TemplateError> {
        engine
            .render(&self.template_name, &self.context)
            .map_err(|source| TemplateError::Render {
                template: self.template_name.clone(),
                source,
            })
    }
}

/// A template engine, supplied by the surrounding framework.
pub trait TemplateEngine: Send + Sync {
    /// Render `template_name` with `context`.
    fn render(&self, template_name: &str, context: &Context) -> Result<String, BoxError>;
}
