//! Error types for yacbv.
//!
//! This module provides the error hierarchy using `thiserror`:
//!
//! - [`ViewError`] - Top-level error surfaced by dispatch
//! - [`TemplateError`] - Errors from rendering a [`TemplateResponse`]
//! - [`ContextError`] - Errors building a template [`Context`]
//!
//! A candidate declining a request is not an error; see [`Outcome`].
//!
//! [`TemplateResponse`]: crate::TemplateResponse
//! [`Context`]: crate::Context
//! [`Outcome`]: crate::Outcome

use thiserror::Error;

/// A boxed error type for handler failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error returned by the dispatch loop.
#[derive(Error, Debug)]
pub enum ViewError {
    /// No registered candidate accepted the request.
    #[error("no view matched the request")]
    NotFound,

    /// A handler produced a template context but nothing in its wrapper
    /// chain turned it into a response.
    #[error("view `{handler}` returned a template context but no template is configured")]
    MissingTemplate {
        /// Name of the handler that produced the context.
        handler: &'static str,
    },

    /// A handler failed. The error is passed through unmodified.
    #[error(transparent)]
    Handler(BoxError),
}

impl ViewError {
    /// Whether this is the "no candidate matched" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ViewError::NotFound)
    }

    /// The HTTP status a framework should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ViewError::NotFound => 404,
            ViewError::MissingTemplate { .. } | ViewError::Handler(_) => 500,
        }
    }
}

/// Errors that can occur while rendering a template response.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The template engine failed to render the named template.
    #[error("failed to render template `{template}`")]
    Render {
        /// The template name that was rendered.
        template: String,
        /// The engine's error.
        #[source]
        source: BoxError,
    },
}

/// Errors that can occur while building a template context.
#[derive(Error, Debug)]
pub enum ContextError {
    /// The value did not serialize to a JSON object.
    #[error("template context must be an object, got {0}")]
    NotAnObject(&'static str),

    /// The value could not be serialized.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

impl From<BoxError> for ViewError {
    fn from(err: BoxError) -> Self {
        ViewError::Handler(err)
    }
}
