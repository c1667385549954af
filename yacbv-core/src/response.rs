//! Handler output conversion.

use crate::{context::Context, error::BoxError};

/// What a handler produced.
///
/// A [`Context`] is meant for a template renderer further out in the
/// wrapper chain; a `Response` is returned to the framework as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutput<R> {
    /// A template context still waiting to be rendered.
    Context(Context),
    /// A finished framework response.
    Response(R),
}

impl<R> ViewOutput<R> {
    /// Whether this is an unrendered context.
    pub fn is_context(&self) -> bool {
        matches!(self, ViewOutput::Context(_))
    }

    /// The finished response, if any.
    pub fn into_response(self) -> Option<R> {
        match self {
            ViewOutput::Response(r) => Some(r),
            ViewOutput::Context(_) => None,
        }
    }
}

impl<R> From<Context> for ViewOutput<R> {
    fn from(context: Context) -> Self {
        ViewOutput::Context(context)
    }
}

/// Trait for converting a handler's return value into a [`ViewOutput`].
///
/// # Default Implementations
///
/// - `ViewOutput<R>` → As is
/// - `Context` → `ViewOutput::Context`
/// - `Result<T, E>` → Delegates to inner `T` or propagates the error
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be returned from a view producing `{R}`",
    label = "missing `IntoViewOutput<{R}>` implementation",
    note = "Return `ViewOutput<{R}>`, a `Context`, or a `Result` of either."
)]
pub trait IntoViewOutput<R> {
    /// Convert the handler result.
    fn into_view_output(self) -> Result<ViewOutput<R>, BoxError>;
}

impl<R> IntoViewOutput<R> for ViewOutput<R> {
    fn into_view_output(self) -> Result<ViewOutput<R>, BoxError> {
        Ok(self)
    }
}

impl<R> IntoViewOutput<R> for Context {
    fn into_view_output(self) -> Result<ViewOutput<R>, BoxError> {
        Ok(ViewOutput::Context(self))
    }
}

impl<R, T, E> IntoViewOutput<R> for Result<T, E>
where
    T: IntoViewOutput<R>,
    E: Into<BoxError>,
{
    fn into_view_output(self) -> Result<ViewOutput<R>, BoxError> {
        match self {
            Ok(t) => t.into_view_output(),
            Err(e) => Err(e.into()),
        }
    }
}
