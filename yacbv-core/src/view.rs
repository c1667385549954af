//! The view trait.

use crate::{request::ViewRequest, template::TemplateResponse};

/// A class-based view: the request and response types its candidates
/// work with, and how a rendered template becomes a response.
///
/// Registration of candidates and per-request construction live in
/// `yacbv-std` (`ClassView`).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `View`",
    label = "missing `View` implementation",
    note = "Views declare their `Request` and `Response` types and implement `template_response`."
)]
pub trait View: Send + Sync + 'static {
    /// The framework request type.
    type Request: ViewRequest;

    /// The framework response type.
    type Response: Send + 'static;

    /// Build the framework response for a template and its context.
    fn template_response(request: &Self::Request, template: TemplateResponse) -> Self::Response;
}
