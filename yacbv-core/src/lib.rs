//! # yacbv-core
//!
//! Core traits for the yacbv class-view dispatch layer.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! framework adapters that only need the vocabulary, not the standard
//! implementations in `yacbv-std`.
//!
//! # Dispatch Model
//!
//! A view registers several candidates. Each candidate is an [`Endpoint`]:
//! the user's handler wrapped by zero or more [`Wrapper`]s. Per request,
//! candidates are offered the request in order:
//!
//! ## Guarding ([`Predicate`])
//!
//! A guard evaluates pure predicates against the [`ViewRequest`]. If any
//! fails, the candidate answers [`Outcome::NotMatched`] and the next one is
//! tried. Declining is ordinary control flow, never an error.
//!
//! ## Output ([`ViewOutput`])
//!
//! A handler returns either a finished response or a [`Context`] that a
//! template renderer converts into a [`TemplateResponse`] through
//! [`View::template_response`].
//!
//! # Error Types
//!
//! - [`ViewError`] - Surfaced by dispatch (`NotFound`, handler failures)
//! - [`TemplateError`] - Template rendering failures
//! - [`ContextError`] - Context construction failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod context;
mod endpoint;
mod error;
mod predicate;
mod request;
mod response;
mod template;
mod view;

// Re-exports
pub use context::Context;
pub use endpoint::{BoxEndpoint, BoxWrapper, Endpoint, EndpointResult, Outcome, Wrapper};
pub use error::{BoxError, ContextError, TemplateError, ViewError};
pub use predicate::{BoxPredicate, Predicate};
pub use request::{UrlArgs, ViewRequest};
pub use response::{IntoViewOutput, ViewOutput};
pub use template::{TemplateEngine, TemplateResponse};
pub use view::View;
