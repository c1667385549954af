//! # yacbv - Yet Another Class-Based View
//!
//! `yacbv` lets one view type offer several handler methods for the same
//! URL and picks the right one per request from declarative predicates:
//! the HTTP method, the presence of a parameter, or any custom check.
//! Handlers may return a template [`Context`] instead of a response; a
//! configured template then renders it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use yacbv::prelude::*;
//!
//! struct DashboardView;
//!
//! impl DashboardView {
//!     fn show(&self, _req: &SimpleRequest, _args: &UrlArgs) -> Context {
//!         Context::new().with("word", "hello")
//!     }
//!
//!     fn search(&self, req: &SimpleRequest, _args: &UrlArgs) -> Context {
//!         Context::new().with("q", req.param("q").unwrap_or_default())
//!     }
//! }
//!
//! impl View for DashboardView {
//!     type Request = SimpleRequest;
//!     type Response = MyResponse;
//!
//!     fn template_response(_req: &SimpleRequest, template: TemplateResponse) -> MyResponse {
//!         MyResponse::Template(template)
//!     }
//! }
//!
//! impl ClassView for DashboardView {
//!     type Init = ();
//!
//!     fn create(_: &()) -> Self {
//!         DashboardView
//!     }
//!
//!     fn configure(views: &mut RegistryBuilder<Self>) {
//!         // Tried in this order: the more specific candidate goes first.
//!         views
//!             .register_mut(ViewConfig::new().param("q").template("search.html"), Self::search)
//!             .register_mut(ViewConfig::new().template("index.html"), Self::show);
//!     }
//! }
//!
//! let handler = DashboardView::as_view(());
//! match handler.handle(&request, &UrlArgs::new()) {
//!     Ok(response) => respond(response),
//!     Err(e) if e.is_not_found() => not_found(),
//!     Err(e) => server_error(e),
//! }
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use yacbv_core::{
    // Errors
    BoxError,
    // Endpoints
    BoxEndpoint,
    // Predicates
    BoxPredicate,
    BoxWrapper,
    // Templates
    Context,
    ContextError,
    Endpoint,
    EndpointResult,
    // Output
    IntoViewOutput,
    Outcome,
    Predicate,
    TemplateEngine,
    TemplateError,
    TemplateResponse,
    // Requests
    UrlArgs,
    // View
    View,
    ViewError,
    ViewOutput,
    ViewRequest,
    Wrapper,
};

pub use yacbv_std::{
    config::{
        DEFAULT_METHOD, HandlerEndpoint, ViewConfig, WrapperAssembler, WrapperParts, base_wrappers,
    },
    registry::{Registration, Registry, RegistryBuilder},
    request::SimpleRequest,
    view::{ClassView, ViewHandler},
};

/// Standard predicate implementations.
pub mod predicates {
    pub use yacbv_std::predicates::{MethodPredicate, ParamPredicate, ParamSource};
}

/// Standard wrapper implementations.
pub mod wrappers {
    pub use yacbv_std::wrappers::{PredicateGuard, RenderTemplate};
}

/// Testing utilities.
pub mod testing {
    pub use yacbv_std::testing::{CallLog, CountingPredicate, StaticEngine};
}

/// Prelude module - common imports for yacbv.
///
/// # Usage
///
/// ```rust,ignore
/// use yacbv::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ClassView, Context, IntoViewOutput, Outcome, Predicate, RegistryBuilder, SimpleRequest,
        TemplateResponse, UrlArgs, View, ViewConfig, ViewError, ViewHandler, ViewOutput,
        ViewRequest,
        predicates::{MethodPredicate, ParamPredicate, ParamSource},
    };
}
