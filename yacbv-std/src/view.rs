//! # Class Views
//!
//! [`ClassView`] ties a [`View`] to its candidates and its per-request
//! construction. [`ClassView::as_view`] produces the [`ViewHandler`] a
//! router calls for every request.
//!
//! # Example
//!
//! ```rust,ignore
//! struct DashboardView;
//!
//! impl DashboardView {
//!     fn show(&self, _req: &SimpleRequest, _args: &UrlArgs) -> Context {
//!         Context::new().with("word", "hello")
//!     }
//!
//!     fn update(&self, _req: &SimpleRequest, _args: &UrlArgs) -> Context {
//!         Context::new().with("word", "posted")
//!     }
//! }
//!
//! impl ClassView for DashboardView {
//!     type Init = ();
//!
//!     fn create(_init: &()) -> Self {
//!         DashboardView
//!     }
//!
//!     fn configure(views: &mut RegistryBuilder<Self>) {
//!         views
//!             .register_mut(ViewConfig::new().method("get").template("dashboard.html"), Self::show)
//!             .register_mut(ViewConfig::new().method("post").template("dashboard.html"), Self::update);
//!     }
//! }
//!
//! let handler = DashboardView::as_view(());
//! let response = handler.handle(&request, &UrlArgs::new())?;
//! ```

use crate::registry::{Registry, RegistryBuilder};
use std::sync::Arc;
use yacbv_core::{UrlArgs, View, ViewError};

/// A view whose candidates are registered explicitly.
pub trait ClassView: View + Sized {
    /// Fixed initialization arguments, supplied once to [`as_view`](Self::as_view).
    type Init: Send + Sync + 'static;

    /// Build the per-request view instance.
    fn create(init: &Self::Init) -> Self;

    /// Register this view's candidates.
    ///
    /// Candidates are tried in the order their configurations are applied.
    fn configure(views: &mut RegistryBuilder<Self>);

    /// Collect the candidates into a frozen registry.
    fn registry() -> Registry<Self> {
        let mut builder = RegistryBuilder::new();
        Self::configure(&mut builder);
        builder.build()
    }

    /// Create the request entry point.
    fn as_view(init: Self::Init) -> ViewHandler<Self> {
        ViewHandler::new(init)
    }
}

/// The request entry point of a [`ClassView`].
///
/// Cloning is cheap; all clones share one registry.
pub struct ViewHandler<V: ClassView> {
    registry: Arc<Registry<V>>,
    init: Arc<V::Init>,
}

impl<V: ClassView> ViewHandler<V> {
    /// Build the registry and capture the initialization arguments.
    pub fn new(init: V::Init) -> Self {
        Self::from_parts(V::registry(), init)
    }

    /// Use an existing registry.
    pub fn from_parts(registry: Registry<V>, init: V::Init) -> Self {
        Self {
            registry: Arc::new(registry),
            init: Arc::new(init),
        }
    }

    /// Handle one request: create a view instance and dispatch to the first
    /// matching candidate.
    pub fn handle(&self, request: &V::Request, args: &UrlArgs) -> Result<V::Response, ViewError> {
        let view = V::create(&self.init);
        self.registry.dispatch(&view, request, args)
    }

    /// The candidates, in dispatch order.
    pub fn registry(&self) -> &Registry<V> {
        &self.registry
    }

    /// The initialization arguments.
    pub fn init(&self) -> &V::Init {
        &self.init
    }
}

impl<V: ClassView> Clone for ViewHandler<V> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            init: Arc::clone(&self.init),
        }
    }
}

impl<V: ClassView> std::fmt::Debug for ViewHandler<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewHandler")
            .field("view", &std::any::type_name::<V>())
            .field("candidates", &self.registry.len())
            .finish()
    }
}
