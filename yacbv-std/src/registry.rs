//! Registry module for view candidates.
//!
//! This module provides a builder for registering configured handlers
//! and a frozen registry that runs the dispatch loop.
//!
//! Every registration is stamped with a sequence number from the builder's
//! own counter at the moment its configuration is applied. Building sorts by
//! that number, so candidates are tried in configuration order no matter in
//! which order they were inserted.

use crate::config::ViewConfig;
use yacbv_core::{
    BoxEndpoint, Endpoint, IntoViewOutput, Outcome, UrlArgs, View, ViewError, ViewOutput,
};

/// One candidate: a wrapped endpoint with its order key.
pub struct Registration<V: View> {
    order: u64,
    name: &'static str,
    endpoint: BoxEndpoint<V>,
}

impl<V: View> Registration<V> {
    /// The sequence number assigned when the configuration was applied.
    pub fn order(&self) -> u64 {
        self.order
    }

    /// The handler name, used in logs and errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The wrapped endpoint.
    pub fn endpoint(&self) -> &dyn Endpoint<V> {
        &*self.endpoint
    }
}

impl<V: View> std::fmt::Debug for Registration<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("order", &self.order)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// RegistryBuilder - for collecting candidates
// ============================================================================

/// Builder for constructing a [`Registry`].
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register(ViewConfig::new().method("get"), DashboardView::show)
///     .register(ViewConfig::new().method("post"), DashboardView::update)
///     .build();
/// ```
pub struct RegistryBuilder<V: View> {
    next_order: u64,
    entries: Vec<Registration<V>>,
}

impl<V: View> RegistryBuilder<V> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            next_order: 0,
            entries: Vec::new(),
        }
    }

    /// Apply a configuration to a handler without inserting it.
    ///
    /// The returned registration already carries its sequence number.
    pub fn configure<F, O>(&mut self, config: ViewConfig<V>, handler: F) -> Registration<V>
    where
        F: Fn(&V, &V::Request, &UrlArgs) -> O + Send + Sync + 'static,
        O: IntoViewOutput<V::Response> + 'static,
    {
        let endpoint = config.apply(handler);
        self.stamp(std::any::type_name::<F>(), endpoint)
    }

    /// Insert a registration produced by [`configure`](Self::configure).
    pub fn insert(&mut self, registration: Registration<V>) -> &mut Self {
        self.entries.push(registration);
        self
    }

    /// Configure and insert a handler.
    pub fn register<F, O>(mut self, config: ViewConfig<V>, handler: F) -> Self
    where
        F: Fn(&V, &V::Request, &UrlArgs) -> O + Send + Sync + 'static,
        O: IntoViewOutput<V::Response> + 'static,
    {
        self.register_mut(config, handler);
        self
    }

    /// Configure and insert a handler (mutable version).
    pub fn register_mut<F, O>(&mut self, config: ViewConfig<V>, handler: F) -> &mut Self
    where
        F: Fn(&V, &V::Request, &UrlArgs) -> O + Send + Sync + 'static,
        O: IntoViewOutput<V::Response> + 'static,
    {
        let registration = self.configure(config, handler);
        self.insert(registration)
    }

    /// Insert an already wrapped endpoint under the given name.
    pub fn register_endpoint<E: Endpoint<V>>(
        &mut self,
        name: &'static str,
        endpoint: E,
    ) -> &mut Self {
        let registration = self.stamp(name, Box::new(endpoint));
        self.insert(registration)
    }

    fn stamp(&mut self, name: &'static str, endpoint: BoxEndpoint<V>) -> Registration<V> {
        let order = self.next_order;
        self.next_order += 1;
        Registration {
            order,
            name,
            endpoint,
        }
    }

    /// Build the immutable Registry.
    ///
    /// Entries are sorted by sequence number.
    pub fn build(mut self) -> Registry<V> {
        self.entries.sort_by_key(|e| e.order);
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                view = std::any::type_name::<V>(),
                candidates = self.entries.len(),
                "view registry built"
            );
        }
        Registry {
            entries: self.entries,
        }
    }

    /// Get the number of inserted registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: View> Default for RegistryBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry - immutable candidate sequence
// ============================================================================

/// An immutable, ordered sequence of view candidates.
///
/// Created by [`RegistryBuilder::build`]. Shared read-only across requests.
pub struct Registry<V: View> {
    entries: Vec<Registration<V>>,
}

impl<V: View> Registry<V> {
    /// Offer the request to each candidate in order.
    ///
    /// The first candidate that matches decides the result. A handler error
    /// is returned as-is without trying further candidates. When every
    /// candidate declines, the result is [`ViewError::NotFound`].
    pub fn dispatch(
        &self,
        view: &V,
        request: &V::Request,
        args: &UrlArgs,
    ) -> Result<V::Response, ViewError> {
        for entry in &self.entries {
            match entry.endpoint.call(view, request, args).map_err(ViewError::Handler)? {
                Outcome::Matched(ViewOutput::Response(response)) => {
                    #[cfg(feature = "tracing")]
                    {
                        tracing::debug!(handler = entry.name, order = entry.order, "view matched");
                    }
                    return Ok(response);
                }
                Outcome::Matched(ViewOutput::Context(_)) => {
                    return Err(ViewError::MissingTemplate {
                        handler: entry.name,
                    });
                }
                Outcome::NotMatched => {
                    #[cfg(feature = "tracing")]
                    {
                        tracing::debug!(handler = entry.name, order = entry.order, "view skipped");
                    }
                }
            }
        }

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                method = yacbv_core::ViewRequest::method(request),
                candidates = self.entries.len(),
                "no view matched"
            );
        }
        Err(ViewError::NotFound)
    }

    /// Iterate over the candidates in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = &Registration<V>> {
        self.entries.iter()
    }

    /// Get the number of candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: View> std::fmt::Debug for Registry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
