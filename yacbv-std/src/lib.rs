//! # yacbv-std
//!
//! Standard implementations for the yacbv class-view dispatch layer.
//!
//! This crate provides:
//! - **Predicates**: [`MethodPredicate`], [`ParamPredicate`]
//! - **Wrappers**: [`PredicateGuard`], [`RenderTemplate`]
//! - **Configuration**: [`ViewConfig`] and the default [`base_wrappers`] policy
//! - **Registration and dispatch**: [`RegistryBuilder`], [`Registry`]
//! - **Entry point**: [`ClassView`], [`ViewHandler`]
//! - **Requests**: [`SimpleRequest`]
//!
//! [`MethodPredicate`]: predicates::MethodPredicate
//! [`ParamPredicate`]: predicates::ParamPredicate
//! [`PredicateGuard`]: wrappers::PredicateGuard
//! [`RenderTemplate`]: wrappers::RenderTemplate
//! [`ViewConfig`]: config::ViewConfig
//! [`base_wrappers`]: config::base_wrappers
//! [`RegistryBuilder`]: registry::RegistryBuilder
//! [`Registry`]: registry::Registry
//! [`ClassView`]: view::ClassView
//! [`ViewHandler`]: view::ViewHandler
//! [`SimpleRequest`]: request::SimpleRequest

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use yacbv_core;

// Modules
pub mod config;
pub mod predicates;
pub mod registry;
pub mod request;
pub mod testing;
pub mod view;
pub mod wrappers;
