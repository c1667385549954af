//! Standard wrapper implementations.
//!
//! - [`PredicateGuard`] - declines requests that fail any predicate
//! - [`RenderTemplate`] - turns a returned context into a template response

pub mod guard;
pub mod render;

pub use guard::PredicateGuard;
pub use render::RenderTemplate;
