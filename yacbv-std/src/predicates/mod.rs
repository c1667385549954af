//! Standard predicate implementations.

pub mod method;
pub mod param;

pub use method::MethodPredicate;
pub use param::{ParamPredicate, ParamSource};
