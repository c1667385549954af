//! Request predicates.

/// A pure test applied to an incoming request.
///
/// Predicates decide whether a candidate is eligible for a request. They
/// must not have side effects: the guard may stop evaluating after the
/// first `false`.
///
/// Any `Fn(&Req) -> bool + Send + Sync` closure is a predicate.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a predicate over `{Req}`",
    label = "missing `Predicate<{Req}>` implementation",
    note = "Use a closure `|request: &{Req}| -> bool` or implement `Predicate::test`."
)]
pub trait Predicate<Req: ?Sized>: Send + Sync + 'static {
    /// Whether the request satisfies this predicate.
    fn test(&self, request: &Req) -> bool;
}

/// A type-erased predicate.
pub type BoxPredicate<Req> = Box<dyn Predicate<Req>>;

impl<Req, F> Predicate<Req> for F
where
    Req: ?Sized,
    F: Fn(&Req) -> bool + Send + Sync + 'static,
{
    fn test(&self, request: &Req) -> bool {
        (self)(request)
    }
}
