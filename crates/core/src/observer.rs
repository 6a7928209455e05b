/// Receives solver events and decides how the iteration should proceed.
///
/// Solvers report each Newton step to an observer instead of logging it, so
/// callers choose whether to record, print, or ignore progress. The `observe`
/// method returns `Option<A>`: `Some(action)` requests a solver-specific
/// action (such as stopping early), and `None` lets the solver continue.
///
/// Closures implement `Observer` automatically, and `()` is a no-op observer.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Any `FnMut(&E) -> Option<A>` closure observes by being called.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Ignores every event and never requests an action.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
