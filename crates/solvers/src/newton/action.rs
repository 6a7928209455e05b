/// Control actions supported by the Newton solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the latest iterate.
    ///
    /// The solution is reported with [`Status::StoppedByObserver`].
    ///
    /// [`Status::StoppedByObserver`]: super::Status::StoppedByObserver
    StopEarly,
}
