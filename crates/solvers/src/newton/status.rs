/// Indicates how a successful solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The last step was no larger than the configured tolerance.
    Converged,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}
