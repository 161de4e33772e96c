/// A trait for abort signals.
///
/// The optimizer checks its signal after every iteration; a fired signal stops the run early
/// while leaving the swarm valid and inspectable.
pub trait AbortSignal {
    /// Return `true` if the user has requested to abort the run.
    fn is_aborted(&self) -> bool;
    /// Abort the run. Make `is_aborted()` return `true`.
    fn abort(&self);
    /// Reset the abort signal. Make `is_aborted()` return `false`.
    fn reset(&self);
}
