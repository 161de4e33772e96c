use thiserror::Error;

/// Errors raised by swarm construction and lifecycle handling.
///
/// The generic `E` is the error type of the user's
/// [`CostFunction`](crate::traits::CostFunction); objectives which cannot fail should use
/// [`std::convert::Infallible`]. Note that an objective returning NaN or an infinite cost is *not*
/// an error: such evaluations are treated as `+inf` in all best-position comparisons and the run
/// continues.
#[derive(Debug, Error)]
pub enum SwarmError<E> {
    /// Invalid hyperparameters or bounds, detected before any sampling or stepping occurs.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// An operation was invoked out of lifecycle order (e.g. stepping an uninitialized swarm).
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    /// The cost function itself returned an error.
    #[error("cost function evaluation failed: {0}")]
    Evaluation(E),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn test_error_display() {
        let e: SwarmError<Infallible> = SwarmError::Configuration("n_particles must be > 0".into());
        assert_eq!(
            e.to_string(),
            "invalid configuration: n_particles must be > 0"
        );
        let e: SwarmError<Infallible> = SwarmError::InvalidState("step() called before initialize()");
        assert_eq!(e.to_string(), "invalid state: step() called before initialize()");
    }
}
