/// Basic implementations of [`AbortSignal`](crate::traits::AbortSignal).
pub mod abort_signals;
/// [`Bound`] type for describing the search region.
pub mod bound;
/// [`SwarmError`] type for configuration and lifecycle failures.
pub mod error;
/// [`ConvergenceHistory`] type recording the global best per iteration.
pub mod history;
/// [`Point`] type for defining a point in the parameter space.
pub mod point;
/// [`MinimizationSummary`] type for the result of a run.
pub mod summary;

pub use abort_signals::{AtomicAbortSignal, CtrlCAbortSignal, NopAbortSignal};
pub use bound::{Bound, Bounds};
pub use error::SwarmError;
pub use history::ConvergenceHistory;
pub use point::Point;
pub use summary::MinimizationSummary;
