/// Module containing the [`AbortSignal`] trait.
pub mod abort_signal;
/// Module containing the [`CostFunction`] trait.
pub mod cost_function;
/// Module containing the [`SwarmObserver`] trait and its implementations.
pub mod observer;

pub use abort_signal::AbortSignal;
pub use cost_function::CostFunction;
pub use observer::SwarmObserver;
