use crate::swarms::SwarmStatus;
use parking_lot::RwLock;
use std::{fmt::Debug, ops::ControlFlow, sync::Arc};

/// A trait which holds a [`callback`](`SwarmObserver::callback`) function that can be used to
/// inspect (or stop) a [`PSO`](crate::swarms::PSO) run after every iteration.
pub trait SwarmObserver<U = ()> {
    /// A function that is called after every completed iteration. Returning
    /// [`ControlFlow::Break`] terminates the run early; the swarm stays valid and inspectable.
    fn callback(
        &mut self,
        step: usize,
        status: &mut SwarmStatus,
        user_data: &mut U,
    ) -> ControlFlow<()>;
}

/// A debugging observer which prints the step and the global best at every iteration.
///
/// # Usage:
///
/// ```rust
/// use bhramari::prelude::*;
/// use bhramari::traits::observer::DebugObserver;
/// use bhramari::test_functions::Sphere;
///
/// let obs = DebugObserver::build();
/// let mut pso: PSO = PSO::new()
///     .configure(|c| {
///         c.with_seed(0)
///             .setup_swarm(|s| s.with_n_particles(5).with_bounds(vec![(-1.0, 1.0)]))
///     })
///     .with_observer(obs);
/// pso.run(&Sphere, &mut (), 10).unwrap();
/// // ^ This will print the global best for each of the ten steps
/// ```
pub struct DebugObserver;
impl DebugObserver {
    /// Finalize the [`SwarmObserver`] by wrapping it in an [`Arc`] and [`RwLock`].
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self))
    }
}
impl<U: Debug> SwarmObserver<U> for DebugObserver {
    fn callback(
        &mut self,
        step: usize,
        status: &mut SwarmStatus,
        _user_data: &mut U,
    ) -> ControlFlow<()> {
        println!("Step: {}, best: {}", step, status.gbest);
        ControlFlow::Continue(())
    }
}
