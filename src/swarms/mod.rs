/// Implementation of the Particle Swarm Optimization (PSO) algorithm.
pub mod pso;
pub use pso::{PSOConfig, PSO};

/// [`SwarmParticle`] type carrying one candidate solution.
pub mod particle;
pub use particle::SwarmParticle;

/// [`Swarm`] type owning the particle collection and its movement policies.
pub mod swarm;
pub use swarm::{
    Swarm, SwarmBoundaryMethod, SwarmCoefficientScheme, SwarmUpdateMethod,
    SwarmVelocityInitializer,
};

/// [`SwarmStatus`] type holding the live state of a run.
pub mod swarm_status;
pub use swarm_status::SwarmStatus;

use crate::{core::Point, traits::SwarmObserver};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::{ops::ControlFlow, sync::Arc};

/// A [`SwarmObserver`] which stores the history of the swarm particles as well as the history of
/// the best position found, for plotting or animation after the run.
#[derive(Serialize, Deserialize, Default, Clone)]
pub struct TrackingSwarmObserver {
    /// The history of the swarm particles.
    pub history: Vec<Vec<SwarmParticle>>,
    /// The history of the best position in the swarm.
    pub best_history: Vec<Point>,
}

impl TrackingSwarmObserver {
    /// Finalize the observer by wrapping it in an [`Arc`] and [`RwLock`].
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
}

impl<U> SwarmObserver<U> for TrackingSwarmObserver {
    fn callback(
        &mut self,
        _step: usize,
        status: &mut SwarmStatus,
        _user_data: &mut U,
    ) -> ControlFlow<()> {
        self.history.push(status.swarm.particles.clone());
        self.best_history.push(status.gbest.clone());
        ControlFlow::Continue(())
    }
}
