use crate::{
    core::{ConvergenceHistory, Point},
    swarms::Swarm,
};
use serde::{Deserialize, Serialize};

/// The live state of a particle swarm optimization run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SwarmStatus {
    /// The lowest-cost position any particle in the swarm has visited.
    pub gbest: Point,
    /// The per-iteration record of [`SwarmStatus::gbest`], one snapshot per completed step.
    pub history: ConvergenceHistory,
    /// The swarm itself.
    pub swarm: Swarm,
    /// A message describing the condition of the run.
    pub message: String,
    /// The number of cost function evaluations performed so far.
    pub n_f_evals: usize,
}

impl SwarmStatus {
    /// Updates the [`SwarmStatus::message`] field.
    pub fn update_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    /// Resets the run-dependent state while keeping the swarm configuration intact.
    pub fn reset(&mut self) {
        self.gbest = Point::default();
        self.history.clear();
        self.swarm.particles = Vec::new();
        self.message = String::new();
        self.n_f_evals = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_run_state_but_keeps_configuration() {
        let mut status = SwarmStatus::default();
        status.swarm.with_n_particles(17);
        status.update_message("running");
        status.n_f_evals = 42;
        status.history.record(&Point::default());
        status.reset();
        assert_eq!(status.swarm.n_particles, 17);
        assert!(status.message.is_empty());
        assert_eq!(status.n_f_evals, 0);
        assert!(status.history.is_empty());
        assert_eq!(status.gbest.fx, crate::Float::INFINITY);
    }
}
