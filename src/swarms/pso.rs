use crate::{
    core::{MinimizationSummary, NopAbortSignal, SwarmError},
    swarms::{Swarm, SwarmStatus, SwarmUpdateMethod},
    traits::{AbortSignal, CostFunction, SwarmObserver},
    Float,
};
use fastrand::Rng;
use parking_lot::RwLock;
use std::{cmp::Ordering, sync::Arc};

/// The configurable inputs of a [`PSO`] run: the swarm itself plus the velocity-rule
/// hyperparameters and an optional random seed.
#[derive(Clone, Debug)]
pub struct PSOConfig {
    /// The swarm to run (see [`Swarm`] for its own settings).
    pub swarm: Swarm,
    /// The inertia weight $`\omega`$ applied to the previous velocity (default = `0.5`).
    pub omega: Float,
    /// The cognitive weight $`c_1`$ pulling a particle towards its personal best
    /// (default = `1.0`).
    pub c1: Float,
    /// The social weight $`c_2`$ pulling a particle towards the swarm's best (default = `2.0`).
    pub c2: Float,
    /// An optional seed for the random number generator. Two runs with the same seed and
    /// configuration produce bit-for-bit identical trajectories; without a seed, each run uses a
    /// fresh random state.
    pub seed: Option<u64>,
}

impl Default for PSOConfig {
    fn default() -> Self {
        Self {
            swarm: Swarm::default(),
            omega: 0.5,
            c1: 1.0,
            c2: 2.0,
            seed: None,
        }
    }
}

impl PSOConfig {
    /// Sets the inertia weight $`\omega`$ (default = `0.5`).
    pub fn with_omega(&mut self, value: Float) -> &mut Self {
        self.omega = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ (default = `1.0`).
    pub fn with_c1(&mut self, value: Float) -> &mut Self {
        self.c1 = value;
        self
    }
    /// Sets the social weight $`c_2`$ (default = `2.0`).
    pub fn with_c2(&mut self, value: Float) -> &mut Self {
        self.c2 = value;
        self
    }
    /// Sets the seed of the random number generator.
    pub fn with_seed(&mut self, value: u64) -> &mut Self {
        self.seed = Some(value);
        self
    }
    /// Modify the [`Swarm`] settings with the given closure.
    pub fn setup_swarm<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Swarm) -> &mut Swarm,
    {
        f(&mut self.swarm);
        self
    }

    /// Weights may be negative (some variants exploit this) but must be finite numbers.
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [("omega", self.omega), ("c1", self.c1), ("c2", self.c2)] {
            if !value.is_finite() {
                return Err(format!("{} = {} must be finite", name, value));
            }
        }
        self.swarm.validate()
    }
}

/// The Particle Swarm Optimizer.
///
/// A swarm of particles explores the bounded search region by moving each particle towards a mix
/// of its own best-found position and the best position found by any particle, with stochastic
/// per-update weights. Only function values are used, so the objective may be non-smooth,
/// discontinuous, or multimodal.
///
/// <div class="warning">
///
/// PSO is a stochastic search heuristic. It makes no optimality guarantee, and an unseeded run is
/// not reproducible.
///
/// </div>
pub struct PSO<U = ()> {
    /// The configuration of the optimizer.
    pub config: PSOConfig,
    rng: Rng,
    status: SwarmStatus,
    initialized: bool,
    observers: Vec<Arc<RwLock<dyn SwarmObserver<U>>>>,
    abort_signal: Arc<dyn AbortSignal>,
}

impl<U> Default for PSO<U> {
    fn default() -> Self {
        Self {
            config: PSOConfig::default(),
            rng: Rng::new(),
            status: SwarmStatus::default(),
            initialized: false,
            observers: Vec::new(),
            abort_signal: Arc::new(NopAbortSignal),
        }
    }
}

impl<U> PSO<U> {
    /// Create a new optimizer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Modify the [`PSOConfig`] with the given closure.
    pub fn configure<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut PSOConfig) -> &mut PSOConfig,
    {
        f(&mut self.config);
        self
    }

    /// Attach a [`SwarmObserver`] which will be called back after every completed iteration of
    /// [`PSO::run`].
    pub fn with_observer<O: SwarmObserver<U> + 'static>(
        mut self,
        observer: Arc<RwLock<O>>,
    ) -> Self {
        self.observers.push(observer);
        self
    }

    /// Set the [`AbortSignal`] checked after every iteration of [`PSO::run`]
    /// (default = [`NopAbortSignal`]).
    pub fn with_abort_signal<A: AbortSignal + 'static>(mut self, signal: Arc<A>) -> Self {
        self.abort_signal = signal;
        self
    }

    /// The live state of the run.
    pub fn status(&self) -> &SwarmStatus {
        &self.status
    }

    /// Validate the configuration and create the initial swarm: positions sampled uniformly
    /// inside the bounds, velocities per the configured initializer, the global best seeded from
    /// the initial personal bests. A misconfiguration is reported before any sampling or
    /// evaluation happens.
    ///
    /// # Errors
    ///
    /// Returns a [`SwarmError::Configuration`] for an invalid configuration and a
    /// [`SwarmError::Evaluation`] if the cost function fails.
    pub fn initialize<E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), SwarmError<E>> {
        self.config.validate().map_err(SwarmError::Configuration)?;
        if let Some(seed) = self.config.seed {
            self.rng = Rng::with_seed(seed);
        }
        self.status.reset();
        self.status.swarm = self.config.swarm.clone();
        self.status
            .swarm
            .initialize(&mut self.rng, func, user_data)
            .map_err(SwarmError::Evaluation)?;
        self.status.n_f_evals += self.status.swarm.particles.len();
        if let Some(best) = self.status.swarm.best_particle() {
            self.status.gbest = best.best.clone();
        }
        self.status.update_message("initialized");
        self.initialized = true;
        Ok(())
    }

    /// Perform one full iteration over the swarm, then record the global best in the history.
    ///
    /// Under [`SwarmUpdateMethod::Synchronous`] every particle sees the global best as it stood
    /// at the start of the iteration and the fold happens once at the end; under
    /// [`SwarmUpdateMethod::Asynchronous`] each particle's improvement is visible to the
    /// particles after it in the same sweep.
    ///
    /// # Errors
    ///
    /// Returns a [`SwarmError::InvalidState`] if called before [`PSO::initialize`] and a
    /// [`SwarmError::Evaluation`] if the cost function fails.
    pub fn step<E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), SwarmError<E>> {
        if !self.initialized {
            return Err(SwarmError::InvalidState(
                "step called before initialization",
            ));
        }
        match self.status.swarm.update_method {
            SwarmUpdateMethod::Synchronous => self.step_synchronous(func, user_data)?,
            SwarmUpdateMethod::Asynchronous => self.step_asynchronous(func, user_data)?,
        }
        self.status.n_f_evals += self.status.swarm.particles.len();
        let gbest = self.status.gbest.clone();
        self.status.history.record(&gbest);
        Ok(())
    }

    fn step_synchronous<E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), SwarmError<E>> {
        let gbest_x = self.status.gbest.x.clone();
        let (omega, c1, c2) = (self.config.omega, self.config.c1, self.config.c2);
        let Swarm {
            particles,
            bounds,
            boundary_method,
            coefficient_scheme,
            ..
        } = &mut self.status.swarm;
        for particle in particles.iter_mut() {
            particle.update_velocity(&gbest_x, omega, c1, c2, *coefficient_scheme, &mut self.rng);
            particle
                .update_position(func, user_data, bounds, *boundary_method)
                .map_err(SwarmError::Evaluation)?;
        }
        if let Some(best) = self.status.swarm.best_particle() {
            if best.best.total_cmp(&self.status.gbest) == Ordering::Less {
                self.status.gbest = best.best.clone();
            }
        }
        Ok(())
    }

    fn step_asynchronous<E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), SwarmError<E>> {
        let (omega, c1, c2) = (self.config.omega, self.config.c1, self.config.c2);
        for i in 0..self.status.swarm.particles.len() {
            let gbest_x = self.status.gbest.x.clone();
            let Swarm {
                particles,
                bounds,
                boundary_method,
                coefficient_scheme,
                ..
            } = &mut self.status.swarm;
            let particle = &mut particles[i];
            particle.update_velocity(&gbest_x, omega, c1, c2, *coefficient_scheme, &mut self.rng);
            particle
                .update_position(func, user_data, bounds, *boundary_method)
                .map_err(SwarmError::Evaluation)?;
            if particle.best.total_cmp(&self.status.gbest) == Ordering::Less {
                self.status.gbest = particle.best.clone();
            }
        }
        Ok(())
    }

    /// Minimize the given [`CostFunction`] for `n_iterations` iterations, starting from a fresh
    /// swarm.
    ///
    /// After every iteration each attached [`SwarmObserver`] is called back (returning
    /// [`ControlFlow::Break`](std::ops::ControlFlow::Break) stops the run), then the
    /// [`AbortSignal`] is checked. An early stop is not an error; the summary's
    /// [`completed`](MinimizationSummary::completed) flag records it and the best result found so
    /// far is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`SwarmError::Configuration`] for an invalid configuration (including
    /// `n_iterations == 0`) and a [`SwarmError::Evaluation`] if the cost function fails.
    pub fn run<E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
        n_iterations: usize,
    ) -> Result<MinimizationSummary, SwarmError<E>> {
        if n_iterations == 0 {
            return Err(SwarmError::Configuration(
                "n_iterations must be > 0".to_string(),
            ));
        }
        self.abort_signal.reset();
        self.initialize(func, user_data)?;
        let mut completed = true;
        for current_step in 0..n_iterations {
            self.step(func, user_data)?;
            let mut observer_termination = false;
            for i in 0..self.observers.len() {
                let observer = Arc::clone(&self.observers[i]);
                observer_termination = observer
                    .write()
                    .callback(current_step, &mut self.status, user_data)
                    .is_break()
                    || observer_termination;
            }
            if observer_termination {
                self.status.update_message("stopped by observer");
                completed = false;
                break;
            }
            if self.abort_signal.is_aborted() {
                self.status.update_message("abort signal received");
                completed = false;
                break;
            }
        }
        if completed {
            self.status.update_message("completed");
        }
        Ok(self.summarize(completed))
    }

    fn summarize(&self, completed: bool) -> MinimizationSummary {
        MinimizationSummary {
            bounds: self.status.swarm.bounds.clone(),
            message: self.status.message.clone(),
            x: self.status.gbest.x.iter().copied().collect(),
            fx: self.status.gbest.fx,
            cost_evals: self.status.n_f_evals,
            iterations: self.status.history.len(),
            completed,
        }
    }
}
