use crate::{
    core::{Bound, Bounds},
    swarms::SwarmParticle,
    traits::CostFunction,
    utils::generate_random_vector_in_limits,
    DVector, Float,
};
use fastrand::Rng;
use serde::{Deserialize, Serialize};

/// A swarm of particles together with the policies that govern their movement.
///
/// The particle order is fixed at initialization and never changes, so a seeded run consumes the
/// random stream in a reproducible order (particle-major, dimension-minor).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Swarm {
    /// The number of particles.
    pub n_particles: usize,
    /// The per-dimension bounds of the search region.
    pub bounds: Bounds,
    /// A list of the particles in the swarm.
    pub particles: Vec<SwarmParticle>,
    /// The update method used by the swarm.
    pub update_method: SwarmUpdateMethod,
    /// The boundary method used by the swarm.
    pub boundary_method: SwarmBoundaryMethod,
    /// The stochastic coefficient scheme used by the swarm.
    pub coefficient_scheme: SwarmCoefficientScheme,
    /// The velocity initializer used by the swarm.
    pub velocity_initializer: SwarmVelocityInitializer,
}

impl Default for Swarm {
    fn default() -> Self {
        Self {
            n_particles: 30,
            bounds: Bounds::default(),
            particles: Vec::default(),
            update_method: SwarmUpdateMethod::default(),
            boundary_method: SwarmBoundaryMethod::default(),
            coefficient_scheme: SwarmCoefficientScheme::default(),
            velocity_initializer: SwarmVelocityInitializer::default(),
        }
    }
}

impl Swarm {
    /// Sets the number of particles in the swarm (default = `30`).
    pub fn with_n_particles(&mut self, value: usize) -> &mut Self {
        self.n_particles = value;
        self
    }
    /// Sets the per-dimension bounds of the search region. The dimension of the problem is the
    /// number of bounds given here.
    pub fn with_bounds<I: IntoIterator<Item = B>, B: Into<Bound>>(&mut self, bounds: I) -> &mut Self {
        self.bounds = bounds
            .into_iter()
            .map(Into::into)
            .collect::<Vec<_>>()
            .into();
        self
    }
    /// Sets the update method used by the swarm (default = [`SwarmUpdateMethod::Synchronous`]).
    pub fn with_update_method(&mut self, value: SwarmUpdateMethod) -> &mut Self {
        self.update_method = value;
        self
    }
    /// Sets the boundary method used by the swarm (default = [`SwarmBoundaryMethod::Clamp`]).
    pub fn with_boundary_method(&mut self, value: SwarmBoundaryMethod) -> &mut Self {
        self.boundary_method = value;
        self
    }
    /// Sets the stochastic coefficient scheme used by the swarm
    /// (default = [`SwarmCoefficientScheme::PerDimension`]).
    pub fn with_coefficient_scheme(&mut self, value: SwarmCoefficientScheme) -> &mut Self {
        self.coefficient_scheme = value;
        self
    }
    /// Set the swarm's [`SwarmVelocityInitializer`] (default = [`SwarmVelocityInitializer::Zero`]).
    pub fn with_velocity_initializer(&mut self, value: SwarmVelocityInitializer) -> &mut Self {
        self.velocity_initializer = value;
        self
    }

    /// The dimension of the search region.
    pub fn dimension(&self) -> usize {
        self.bounds.dimension()
    }

    /// Checks the swarm configuration, returning a description of the first problem found.
    /// This runs before any sampling, so a misconfigured swarm performs no work at all.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.n_particles == 0 {
            return Err("n_particles must be > 0".to_string());
        }
        if self.bounds.is_empty() {
            return Err("bounds must describe at least one dimension".to_string());
        }
        for (i, bound) in self.bounds.iter().enumerate() {
            if !bound.is_valid() {
                return Err(format!(
                    "bounds[{}] = {} must satisfy min < max with finite edges",
                    i, bound
                ));
            }
        }
        if let SwarmVelocityInitializer::RandomInLimits(limits) = &self.velocity_initializer {
            if limits.len() != self.bounds.dimension() {
                return Err(format!(
                    "velocity limits have dimension {} but bounds have dimension {}",
                    limits.len(),
                    self.bounds.dimension()
                ));
            }
            for (i, (lb, ub)) in limits.iter().enumerate() {
                if !(lb.is_finite() && ub.is_finite() && lb < ub) {
                    return Err(format!(
                        "velocity limits[{}] = ({}, {}) must satisfy min < max with finite edges",
                        i, lb, ub
                    ));
                }
            }
        }
        Ok(())
    }

    /// Create the particles in the swarm: positions uniform inside the bounds, velocities per the
    /// configured [`SwarmVelocityInitializer`], personal bests seeded from the initial
    /// evaluation. Draws are consumed particle-major (position before velocity).
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if any evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub(crate) fn initialize<U, E>(
        &mut self,
        rng: &mut Rng,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), E> {
        let dimension = self.dimension();
        let mut particles = Vec::with_capacity(self.n_particles);
        for _ in 0..self.n_particles {
            let position = self.bounds.random_vector(rng);
            let velocity = self.velocity_initializer.init_velocity(rng, dimension);
            particles.push(SwarmParticle::new(position, velocity, func, user_data)?);
        }
        self.particles = particles;
        Ok(())
    }

    /// The particle holding the lowest-cost personal best, ties resolved in favor of the earliest
    /// particle. Returns [`None`] for an uninitialized swarm.
    pub fn best_particle(&self) -> Option<&SwarmParticle> {
        self.particles.iter().min_by(|a, b| a.total_cmp(b))
    }
}

/// The algorithmic method used to propagate the global best through a sweep.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SwarmUpdateMethod {
    /// Every particle in an iteration observes the global best snapshot taken at the start of
    /// that iteration; the global best is folded once after the sweep. Results are independent of
    /// particle processing order.
    #[default]
    Synchronous,
    /// Later particles in a sweep observe improvements made by earlier particles in the same
    /// sweep. Faster propagation, but results depend on particle order.
    Asynchronous,
}

/// Methods for handling the search region boundary after a position update.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SwarmBoundaryMethod {
    /// Clamp every coordinate back into its bound.
    #[default]
    Clamp,
    /// Let particles leave the nominal region; the bounds only shape the initial sampling.
    Unbounded,
}

/// How the stochastic coefficients $`r_1`$ and $`r_2`$ are drawn for each particle update.
///
/// This choice changes search behavior materially, so it is an explicit configuration rather
/// than an accident of implementation.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SwarmCoefficientScheme {
    /// Draw an independent $`(r_1, r_2)`$ pair for every dimension.
    #[default]
    PerDimension,
    /// Draw one $`(r_1, r_2)`$ pair per particle and share it across all dimensions.
    PerParticle,
}

/// Methods for setting the initial velocity of particles in a swarm.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub enum SwarmVelocityInitializer {
    /// Initialize all velocities to zero.
    #[default]
    Zero,
    /// Initialize velocities randomly within the given per-dimension limits.
    RandomInLimits(Vec<(Float, Float)>),
}

impl SwarmVelocityInitializer {
    fn init_velocity(&self, rng: &mut Rng, dimension: usize) -> DVector<Float> {
        match self {
            Self::Zero => DVector::zeros(dimension),
            Self::RandomInLimits(limits) => generate_random_vector_in_limits(limits, rng),
        }
    }
}
