use crate::{
    core::{Bounds, Point},
    swarms::{SwarmBoundaryMethod, SwarmCoefficientScheme},
    traits::CostFunction,
    utils::generate_random_vector,
    DVector, Float,
};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One candidate solution, carrying its position, velocity, and best-found memory.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SwarmParticle {
    /// The position of the particle and its current cost.
    pub position: Point,
    /// The velocity of the particle.
    pub velocity: DVector<Float>,
    /// The lowest-cost position this particle has visited.
    pub best: Point,
}

impl SwarmParticle {
    /// Create a new particle at the given position with the given velocity, evaluating the cost
    /// function to seed the personal best.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn new<U, E>(
        position: DVector<Float>,
        velocity: DVector<Float>,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<Self, E> {
        let mut position = Point::from(position);
        position.evaluate(func, user_data)?;
        Ok(Self {
            position: position.clone(),
            velocity,
            best: position,
        })
    }

    /// Compare the best position of this particle to another's.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.best.total_cmp(&other.best)
    }

    /// Update the particle's velocity towards its personal best and the given swarm best:
    ///
    /// ```math
    /// v_i^{t+1} = \omega v_i^t + c_1 r_{1,i}(p_i^t - x_i^t) + c_2 r_{2,i}(g^t - x_i^t)
    /// ```
    ///
    /// where $`r_1`$ and $`r_2`$ are uniform in $`[0,1)`$, drawn per dimension or shared per
    /// particle depending on the [`SwarmCoefficientScheme`]. The `r1` draws are consumed before
    /// the `r2` draws, so a seeded run is reproducible regardless of scheme.
    pub fn update_velocity(
        &mut self,
        gbest_x: &DVector<Float>,
        omega: Float,
        c1: Float,
        c2: Float,
        scheme: SwarmCoefficientScheme,
        rng: &mut Rng,
    ) {
        let dim = self.position.x.len();
        let (rv1, rv2) = match scheme {
            SwarmCoefficientScheme::PerDimension => (
                generate_random_vector(dim, 0.0, 1.0, rng),
                generate_random_vector(dim, 0.0, 1.0, rng),
            ),
            SwarmCoefficientScheme::PerParticle => {
                let r1 = generate_random_vector(1, 0.0, 1.0, rng)[0];
                let r2 = generate_random_vector(1, 0.0, 1.0, rng)[0];
                (
                    DVector::from_element(dim, r1),
                    DVector::from_element(dim, r2),
                )
            }
        };
        self.velocity = self.velocity.scale(omega)
            + rv1
                .component_mul(&(&self.best.x - &self.position.x))
                .scale(c1)
            + rv2
                .component_mul(&(gbest_x - &self.position.x))
                .scale(c2);
    }

    /// Move the particle by its velocity, apply the boundary method, re-evaluate the cost, and
    /// fold the personal best with a strict `<` comparison (non-finite costs count as `+inf`).
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn update_position<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
        bounds: &Bounds,
        boundary_method: SwarmBoundaryMethod,
    ) -> Result<(), E> {
        let mut new_position = &self.position.x + &self.velocity;
        if matches!(boundary_method, SwarmBoundaryMethod::Clamp) {
            bounds.clamp(&mut new_position);
        }
        self.position.set_position(new_position);
        self.position.evaluate(func, user_data)?;
        if self.position.total_cmp(&self.best) == Ordering::Less {
            self.best = self.position.clone();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::Bound, test_functions::Sphere};
    use std::convert::Infallible;

    fn particle_at(x: Vec<Float>, v: Vec<Float>) -> SwarmParticle {
        SwarmParticle::new(
            DVector::from_vec(x),
            DVector::from_vec(v),
            &Sphere,
            &mut (),
        )
        .unwrap()
    }

    #[test]
    fn test_new_seeds_personal_best() {
        let p = particle_at(vec![3.0, 4.0], vec![0.0, 0.0]);
        assert_eq!(p.position.fx, 25.0);
        assert_eq!(p.best.fx, 25.0);
        assert_eq!(p.best.x, p.position.x);
    }

    #[test]
    fn test_zero_weights_freeze_velocity() {
        let mut p = particle_at(vec![1.0, -1.0], vec![0.0, 0.0]);
        let mut rng = Rng::with_seed(0);
        let gbest = DVector::from_vec(vec![0.0, 0.0]);
        for _ in 0..10 {
            p.update_velocity(
                &gbest,
                0.0,
                0.0,
                0.0,
                SwarmCoefficientScheme::PerDimension,
                &mut rng,
            );
            assert_eq!(p.velocity, DVector::from_vec(vec![0.0, 0.0]));
        }
    }

    #[test]
    fn test_per_particle_scheme_shares_one_draw_across_dimensions() {
        let mut p = particle_at(vec![0.0, 0.0, 0.0], vec![0.0, 0.0, 0.0]);
        p.best.x = DVector::from_vec(vec![1.0, 1.0, 1.0]);
        let gbest = DVector::from_vec(vec![0.0, 0.0, 0.0]);
        let mut rng = Rng::with_seed(3);
        // with c2 = 0 the velocity is c1 * r1 * (pbest - x), identical in every dimension
        p.update_velocity(
            &gbest,
            0.0,
            1.0,
            0.0,
            SwarmCoefficientScheme::PerParticle,
            &mut rng,
        );
        assert_eq!(p.velocity[0], p.velocity[1]);
        assert_eq!(p.velocity[1], p.velocity[2]);
    }

    #[test]
    fn test_update_position_clamps_to_bounds() {
        let bounds: Bounds = vec![Bound::from((-1.0, 1.0)), Bound::from((-1.0, 1.0))].into();
        let mut p = particle_at(vec![0.9, -0.9], vec![10.0, -10.0]);
        p.update_position(&Sphere, &mut (), &bounds, SwarmBoundaryMethod::Clamp)
            .unwrap();
        assert_eq!(p.position.x, DVector::from_vec(vec![1.0, -1.0]));
        assert_eq!(p.position.fx, 2.0);
    }

    #[test]
    fn test_update_position_unbounded_leaves_region() {
        let bounds: Bounds = vec![Bound::from((-1.0, 1.0)), Bound::from((-1.0, 1.0))].into();
        let mut p = particle_at(vec![0.9, -0.9], vec![10.0, -10.0]);
        p.update_position(&Sphere, &mut (), &bounds, SwarmBoundaryMethod::Unbounded)
            .unwrap();
        assert!(!bounds.contains(&p.position.x));
    }

    #[test]
    fn test_personal_best_is_monotonic() {
        struct Absolute;
        impl CostFunction for Absolute {
            fn evaluate(
                &self,
                x: &DVector<Float>,
                _user_data: &mut (),
            ) -> Result<Float, Infallible> {
                Ok(x[0].abs())
            }
        }
        let bounds: Bounds = vec![Bound::from((-10.0, 10.0))].into();
        let mut p = SwarmParticle::new(
            DVector::from_vec(vec![4.0]),
            DVector::from_vec(vec![-1.0]),
            &Absolute,
            &mut (),
        )
        .unwrap();
        let mut last_best = p.best.fx;
        // velocity is constant, so the particle walks through the minimum and out the other side
        for _ in 0..8 {
            p.update_position(&Absolute, &mut (), &bounds, SwarmBoundaryMethod::Clamp)
                .unwrap();
            assert!(p.best.fx <= last_best);
            assert!(p.best.fx <= p.position.fx);
            last_best = p.best.fx;
        }
        assert_eq!(p.best.fx, 0.0);
    }
}
