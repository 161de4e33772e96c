use crate::{traits::CostFunction, DVector, Float, PI};
use std::convert::Infallible;

/// The Rastrigin function, a highly multimodal test function:
///
/// ```math
/// f(\vec{x}) = 10 n + \sum_{i=1}^{n} \left[ x_i^2 - 10 \cos(2 \pi x_i) \right]
/// ```
///
/// The global minimum is at the origin with a value of zero, surrounded by a regular lattice of
/// local minima.
pub struct Rastrigin;
impl CostFunction for Rastrigin {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok(10.0 * x.len() as Float
            + x.iter()
                .map(|xi| xi.powi(2) - 10.0 * Float::cos(2.0 * PI * xi))
                .sum::<Float>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rastrigin_minimum() {
        assert_relative_eq!(
            Rastrigin
                .evaluate(&DVector::from_vec(vec![0.0, 0.0]), &mut ())
                .unwrap(),
            0.0
        );
    }

    #[test]
    fn test_rastrigin_local_minima_are_above_global() {
        // integer lattice points are the local minima
        let global = Rastrigin
            .evaluate(&DVector::from_vec(vec![0.0]), &mut ())
            .unwrap();
        let local = Rastrigin
            .evaluate(&DVector::from_vec(vec![1.0]), &mut ())
            .unwrap();
        assert!(local > global);
    }
}
