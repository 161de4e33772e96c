use crate::{traits::CostFunction, DVector, Float};
use std::convert::Infallible;

/// The sphere function, the simplest smooth test function:
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^{n} x_i^2
/// ```
///
/// The global minimum is at the origin with a value of zero in any dimension.
pub struct Sphere;
impl CostFunction for Sphere {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok(x.iter().map(|xi| xi.powi(2)).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere() {
        assert_eq!(
            Sphere
                .evaluate(&DVector::from_vec(vec![0.0, 0.0]), &mut ())
                .unwrap(),
            0.0
        );
        assert_eq!(
            Sphere
                .evaluate(&DVector::from_vec(vec![3.0, 4.0]), &mut ())
                .unwrap(),
            25.0
        );
    }
}
