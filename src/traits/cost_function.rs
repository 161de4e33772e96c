use crate::{DVector, Float};
use std::convert::Infallible;

/// A trait which describes a function $`f(\mathbb{R}^n) \to \mathbb{R}`$.
///
/// The swarm treats the objective as an opaque pure function: it may be non-smooth or multimodal,
/// and nothing about differentiability, convexity, or continuity is assumed. A `user_data: &mut U`
/// field can be used to pass external arguments to the function during optimization, or can be
/// modified by the function itself.
///
/// The `CostFunction` trait takes a generic `U` representing the type of user data/arguments and
/// a generic `E` representing any possible errors that might be returned during function
/// execution. Evaluations which yield NaN or infinite costs are not errors; the optimizer treats
/// them as `+inf` in all best-position comparisons.
pub trait CostFunction<U = (), E = Infallible> {
    /// The evaluation of the function at a point `x` with the given arguments/user data.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. Users should implement this trait to return a
    /// [`std::convert::Infallible`] if the function evaluation never fails.
    fn evaluate(&self, x: &DVector<Float>, user_data: &mut U) -> Result<Float, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Paraboloid;
    impl CostFunction for Paraboloid {
        fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
            Ok(x[0].powi(2) + x[1].powi(2) + 1.0)
        }
    }

    struct Counting;
    impl CostFunction<usize> for Counting {
        fn evaluate(&self, x: &DVector<Float>, user_data: &mut usize) -> Result<Float, Infallible> {
            *user_data += 1;
            Ok(x.iter().sum())
        }
    }

    #[test]
    fn test_cost_function() {
        let x = DVector::from_vec(vec![1.0, 2.0]);
        assert_eq!(Paraboloid.evaluate(&x, &mut ()).unwrap(), 6.0);
    }

    #[test]
    fn test_cost_function_user_data() {
        let x = DVector::from_vec(vec![1.0, 2.0]);
        let mut count = 0;
        Counting.evaluate(&x, &mut count).unwrap();
        Counting.evaluate(&x, &mut count).unwrap();
        assert_eq!(count, 2);
    }
}
