use crate::{traits::CostFunction, DVector, Float};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display};

/// A position in the search space paired with the cost of that position.
///
/// An unevaluated point carries a cost of `+inf`, which is also the value every non-finite
/// evaluation collapses to for comparison purposes (see [`Point::comparison_fx`]).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Point {
    /// The point's position.
    pub x: DVector<Float>,
    /// The cost of the point's position.
    pub fx: Float,
}

impl Default for Point {
    fn default() -> Self {
        Self {
            x: DVector::zeros(0),
            fx: Float::INFINITY,
        }
    }
}

impl Point {
    /// The cost used in best-position comparisons: NaN and infinite evaluations are treated as
    /// `+inf`, so they can never beat a finite alternative.
    pub fn comparison_fx(&self) -> Float {
        if self.fx.is_finite() {
            self.fx
        } else {
            Float::INFINITY
        }
    }
    /// Compare two points by cost, with non-finite costs collapsed to `+inf`.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.comparison_fx().total_cmp(&other.comparison_fx())
    }
    /// Move the point to a new position, resetting the cost to `+inf`.
    pub fn set_position(&mut self, x: DVector<Float>) {
        self.x = x;
        self.fx = Float::INFINITY;
    }
    /// Evaluate the given function at the point's position and store the cost.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn evaluate<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<(), E> {
        self.fx = func.evaluate(&self.x, user_data)?;
        Ok(())
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "x: {:?}, f(x): {}", self.x.as_slice(), self.fx)
    }
}

impl From<&[Float]> for Point {
    fn from(value: &[Float]) -> Self {
        Self {
            x: DVector::from_column_slice(value),
            fx: Float::INFINITY,
        }
    }
}
impl From<Vec<Float>> for Point {
    fn from(value: Vec<Float>) -> Self {
        Self {
            x: DVector::from_vec(value),
            fx: Float::INFINITY,
        }
    }
}
impl From<DVector<Float>> for Point {
    fn from(value: DVector<Float>) -> Self {
        Self {
            x: value,
            fx: Float::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_functions::Sphere;

    #[test]
    fn test_evaluate_sets_fx() {
        let mut p = Point::from(vec![3.0, 4.0]);
        assert_eq!(p.fx, Float::INFINITY);
        p.evaluate(&Sphere, &mut ()).unwrap();
        assert_eq!(p.fx, 25.0);
    }

    #[test]
    fn test_set_position_resets_fx() {
        let mut p = Point::from(vec![1.0]);
        p.fx = 5.0;
        p.set_position(DVector::from_vec(vec![2.0]));
        assert_eq!(p.x[0], 2.0);
        assert_eq!(p.fx, Float::INFINITY);
    }

    #[test]
    fn test_total_cmp_orders_by_cost() {
        let mut a = Point::from(vec![0.0]);
        let mut b = Point::from(vec![0.0]);
        a.fx = 1.0;
        b.fx = 2.0;
        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(b.total_cmp(&a), Ordering::Greater);
        b.fx = 1.0;
        assert_eq!(a.total_cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_non_finite_costs_compare_as_infinity() {
        let mut nan = Point::from(vec![0.0]);
        nan.fx = Float::NAN;
        let mut neg_inf = Point::from(vec![0.0]);
        neg_inf.fx = Float::NEG_INFINITY;
        let mut finite = Point::from(vec![0.0]);
        finite.fx = 1e300;

        assert_eq!(finite.total_cmp(&nan), Ordering::Less);
        assert_eq!(finite.total_cmp(&neg_inf), Ordering::Less);
        assert_eq!(nan.total_cmp(&neg_inf), Ordering::Equal);
        assert_eq!(nan.comparison_fx(), Float::INFINITY);
    }
}
