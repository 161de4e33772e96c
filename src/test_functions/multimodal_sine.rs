use crate::{traits::CostFunction, DVector, Float};
use std::convert::Infallible;

/// A sum of three incommensurate sine waves applied to every coordinate:
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^{n} \left[ \sin(x_i) + \sin\left(\frac{10 x_i}{3}\right) +
/// \sin\left(\frac{100 x_i}{3}\right) \right]
/// ```
///
/// The overlapping frequencies produce a dense comb of local minima with no useful gradient
/// structure at large scales, which makes it a good stress test for a population-based search.
pub struct MultimodalSine;
impl CostFunction for MultimodalSine {
    fn evaluate(&self, x: &DVector<Float>, _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok(x.iter()
            .map(|xi| Float::sin(*xi) + Float::sin(10.0 * xi / 3.0) + Float::sin(100.0 * xi / 3.0))
            .sum())
    }
}
