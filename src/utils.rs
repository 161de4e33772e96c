use crate::{DVector, Float};
use fastrand::Rng;
use fastrand_contrib::RngExt;

/// A helper trait to get feature-gated floating-point random values.
pub trait SampleFloat {
    /// Get a random value in a range.
    fn range(&mut self, lower: Float, upper: Float) -> Float;
    /// Get a random value in the range `[0, 1)`.
    fn float(&mut self) -> Float;
}
impl SampleFloat for Rng {
    #[cfg(not(feature = "f32"))]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        self.f64_range(lower..upper)
    }
    #[cfg(feature = "f32")]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        self.f32_range(lower..upper)
    }
    #[cfg(not(feature = "f32"))]
    fn float(&mut self) -> Float {
        self.f64()
    }
    #[cfg(feature = "f32")]
    fn float(&mut self) -> Float {
        self.f32()
    }
}

pub(crate) fn generate_random_vector(
    dimension: usize,
    lb: Float,
    ub: Float,
    rng: &mut Rng,
) -> DVector<Float> {
    DVector::from_vec((0..dimension).map(|_| rng.range(lb, ub)).collect())
}

pub(crate) fn generate_random_vector_in_limits(
    limits: &[(Float, Float)],
    rng: &mut Rng,
) -> DVector<Float> {
    DVector::from_vec(
        limits
            .iter()
            .map(|&(lb, ub)| rng.range(lb, ub))
            .collect(),
    )
}
