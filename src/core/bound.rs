use crate::{utils::SampleFloat, DVector, Float};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
};

/// A closed interval constraining one coordinate of the search region.
///
/// Bounds are accepted unchecked when constructed from a tuple; the swarm validates them
/// (`lower < upper`, both finite) at initialization, before any sampling is done.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bound {
    /// The lower edge of the interval.
    pub lower: Float,
    /// The upper edge of the interval.
    pub upper: Float,
}

impl Default for Bound {
    fn default() -> Self {
        Self {
            lower: -1.0,
            upper: 1.0,
        }
    }
}

impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lower, self.upper)
    }
}

impl From<(Float, Float)> for Bound {
    fn from(value: (Float, Float)) -> Self {
        Self {
            lower: value.0,
            upper: value.1,
        }
    }
}

impl From<&Self> for Bound {
    fn from(value: &Self) -> Self {
        *value
    }
}

impl Bound {
    /// Get a value uniformly distributed between `lower` and `upper`.
    pub fn get_uniform(&self, rng: &mut Rng) -> Float {
        rng.range(self.lower, self.upper)
    }
    /// Checks whether the given `value` lies inside the interval (inclusive at both edges).
    pub fn contains(&self, value: Float) -> bool {
        value >= self.lower && value <= self.upper
    }
    /// Clamps the given `value` into the interval.
    pub fn clamp(&self, value: Float) -> Float {
        value.max(self.lower).min(self.upper)
    }
    /// Checks if the given value sits exactly on one of the edges.
    pub fn at_bound(&self, value: Float) -> bool {
        value == self.lower || value == self.upper
    }
    /// Returns `true` if the interval is non-empty and has finite edges, i.e. it describes a
    /// region that can be sampled.
    pub fn is_valid(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite() && self.lower < self.upper
    }
}

/// The per-dimension [`Bound`]s describing the search region.
#[derive(Default, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bounds(Vec<Bound>);

impl Bounds {
    /// Returns the inner vector of bounds.
    pub fn into_inner(self) -> Vec<Bound> {
        self.0
    }
    /// The dimension of the region the bounds describe.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }
    /// Sample a position uniformly from the bounded region, one independent draw per dimension
    /// in dimension order.
    pub fn random_vector(&self, rng: &mut Rng) -> DVector<Float> {
        DVector::from_vec(self.0.iter().map(|b| b.get_uniform(rng)).collect())
    }
    /// Checks whether every coordinate of `x` lies inside its bound.
    pub fn contains(&self, x: &DVector<Float>) -> bool {
        x.iter().zip(self.0.iter()).all(|(xi, b)| b.contains(*xi))
    }
    /// Clamps every coordinate of `x` into its bound.
    pub fn clamp(&self, x: &mut DVector<Float>) {
        for (xi, b) in x.iter_mut().zip(self.0.iter()) {
            *xi = b.clamp(*xi);
        }
    }
}

impl From<Vec<Bound>> for Bounds {
    fn from(value: Vec<Bound>) -> Self {
        Self(value)
    }
}

impl Deref for Bounds {
    type Target = Vec<Bound>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Bounds {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_contains_and_clamp() {
        let b = Bound::from((-1.0, 1.0));
        assert!(b.contains(0.0));
        assert!(b.contains(-1.0));
        assert!(b.contains(1.0));
        assert!(!b.contains(2.0));
        assert_eq!(b.clamp(2.0), 1.0);
        assert_eq!(b.clamp(-3.0), -1.0);
        assert_eq!(b.clamp(0.5), 0.5);
    }

    #[test]
    fn test_bound_at_bound_and_validity() {
        let b = Bound::from((-2.0, 3.0));
        assert!(b.at_bound(-2.0));
        assert!(b.at_bound(3.0));
        assert!(!b.at_bound(0.0));
        assert!(b.is_valid());
        assert!(!Bound::from((5.0, -5.0)).is_valid());
        assert!(!Bound::from((1.0, 1.0)).is_valid());
        assert!(!Bound::from((0.0, Float::INFINITY)).is_valid());
    }

    #[test]
    fn test_bounds_random_vector_is_contained() {
        let bounds: Bounds = vec![
            Bound::from((-1.0, 1.0)),
            Bound::from((0.0, 5.0)),
            Bound::from((10.0, 20.0)),
        ]
        .into();
        let mut rng = Rng::with_seed(0);
        for _ in 0..100 {
            let x = bounds.random_vector(&mut rng);
            assert_eq!(x.len(), bounds.dimension());
            assert!(bounds.contains(&x));
        }
    }

    #[test]
    fn test_bounds_clamp_vector() {
        let bounds: Bounds = vec![Bound::from((-1.0, 1.0)), Bound::from((0.0, 2.0))].into();
        let mut x = DVector::from_vec(vec![5.0, -5.0]);
        bounds.clamp(&mut x);
        assert_eq!(x, DVector::from_vec(vec![1.0, 0.0]));
        assert!(bounds.contains(&x));
    }
}
