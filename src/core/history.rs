use crate::{core::Point, DVector, Float};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// An append-only record of the global best position after each completed iteration.
///
/// Snapshots are appended in iteration order and never mutated afterwards, so the sequence of
/// [`costs`](ConvergenceHistory::costs) is non-increasing for any well-formed run.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ConvergenceHistory(Vec<Point>);

impl ConvergenceHistory {
    pub(crate) fn record(&mut self, best: &Point) {
        self.0.push(best.clone());
    }
    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
    /// The recorded global best cost at each iteration.
    pub fn costs(&self) -> Vec<Float> {
        self.0.iter().map(|p| p.fx).collect()
    }
    /// The recorded global best position at each iteration.
    pub fn positions(&self) -> Vec<DVector<Float>> {
        self.0.iter().map(|p| p.x.clone()).collect()
    }
    /// Returns the inner vector of snapshots.
    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }
}

impl Deref for ConvergenceHistory {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_order() {
        let mut history = ConvergenceHistory::default();
        for i in 0..5 {
            let mut p = Point::from(vec![i as Float]);
            p.fx = 10.0 - i as Float;
            history.record(&p);
        }
        assert_eq!(history.len(), 5);
        assert_eq!(history.costs(), vec![10.0, 9.0, 8.0, 7.0, 6.0]);
        assert_eq!(history.positions()[3][0], 3.0);
        assert_eq!(history[0].fx, 10.0);
    }

    #[test]
    fn test_clear_empties_history() {
        let mut history = ConvergenceHistory::default();
        history.record(&Point::default());
        history.clear();
        assert!(history.is_empty());
    }
}
