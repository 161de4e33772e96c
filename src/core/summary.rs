use crate::{
    core::{Bound, Bounds},
    Float,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A struct that holds the results of an optimization run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MinimizationSummary {
    /// The bounds of the search region.
    pub bounds: Bounds,
    /// A message describing how the run ended.
    pub message: String,
    /// The best position found by the swarm.
    pub x: Vec<Float>,
    /// The cost of the best position found by the swarm.
    pub fx: Float,
    /// The number of cost function evaluations.
    pub cost_evals: usize,
    /// The number of iterations actually performed.
    pub iterations: usize,
    /// Flag that says whether the run completed its configured iteration count.
    pub completed: bool,
}

impl Display for MinimizationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MSG:       {}", self.message)?;
        for (i, x_i) in self.x.iter().enumerate() {
            let bound = self.bounds.get(i).copied().unwrap_or_default();
            let tag = if i == 0 { "X:        " } else { "          " };
            writeln!(
                f,
                "{} {:+.6} in {}{}",
                tag,
                x_i,
                bound,
                if bound.at_bound(*x_i) { " (at limit)" } else { "" }
            )?;
        }
        writeln!(f, "F(X):      {:+.6E}", self.fx)?;
        writeln!(f, "N_F_EVALS: {}", self.cost_evals)?;
        writeln!(f, "N_STEPS:   {}", self.iterations)?;
        write!(f, "COMPLETED: {}", self.completed)
    }
}

impl MinimizationSummary {
    /// Returns `true` if the best position sits exactly on any edge of the search region.
    pub fn at_limit(&self) -> bool {
        self.x
            .iter()
            .zip(self.bounds.iter())
            .any(|(x_i, b)| b.at_bound(*x_i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let summary = MinimizationSummary {
            bounds: vec![Bound::from((-10.0, 10.0)), Bound::from((-10.0, 10.0))].into(),
            message: "completed".to_string(),
            x: vec![0.001, -0.002],
            fx: 5e-6,
            cost_evals: 6030,
            iterations: 200,
            completed: true,
        };
        let s = summary.to_string();
        assert!(s.contains("MSG:"));
        assert!(s.contains("F(X):"));
        assert!(s.contains("N_F_EVALS: 6030"));
        assert!(!summary.at_limit());
    }

    #[test]
    fn test_at_limit() {
        let summary = MinimizationSummary {
            bounds: vec![Bound::from((-1.0, 1.0))].into(),
            x: vec![1.0],
            ..Default::default()
        };
        assert!(summary.at_limit());
    }
}
