//! `bhramari` (/bɹɑːˈmɑːɹi/), named after the Hindu goddess of bees, is a particle swarm
//! optimizer for bounded, gradient-free minimization of scalar functions
//! ($`f(\mathbb{R}^n) \to \mathbb{R}`$). The user implements the [`CostFunction`] trait on some
//! struct, describes the search region and swarm hyperparameters, and gets back the best position
//! found by the swarm along with a per-iteration convergence history.
//!
//! # Key Features
//! * A single, well-specified algorithm with sensible defaults and explicit knobs for every
//!   behavior that varies between PSO references (update ordering, boundary handling, stochastic
//!   coefficient draws, velocity initialization).
//! * Seedable randomness: runs with the same configuration and seed produce bit-identical
//!   histories.
//! * Observers which can watch (or stop) a run at every iteration, and abort signals for
//!   `Ctrl-C`-style cancellation.
//! * Objectives which return NaN or infinite costs are tolerated: such evaluations are treated as
//!   `+inf` in all best-position comparisons and can never contaminate the result.
//!
//! # Quick Start
//!
//! ```rust
//! use std::convert::Infallible;
//! use bhramari::prelude::*;
//! use bhramari::test_functions::Sphere;
//!
//! fn main() -> Result<(), SwarmError<Infallible>> {
//!     let mut pso: PSO = PSO::new().configure(|c| {
//!         c.with_omega(0.5).with_c1(1.0).with_c2(2.0).with_seed(0).setup_swarm(|s| {
//!             s.with_n_particles(30)
//!                 .with_bounds(vec![(-10.0, 10.0), (-10.0, 10.0)])
//!         })
//!     });
//!     let summary = pso.run(&Sphere, &mut (), 200)?;
//!     println!("{}", summary);
//!     assert!(summary.fx < 1e-3);
//!     Ok(())
//! }
//! ```
//!
//! # Boundary handling
//!
//! By default the swarm clamps every coordinate back into the search region after each position
//! update ([`SwarmBoundaryMethod::Clamp`](swarms::SwarmBoundaryMethod)). Configurations which want
//! particles to explore outside the nominal region can opt out with
//! [`SwarmBoundaryMethod::Unbounded`](swarms::SwarmBoundaryMethod); the bounds then only shape the
//! initial sampling.
//!
//! [`CostFunction`]: traits::CostFunction
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing the core data types shared by the swarm machinery.
pub mod core;
/// Module containing the particle swarm optimizer and its building blocks.
pub mod swarms;
/// Module containing standard functions for testing the optimizer.
pub mod test_functions;
/// Module containing the crate's extension traits.
pub mod traits;
/// Module containing random-sampling helpers.
pub mod utils;

/// Prelude module containing everything someone should need to use this crate for
/// non-development purposes.
pub mod prelude {
    pub use crate::{
        core::{Bound, Bounds, ConvergenceHistory, MinimizationSummary, Point, SwarmError},
        swarms::{
            Swarm, SwarmBoundaryMethod, SwarmCoefficientScheme, SwarmParticle, SwarmStatus,
            SwarmUpdateMethod, SwarmVelocityInitializer, PSO,
        },
        traits::{AbortSignal, CostFunction, SwarmObserver},
        Float,
    };
}

/// The floating-point type used throughout the crate (`f64` by default, `f32` with the `f32`
/// feature).
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// The floating-point type used throughout the crate (`f64` by default, `f32` with the `f32`
/// feature).
#[cfg(feature = "f32")]
pub type Float = f32;

/// The constant $`\pi`$ at the crate's floating-point precision.
#[cfg(not(feature = "f32"))]
pub const PI: Float = std::f64::consts::PI;

/// The constant $`\pi`$ at the crate's floating-point precision.
#[cfg(feature = "f32")]
pub const PI: Float = std::f32::consts::PI;

pub use nalgebra::DVector;
