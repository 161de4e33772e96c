/// The sphere function.
pub mod sphere;
pub use sphere::Sphere;

/// The Rastrigin function.
pub mod rastrigin;
pub use rastrigin::Rastrigin;

/// A sum of incommensurate sine waves.
pub mod multimodal_sine;
pub use multimodal_sine::MultimodalSine;
