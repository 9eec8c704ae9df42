//! Random number generation port.
//!
//! Feature generation and spawning draw from this port instead of a global
//! generator, so tests can run against a seeded source.

/// Random number source for creature generation.
///
/// # Implementations
///
/// - `ThreadRngAdapter` (production, uses `rand::thread_rng()`)
/// - `SeededRandom` (reproducible, uses a seeded `StdRng`)
pub trait RandomPort: Send + Sync {
    /// Generate a random f64 in range [0.0, 1.0)
    fn random_f64(&self) -> f64;

    /// Generate a uniformly distributed index in range [0, len). `len` must be non-zero.
    fn random_index(&self, len: usize) -> usize;
}
