//! White noise generator implementation.

use crate::Signal;
use rand::Rng;

/// A white noise generator.
///
/// Each sample is an independent value uniformly distributed between -1.0
/// and 1.0. The default generator uses the calling thread's RNG; tests and
/// offline renders can supply a seeded RNG instead.
pub struct WhiteNoise<R: Rng = rand::rngs::ThreadRng> {
    /// Random number generator
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Creates a new white noise generator backed by the thread-local RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use signalgen::{Signal, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::new();
    /// let sample = noise.next_sample();
    /// assert!((-1.0..=1.0).contains(&sample));
    /// ```
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for WhiteNoise<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a new white noise generator with a custom RNG.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random number generator to use
    ///
    /// # Examples
    ///
    /// ```
    /// use signalgen::{Signal, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(rng);
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sample_range() {
        let mut noise = WhiteNoise::new();
        for _ in 0..10000 {
            let sample = noise.next_sample();
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_randomness() {
        let mut noise = WhiteNoise::new();
        let samples: Vec<f64> = (0..100).map(|_| noise.next_sample()).collect();
        let first = samples[0];
        let all_same = samples.iter().all(|&s| s == first);
        assert!(!all_same, "White noise should produce varying samples");
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = WhiteNoise::with_rng(StdRng::seed_from_u64(42));
        let mut b = WhiteNoise::with_rng(StdRng::seed_from_u64(42));
        for _ in 0..64 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }

    #[test]
    fn test_process_buffer() {
        let mut noise = WhiteNoise::new();
        let mut buffer = vec![0.0; 128];
        noise.process(&mut buffer);
        for sample in buffer {
            assert!((-1.0..=1.0).contains(&sample));
        }
    }

    #[test]
    fn test_roughly_zero_mean() {
        let mut noise = WhiteNoise::with_rng(StdRng::seed_from_u64(3));
        let n = 20000;
        let mean: f64 = (0..n).map(|_| noise.next_sample()).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean was {mean}");
    }
}
