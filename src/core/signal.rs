//! Core sample-source trait.

/// Common interface for anything that yields samples one at a time.
///
/// Noise sources implement this so the periodic generator can draw from any
/// caller-owned entropy source, and the [`Player`](crate::Player) implements
/// it so an audio callback can pull the looped buffer sample by sample.
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

impl<S: Signal + ?Sized> Signal for &mut S {
    fn next_sample(&mut self) -> f64 {
        (**self).next_sample()
    }
}
