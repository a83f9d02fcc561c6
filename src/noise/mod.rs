//! Noise sources.
//!
//! Noise is the only waveform that is not a function of the sample index.
//! Each synthesis call owns its own source, so no random state is shared
//! between calls or threads.

mod white;

pub use white::WhiteNoise;
