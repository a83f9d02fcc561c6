//! Core signal trait.
//!
//! Everything that produces samples one at a time (noise sources, the looping
//! player) implements [`Signal`].

mod signal;

pub use signal::Signal;
