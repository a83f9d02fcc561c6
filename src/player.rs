//! Looping playback state machine.
//!
//! A [`Player`] is what an audio callback talks to. It is either idle
//! (yielding silence) or playing a single buffer on loop. Each
//! [`play`](Player::play) renders a fresh buffer once; after that the buffer
//! never changes, so editing parameters while playing has no effect until the
//! next `play`.

use tracing::info;

use crate::Signal;
use crate::buffer::SampleBuffer;
use crate::engine::synthesize;
use crate::error::SynthResult;
use crate::request::SynthesisRequest;

/// Whether the player is producing sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Playing,
}

struct Playback {
    buffer: SampleBuffer,
    position: usize,
}

/// Loops one rendered buffer until stopped.
///
/// # Examples
///
/// ```
/// use signalgen::{Player, PlayerState, Signal, SynthesisRequest, Tone, WaveformKind};
///
/// let mut player = Player::new();
/// player.play(&SynthesisRequest::plain(100, Tone::new(WaveformKind::Square, 2.0)))?;
/// assert_eq!(player.state(), PlayerState::Playing);
/// assert_eq!(player.next_sample(), 1.0);
///
/// player.stop();
/// assert_eq!(player.next_sample(), 0.0);
/// # Ok::<(), signalgen::SynthError>(())
/// ```
#[derive(Default)]
pub struct Player {
    playback: Option<Playback>,
}

impl Player {
    /// Creates an idle player.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops whatever is playing, renders `request` and starts looping it.
    ///
    /// # Errors
    ///
    /// If the request is invalid the player is left idle and the error is
    /// returned; nothing plays.
    pub fn play(&mut self, request: &SynthesisRequest) -> SynthResult<&SampleBuffer> {
        self.stop();
        let buffer = synthesize(request)?;
        Ok(self.start(buffer))
    }

    /// Stops whatever is playing and starts looping an already rendered buffer.
    pub fn play_buffer(&mut self, buffer: SampleBuffer) -> &SampleBuffer {
        self.stop();
        self.start(buffer)
    }

    fn start(&mut self, buffer: SampleBuffer) -> &SampleBuffer {
        info!(
            samples = buffer.len(),
            sample_rate = buffer.sample_rate(),
            "playback started"
        );
        &self
            .playback
            .insert(Playback {
                buffer,
                position: 0,
            })
            .buffer
    }

    /// Stops playback. Returns true if something was playing.
    pub fn stop(&mut self) -> bool {
        let was_playing = self.playback.take().is_some();
        if was_playing {
            info!("playback stopped");
        }
        was_playing
    }

    /// Current state.
    pub fn state(&self) -> PlayerState {
        if self.playback.is_some() {
            PlayerState::Playing
        } else {
            PlayerState::Idle
        }
    }

    /// True while a buffer is looping.
    pub fn is_playing(&self) -> bool {
        self.state() == PlayerState::Playing
    }

    /// The buffer being looped, if any.
    pub fn buffer(&self) -> Option<&SampleBuffer> {
        self.playback.as_ref().map(|p| &p.buffer)
    }
}

impl Signal for Player {
    fn next_sample(&mut self) -> f64 {
        let Some(playback) = self.playback.as_mut() else {
            return 0.0;
        };
        let Some(&sample) = playback.buffer.get(playback.position) else {
            return 0.0;
        };
        playback.position = (playback.position + 1) % playback.buffer.len();
        sample as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Tone;
    use crate::waveform::WaveformKind;

    fn square_request() -> SynthesisRequest {
        SynthesisRequest::plain(100, Tone::new(WaveformKind::Square, 2.0))
    }

    #[test]
    fn test_starts_idle() {
        let mut player = Player::new();
        assert_eq!(player.state(), PlayerState::Idle);
        assert!(player.buffer().is_none());
        assert_eq!(player.next_sample(), 0.0);
        assert!(!player.stop());
    }

    #[test]
    fn test_loops_buffer() {
        let mut player = Player::new();
        player.play(&square_request()).unwrap();
        let first: Vec<f64> = (0..100).map(|_| player.next_sample()).collect();
        let second: Vec<f64> = (0..100).map(|_| player.next_sample()).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], 1.0);
        assert_eq!(first[25], -1.0);
    }

    #[test]
    fn test_stop_returns_to_idle() {
        let mut player = Player::new();
        player.play(&square_request()).unwrap();
        assert!(player.is_playing());
        assert!(player.stop());
        assert_eq!(player.state(), PlayerState::Idle);
        assert_eq!(player.next_sample(), 0.0);
    }

    #[test]
    fn test_invalid_request_leaves_player_idle() {
        let mut player = Player::new();
        player.play(&square_request()).unwrap();
        let bad = SynthesisRequest::plain(100, Tone::new(WaveformKind::Square, 0.0));
        assert!(player.play(&bad).is_err());
        assert_eq!(player.state(), PlayerState::Idle);
    }

    #[test]
    fn test_replay_restarts_from_first_sample() {
        let mut player = Player::new();
        player.play(&square_request()).unwrap();
        for _ in 0..30 {
            player.next_sample();
        }
        player.play(&square_request()).unwrap();
        assert_eq!(player.next_sample(), 1.0);
    }

    #[test]
    fn test_play_buffer() {
        let mut player = Player::new();
        let buffer = SampleBuffer::new(vec![0.5, -0.5], 2);
        player.play_buffer(buffer.clone());
        assert_eq!(player.buffer(), Some(&buffer));
        assert_eq!(player.next_sample(), 0.5);
        assert_eq!(player.next_sample(), -0.5);
        assert_eq!(player.next_sample(), 0.5);
    }

    #[test]
    fn test_prerendered_buffer_plays_like_play() {
        let request = square_request();
        let mut direct = Player::new();
        direct.play(&request).unwrap();

        // Render without touching the player, then hand the buffer over
        let rendered = synthesize(&request).unwrap();
        let mut handed = Player::new();
        handed.play(&square_request()).unwrap();
        handed.play_buffer(rendered);

        assert_eq!(handed.buffer(), direct.buffer());
        for _ in 0..150 {
            assert_eq!(handed.next_sample(), direct.next_sample());
        }
    }
}
