//! Terminal and audio-device plumbing for the interactive demos.

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use signalgen::Signal;
use std::io::stdout;
use std::panic;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the event loop does after a key press.
pub enum KeyAction {
    Continue,
    Exit,
}

/// Opens the default output device and runs a key-driven loop until the
/// handler returns [`KeyAction::Exit`].
///
/// `make_state` receives the device sample rate, so the state can render
/// buffers at the rate the device actually plays.
pub fn run_interactive<S, M, F, K>(make_state: M, initial_ui: F, key_handler: K) -> Result<()>
where
    S: Signal + Send + 'static,
    M: FnOnce(u32) -> S,
    F: FnOnce(&Arc<Mutex<S>>) -> Result<()>,
    K: Fn(&Arc<Mutex<S>>, &KeyEvent) -> Result<KeyAction>,
{
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;

    let config = device.default_output_config()?;
    let state = Arc::new(Mutex::new(make_state(config.sample_rate().0)));

    let _stream = match config.sample_format() {
        SampleFormat::F32 => create_audio_stream::<f32, S>(&device, &config.into(), state.clone())?,
        SampleFormat::I16 => create_audio_stream::<i16, S>(&device, &config.into(), state.clone())?,
        SampleFormat::U16 => create_audio_stream::<u16, S>(&device, &config.into(), state.clone())?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ));
        }
    };

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    let result = initial_ui(&state).and_then(|()| {
        loop {
            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key_event) = event::read()?
            {
                match key_handler(&state, &key_event)? {
                    KeyAction::Continue => {}
                    KeyAction::Exit => return Ok(()),
                }
            }
        }
    });

    cleanup_terminal();
    result
}

fn create_audio_stream<T, S>(
    device: &cpal::Device,
    config: &StreamConfig,
    state: Arc<Mutex<S>>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
    S: Signal + Send + 'static,
{
    let channels = config.channels as usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let Ok(mut state) = state.lock() else {
                return;
            };
            for frame in data.chunks_mut(channels) {
                // Overtone sums may leave [-1, 1]; the device can't.
                let value: T = T::from_sample(state.next_sample().clamp(-1.0, 1.0));
                for s in frame.iter_mut() {
                    *s = value;
                }
            }
        },
        |err| eprintln!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}

fn cleanup_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Q or ESC.
pub fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
