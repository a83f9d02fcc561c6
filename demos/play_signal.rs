//! Interactive player for all three synthesis strategies.
//!
//! SPACE plays or stops. 1-5 pick the waveform, S cycles the strategy,
//! M toggles AM/FM and D steps the modulation depth. UP/DOWN change the
//! frequency and LEFT/RIGHT the duty cycle. For overtones, +/- add or remove
//! the highest harmonic, [/] select a harmonic and ,/. lower or raise its
//! gain. Edits apply on the next play. Q or ESC quits.

mod common;

use anyhow::Result;
use common::{KeyAction, is_quit_key, run_interactive};
use crossterm::{
    ExecutableCommand,
    event::{KeyCode, KeyEvent},
};
use signalgen::config::{PresetConfig, StrategyKind};
use signalgen::{ModulationMode, OvertoneSpec, Player, Signal, SynthesisRequest, WaveformKind};
use std::io::{Write, stdout};
use std::sync::{Arc, Mutex};

const GAIN_STEP: f64 = 10.0;
const DEPTH_STEP: f64 = 0.1;

struct AudioState {
    player: Player,
    preset: PresetConfig,
    sample_rate: u32,
    selected: usize,
    last_error: Option<String>,
}

impl AudioState {
    fn new(sample_rate: u32) -> Self {
        let preset = PresetConfig {
            overtones: OvertoneSpec::from_gains([100.0, 50.0, 33.0, 25.0]),
            ..PresetConfig::default()
        };
        Self {
            player: Player::new(),
            preset,
            sample_rate,
            selected: 0,
            last_error: None,
        }
    }

    fn request(&self) -> SynthesisRequest {
        SynthesisRequest::new(self.sample_rate, self.preset.strategy())
    }

    fn cycle_strategy(&mut self) {
        self.preset.strategy = match self.preset.strategy {
            StrategyKind::Plain => StrategyKind::Overtone,
            StrategyKind::Overtone => StrategyKind::Modulated,
            StrategyKind::Modulated => StrategyKind::Plain,
        };
        // Let the new strategy's default frequency take over.
        self.preset.frequency = None;
    }

    fn nudge_frequency(&mut self, factor: f64) {
        self.preset.frequency = Some(self.preset.frequency_or_default() * factor);
    }

    fn nudge_duty_cycle(&mut self, delta: f64) {
        let duty = self.preset.duty_cycle.unwrap_or(0.5) + delta;
        self.preset.duty_cycle = Some(duty.clamp(0.05, 1.0));
    }

    fn step_depth(&mut self) {
        let next = ((self.preset.depth + DEPTH_STEP) * 10.0).round() / 10.0;
        self.preset.depth = if next > 1.0 { 0.0 } else { next };
    }

    fn add_harmonic(&mut self) {
        self.preset.overtones.push();
        self.selected = self.preset.overtones.len() - 1;
    }

    fn remove_harmonic(&mut self) {
        self.preset.overtones.pop();
        self.selected = self.selected.min(self.preset.overtones.len().saturating_sub(1));
    }

    fn select_harmonic(&mut self, forward: bool) {
        let len = self.preset.overtones.len();
        if len == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }

    fn nudge_gain(&mut self, delta: f64) {
        let Some(&gain) = self.preset.overtones.gains().get(self.selected) else {
            return;
        };
        self.preset
            .overtones
            .update(self.selected, (gain + delta).clamp(0.0, 100.0));
    }
}

impl Signal for AudioState {
    fn next_sample(&mut self) -> f64 {
        self.player.next_sample()
    }
}

/// Stops if playing; otherwise renders the current preset and starts it.
///
/// The render runs without holding the lock so the audio callback keeps
/// pulling samples in the meantime.
fn toggle(state: &Arc<Mutex<AudioState>>) {
    let request = {
        let mut state = state.lock().unwrap();
        if state.player.stop() {
            return;
        }
        state.request()
    };

    let rendered = signalgen::synthesize(&request);

    let mut state = state.lock().unwrap();
    match rendered {
        Ok(buffer) => {
            state.player.play_buffer(buffer);
            state.last_error = None;
        }
        Err(err) => state.last_error = Some(err.to_string()),
    }
}

fn overtone_line(state: &AudioState) -> String {
    let gains: Vec<String> = state
        .preset
        .overtones
        .gains()
        .iter()
        .enumerate()
        .map(|(i, gain)| {
            if i == state.selected {
                format!("[{}:{gain:.0}]", i + 1)
            } else {
                format!(" {}:{gain:.0} ", i + 1)
            }
        })
        .collect();
    if gains.is_empty() {
        "overtones: (none)".to_string()
    } else {
        format!("overtones: {}", gains.join(""))
    }
}

fn draw_ui(state: &AudioState) -> Result<()> {
    let preset = &state.preset;
    let mut stdout = stdout();
    stdout.execute(crossterm::terminal::Clear(
        crossterm::terminal::ClearType::All,
    ))?;
    let lines = [
        format!(
            "{} | strategy: {:?} | waveform: {} | {:.1} Hz | duty {:.2} | {} Hz output",
            if state.player.is_playing() { "PLAYING" } else { "stopped" },
            preset.strategy,
            preset.waveform,
            preset.frequency_or_default(),
            preset.duty_cycle.unwrap_or(0.5),
            state.sample_rate,
        ),
        format!("modulation: {} depth {:.1}", preset.mode, preset.depth),
        overtone_line(state),
        "SPACE=play/stop 1-5=waveform S=strategy M=am/fm D=depth UP/DOWN=freq LEFT/RIGHT=duty"
            .to_string(),
        "+/-=add/remove harmonic [/]=select harmonic ,/.=gain Q=quit".to_string(),
        state
            .last_error
            .as_ref()
            .map(|err| format!("error: {err}"))
            .unwrap_or_default(),
    ];
    for (row, line) in lines.iter().enumerate() {
        stdout.execute(crossterm::cursor::MoveTo(0, row as u16))?;
        write!(stdout, "{line}")?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    run_interactive(
        AudioState::new,
        |state| draw_ui(&state.lock().unwrap()),
        |state, key_event: &KeyEvent| {
            match key_event.code {
                KeyCode::Char(' ') => toggle(state),
                code if is_quit_key(code) => return Ok(KeyAction::Exit),
                code => {
                    let mut state = state.lock().unwrap();
                    match code {
                        KeyCode::Char(c @ '1'..='5') => {
                            let index = c as usize - '1' as usize;
                            state.preset.waveform = WaveformKind::ALL[index];
                        }
                        KeyCode::Char('s') | KeyCode::Char('S') => state.cycle_strategy(),
                        KeyCode::Char('m') | KeyCode::Char('M') => {
                            state.preset.mode = match state.preset.mode {
                                ModulationMode::Amplitude => ModulationMode::Frequency,
                                ModulationMode::Frequency => ModulationMode::Amplitude,
                            };
                        }
                        KeyCode::Char('d') | KeyCode::Char('D') => state.step_depth(),
                        KeyCode::Char('+') | KeyCode::Char('=') => state.add_harmonic(),
                        KeyCode::Char('-') => state.remove_harmonic(),
                        KeyCode::Char('[') => state.select_harmonic(false),
                        KeyCode::Char(']') => state.select_harmonic(true),
                        KeyCode::Char(',') => state.nudge_gain(-GAIN_STEP),
                        KeyCode::Char('.') => state.nudge_gain(GAIN_STEP),
                        KeyCode::Up => state.nudge_frequency(2f64.powf(1.0 / 12.0)),
                        KeyCode::Down => state.nudge_frequency(2f64.powf(-1.0 / 12.0)),
                        KeyCode::Right => state.nudge_duty_cycle(0.05),
                        KeyCode::Left => state.nudge_duty_cycle(-0.05),
                        _ => return Ok(KeyAction::Continue),
                    }
                }
            }
            draw_ui(&state.lock().unwrap())?;
            Ok(KeyAction::Continue)
        },
    )
}
