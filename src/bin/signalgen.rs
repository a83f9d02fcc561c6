// Renders one second of audio to a WAV file from a config preset and/or flags.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use signalgen::config::StrategyKind;
use signalgen::{Config, ModulationMode, OvertoneSpec, WaveformKind, synthesize, write_wav};

/// Parse a comma-separated gain list like "100,50,25"
fn parse_gains(s: &str) -> Result<OvertoneSpec, String> {
    if s.trim().is_empty() {
        return Ok(OvertoneSpec::new());
    }
    s.split(',')
        .map(|gain| {
            gain.trim()
                .parse::<f64>()
                .map_err(|err| format!("bad gain '{gain}': {err}"))
        })
        .collect::<Result<Vec<f64>, String>>()
        .map(OvertoneSpec::from)
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output WAV path
    #[arg(long, short, required_unless_present = "print_config")]
    out: Option<PathBuf>,

    /// Path to config TOML (missing file means defaults)
    #[arg(long, default_value = "signalgen.toml")]
    config: PathBuf,

    /// Strategy: plain, overtone or modulated (overrides config)
    #[arg(long)]
    strategy: Option<StrategyKind>,

    /// Waveform: sine, square, triangle, sawtooth or noise (overrides config)
    #[arg(long)]
    waveform: Option<WaveformKind>,

    /// Frequency in Hz; the modulating frequency for the modulated strategy
    #[arg(long)]
    frequency: Option<f64>,

    /// Square wave duty cycle in (0, 1]
    #[arg(long)]
    duty_cycle: Option<f64>,

    /// Overtone gains in percent, fundamental first: "100,50,25"
    #[arg(long, value_parser = parse_gains)]
    overtones: Option<OvertoneSpec>,

    /// Modulation mode: am or fm
    #[arg(long)]
    modulation: Option<ModulationMode>,

    /// Modulation depth in [0, 1]
    #[arg(long)]
    depth: Option<f64>,

    /// Output sample rate in Hz (overrides config)
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Print the effective config as TOML and exit
    #[arg(long, default_value_t = false)]
    print_config: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        let preset = &mut config.preset;
        if let Some(strategy) = self.strategy {
            preset.strategy = strategy;
        }
        if let Some(waveform) = self.waveform {
            preset.waveform = waveform;
        }
        if let Some(frequency) = self.frequency {
            preset.frequency = Some(frequency);
        }
        if let Some(duty_cycle) = self.duty_cycle {
            preset.duty_cycle = Some(duty_cycle);
        }
        if let Some(overtones) = &self.overtones {
            preset.overtones = overtones.clone();
        }
        if let Some(mode) = self.modulation {
            preset.mode = mode;
        }
        if let Some(depth) = self.depth {
            preset.depth = depth;
        }
        if let Some(sample_rate) = self.sample_rate {
            config.audio.sample_rate = sample_rate;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = Config::load_or_default(&args.config)
        .with_context(|| format!("reading {}", args.config.display()))?;
    args.apply(&mut config);

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let out = args.out.as_deref().context("--out is required")?;
    let request = config.request();
    let buffer = synthesize(&request).context("synthesis failed")?;
    write_wav(out, &buffer).with_context(|| format!("writing {}", out.display()))?;

    info!(
        path = %out.display(),
        strategy = request.strategy.name(),
        samples = buffer.len(),
        peak = buffer.peak(),
        "rendered"
    );
    Ok(())
}
