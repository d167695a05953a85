//! Command-line and file configuration.
//!
//! Usage:
//!   bitwa [--seed N] [--frames N] [--rate HZ] [--time-scale S]
//!         [--config tuning.json] [--realtime] [--no-gunner]

use std::path::{Path, PathBuf};

use bitwa_core::constants::FRAME_RATE;
use bitwa_core::tuning::Tuning;
use bitwa_sim::engine::SimConfig;

use crate::error::AppError;
use crate::game_loop::LoopSettings;

/// Frames run when `--frames` is not given and the loop is not realtime.
pub const DEFAULT_HEADLESS_FRAMES: u64 = 60 * 30;

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub loop_settings: LoopSettings,
}

pub fn print_usage() {
    eprintln!(
        "bitwa: SMIERTIELNAJA BITWA simulation runner\n\
         \n\
         Options:\n\
         \n\
           --seed <N>         RNG seed (default: wall clock)\n\
           --frames <N>       Stop after N frames (default: {DEFAULT_HEADLESS_FRAMES};\n\
                              unlimited with --realtime, end with q or EOF on stdin)\n\
           --rate <HZ>        Frames per second (default: {FRAME_RATE})\n\
           --time-scale <S>   Initial time scale, 0 to 4 (default: 1)\n\
           --config <path>    JSON tuning overrides\n\
           --realtime         Pace frames against the wall clock\n\
           --no-gunner        Do not fire back at the ships\n\
           -h, --help         Show this message\n"
    );
}

/// Parse arguments (without the program name). `Ok(None)` means help was
/// requested and printed.
pub fn parse_args(args: &[String]) -> Result<Option<AppConfig>, AppError> {
    let mut sim = SimConfig::default();
    let mut settings = LoopSettings::default();
    let mut frames: Option<u64> = None;
    let mut tuning_path: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(None);
            }
            "--seed" => sim.seed = Some(parse_value(arg, iter.next())?),
            "--frames" => frames = Some(parse_value(arg, iter.next())?),
            "--rate" => {
                let rate: u32 = parse_value(arg, iter.next())?;
                if rate == 0 {
                    return Err(AppError::Args("--rate must be at least 1".into()));
                }
                settings.frame_rate = rate;
            }
            "--time-scale" => {
                let scale: f64 = parse_value(arg, iter.next())?;
                if !scale.is_finite() {
                    return Err(AppError::Args("--time-scale must be finite".into()));
                }
                sim.time_scale = scale;
            }
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| AppError::Args("--config needs a path".into()))?;
                tuning_path = Some(PathBuf::from(path));
            }
            "--realtime" => settings.realtime = true,
            "--no-gunner" => settings.gunner = false,
            other => return Err(AppError::Args(format!("unknown option: {other}"))),
        }
    }

    if let Some(path) = tuning_path {
        sim.tuning = load_tuning(&path)?;
    }
    settings.max_frames = match frames {
        Some(n) => Some(n),
        None if settings.realtime => None,
        None => Some(DEFAULT_HEADLESS_FRAMES),
    };

    Ok(Some(AppConfig {
        sim,
        loop_settings: settings,
    }))
}

/// Load tuning overrides. Missing fields keep their defaults.
pub fn load_tuning(path: &Path) -> Result<Tuning, AppError> {
    let contents = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, AppError> {
    let value = value.ok_or_else(|| AppError::Args(format!("{flag} needs a value")))?;
    value
        .parse()
        .map_err(|_| AppError::Args(format!("invalid value for {flag}: {value}")))
}
