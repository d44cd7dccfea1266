//! Entry point for the **cubic-ease** sampler.
//!
//! Prints evenly spaced `(x, y)` samples of a timing function so curves can
//! be inspected, plotted, or pasted into lookup tables.
//!
//! ```text
//! cubic-ease [--config PATH] [--steps N] [--json] <curve>
//! ```
//!
//! `<curve>` is a name from the config file, a CSS keyword (`ease-in-out`)
//! or a `cubic-bezier(x1, y1, x2, y2)` expression.

use cubic_ease::config::{config_dir, Config};
use cubic_ease::traits::Easing;
use log::{error, info};
use serde::Serialize;
use std::path::PathBuf;

/// One sampled point, for `--json` output.
#[derive(Debug, Serialize)]
struct Sample {
    x: f64,
    y: f64,
}

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    steps: Option<usize>,
    json: bool,
    curve: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--steps" => {
                let n = args.next().ok_or("--steps needs a number")?;
                let n = n
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| format!("--steps: expected a positive integer, got {:?}", n))?;
                parsed.steps = Some(n);
            }
            "--json" => parsed.json = true,
            _ if parsed.curve.is_none() => parsed.curve = Some(arg),
            _ => return Err(format!("unexpected argument {:?}", arg)),
        }
    }
    Ok(parsed)
}

/// Load the config from `explicit`, or try
/// `$XDG_CONFIG_HOME/cubic-ease/config.json` and fall back to defaults.
fn load_config(explicit: Option<PathBuf>) -> Result<Config, String> {
    if let Some(path) = explicit {
        return Config::load(&path).map_err(|e| e.to_string());
    }
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Ok(Config::default())
        }
    }
}

fn run() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = load_config(args.config)?;
    let name = args
        .curve
        .ok_or("usage: cubic-ease [--config PATH] [--steps N] [--json] <curve>")?;
    let curve = config.resolve(&name).map_err(|e| e.to_string())?;
    let steps = args.steps.unwrap_or(config.sampling.steps).max(1);
    info!("sampling {} at {} steps", curve, steps);

    let samples = (0..=steps).map(|i| {
        let x = i as f64 / steps as f64;
        Sample {
            x,
            y: curve.ease(x),
        }
    });

    if args.json {
        let samples: Vec<Sample> = samples.collect();
        let out = serde_json::to_string_pretty(&samples).map_err(|e| e.to_string())?;
        println!("{}", out);
    } else {
        for Sample { x, y } in samples {
            println!("{:.4}\t{:.6}", x, y);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
