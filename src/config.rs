//! Application configuration.
//!
//! The configuration is loaded from a JSON file, by default
//! `$XDG_CONFIG_HOME/cubic-ease/config.json`.  It names curves so they can
//! be referred to by a short key, and sets sampling defaults for the
//! command-line tool.
//!
//! # Example
//!
//! ```json
//! {
//!   "curves": {
//!     "snappy": "cubic-bezier(0.2, 0.9, 0.3, 1)",
//!     "bounce": [0.68, -0.55, 0.265, 1.55],
//!     "default": "ease-out"
//!   },
//!   "sampling": {
//!     "steps": 20,
//!     "strict": true
//!   }
//! }
//! ```

use crate::bezier::{CurveError, EasingCurve};
use crate::timing::{ParseError, TimingFunction};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every field is optional — a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Named timing functions.
    #[serde(default)]
    pub curves: BTreeMap<String, TimingFunction>,

    /// Sampling defaults and control-point policy.
    #[serde(default)]
    pub sampling: SamplingConfig,
}

/// How curves are sampled and validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Number of intervals between `x = 0` and `x = 1`; `steps + 1` points
    /// are produced.  Default: `10`.
    pub steps: usize,
    /// Reject control points with an x coordinate outside `[0, 1]` instead
    /// of clamping them.  Default: `false`.
    pub strict: bool,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            steps: 10,
            strict: false,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(
            "{} named curve(s) in {}",
            config.curves.len(),
            path.display()
        );
        Ok(config)
    }

    /// Resolve `name` to a curve.
    ///
    /// A key in [`curves`](Self::curves) wins; otherwise `name` is parsed as
    /// a preset keyword or `cubic-bezier(...)` expression.  With
    /// [`SamplingConfig::strict`] set, out-of-range control points are an
    /// error rather than being clamped.
    pub fn resolve(&self, name: &str) -> Result<EasingCurve, ConfigError> {
        let timing = match self.curves.get(name) {
            Some(timing) => *timing,
            None => name.parse::<TimingFunction>()?,
        };
        if self.sampling.strict {
            timing.try_curve().map_err(|e| ConfigError::Curve {
                name: name.to_string(),
                source: e,
            })
        } else {
            Ok(timing.curve())
        }
    }
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/cubic-ease`).
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("cubic-ease")
}

/// Error from loading a configuration file or resolving a curve from it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("not a configured curve: {0}")]
    Timing(#[from] ParseError),
    #[error("invalid curve {name:?}: {source}")]
    Curve { name: String, source: CurveError },
}
