//! Scenario configuration.
//!
//! A scenario is the parameter record of one pipeline run. It starts from
//! built-in defaults, may be replaced wholesale by a TOML file, and is then
//! overridden field by field from the command line.

use std::path::Path;

use anyhow::{bail, Context, Result};
use lattice_models::crr::CrrParams;
use lattice_models::instruments::OptionKind;
use serde::Deserialize;

/// One pipeline run's worth of parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    /// Initial stock price S0.
    pub spot: f64,
    /// Strike price K.
    pub strike: f64,
    /// Maturity in years.
    pub expiry: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Volatility sigma.
    pub volatility: f64,
    /// Number of lattice steps.
    pub steps: usize,
    /// Call or put.
    pub kind: OptionKind,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 105.0,
            expiry: 1.0,
            rate: 0.05,
            volatility: 0.2,
            steps: 3,
            kind: OptionKind::Call,
        }
    }
}

impl Scenario {
    /// Loads a scenario from a TOML file. Missing fields fall back to the
    /// defaults; unknown fields are rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario file {}", path.display()))?;
        let scenario = toml::from_str(&text)
            .with_context(|| format!("parsing scenario file {}", path.display()))?;
        Ok(scenario)
    }

    /// Validates the scenario into a parameter record.
    pub fn to_params(&self) -> Result<CrrParams<f64>> {
        let params = CrrParams::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.steps,
            self.kind,
        )?;
        Ok(params)
    }
}

/// Parses a command-line option kind.
pub fn parse_kind(text: &str) -> Result<OptionKind> {
    match text.to_ascii_lowercase().as_str() {
        "call" => Ok(OptionKind::Call),
        "put" => Ok(OptionKind::Put),
        other => bail!("unknown option kind `{}` (expected `call` or `put`)", other),
    }
}
