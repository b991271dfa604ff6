//! Hedge Lab - CRR delta-hedging demonstration CLI
//!
//! Runs the full lattice pipeline over one scenario: build the stock-price
//! lattice, value the option by backward induction, replicate it with a
//! self-financing delta hedge, and compare the hedged and unhedged terminal
//! values along the realised (all-up) path.
//!
//! The parameter record comes from built-in defaults, optionally replaced by
//! a TOML scenario file, with individual command-line overrides on top. The
//! library crates never print or log; all diagnostics happen here.

use anyhow::Result;
use clap::Parser;
use lattice_models::crr::CrrModel;
use lattice_pricing::{hedging, report, valuation};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod output;
mod render;
mod scenario;

use scenario::Scenario;

/// Binomial delta-hedging laboratory
#[derive(Parser)]
#[command(name = "hedge-lab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Scenario file (TOML); flags below override its values
    #[arg(short, long)]
    scenario: Option<std::path::PathBuf>,

    /// Initial stock price S0
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price K
    #[arg(long)]
    strike: Option<f64>,

    /// Maturity in years
    #[arg(long)]
    expiry: Option<f64>,

    /// Continuously compounded risk-free rate
    #[arg(long)]
    rate: Option<f64>,

    /// Volatility sigma
    #[arg(long)]
    volatility: Option<f64>,

    /// Number of lattice steps
    #[arg(long)]
    steps: Option<usize>,

    /// Option kind (call or put)
    #[arg(long)]
    kind: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    format: String,

    /// Skip the stock-lattice diagram
    #[arg(long)]
    no_render: bool,
}

fn resolve_scenario(cli: &Cli) -> Result<Scenario> {
    let mut scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };

    if let Some(spot) = cli.spot {
        scenario.spot = spot;
    }
    if let Some(strike) = cli.strike {
        scenario.strike = strike;
    }
    if let Some(expiry) = cli.expiry {
        scenario.expiry = expiry;
    }
    if let Some(rate) = cli.rate {
        scenario.rate = rate;
    }
    if let Some(volatility) = cli.volatility {
        scenario.volatility = volatility;
    }
    if let Some(steps) = cli.steps {
        scenario.steps = steps;
    }
    if let Some(kind) = &cli.kind {
        scenario.kind = scenario::parse_kind(kind)?;
    }
    Ok(scenario)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let scenario = resolve_scenario(&cli)?;
    let params = scenario.to_params()?;

    info!(steps = params.steps(), kind = %params.kind(), "running lattice pipeline");

    let model = CrrModel::new(params);
    let stock = model.stock_lattice();
    let valued = valuation::price_option(&model, &stock)?;
    let hedge = hedging::simulate(&model, &stock, valued.lattice())?;
    let outcome = report::compare_terminal(valued.lattice(), hedge.portfolio())?;

    if !cli.no_render {
        println!("{}", render::stock_lattice(&stock));
    }
    output::print(&cli.format, &model, &valued, &hedge, &outcome)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_replace_scenario_fields() {
        let cli = Cli::parse_from([
            "hedge-lab",
            "--spot",
            "120",
            "--steps",
            "8",
            "--kind",
            "put",
        ]);
        let scenario = resolve_scenario(&cli).unwrap();
        assert_eq!(scenario.spot, 120.0);
        assert_eq!(scenario.steps, 8);
        assert_eq!(
            scenario.kind,
            lattice_models::instruments::OptionKind::Put
        );
        // Untouched fields keep their defaults.
        assert_eq!(scenario.strike, 105.0);
    }

    #[test]
    fn test_default_format_is_table() {
        let cli = Cli::parse_from(["hedge-lab"]);
        assert_eq!(cli.format, "table");
        assert!(!cli.no_render);
    }
}
