//! Report formatting for the pipeline outcome.

use anyhow::{bail, Result};
use lattice_models::crr::CrrModel;
use lattice_pricing::hedging::HedgeSimulation;
use lattice_pricing::report::TerminalComparison;
use lattice_pricing::valuation::OptionValuation;
use serde::Serialize;

/// Flat JSON payload for `--format json`.
#[derive(Debug, Serialize)]
struct JsonReport {
    kind: String,
    steps: usize,
    fair_value: f64,
    root_delta: f64,
    up: f64,
    down: f64,
    prob: f64,
    discount: f64,
    unhedged_terminal: f64,
    hedged_terminal: f64,
}

fn build_json(
    model: &CrrModel<f64>,
    valued: &OptionValuation<f64>,
    hedge: &HedgeSimulation<f64>,
    outcome: &TerminalComparison<f64>,
) -> JsonReport {
    let f = model.factors();
    JsonReport {
        kind: model.params().kind().to_string(),
        steps: model.params().steps(),
        fair_value: valued.fair_value(),
        root_delta: hedge.root_delta(),
        up: f.up,
        down: f.down,
        prob: f.prob,
        discount: f.discount,
        unhedged_terminal: outcome.unhedged_value(),
        hedged_terminal: outcome.hedged_value(),
    }
}

/// Prints the outcome in the requested format (`table` or `json`).
pub fn print(
    format: &str,
    model: &CrrModel<f64>,
    valued: &OptionValuation<f64>,
    hedge: &HedgeSimulation<f64>,
    outcome: &TerminalComparison<f64>,
) -> Result<()> {
    match format {
        "table" => {
            print_table(model, valued, hedge, outcome);
            Ok(())
        }
        "json" => {
            let report = build_json(model, valued, hedge, outcome);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        other => bail!("unsupported output format `{}` (expected `table` or `json`)", other),
    }
}

fn print_table(
    model: &CrrModel<f64>,
    valued: &OptionValuation<f64>,
    hedge: &HedgeSimulation<f64>,
    outcome: &TerminalComparison<f64>,
) {
    let params = model.params();
    let f = model.factors();

    println!("=== CRR Delta-Hedge Demonstration ===");
    println!();
    println!("Spot:        ${:.2}", params.spot());
    println!("Strike:      ${:.2}", params.strike());
    println!("Expiry:      {:.2} years", params.expiry());
    println!("Rate:        {:.2}%", params.rate() * 100.0);
    println!("Vol:         {:.1}%", params.volatility() * 100.0);
    println!("Steps:       {}", params.steps());
    println!("Kind:        {}", params.kind());
    println!();
    println!("Fair value:  ${:.4}", valued.fair_value());
    println!("Root delta:  {:.4}", hedge.root_delta());
    println!(
        "Factors:     u = {:.4}, d = {:.4}, p = {:.4}, df = {:.4}",
        f.up, f.down, f.prob, f.discount
    );
    println!();
    println!("=== Terminal comparison (all-up path) ===");
    println!("Unhedged option payoff:  ${:.4}", outcome.unhedged_value());
    println!("Hedged portfolio value:  ${:.4}", outcome.hedged_value());
    println!(
        "Difference:              ${:.2e}",
        (outcome.hedged_value() - outcome.unhedged_value()).abs()
    );
}
