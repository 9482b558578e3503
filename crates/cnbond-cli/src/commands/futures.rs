//! Futures evaluation command implementation.

use clap::Args;

use cnbond_futures::{ForwardYtmAlgo, TfEvaluator, TfEvaluatorInputs};
use cnbond_store::AttributeStore;

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::error::CliResult;
use crate::output::{print_rows, KeyValue};

/// Arguments for the `futures` command.
#[derive(Args, Debug)]
pub struct FuturesArgs {
    /// Futures contract code, e.g. `T2212`.
    #[arg(long)]
    pub futures_code: String,

    /// Deliverable bond code, e.g. `220021.IB`.
    #[arg(long)]
    pub bond_code: String,

    /// Valuation date, `YYYY-MM-DD`.
    #[arg(long)]
    pub date: String,

    /// Quoted futures price.
    #[arg(long)]
    pub futures_price: f64,

    /// The deliverable bond's YTM at the valuation date.
    #[arg(long)]
    pub bond_ytm: f64,

    /// Funding (capital) cost rate used in the carry computation.
    #[arg(long)]
    pub capital_rate: f64,

    /// Optional coupon-reinvestment rate; changes the IRR formula when present.
    #[arg(long)]
    pub reinvest_rate: Option<f64>,

    /// Use the discount method (with the given rate) instead of the default carry method
    /// for the forward-implied YTM.
    #[arg(long)]
    pub discount_rate: Option<f64>,
}

/// Executes the `futures` command: looks up `args.bond_code` via `store` and
/// prints the full basis/carry/IRR/implied-YTM analytics.
///
/// # Errors
///
/// Returns `CliError::InvalidDate` for an unparseable date,
/// `CliError::Store` if the bond code is unknown, and `CliError::Futures`
/// for an invalid futures code or a degenerate/non-converging evaluation.
pub fn execute(args: FuturesArgs, format: OutputFormat, store: &dyn AttributeStore) -> CliResult<()> {
    let date = parse_date(&args.date)?;
    let bond = store.get(&args.bond_code)?;

    let forward_ytm_algo = match args.discount_rate {
        Some(disc_rate) => ForwardYtmAlgo::Discount { disc_rate },
        None => ForwardYtmAlgo::Carry,
    };

    let mut inputs = TfEvaluatorInputs::new(
        date,
        args.futures_code.clone(),
        args.futures_price,
        &bond,
        args.bond_ytm,
        args.capital_rate,
    );
    inputs.reinvest_rate = args.reinvest_rate;
    inputs.forward_ytm_algo = forward_ytm_algo;

    let evaluator = TfEvaluator::new(inputs).calc()?;
    let state = evaluator.state().expect("calc() always produces a Priced evaluator");

    let rows = vec![
        KeyValue::new("Futures Code", args.futures_code),
        KeyValue::new("Bond Code", args.bond_code),
        KeyValue::new("Conversion Factor", format!("{:.4}", state.conversion_factor)),
        KeyValue::new("Delivery Date", state.delivery_date.to_string()),
        KeyValue::new("Delivery Accrued", format!("{:.7}", state.delivery_accrued)),
        KeyValue::new("Invoice Price", format!("{:.6}", state.invoice_price)),
        KeyValue::new("Bond Clean Price", format!("{:.6}", state.bond_clean_price)),
        KeyValue::new("Bond Dirty Price", format!("{:.6}", state.bond_dirty_price)),
        KeyValue::new("Basis Spread", format!("{:.6}", state.basis_spread)),
        KeyValue::new("Carry", format!("{:.6}", state.carry)),
        KeyValue::new("Net Basis Spread", format!("{:.6}", state.net_basis_spread)),
        KeyValue::new("Implied Repo Rate", format!("{:.4}%", state.irr * 100.0)),
        KeyValue::new("Forward YTM", format!("{:.4}%", state.forward_ytm * 100.0)),
        KeyValue::new("Remaining Days", state.remaining_days.to_string()),
    ];

    print_rows(&rows, format)?;
    Ok(())
}
