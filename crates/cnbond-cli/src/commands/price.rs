//! Price command implementation.

use clap::Args;

use cnbond_bonds::pricing::{price_from_ytm, ytm_from_clean_price};
use cnbond_store::AttributeStore;

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::error::CliResult;
use crate::output::{print_rows, KeyValue};

/// Arguments for the `price` command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Bond code, e.g. `220012.IB`.
    #[arg(long)]
    pub bond_code: String,

    /// Valuation date, `YYYY-MM-DD`.
    #[arg(long)]
    pub date: String,

    /// Yield to maturity. Mutually exclusive with `--price`.
    #[arg(long, group = "calc_mode")]
    pub ytm: Option<f64>,

    /// Clean price. Mutually exclusive with `--ytm`.
    #[arg(long, group = "calc_mode")]
    pub price: Option<f64>,
}

/// Executes the `price` command: looks up `args.bond_code` via `store` and
/// prints clean/dirty price, accrued interest, and modified duration.
///
/// # Errors
///
/// Returns `CliError::InvalidDate` for an unparseable date,
/// `CliError::Store` if the bond code is unknown, and `CliError::Bond` for
/// any pricing failure (unsupported interest type, out-of-range date,
/// non-converging root-find).
pub fn execute(args: PriceArgs, format: OutputFormat, store: &dyn AttributeStore) -> CliResult<()> {
    let date = parse_date(&args.date)?;
    let bond = store.get(&args.bond_code)?;

    let result = match (args.ytm, args.price) {
        (Some(ytm), None) => price_from_ytm(&bond, date, ytm)?,
        (None, Some(price)) => ytm_from_clean_price(&bond, date, price)?,
        (Some(_), Some(_)) | (None, None) => return Err(cnbond_bonds::BondError::UnderSpecified.into()),
    };

    let rows = vec![
        KeyValue::new("Bond Code", bond.bond_code.clone()),
        KeyValue::new("Valuation Date", date.to_string()),
        KeyValue::new("Yield to Maturity", format!("{:.4}%", result.ytm * 100.0)),
        KeyValue::new("Clean Price", format!("{:.6}", result.clean_price)),
        KeyValue::new("Dirty Price", format!("{:.6}", result.dirty_price)),
        KeyValue::new("Accrued Interest", format!("{:.6}", result.accrued)),
        KeyValue::new("Modified Duration", format!("{:.6}", result.modified_duration)),
        KeyValue::new("Remaining Coupons", result.remaining_cp_num.to_string()),
        KeyValue::new("Days to Maturity", result.days_to_maturity.to_string()),
    ];

    print_rows(&rows, format)?;
    Ok(())
}
