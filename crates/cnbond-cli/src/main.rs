//! cnbond CLI - command-line interface for Chinese government bond and
//! treasury-bond futures analytics.
//!
//! # Usage
//!
//! ```bash
//! # Price a bond from its YTM
//! cnbond price --bond-code 220012.IB --date 2022-11-18 --ytm 0.0279
//!
//! # Evaluate a treasury-bond futures contract
//! cnbond futures --futures-code T2212 --bond-code 220021.IB --date 2022-10-28 \
//!     --futures-price 101.65 --bond-ytm 0.026625 --capital-rate 0.0199
//! ```

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use cnbond_store::{AttributeStore, FileAttributeStore};
use error::CliError;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let store = FileAttributeStore::from_env();

    let result = dispatch(cli, &store);

    if let Err(err) = result {
        output::print_error(&err.to_string());
        std::process::exit(err.exit_code());
    }
}

fn dispatch(cli: Cli, store: &dyn AttributeStore) -> Result<(), CliError> {
    let format = cli.format;
    match cli.command {
        Commands::Price(args) => commands::price::execute(args, format, store),
        Commands::Futures(args) => commands::futures::execute(args, format, store),
    }
}
