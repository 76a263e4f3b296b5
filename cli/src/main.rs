#![deny(missing_docs)]

//! # Fix Validation CLI
//!
//! Rewrites the payment page so the single booking is only validated for
//! carts with fewer than two items.
//!
//! Run with no arguments from the web app root. Exits 0 whether or not the
//! pattern was found; IO errors and invalid patterns exit non-zero.

use clap::Parser;
use fixval_core::AppResult;

mod apply;
mod logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Applies the cart-aware booking validation patch")]
struct Cli {
    #[clap(flatten)]
    apply: apply::ApplyArgs,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    apply::execute(&cli.apply)?;

    Ok(())
}
