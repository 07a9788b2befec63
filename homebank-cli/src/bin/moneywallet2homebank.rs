use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use homebank_cli::{LONG_VERSION, init_tracing, parse_args, run};
use homebank_ingest::{ConvertOptions, SourceFormat};

/// Converts a MoneyWallet CSV export to a HomeBank CSV file
#[derive(Parser, Debug)]
#[command(name = "moneywallet2homebank", version, long_version = LONG_VERSION, about)]
struct Cli {
    /// CSV export of MoneyWallet
    infile: PathBuf,

    /// CSV file ready to import into HomeBank
    outfile: PathBuf,
}

fn main() -> Result<()> {
    let cli: Cli = parse_args();
    init_tracing();

    run(
        SourceFormat::Moneywallet,
        &cli.infile,
        &cli.outfile,
        &ConvertOptions::default(),
    )
}
