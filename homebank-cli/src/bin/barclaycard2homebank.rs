use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use homebank_cli::{LONG_VERSION, init_tracing, parse_args, run};
use homebank_ingest::{ConvertOptions, SourceFormat};

/// Converts a Barclaycard excel file to a HomeBank CSV file
#[derive(Parser, Debug)]
#[command(name = "barclaycard2homebank", version, long_version = LONG_VERSION, about)]
struct Cli {
    /// Excel file downloaded from the Barclaycard website
    infile: PathBuf,

    /// CSV file ready to import into HomeBank
    outfile: PathBuf,

    /// Worksheet to read (default: the first one)
    #[arg(long)]
    sheet: Option<String>,
}

fn main() -> Result<()> {
    let cli: Cli = parse_args();
    init_tracing();

    let options = ConvertOptions { sheet: cli.sheet };
    run(SourceFormat::Barclaycard, &cli.infile, &cli.outfile, &options)
}
