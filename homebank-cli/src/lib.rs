//! Shared plumbing for the converter binaries: logging setup, argument
//! parsing with the documented exit codes, and the conversion run itself.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use homebank_ingest::{ConvertOptions, SourceFormat, convert_file};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("HOMEBANK_BUILD_SHA"),
    ")"
);

/// Log to stderr, filtered by RUST_LOG (default: warnings only).
pub fn init_tracing() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parse argv; help/version exit 0, usage errors exit 1.
pub fn parse_args<T: Parser>() -> T {
    T::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        std::process::exit(code);
    })
}

pub fn run(
    format: SourceFormat,
    infile: &Path,
    outfile: &Path,
    options: &ConvertOptions,
) -> Result<()> {
    let count = convert_file(format, infile, outfile, options).with_context(|| {
        format!("converting {} to {}", infile.display(), outfile.display())
    })?;

    info!(records = count, outfile = %outfile.display(), "conversion finished");
    Ok(())
}
