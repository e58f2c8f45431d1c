//! CLI entry point for include-wrap.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// include-wrap — wrap a header in unused-parameter diagnostic pragmas.
#[derive(Parser, Debug)]
#[command(name = "include-wrap", version, about)]
struct Cli {
    /// Path to the header file to wrap.
    input: PathBuf,

    /// Path the wrapped header is written to. Missing parent directories
    /// are created.
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("include_wrap=info")),
        )
        .init();

    let cli = Cli::parse();

    // Marker line records the program as invoked, argv[0] style.
    let generator = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string());

    include_wrap::run(&cli.input, &cli.output, &generator)?;
    Ok(())
}
