// Entry point for the `betacode` binary.
//
// Parses arguments, installs the stderr log subscriber (level from
// `RUST_LOG`, default `warn`), and runs the subcommand against locked
// stdin/stdout. See `lib.rs` for the subcommands.
//
// Usage:
//   betacode beta [--policy <POLICY>] [TEXT]
//   betacode phono [--no-terminate] [CODE]
//   betacode decode [TEXT]
//   betacode inspect <BETA>
//   betacode conjugate <STEM> [--contract] [--json]
//   betacode article [--json]

use std::io::{self, BufWriter, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use polytonic_cli::{Cli, CliError, run};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run_locked(&cli) {
        eprintln!("betacode: {e}");
        std::process::exit(1);
    }
}

fn run_locked(cli: &Cli) -> Result<(), CliError> {
    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    run(&cli.command, stdin, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
