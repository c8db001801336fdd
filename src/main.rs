//! Passphrase generator CLI.
//!
//! Parses flags, resolves options and prints the generated phrases.
//! Every failure is reported on stderr with exit status 1.

use clap::Parser;
use phrase::{Cli, Options, RandomSource};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only phrases and reports.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        // --help
        Err(e) => e.exit(),
    };

    tracing::debug!("phrase v{}", phrase::VERSION);

    let rng = RandomSource::detect();
    tracing::debug!(secure = rng.is_secure(), "Random source selected");

    let options = match Options::resolve(&cli) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = phrase::run(&options, rng, &mut stdout.lock()) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
