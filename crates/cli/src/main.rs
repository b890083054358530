//! icinga-downtime - schedule or remove Icinga 2 downtimes.
//!
//! Responsibilities:
//! - Parse command-line arguments, environment variables and an optional params file.
//! - Run one downtime action through the Icinga 2 client library.
//! - Print a single JSON result envelope and exit with a structured code.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Connection settings resolution (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Stdout carries only the JSON envelope; logs go to stderr.
//! - Every failure, including a bad `.env` or rejected arguments, ends in a failure envelope.
//!   Only `--help` and `--version` print clap's own output.

mod args;
mod envelope;
mod error;
mod operator;
mod params;

use args::{Cli, LogFormat};
use clap::Parser;
use clap::error::ErrorKind;
use envelope::Envelope;
use error::{ExitCode, ExitCodeExt};
use icinga_config::ConfigLoader;
use operator::{DowntimeOperator, IcingaConnector, Outcome};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

const DEFAULT_LOG_FILTER: &str = "warn";

fn init_logging(level: Option<&str>, format: LogFormat) {
    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    let fmt_layer = match format {
        LogFormat::Text => fmt::layer().with_writer(std::io::stderr).boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

async fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let params = cli.params()?;
    let operator = DowntimeOperator::new(IcingaConnector);
    Ok(operator.execute(&params).await?)
}

/// Print the envelope and terminate with the given code.
fn finish(envelope: Envelope, exit_code: ExitCode) -> ! {
    match envelope.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize result: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }

    std::process::exit(exit_code.as_i32());
}

fn fail(err: anyhow::Error) -> ! {
    let code = err.exit_code();
    finish(Envelope::failure(&err), code)
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        fail(e.into());
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => fail(e.into()),
    };
    init_logging(cli.log_level.as_deref(), cli.log_format);

    match run(&cli).await {
        Ok(outcome) => finish(Envelope::success(outcome), ExitCode::Success),
        Err(e) => {
            tracing::error!(error = %e, "Downtime action failed");
            fail(e)
        }
    }
}
