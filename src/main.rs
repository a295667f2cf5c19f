//! Castellan -- a queen-and-sites strategy bot.
//!
//! Reads the initial site layout and then one snapshot per turn from
//! stdin, answering each turn with a queen command and a training command
//! on stdout. Logs go to stderr.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use castellan::config::{Tuning, TUNING_ENV};
use castellan::engine::run_session;

/// Loads tuning from the first CLI argument or the tuning environment
/// variable, falling back to defaults.
fn load_tuning() -> Option<Tuning> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(TUNING_ENV).ok());
    match path {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => {
                tracing::info!(%path, "loaded tuning");
                Some(tuning)
            }
            Err(e) => {
                tracing::error!("{}", e);
                None
            }
        },
        None => Some(Tuning::default()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let Some(tuning) = load_tuning() else {
        return ExitCode::FAILURE;
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match run_session(stdin.lock(), &mut out, tuning) {
        Ok(turns) => {
            tracing::info!(turns, "input closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("protocol violation: {}", e);
            ExitCode::FAILURE
        }
    }
}
