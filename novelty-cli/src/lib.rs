//! Command-line interface for scoring the novelty of recommendation output.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod inputs;
mod mean;
mod summed;

pub use error::CliError;

use mean::{MeanArgs, run_mean};
use summed::{SummedArgs, run_summed};

pub(crate) const ARG_RECOMMENDATIONS: &str = "recommendations";
pub(crate) const ARG_POPULARITY: &str = "popularity";
pub(crate) const ARG_TOP_K: &str = "top-k";
pub(crate) const ARG_CONTEXTS: &str = "contexts";
pub(crate) const ARG_USERS: &str = "users";
pub(crate) const ARG_TOP_N: &str = "top-n";
pub(crate) const ENV_MEAN_RECOMMENDATIONS: &str = "NOVELTY_CMDS_MEAN_RECOMMENDATIONS";
pub(crate) const ENV_MEAN_POPULARITY: &str = "NOVELTY_CMDS_MEAN_POPULARITY";
pub(crate) const ENV_SUMMED_RECOMMENDATIONS: &str = "NOVELTY_CMDS_SUMMED_RECOMMENDATIONS";
pub(crate) const ENV_SUMMED_POPULARITY: &str = "NOVELTY_CMDS_SUMMED_POPULARITY";
pub(crate) const ENV_SUMMED_USERS: &str = "NOVELTY_CMDS_SUMMED_USERS";

/// Run the novelty CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, inputs
/// cannot be read, or scoring fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging()?;
    match cli.command {
        Command::Mean(args) => run_mean(args),
        Command::Summed(args) => run_summed(args),
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`; `log` records from the
/// scoring crates are bridged into it.
fn init_logging() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|source| CliError::InitLogging { source })
}

#[derive(Debug, Parser)]
#[command(
    name = "novelty",
    about = "Score the novelty (mean self-information) of ranked recommendations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Mean surprisal in bits per context over every context's top-K items.
    Mean(MeanArgs),
    /// Summed surprisal per ranked list for a fixed number of test users.
    Summed(SummedArgs),
}

#[cfg(test)]
mod tests;
