//! `mean` command: corpus-wide mean surprisal.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use novelty_core::{DEFAULT_CUTOFF, EvaluationConfig};
use novelty_scorer::{METRIC_LABEL, mean_surprisal};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::inputs::{load_popularity, load_recommendations, write_report};
use crate::{
    ARG_CONTEXTS, ARG_POPULARITY, ARG_RECOMMENDATIONS, ARG_TOP_K, CliError,
    ENV_MEAN_POPULARITY, ENV_MEAN_RECOMMENDATIONS,
};

/// CLI arguments for the `mean` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "mean",
    long_about = "Compute the mean self-information, in bits per context, of \
                 every context's top-K recommendations. Item probabilities are \
                 estimated from popularity counts divided by the number of \
                 contexts. Paths can come from CLI flags, configuration files, \
                 or environment variables.",
    about = "Score corpus-wide novelty"
)]
#[ortho_config(prefix = "NOVELTY")]
pub(crate) struct MeanArgs {
    /// Path to a JSON array of ranked lists, one per context.
    #[arg(long = ARG_RECOMMENDATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) recommendations: Option<Utf8PathBuf>,
    /// Path to JSON popularity counts (dense array or object keyed by item).
    #[arg(long = ARG_POPULARITY, value_name = "path")]
    #[serde(default)]
    pub(crate) popularity: Option<Utf8PathBuf>,
    /// Number of leading entries scored per list (default 10).
    #[arg(long = ARG_TOP_K, value_name = "n")]
    #[serde(default)]
    pub(crate) top_k: Option<usize>,
    /// Number of evaluated contexts; defaults to the number of lists.
    #[arg(long = ARG_CONTEXTS, value_name = "n")]
    #[serde(default)]
    pub(crate) contexts: Option<usize>,
}

impl MeanArgs {
    fn into_config(self) -> Result<MeanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MeanConfig::try_from(merged)
    }
}

/// Resolved `mean` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MeanConfig {
    pub(crate) recommendations: Utf8PathBuf,
    pub(crate) popularity: Utf8PathBuf,
    pub(crate) evaluation: EvaluationConfig,
    pub(crate) contexts: Option<usize>,
}

impl TryFrom<MeanArgs> for MeanConfig {
    type Error = CliError;

    fn try_from(args: MeanArgs) -> Result<Self, Self::Error> {
        let recommendations = args.recommendations.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMENDATIONS,
            env: ENV_MEAN_RECOMMENDATIONS,
        })?;
        let popularity = args.popularity.ok_or(CliError::MissingArgument {
            field: ARG_POPULARITY,
            env: ENV_MEAN_POPULARITY,
        })?;
        Ok(Self {
            recommendations,
            popularity,
            evaluation: EvaluationConfig::new(args.top_k.unwrap_or(DEFAULT_CUTOFF)),
            contexts: args.contexts,
        })
    }
}

/// Report printed by the `mean` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct MeanReport {
    pub(crate) metric: String,
    pub(crate) contexts: usize,
    pub(crate) novelty: f64,
}

pub(crate) fn run_mean(args: MeanArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_mean_with(&config, &mut stdout)
}

pub(crate) fn run_mean_with(config: &MeanConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = score_mean(config)?;
    write_report(writer, &report)
}

pub(crate) fn score_mean(config: &MeanConfig) -> Result<MeanReport, CliError> {
    let recommendations = load_recommendations(&config.recommendations)?;
    let popularity = load_popularity(&config.popularity)?;
    let contexts = config.contexts.unwrap_or_else(|| recommendations.len());
    let novelty = mean_surprisal(contexts, &recommendations, &popularity, &config.evaluation)?;
    log::info!("mean novelty {novelty} bits over {contexts} contexts");
    Ok(MeanReport {
        metric: format!("{METRIC_LABEL}@{}", config.evaluation.cutoff()),
        contexts,
        novelty,
    })
}
