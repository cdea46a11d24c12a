//! `summed` command: per-list summed surprisal for a fixed test population.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use novelty_core::{DEFAULT_CUTOFF, EvaluationConfig, RankingMetric};
use novelty_scorer::{ContextMean, NoveltyScorer};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::inputs::{load_popularity, load_recommendations, write_report};
use crate::{
    ARG_POPULARITY, ARG_RECOMMENDATIONS, ARG_TOP_N, ARG_USERS, CliError, ENV_SUMMED_POPULARITY,
    ENV_SUMMED_RECOMMENDATIONS, ENV_SUMMED_USERS,
};

/// CLI arguments for the `summed` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "summed",
    long_about = "Sum log2(users / count) over the top-N items of each ranked \
                 list and report the per-list totals with their mean. Totals \
                 are not normalised by the number of users.",
    about = "Score per-list summed surprisal"
)]
#[ortho_config(prefix = "NOVELTY")]
pub(crate) struct SummedArgs {
    /// Path to a JSON array of ranked lists, one per context.
    #[arg(long = ARG_RECOMMENDATIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) recommendations: Option<Utf8PathBuf>,
    /// Path to JSON popularity counts (dense array or object keyed by item).
    #[arg(long = ARG_POPULARITY, value_name = "path")]
    #[serde(default)]
    pub(crate) popularity: Option<Utf8PathBuf>,
    /// Number of test users in the population.
    #[arg(long = ARG_USERS, value_name = "n")]
    #[serde(default)]
    pub(crate) users: Option<u64>,
    /// Number of leading entries scored per list (default 10).
    #[arg(long = ARG_TOP_N, value_name = "n")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
}

impl SummedArgs {
    fn into_config(self) -> Result<SummedConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SummedConfig::try_from(merged)
    }
}

/// Resolved `summed` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SummedConfig {
    pub(crate) recommendations: Utf8PathBuf,
    pub(crate) popularity: Utf8PathBuf,
    pub(crate) users: u64,
    pub(crate) evaluation: EvaluationConfig,
}

impl TryFrom<SummedArgs> for SummedConfig {
    type Error = CliError;

    fn try_from(args: SummedArgs) -> Result<Self, Self::Error> {
        let recommendations = args.recommendations.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMENDATIONS,
            env: ENV_SUMMED_RECOMMENDATIONS,
        })?;
        let popularity = args.popularity.ok_or(CliError::MissingArgument {
            field: ARG_POPULARITY,
            env: ENV_SUMMED_POPULARITY,
        })?;
        let users = args.users.ok_or(CliError::MissingArgument {
            field: ARG_USERS,
            env: ENV_SUMMED_USERS,
        })?;
        Ok(Self {
            recommendations,
            popularity,
            users,
            evaluation: EvaluationConfig::new(args.top_n.unwrap_or(DEFAULT_CUTOFF)),
        })
    }
}

/// Report printed by the `summed` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SummedReport {
    pub(crate) metric: String,
    pub(crate) users: u64,
    pub(crate) lists: Vec<f64>,
    pub(crate) mean: Option<f64>,
}

pub(crate) fn run_summed(args: SummedArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_summed_with(&config, &mut stdout)
}

pub(crate) fn run_summed_with(
    config: &SummedConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let report = score_summed(config)?;
    write_report(writer, &report)
}

pub(crate) fn score_summed(config: &SummedConfig) -> Result<SummedReport, CliError> {
    let recommendations = load_recommendations(&config.recommendations)?;
    let popularity = load_popularity(&config.popularity)?;
    let scorer = NoveltyScorer::new(config.users, popularity)?;

    let lists: Vec<f64> = recommendations
        .iter()
        .map(|list| scorer.summed_surprisal(list, &config.evaluation))
        .collect();
    let mean: ContextMean = lists.iter().copied().collect();
    log::info!(
        "scored {} lists for {} users; mean summed surprisal {:?}",
        mean.contexts(),
        config.users,
        mean.mean()
    );
    Ok(SummedReport {
        metric: scorer.name(&config.evaluation),
        users: config.users,
        lists,
        mean: mean.mean(),
    })
}
