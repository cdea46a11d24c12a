//! End-to-end coverage of the scoring commands against files on disk.

use super::helpers::Workspace;
use super::*;
use crate::mean::{MeanConfig, run_mean_with, score_mean};
use crate::summed::{SummedConfig, run_summed_with, score_summed};
use novelty_core::EvaluationConfig;
use novelty_scorer::NoveltyError;
use rstest::{fixture, rstest};

const LISTS: &str = r#"[
    [{"item": 0, "score": 0.9}, {"item": 3, "score": 0.5}],
    [{"item": 1, "score": 0.8}]
]"#;

#[fixture]
fn workspace() -> Workspace {
    let workspace = Workspace::new();
    workspace.write("lists.json", LISTS);
    workspace.write("dense.json", "[1, 1]");
    workspace.write("sparse.json", r#"{"7": 25}"#);
    workspace.write("single.json", r#"[[{"item": 7, "score": 1.0}], [{"item": 8, "score": 1.0}]]"#);
    workspace
}

fn mean_config(workspace: &Workspace, contexts: Option<usize>) -> MeanConfig {
    MeanConfig {
        recommendations: workspace.root().join("lists.json"),
        popularity: workspace.root().join("dense.json"),
        evaluation: EvaluationConfig::new(1),
        contexts,
    }
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating-point novelty"
)]
fn mean_report_scores_one_bit_per_context(workspace: Workspace) {
    let report = score_mean(&mean_config(&workspace, None)).expect("mean should score");

    assert_eq!(report.metric, "Novelty@1");
    assert_eq!(report.contexts, 2);
    assert!((report.novelty - 1.0).abs() < 1e-12, "got {}", report.novelty);
}

#[rstest]
fn mean_rejects_zero_contexts(workspace: Workspace) {
    let err = score_mean(&mean_config(&workspace, Some(0))).expect_err("zero contexts");
    assert!(
        matches!(err, CliError::Score(NoveltyError::InvalidPopulation(_))),
        "unexpected error: {err:?}"
    );
}

#[rstest]
fn mean_reports_missing_context_lists(workspace: Workspace) {
    let err = score_mean(&mean_config(&workspace, Some(3))).expect_err("third list missing");
    assert!(
        matches!(
            err,
            CliError::Score(NoveltyError::MissingContext { context: 2, available: 2 })
        ),
        "unexpected error: {err:?}"
    );
}

#[rstest]
fn mean_writes_a_json_report(workspace: Workspace) {
    let mut output = Vec::new();

    run_mean_with(&mean_config(&workspace, None), &mut output).expect("report should write");

    let report: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON report");
    assert_eq!(report["metric"], "Novelty@1");
    assert_eq!(report["contexts"], 2);
    assert!(output.ends_with(b"\n"));
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating-point surprisal"
)]
fn summed_report_lists_each_context(workspace: Workspace) {
    let config = SummedConfig {
        recommendations: workspace.root().join("single.json"),
        popularity: workspace.root().join("sparse.json"),
        users: 100,
        evaluation: EvaluationConfig::new(1),
    };

    let report = score_summed(&config).expect("summed should score");

    assert_eq!(report.metric, "Novelty@1");
    assert_eq!(report.lists.len(), 2);
    let first = report.lists.first().copied().expect("first list");
    assert!((first - 2.0).abs() < 1e-12, "got {first}");
    assert_eq!(report.lists.get(1).copied(), Some(0.0));
    let mean = report.mean.expect("mean over two lists");
    assert!((mean - 1.0).abs() < 1e-12, "got {mean}");
}

#[rstest]
fn summed_rejects_zero_users(workspace: Workspace) {
    let config = SummedConfig {
        recommendations: workspace.root().join("single.json"),
        popularity: workspace.root().join("sparse.json"),
        users: 0,
        evaluation: EvaluationConfig::new(1),
    };

    let mut output = Vec::new();
    let err = run_summed_with(&config, &mut output).expect_err("zero users");
    assert!(
        matches!(err, CliError::Score(NoveltyError::InvalidPopulation(_))),
        "unexpected error: {err:?}"
    );
    assert!(output.is_empty());
}
