#![expect(
    clippy::expect_used,
    reason = "tests use expect for readable failures"
)]

//! Warn-level reporting for popularity counts above the population.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use novelty_core::EvaluationConfig;
use novelty_core::test_support::{collection_of, popularity_of, ranked_items};
use novelty_scorer::{NoveltyScorer, mean_surprisal};
use rstest::{fixture, rstest};

struct Recorder {
    warnings: Mutex<Vec<String>>,
}

impl Log for Recorder {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.warnings
                .lock()
                .expect("warning log lock")
                .push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder {
    warnings: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

#[fixture]
fn recorder() -> &'static Recorder {
    INSTALL.call_once(|| {
        log::set_logger(&RECORDER).expect("install recording logger");
        log::set_max_level(LevelFilter::Warn);
    });
    &RECORDER
}

fn warned(recorder: &Recorder, needle: &str) -> bool {
    recorder
        .warnings
        .lock()
        .expect("warning log lock")
        .iter()
        .any(|message| message.contains(needle))
}

#[rstest]
fn summed_surprisal_warns_when_count_exceeds_users(recorder: &'static Recorder) {
    let scorer = NoveltyScorer::new(10, popularity_of(&[(7, 20)])).expect("scorer");
    let list = ranked_items(&[7]);

    let total = scorer.summed_surprisal(&list, &EvaluationConfig::new(1));

    assert!(total.is_finite() && total < 0.0, "got {total}");
    assert!(
        warned(recorder, "above the population of 10;"),
        "expected an above-population warning"
    );
}

#[rstest]
fn mean_surprisal_warns_when_count_exceeds_contexts(recorder: &'static Recorder) {
    let lists = collection_of(&[&[7], &[8]]);
    let popularity = popularity_of(&[(7, 3), (8, 1)]);

    let novelty = mean_surprisal(2, &lists, &popularity, &EvaluationConfig::new(1))
        .expect("novelty with an over-counted item");

    assert!(novelty.is_finite(), "got {novelty}");
    assert!(
        warned(recorder, "above the population of 2;"),
        "expected an above-population warning"
    );
}
