//! Run orchestration for TRAIN and TEST modes.

use crate::config::{Mode, RunConfig, Target};
use crate::evaluate::{EvaluationReport, Evaluator};
use crate::publish::{publish_bot, PublishOutcome};
use crate::reconcile::{ReconcileReport, Reconciler};
use lexbatch_corpus::{group_records, read_corpus, CorpusReport};
use lexbatch_lex::LexPlatform;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainReport {
    /// Distinct intents found in the corpus
    pub intents: usize,
    pub utterances: usize,
    pub reconcile: ReconcileReport,
    /// PutBot result; the error is kept as text so the run can still report
    pub publish: Result<PublishOutcome, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Trained(TrainReport),
    Tested(EvaluationReport),
    /// Target accepted by validation but with no implementation
    Unimplemented { mode: Mode, target: Target },
}

/// Read the corpus, logging instead of failing.
///
/// An unreadable file yields an empty corpus. Malformed lines are logged and
/// kept in `rejected`.
pub fn load_corpus(path: &Path) -> CorpusReport {
    let report = match read_corpus(path) {
        Ok(report) => report,
        Err(err) => {
            tracing::error!(error = %err, "Corpus unreadable; continuing with no records");
            return CorpusReport::default();
        }
    };
    for rejected in &report.rejected {
        tracing::warn!(line = rejected.line, "Skipping malformed corpus line: {}", rejected);
    }
    report
}

pub fn run_train(
    platform: &dyn LexPlatform,
    config: &RunConfig,
    corpus: &CorpusReport,
) -> TrainReport {
    let groups = group_records(&corpus.records);
    tracing::info!(
        intents = groups.len(),
        utterances = groups.utterance_count(),
        "Training intents"
    );

    let reconcile = Reconciler::new(platform).reconcile(&groups);
    let publish = publish_bot(platform, &config.bot_name, &reconcile.confirmed)
        .map_err(|err| err.to_string());

    TrainReport {
        intents: groups.len(),
        utterances: groups.utterance_count(),
        reconcile,
        publish,
    }
}

pub fn run_test(
    platform: &dyn LexPlatform,
    config: &RunConfig,
    corpus: &CorpusReport,
) -> EvaluationReport {
    Evaluator::new(platform, &config.bot_name, &config.bot_alias, &config.user_id)
        .evaluate(&corpus.records)
}

/// Dispatch on mode and target.
pub fn run(platform: &dyn LexPlatform, config: &RunConfig, corpus: &CorpusReport) -> RunOutcome {
    if config.target == Target::Entity {
        tracing::warn!(mode = config.mode.as_str(), "Entity target is not implemented");
        return RunOutcome::Unimplemented {
            mode: config.mode,
            target: config.target,
        };
    }
    match config.mode {
        Mode::Train => RunOutcome::Trained(run_train(platform, config, corpus)),
        Mode::Test => RunOutcome::Tested(run_test(platform, config, corpus)),
    }
}
