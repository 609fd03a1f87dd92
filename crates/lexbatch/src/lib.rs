//! lexbatch: batch trainer and evaluator for Amazon Lex intents
//!
//! - **TRAIN**: group a labeled corpus by intent, upsert each intent draft,
//!   confirm it exists, then attach the confirmed set to a bot.
//! - **TEST**: replay every utterance through the live bot and score the
//!   predicted intent against the label.

pub mod config;
pub mod defaults;
pub mod evaluate;
pub mod pipeline;
pub mod publish;
pub mod reconcile;

pub use config::{Mode, RunConfig, RunInputs, Settings, SettingsError, Target, ValidationError};
pub use evaluate::{EvaluationOutcome, EvaluationReport, Evaluator, Verdict};
pub use pipeline::{load_corpus, run, run_test, run_train, RunOutcome, TrainReport};
pub use publish::{bot_request, publish_bot, PublishOutcome};
pub use reconcile::{IntentFailure, ReconcileReport, ReconcileStage, Reconciler};
