//! Intent reconciliation.
//!
//! Two passes over the grouped corpus:
//! 1. **Upsert**: write every intent draft with its sanitized utterances.
//! 2. **Confirm**: look each upserted intent up again; only intents the
//!    platform returns are handed to bot publishing.
//!
//! A failed call drops that one intent and the batch carries on. Nothing is
//! retried.

use crate::defaults::INTENT_VERSION;
use lexbatch_corpus::{sanitize_all, IntentGroup, IntentGroups};
use lexbatch_lex::{LexError, LexPlatform, PutIntentRequest};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileStage {
    Upsert,
    Lookup,
}

impl fmt::Display for ReconcileStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileStage::Upsert => f.write_str("upsert"),
            ReconcileStage::Lookup => f.write_str("lookup"),
        }
    }
}

/// An intent excluded from the confirmed set, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentFailure {
    pub intent: String,
    pub stage: ReconcileStage,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Intents whose upsert succeeded, in corpus order
    pub upserted: Vec<String>,
    /// Upserted intents the platform confirmed; always a subset of `upserted`
    pub confirmed: Vec<String>,
    pub failures: Vec<IntentFailure>,
}

pub struct Reconciler<'a> {
    platform: &'a dyn LexPlatform,
}

impl<'a> Reconciler<'a> {
    pub fn new(platform: &'a dyn LexPlatform) -> Self {
        Self { platform }
    }

    pub fn reconcile(&self, groups: &IntentGroups) -> ReconcileReport {
        let mut report = ReconcileReport::default();

        for group in groups {
            match self.upsert(group) {
                Ok(()) => {
                    tracing::info!(intent = %group.name, "Put intent succeeded");
                    report.upserted.push(group.name.clone());
                }
                Err(err) => {
                    tracing::warn!(intent = %group.name, error = %err, "Put intent failed");
                    report.failures.push(IntentFailure {
                        intent: group.name.clone(),
                        stage: ReconcileStage::Upsert,
                        error: err.to_string(),
                    });
                }
            }
        }

        for name in &report.upserted {
            match self.platform.get_intent(name, INTENT_VERSION) {
                Ok(found) => {
                    tracing::debug!(intent = %found.name, "Intent confirmed");
                    report.confirmed.push(name.clone());
                }
                Err(err) => {
                    tracing::warn!(intent = %name, error = %err, "Intent not confirmed after put");
                    report.failures.push(IntentFailure {
                        intent: name.clone(),
                        stage: ReconcileStage::Lookup,
                        error: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            intents = groups.len(),
            upserted = report.upserted.len(),
            confirmed = report.confirmed.len(),
            "Reconciliation finished"
        );
        report
    }

    fn upsert(&self, group: &IntentGroup) -> Result<(), LexError> {
        let request = PutIntentRequest {
            name: group.name.clone(),
            version: INTENT_VERSION.to_string(),
            sample_utterances: sanitize_all(&group.utterances),
        };
        self.platform.put_intent(&request).map(|_| ())
    }
}
