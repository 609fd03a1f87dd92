//! Evaluation runner.
//!
//! Each record is sent to the live bot and the predicted intent is compared to
//! the label (trimmed, case-insensitive). A failed call or a response without
//! an intent scores Incorrect; the run never stops early.

use lexbatch_corpus::UtteranceRecord;
use lexbatch_lex::{LexPlatform, PostTextRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOutcome {
    /// 1-based position in the corpus
    pub ordinal: usize,
    pub utterance: String,
    pub expected: String,
    pub predicted: Option<String>,
    pub verdict: Verdict,
    /// Error text when the PostText call itself failed
    pub failure: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationReport {
    pub outcomes: Vec<EvaluationOutcome>,
    pub correct: usize,
    pub total: usize,
}

impl EvaluationReport {
    /// Percentage of correct predictions; `None` when nothing was evaluated.
    pub fn accuracy(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.correct as f64 / self.total as f64 * 100.0)
    }

    /// Records whose call failed, as opposed to wrong or empty predictions.
    pub fn failed_calls(&self) -> usize {
        self.outcomes.iter().filter(|o| o.failure.is_some()).count()
    }
}

pub fn intents_match(expected: &str, predicted: &str) -> bool {
    expected.trim().to_lowercase() == predicted.trim().to_lowercase()
}

pub struct Evaluator<'a> {
    platform: &'a dyn LexPlatform,
    bot_name: &'a str,
    bot_alias: &'a str,
    user_id: &'a str,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        platform: &'a dyn LexPlatform,
        bot_name: &'a str,
        bot_alias: &'a str,
        user_id: &'a str,
    ) -> Self {
        Self {
            platform,
            bot_name,
            bot_alias,
            user_id,
        }
    }

    pub fn evaluate(&self, records: &[UtteranceRecord]) -> EvaluationReport {
        let mut report = EvaluationReport::default();
        for (idx, record) in records.iter().enumerate() {
            let outcome = self.score(idx + 1, record);
            if outcome.verdict == Verdict::Correct {
                report.correct += 1;
            }
            report.total += 1;
            report.outcomes.push(outcome);
        }

        tracing::info!(
            bot = %self.bot_name,
            correct = report.correct,
            total = report.total,
            failed_calls = report.failed_calls(),
            "Evaluation finished"
        );
        report
    }

    fn score(&self, ordinal: usize, record: &UtteranceRecord) -> EvaluationOutcome {
        let request = PostTextRequest {
            bot_name: self.bot_name.to_string(),
            bot_alias: self.bot_alias.to_string(),
            user_id: self.user_id.to_string(),
            input_text: record.utterance.clone(),
        };

        let (predicted, failure) = match self.platform.post_text(&request) {
            Ok(response) => (response.intent_name, None),
            Err(err) => {
                tracing::warn!(ordinal, error = %err, "PostText failed");
                (None, Some(err.to_string()))
            }
        };

        let verdict = match &predicted {
            Some(intent) if intents_match(&record.intent, intent) => Verdict::Correct,
            _ => Verdict::Incorrect,
        };

        EvaluationOutcome {
            ordinal,
            utterance: record.utterance.clone(),
            expected: record.intent.clone(),
            predicted,
            verdict,
            failure,
        }
    }
}
