//! Line-oriented run reports for stdout.

use lexbatch::{EvaluationReport, RunOutcome, TrainReport, Verdict};

/// Format the final accuracy line.
///
/// Examples:
/// - Some(75.0) -> "Success: 75.00%"
/// - None -> "Success: n/a (no records evaluated)"
pub fn format_accuracy(accuracy: Option<f64>) -> String {
    match accuracy {
        Some(pct) => format!("Success: {:.2}%", pct),
        None => "Success: n/a (no records evaluated)".to_string(),
    }
}

pub fn train_lines(report: &TrainReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .reconcile
        .upserted
        .iter()
        .enumerate()
        .map(|(idx, name)| format!("{}. Put intent {} success!", idx + 1, name))
        .collect();

    for failure in &report.reconcile.failures {
        lines.push(format!(
            "Intent {} skipped ({}): {}",
            failure.intent, failure.stage, failure.error
        ));
    }

    lines.push(format!(
        "Confirmed {} of {} intents ({} utterances)",
        report.reconcile.confirmed.len(),
        report.intents,
        report.utterances
    ));

    match &report.publish {
        Ok(outcome) => lines.push(format!("Put bot {} success!", outcome.bot_name)),
        Err(err) => lines.push(format!("Put bot failed: {}", err)),
    }
    lines
}

pub fn test_lines(report: &EvaluationReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .outcomes
        .iter()
        .map(|outcome| match outcome.verdict {
            Verdict::Correct => format!("{}. Correct", outcome.ordinal),
            Verdict::Incorrect => format!("{}. Incorrect", outcome.ordinal),
        })
        .collect();
    lines.push(format_accuracy(report.accuracy()));
    lines
}

pub fn outcome_lines(outcome: &RunOutcome) -> Vec<String> {
    match outcome {
        RunOutcome::Trained(report) => train_lines(report),
        RunOutcome::Tested(report) => test_lines(report),
        RunOutcome::Unimplemented { mode, target } => vec![format!(
            "{} for target '{}' is not implemented yet; nothing to do",
            mode.as_str(),
            target
        )],
    }
}
