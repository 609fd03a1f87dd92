//! Intent grouping.

use crate::types::{IntentGroups, UtteranceRecord};

/// Partition records by intent label. Duplicate utterances are kept.
pub fn group_records(records: &[UtteranceRecord]) -> IntentGroups {
    let mut groups = IntentGroups::new();
    for record in records {
        groups.push(&record.intent, &record.utterance);
    }
    groups
}
