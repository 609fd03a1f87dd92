//! Corpus data model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One labeled utterance from the corpus file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtteranceRecord {
    /// Ground-truth intent label
    pub intent: String,
    /// Utterance text
    pub utterance: String,
}

impl UtteranceRecord {
    pub fn new(intent: impl Into<String>, utterance: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            utterance: utterance.into(),
        }
    }
}

/// All utterances that share an intent label, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentGroup {
    pub name: String,
    pub utterances: Vec<String>,
}

/// Intent groups keyed by name, iterated in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct IntentGroups {
    groups: Vec<IntentGroup>,
    index: HashMap<String, usize>,
}

impl IntentGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an utterance to `intent`, creating the group on first use.
    pub fn push(&mut self, intent: &str, utterance: &str) {
        match self.index.get(intent) {
            Some(&slot) => self.groups[slot].utterances.push(utterance.to_string()),
            None => {
                self.index.insert(intent.to_string(), self.groups.len());
                self.groups.push(IntentGroup {
                    name: intent.to_string(),
                    utterances: vec![utterance.to_string()],
                });
            }
        }
    }

    pub fn get(&self, intent: &str) -> Option<&IntentGroup> {
        self.index.get(intent).map(|&slot| &self.groups[slot])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IntentGroup> {
        self.groups.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Number of distinct intents.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total utterances across all groups.
    pub fn utterance_count(&self) -> usize {
        self.groups.iter().map(|g| g.utterances.len()).sum()
    }
}

impl<'a> IntoIterator for &'a IntentGroups {
    type Item = &'a IntentGroup;
    type IntoIter = std::slice::Iter<'a, IntentGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_creates_then_appends() {
        let mut groups = IntentGroups::new();
        groups.push("greeting", "hi");
        groups.push("farewell", "bye");
        groups.push("greeting", "hello");

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.utterance_count(), 3);
        assert_eq!(
            groups.get("greeting").unwrap().utterances,
            vec!["hi".to_string(), "hello".to_string()]
        );
        assert!(groups.get("unknown").is_none());
    }

    #[test]
    fn test_names_follow_first_appearance() {
        let mut groups = IntentGroups::new();
        groups.push("b", "1");
        groups.push("a", "2");
        groups.push("b", "3");
        let names: Vec<&str> = groups.names().collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
