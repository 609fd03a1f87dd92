//! Sample-utterance sanitizing.
//!
//! The model-building API rejects sample utterances longer than
//! [`MAX_UTTERANCE_CHARS`]. Over-long utterances lose the characters in
//! [`STRIPPED_CHARS`] and are then cut to the ceiling. Utterances at or under the
//! ceiling are returned untouched, punctuation included.

/// Maximum sample utterance length, in chars.
pub const MAX_UTTERANCE_CHARS: usize = 200;

/// Characters removed from over-long utterances, in removal order.
pub const STRIPPED_CHARS: [char; 4] = ['(', ')', '?', '@'];

pub fn sanitize_utterance(utterance: &str) -> String {
    if utterance.chars().count() <= MAX_UTTERANCE_CHARS {
        return utterance.to_string();
    }

    let mut cleaned = utterance.to_string();
    for ch in STRIPPED_CHARS {
        cleaned = cleaned.replace(ch, "");
    }
    cleaned.chars().take(MAX_UTTERANCE_CHARS).collect()
}

pub fn sanitize_all(utterances: &[String]) -> Vec<String> {
    utterances.iter().map(|u| sanitize_utterance(u)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_utterance_is_unchanged() {
        let input = "what (exactly) is @home?";
        assert_eq!(sanitize_utterance(input), input);
    }

    #[test]
    fn test_exactly_at_ceiling_is_unchanged() {
        let input = "?".repeat(MAX_UTTERANCE_CHARS);
        assert_eq!(sanitize_utterance(&input), input);
    }

    #[test]
    fn test_long_repeated_pattern_loses_stripped_chars() {
        let unit = "(test)@question?";
        let mut input = unit.repeat(16);
        input.truncate(250);
        assert_eq!(input.chars().count(), 250);

        let out = sanitize_utterance(&input);
        assert!(!out.contains(&STRIPPED_CHARS[..]));
        assert!(out.chars().count() <= MAX_UTTERANCE_CHARS);
        // 250 chars hold 15 whole units plus "(test)@que"; 12 chars survive per unit.
        assert_eq!(out, format!("{}testque", "testquestion".repeat(15)));
    }

    #[test]
    fn test_stripping_happens_before_truncation() {
        let input = format!("{}{}", "@".repeat(100), "a".repeat(250));
        let out = sanitize_utterance(&input);
        assert_eq!(out, "a".repeat(MAX_UTTERANCE_CHARS));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let input = "é".repeat(MAX_UTTERANCE_CHARS);
        assert_eq!(sanitize_utterance(&input), input);

        let long = "é".repeat(MAX_UTTERANCE_CHARS + 1);
        assert_eq!(sanitize_utterance(&long).chars().count(), MAX_UTTERANCE_CHARS);
    }

    #[test]
    fn test_sanitize_all_maps_each() {
        let long = "x".repeat(300);
        let out = sanitize_all(&["hi?".to_string(), long]);
        assert_eq!(out[0], "hi?");
        assert_eq!(out[1].len(), MAX_UTTERANCE_CHARS);
    }
}
