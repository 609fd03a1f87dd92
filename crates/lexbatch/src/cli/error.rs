//! Helpful error types for CLI commands
//!
//! Every error includes:
//! - What went wrong
//! - Context about the situation
//! - Suggestions for how to fix it

use lexbatch::ValidationError;
use std::fmt;

pub const USAGE: &str = "\
Usage:
  lexbatch train -t intent -i <file> -a <accessKey> -s <secretKey> -b <botName>
  lexbatch test  -t intent -i <file> -a <accessKey> -s <secretKey> -b <botName>
  lexbatch help";

/// An error with helpful context and suggestions
#[derive(Debug)]
pub struct HelpfulError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
}

impl HelpfulError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Render a failed input check, pointing at the flag that fixes it.
    pub fn from_validation(err: &ValidationError) -> Self {
        let base = Self::new(err.to_string()).with_context("Required input check failed");
        match err {
            ValidationError::InvalidTarget(_) => {
                base.with_suggestion("TRY: Pass -t intent (entity is accepted but not implemented)")
            }
            ValidationError::MissingInput => {
                base.with_suggestion("TRY: Pass the corpus file with -i <file>")
            }
            ValidationError::MissingAccessKey => base.with_suggestion(
                "TRY: Pass -a <accessKey> or set AWS_ACCESS_KEY_ID",
            ),
            ValidationError::MissingSecretKey => base.with_suggestion(
                "TRY: Pass -s <secretKey> or set AWS_SECRET_ACCESS_KEY",
            ),
            ValidationError::MissingBotName => {
                base.with_suggestion("TRY: Pass the bot name with -b <botName>")
            }
        }
    }
}

impl fmt::Display for HelpfulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: {}", self.message)?;

        if let Some(ctx) = &self.context {
            writeln!(f, "CONTEXT: {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            for suggestion in &self.suggestions {
                writeln!(f, "  {}", suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HelpfulError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_rendering() {
        let rendered = HelpfulError::from_validation(&ValidationError::MissingBotName).to_string();
        assert!(rendered.starts_with("ERROR: Botname is required\n"));
        assert!(rendered.contains("CONTEXT: Required input check failed"));
        assert!(rendered.contains("-b <botName>"));
    }

    #[test]
    fn test_display_without_context_or_suggestions() {
        assert_eq!(HelpfulError::new("boom").to_string(), "ERROR: boom\n");
    }
}
