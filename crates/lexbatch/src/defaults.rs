//! Canonical fixed values for the Lex calls.

/// Intents are always written to and read from the mutable draft.
pub const INTENT_VERSION: &str = lexbatch_lex::LATEST_VERSION;
pub const BOT_LOCALE: &str = "en-US";
pub const CHILD_DIRECTED: bool = false;

pub const ABORT_MESSAGE: &str = "Sorry, I could not understand. Goodbye.";

pub const CLARIFICATION_MAX_ATTEMPTS: u32 = 1;
pub const CLARIFICATION_MESSAGES: [&str; 2] = ["Sorry. Can you repeat it", "Sorry"];

pub const DEFAULT_REGION: &str = "us-east-1";
/// PostText user id when none is configured.
pub const DEFAULT_USER_ID: &str = "lexbatch";
