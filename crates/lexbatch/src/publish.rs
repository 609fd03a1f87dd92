//! Bot publishing.

use crate::defaults::{
    ABORT_MESSAGE, BOT_LOCALE, CHILD_DIRECTED, CLARIFICATION_MAX_ATTEMPTS,
    CLARIFICATION_MESSAGES, INTENT_VERSION,
};
use lexbatch_lex::{
    IntentReference, LexError, LexPlatform, Message, Prompt, PutBotRequest, Statement,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    /// Bot name as echoed back by the platform
    pub bot_name: String,
    pub intents: Vec<String>,
}

/// Build the PutBot request for `bot_name` carrying `intents` at the draft version.
pub fn bot_request(bot_name: &str, intents: &[String]) -> PutBotRequest {
    PutBotRequest {
        name: bot_name.to_string(),
        locale: BOT_LOCALE.to_string(),
        child_directed: CHILD_DIRECTED,
        abort_statement: Statement {
            messages: vec![Message::plain_text(ABORT_MESSAGE)],
        },
        clarification_prompt: Prompt {
            max_attempts: CLARIFICATION_MAX_ATTEMPTS,
            messages: CLARIFICATION_MESSAGES
                .iter()
                .map(|m| Message::plain_text(*m))
                .collect(),
        },
        intents: intents
            .iter()
            .map(|name| IntentReference {
                intent_name: name.clone(),
                intent_version: INTENT_VERSION.to_string(),
            })
            .collect(),
    }
}

/// Attach `intents` to `bot_name` with a single PutBot call.
pub fn publish_bot(
    platform: &dyn LexPlatform,
    bot_name: &str,
    intents: &[String],
) -> Result<PublishOutcome, LexError> {
    let request = bot_request(bot_name, intents);
    match platform.put_bot(&request) {
        Ok(summary) => {
            tracing::info!(bot = %summary.name, intents = intents.len(), "Put bot succeeded");
            Ok(PublishOutcome {
                bot_name: summary.name,
                intents: intents.to_vec(),
            })
        }
        Err(err) => {
            tracing::error!(bot = %bot_name, error = %err, "Put bot failed");
            Err(err)
        }
    }
}
