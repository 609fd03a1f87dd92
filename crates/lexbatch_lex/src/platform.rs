use crate::error::LexError;
use crate::types::{
    BotSummary, IntentSummary, PostTextRequest, PostTextResponse, PutBotRequest,
    PutIntentRequest,
};

/// Remote NLU platform as seen by the batch pipeline.
///
/// Every call is a single blocking attempt. Implementations must not retry.
pub trait LexPlatform {
    /// Create or overwrite an intent draft.
    fn put_intent(&self, request: &PutIntentRequest) -> Result<IntentSummary, LexError>;

    /// Look up an intent at `version`. Absence is reported as an error.
    fn get_intent(&self, name: &str, version: &str) -> Result<IntentSummary, LexError>;

    /// Create or overwrite a bot draft.
    fn put_bot(&self, request: &PutBotRequest) -> Result<BotSummary, LexError>;

    /// Send one utterance to a live bot.
    fn post_text(&self, request: &PostTextRequest) -> Result<PostTextResponse, LexError>;
}

impl<T: LexPlatform + ?Sized> LexPlatform for &T {
    fn put_intent(&self, request: &PutIntentRequest) -> Result<IntentSummary, LexError> {
        (**self).put_intent(request)
    }

    fn get_intent(&self, name: &str, version: &str) -> Result<IntentSummary, LexError> {
        (**self).get_intent(name, version)
    }

    fn put_bot(&self, request: &PutBotRequest) -> Result<BotSummary, LexError> {
        (**self).put_bot(request)
    }

    fn post_text(&self, request: &PostTextRequest) -> Result<PostTextResponse, LexError> {
        (**self).post_text(request)
    }
}
