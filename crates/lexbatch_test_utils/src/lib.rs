//! lexbatch Test Utilities
//!
//! In-memory stand-in for the Lex APIs. Failures and predictions are scripted
//! up front; every call is recorded so tests can assert on the exact sequence.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lexbatch_test_utils::FakeLexPlatform;
//!
//! let platform = FakeLexPlatform::new()
//!     .fail_get_intent("X")
//!     .predict("hello", "greeting");
//! ```

use lexbatch_lex::{
    BotSummary, IntentSummary, LexError, LexPlatform, PostTextRequest, PostTextResponse,
    PutBotRequest, PutIntentRequest,
};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

/// One recorded platform call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    PutIntent {
        name: String,
        version: String,
        sample_utterances: Vec<String>,
    },
    GetIntent {
        name: String,
        version: String,
    },
    PutBot(PutBotRequest),
    PostText {
        bot_name: String,
        bot_alias: String,
        user_id: String,
        input_text: String,
    },
}

#[derive(Debug, Clone)]
enum Prediction {
    Intent(String),
    Nothing,
    Fail,
}

#[derive(Default)]
pub struct FakeLexPlatform {
    failing_puts: HashSet<String>,
    failing_lookups: HashSet<String>,
    put_bot_failure: Option<String>,
    predictions: HashMap<String, Prediction>,
    intents: Mutex<BTreeMap<String, Vec<String>>>,
    calls: Mutex<Vec<Call>>,
}

fn injected(message: impl Into<String>) -> LexError {
    LexError::Api {
        status: 500,
        error_type: "InternalFailureException".to_string(),
        message: message.into(),
    }
}

impl FakeLexPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// PutIntent for `name` fails.
    pub fn fail_put_intent(mut self, name: &str) -> Self {
        self.failing_puts.insert(name.to_string());
        self
    }

    /// GetIntent for `name` fails even after a successful PutIntent.
    pub fn fail_get_intent(mut self, name: &str) -> Self {
        self.failing_lookups.insert(name.to_string());
        self
    }

    pub fn fail_put_bot(mut self, message: &str) -> Self {
        self.put_bot_failure = Some(message.to_string());
        self
    }

    /// PostText for `utterance` returns `intent`.
    pub fn predict(mut self, utterance: &str, intent: &str) -> Self {
        self.predictions
            .insert(utterance.to_string(), Prediction::Intent(intent.to_string()));
        self
    }

    /// PostText for `utterance` succeeds without an intent.
    pub fn predict_nothing(mut self, utterance: &str) -> Self {
        self.predictions
            .insert(utterance.to_string(), Prediction::Nothing);
        self
    }

    /// PostText for `utterance` fails.
    pub fn fail_post_text(mut self, utterance: &str) -> Self {
        self.predictions.insert(utterance.to_string(), Prediction::Fail);
        self
    }

    /// Seed an intent as if a previous run had created it.
    pub fn with_existing_intent(self, name: &str) -> Self {
        self.intents
            .lock()
            .expect("intents lock")
            .insert(name.to_string(), Vec::new());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Stored sample utterances for `name`, if the intent exists.
    pub fn stored_utterances(&self, name: &str) -> Option<Vec<String>> {
        self.intents.lock().expect("intents lock").get(name).cloned()
    }

    /// The most recent PutBot request.
    pub fn last_put_bot(&self) -> Option<PutBotRequest> {
        self.calls().into_iter().rev().find_map(|call| match call {
            Call::PutBot(request) => Some(request),
            _ => None,
        })
    }

    pub fn count_calls(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

impl LexPlatform for FakeLexPlatform {
    fn put_intent(&self, request: &PutIntentRequest) -> Result<IntentSummary, LexError> {
        self.record(Call::PutIntent {
            name: request.name.clone(),
            version: request.version.clone(),
            sample_utterances: request.sample_utterances.clone(),
        });
        if self.failing_puts.contains(&request.name) {
            return Err(injected(format!("put_intent {} rejected", request.name)));
        }
        self.intents
            .lock()
            .expect("intents lock")
            .insert(request.name.clone(), request.sample_utterances.clone());
        Ok(IntentSummary {
            name: request.name.clone(),
            version: Some(request.version.clone()),
            checksum: None,
        })
    }

    fn get_intent(&self, name: &str, version: &str) -> Result<IntentSummary, LexError> {
        self.record(Call::GetIntent {
            name: name.to_string(),
            version: version.to_string(),
        });
        if self.failing_lookups.contains(name) {
            return Err(injected(format!("get_intent {} unavailable", name)));
        }
        if !self.intents.lock().expect("intents lock").contains_key(name) {
            return Err(LexError::NotFound {
                message: format!("intent {} not found", name),
            });
        }
        Ok(IntentSummary {
            name: name.to_string(),
            version: Some(version.to_string()),
            checksum: None,
        })
    }

    fn put_bot(&self, request: &PutBotRequest) -> Result<BotSummary, LexError> {
        self.record(Call::PutBot(request.clone()));
        if let Some(message) = &self.put_bot_failure {
            return Err(injected(message.clone()));
        }
        Ok(BotSummary {
            name: request.name.clone(),
            version: Some("$LATEST".to_string()),
            status: Some("NOT_BUILT".to_string()),
        })
    }

    fn post_text(&self, request: &PostTextRequest) -> Result<PostTextResponse, LexError> {
        self.record(Call::PostText {
            bot_name: request.bot_name.clone(),
            bot_alias: request.bot_alias.clone(),
            user_id: request.user_id.clone(),
            input_text: request.input_text.clone(),
        });
        match self.predictions.get(&request.input_text) {
            Some(Prediction::Intent(intent)) => Ok(PostTextResponse {
                intent_name: Some(intent.clone()),
                dialog_state: Some("ReadyForFulfillment".to_string()),
                message: None,
            }),
            Some(Prediction::Fail) => Err(injected(format!(
                "post_text '{}' failed",
                request.input_text
            ))),
            Some(Prediction::Nothing) | None => Ok(PostTextResponse {
                intent_name: None,
                dialog_state: Some("ElicitIntent".to_string()),
                message: None,
            }),
        }
    }
}
