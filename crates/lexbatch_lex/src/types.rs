//! Request and response bodies for the Lex V1 REST API.
//!
//! Path parameters (names, versions, aliases) are carried on the request
//! structs but skipped during serialization; only the JSON body goes on the wire.

use serde::{Deserialize, Serialize};

pub const CONTENT_TYPE_PLAIN_TEXT: &str = "PlainText";

/// PUT /intents/{name}/versions/{version}
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutIntentRequest {
    #[serde(skip)]
    pub name: String,
    #[serde(skip)]
    pub version: String,
    pub sample_utterances: Vec<String>,
}

/// Intent as returned by PutIntent and GetIntent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentSummary {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub checksum: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: String,
    pub content: String,
}

impl Message {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: CONTENT_TYPE_PLAIN_TEXT.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub max_attempts: u32,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentReference {
    pub intent_name: String,
    pub intent_version: String,
}

/// PUT /bots/{name}/versions/$LATEST
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutBotRequest {
    #[serde(skip)]
    pub name: String,
    pub locale: String,
    pub child_directed: bool,
    pub abort_statement: Statement,
    pub clarification_prompt: Prompt,
    pub intents: Vec<IntentReference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotSummary {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// POST /bot/{botName}/alias/{botAlias}/user/{userId}/text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTextRequest {
    #[serde(skip)]
    pub bot_name: String,
    #[serde(skip)]
    pub bot_alias: String,
    #[serde(skip)]
    pub user_id: String,
    pub input_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTextResponse {
    #[serde(default)]
    pub intent_name: Option<String>,
    #[serde(default)]
    pub dialog_state: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_intent_body_omits_path_params() {
        let req = PutIntentRequest {
            name: "greeting".to_string(),
            version: "$LATEST".to_string(),
            sample_utterances: vec!["hi".to_string()],
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body, json!({ "sampleUtterances": ["hi"] }));
    }

    #[test]
    fn test_put_bot_body_shape() {
        let req = PutBotRequest {
            name: "OrderBot".to_string(),
            locale: "en-US".to_string(),
            child_directed: false,
            abort_statement: Statement {
                messages: vec![Message::plain_text("bye")],
            },
            clarification_prompt: Prompt {
                max_attempts: 1,
                messages: vec![Message::plain_text("again?")],
            },
            intents: vec![IntentReference {
                intent_name: "greeting".to_string(),
                intent_version: "$LATEST".to_string(),
            }],
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["childDirected"], json!(false));
        assert_eq!(body["clarificationPrompt"]["maxAttempts"], json!(1));
        assert_eq!(body["abortStatement"]["messages"][0]["contentType"], json!("PlainText"));
        assert_eq!(body["intents"][0]["intentVersion"], json!("$LATEST"));
        assert!(body.get("name").is_none());
    }

    #[test]
    fn test_post_text_response_without_intent() {
        let resp: PostTextResponse =
            serde_json::from_str(r#"{"dialogState":"ElicitIntent"}"#).unwrap();
        assert!(resp.intent_name.is_none());
        assert_eq!(resp.dialog_state.as_deref(), Some("ElicitIntent"));
    }
}
