//! Amazon Lex V1 client
//!
//! Provides:
//! - **LexPlatform**: the four remote calls the batch pipeline depends on
//! - **LexClient**: blocking HTTP implementation signed with SigV4
//! - **Wire types**: request/response bodies for PutIntent, GetIntent, PutBot, PostText
//!
//! Uses raw HTTP requests (no SDK dependency).

pub mod client;
pub mod error;
pub mod platform;
pub mod sigv4;
pub mod types;

pub use client::{Credentials, LexClient, LexEndpoints, LATEST_VERSION};
pub use error::LexError;
pub use platform::LexPlatform;
pub use types::{
    BotSummary, IntentReference, IntentSummary, Message, PostTextRequest, PostTextResponse,
    Prompt, PutBotRequest, PutIntentRequest, Statement, CONTENT_TYPE_PLAIN_TEXT,
};
