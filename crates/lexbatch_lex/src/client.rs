//! Blocking Lex V1 REST client.

use crate::error::LexError;
use crate::platform::LexPlatform;
use crate::sigv4::{self, RequestToSign, SigningScope};
use crate::types::{
    BotSummary, IntentSummary, PostTextRequest, PostTextResponse, PutBotRequest,
    PutIntentRequest,
};
use reqwest::blocking::Client;
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::fmt;

/// SigV4 service name shared by the model-building and runtime APIs.
pub const SIGNING_SERVICE: &str = "lex";

/// PutBot only writes the draft.
pub const LATEST_VERSION: &str = "$LATEST";

const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";

/// Static access key pair, optionally with an STS session token.
#[derive(Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Base URLs for the two Lex APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexEndpoints {
    pub model: String,
    pub runtime: String,
}

impl LexEndpoints {
    pub fn for_region(region: &str) -> Self {
        Self {
            model: format!("https://models.lex.{}.amazonaws.com", region),
            runtime: format!("https://runtime.lex.{}.amazonaws.com", region),
        }
    }
}

pub struct LexClient {
    http: Client,
    credentials: Credentials,
    region: String,
    endpoints: LexEndpoints,
}

impl LexClient {
    /// Create a client for the public endpoints of `region`.
    pub fn new(credentials: Credentials, region: impl Into<String>) -> Self {
        let region = region.into();
        Self {
            http: Client::new(),
            endpoints: LexEndpoints::for_region(&region),
            credentials,
            region,
        }
    }

    /// Point the client at non-default endpoints (local stacks, proxies).
    pub fn with_endpoints(mut self, endpoints: LexEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        base: &str,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T, LexError> {
        let endpoint = format!("{}{}", base.trim_end_matches('/'), path);
        let url = Url::parse(&endpoint).map_err(|e| LexError::Endpoint {
            endpoint: endpoint.clone(),
            reason: e.to_string(),
        })?;
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(LexError::Endpoint {
                    endpoint,
                    reason: "missing host".to_string(),
                })
            }
        };

        let now = chrono::Utc::now();
        let mut headers = vec![
            ("host".to_string(), host),
            ("x-amz-date".to_string(), sigv4::amz_date(now)),
        ];
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        if let Some(token) = &self.credentials.session_token {
            headers.push(("x-amz-security-token".to_string(), token.clone()));
        }

        let has_body = body.is_some();
        let payload = body.unwrap_or_default();
        let scope = SigningScope {
            access_key_id: &self.credentials.access_key_id,
            secret_access_key: &self.credentials.secret_access_key,
            region: &self.region,
            service: SIGNING_SERVICE,
        };
        let authorization = sigv4::authorization(
            &scope,
            now,
            &RequestToSign {
                method: method.as_str(),
                path: url.path(),
                query: url.query().unwrap_or(""),
                headers: &headers,
                payload: &payload,
            },
        );

        tracing::debug!(method = %method, path = %url.path(), "Lex request");

        let mut request = self
            .http
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, authorization);
        for (name, value) in headers.iter().filter(|(name, _)| name != "host") {
            request = request.header(name.as_str(), value.as_str());
        }
        if has_body {
            request = request.body(payload);
        }

        let response = request.send()?;
        let status = response.status();
        let error_type = response
            .headers()
            .get(ERROR_TYPE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(':').next().unwrap_or(v).to_string());
        let bytes = response.bytes()?;

        tracing::debug!(status = status.as_u16(), "Lex response");

        if !status.is_success() {
            return Err(api_error(status, error_type, &bytes));
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn api_error(status: StatusCode, error_type: Option<String>, body: &[u8]) -> LexError {
    let message = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("Message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());

    if status == StatusCode::NOT_FOUND {
        return LexError::NotFound { message };
    }
    LexError::Api {
        status: status.as_u16(),
        error_type: error_type.unwrap_or_else(|| "UnknownError".to_string()),
        message,
    }
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

impl LexPlatform for LexClient {
    fn put_intent(&self, request: &PutIntentRequest) -> Result<IntentSummary, LexError> {
        let path = format!(
            "/intents/{}/versions/{}",
            encode(&request.name),
            encode(&request.version)
        );
        let body = serde_json::to_vec(request)?;
        self.send(Method::PUT, &self.endpoints.model, &path, Some(body))
    }

    fn get_intent(&self, name: &str, version: &str) -> Result<IntentSummary, LexError> {
        let path = format!("/intents/{}/versions/{}", encode(name), encode(version));
        self.send(Method::GET, &self.endpoints.model, &path, None)
    }

    fn put_bot(&self, request: &PutBotRequest) -> Result<BotSummary, LexError> {
        let path = format!(
            "/bots/{}/versions/{}",
            encode(&request.name),
            encode(LATEST_VERSION)
        );
        let body = serde_json::to_vec(request)?;
        self.send(Method::PUT, &self.endpoints.model, &path, Some(body))
    }

    fn post_text(&self, request: &PostTextRequest) -> Result<PostTextResponse, LexError> {
        let path = format!(
            "/bot/{}/alias/{}/user/{}/text",
            encode(&request.bot_name),
            encode(&request.bot_alias),
            encode(&request.user_id)
        );
        let body = serde_json::to_vec(request)?;
        self.send(Method::POST, &self.endpoints.runtime, &path, Some(body))
    }
}
