use crate::error::RelayError;
use serde::{Deserialize, Serialize};

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TOP_P: f64 = 0.9;

/// Body of `POST /chat`.
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct ChatResponse {
    pub response: String,
}

/// Sampling parameters sent with every inference request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Upper bound on generated tokens (default 1024).
    pub max_tokens: u32,
    /// Sampling temperature (default 0.7).
    pub temperature: f64,
    /// Nucleus-sampling threshold (default 0.9).
    pub top_p: f64,
    /// Stop sequences; omitted from the payload when empty (default none).
    pub stop_sequences: Vec<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            stop_sequences: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentBlock>,
}

/// Anthropic messages payload in the shape Bedrock's `InvokeModel` expects.
#[derive(Debug, Deserialize, Serialize)]
pub struct InferenceRequest {
    pub anthropic_version: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop_sequences: Vec<String>,
}

impl InferenceRequest {
    pub fn single_turn(message: &str, params: &GenerationParams) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION.to_string(),
            messages: vec![Message {
                role: Role::User,
                content: vec![ContentBlock::Text {
                    text: message.to_string(),
                }],
            }],
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
            stop_sequences: params.stop_sequences.clone(),
        }
    }

    pub fn to_payload(&self) -> Result<Vec<u8>, RelayError> {
        serde_json::to_vec(self).map_err(RelayError::Marshal)
    }
}

#[derive(Debug, Deserialize)]
pub struct ResponseBlock {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct InferenceResponse {
    pub content: Vec<ResponseBlock>,
}

impl InferenceResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, RelayError> {
        serde_json::from_slice(body).map_err(RelayError::ParseResponse)
    }

    /// Text of the first content block. Bedrock is not expected to return an
    /// empty `content` array, but nothing guarantees it.
    pub fn into_first_text(self) -> Result<String, RelayError> {
        self.content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or(RelayError::EmptyContent)
    }
}
