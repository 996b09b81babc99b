//! Gemini generateContent request and response types.

use serde::{Deserialize, Serialize};

/// A text fragment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Fragment text
    pub text: String,
}

impl Part {
    /// Create a part from text.
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One entry of the session history or the current message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Role: "user" or "model"
    pub role: String,
    /// Content parts
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a user entry.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::text(text)],
        }
    }

    /// Create a model entry.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part::text(text)],
        }
    }
}

/// System instruction carried separately from the turn list.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInstruction {
    /// Instruction parts
    pub parts: Vec<Part>,
}

/// generateContent request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// System instruction (distinct from the turn list)
    #[serde(rename = "system_instruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
    /// Session history followed by the current message
    pub contents: Vec<Content>,
}

/// generateContent response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Response candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Candidate content
    pub content: Option<CandidateContent>,
    /// Finish reason
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Candidate content.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Error details
    pub error: ApiErrorDetails,
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    /// Error message
    pub message: String,
    /// Error status label
    pub status: Option<String>,
}
