use serde::{Deserialize, Serialize};

use super::error::ProviderError;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// `generateContent` request body.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                max_output_tokens: 1024,
            },
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: CandidateContent,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
}

/// `generateContent` response body. The provider reports failures in-band
/// via `error`, including on non-2xx statuses, so both fields are optional.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub error: Option<ApiError>,
}

impl GenerateResponse {
    /// Extracts the first candidate's text, surfacing in-band API errors.
    pub fn into_text(self) -> Result<String, ProviderError> {
        if let Some(error) = self.error {
            return Err(ProviderError::Api {
                message: if error.message.is_empty() {
                    "unknown error".to_string()
                } else {
                    error.message
                },
            });
        }

        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }
}
