use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::constants::SYNAPSE_STATUS_HEADER;
use crate::provider::ProviderError;
use crate::scoring::ScoringError;

/// Provider errors are transparent so the generation and scoring paths
/// produce byte-identical bodies for the same underlying failure (a missing
/// API key in particular).
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl GatewayError {
    fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            GatewayError::Provider(e) => Some(e),
            GatewayError::Scoring(ScoringError::Provider(e)) => Some(e),
            GatewayError::InvalidRequest(_) => None,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, synapse_status) = match (&self, self.provider_error()) {
            (GatewayError::InvalidRequest(_), _) => (StatusCode::BAD_REQUEST, "invalid_request"),
            (_, Some(ProviderError::MissingApiKey)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "missing_api_key")
            }
            _ => (StatusCode::BAD_GATEWAY, "provider_error"),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            SYNAPSE_STATUS_HEADER,
            HeaderValue::from_str(synapse_status).unwrap_or(HeaderValue::from_static("error")),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
