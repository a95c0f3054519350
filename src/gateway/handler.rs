use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::constants::{SYNAPSE_STATUS_HEADER, SYNAPSE_STATUS_OK};
use crate::provider::CompletionBackend;

use super::error::GatewayError;
use super::payload::{AskRequest, AskResponse, ScoreRequest};
use super::state::AppState;

/// Answers a question: search context, one generation call, and an optional
/// scoring call when the caller supplied an expected answer.
#[instrument(skip(state, request), fields(has_expected = tracing::field::Empty))]
pub async fn ask_handler<P: CompletionBackend + 'static>(
    State(state): State<AppState<P>>,
    Json(request): Json<AskRequest>,
) -> Result<Response, GatewayError> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "`query` must not be empty".to_string(),
        ));
    }

    let expected = request.expected();
    tracing::Span::current().record("has_expected", expected.is_some());

    let web_context = state.search.fetch_context(query).await;

    let prompt = answer_prompt(query, &web_context);
    let ai_answer = state.provider.complete(&prompt).await?;
    debug!(answer_len = ai_answer.len(), "answer generated");

    let score = match expected {
        Some(expected) => Some(state.scorer.score(query, &ai_answer, expected).await?),
        None => None,
    };

    let response = AskResponse {
        id: format!("ans-{}", Uuid::new_v4()),
        created: Utc::now().timestamp(),
        query: query.to_string(),
        ai_answer,
        web_context,
        score,
    };

    Ok(ok_response(response))
}

/// Standalone rubric scoring of an already-generated answer.
#[instrument(skip(state, request))]
pub async fn score_handler<P: CompletionBackend + 'static>(
    State(state): State<AppState<P>>,
    Json(request): Json<ScoreRequest>,
) -> Result<Response, GatewayError> {
    let query = request.query.trim();
    let ai_answer = request.ai_answer.trim();
    let expected_answer = request.expected_answer.trim();

    if query.is_empty() || ai_answer.is_empty() || expected_answer.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "`query`, `ai_answer` and `expected_answer` must all be non-empty".to_string(),
        ));
    }

    let report = state.scorer.score(query, ai_answer, expected_answer).await?;

    Ok(ok_response(report))
}

pub(crate) fn answer_prompt(question: &str, web_context: &str) -> String {
    let context_block = if web_context.is_empty() {
        "(no web results available)"
    } else {
        web_context
    };

    format!(
        "You are a helpful AI assistant with access to the following web search results \
         for context.\n\n\
         Web Search Context:\n{context_block}\n\n\
         User Question: {question}\n\n\
         Provide a comprehensive, accurate answer based on the web context and your \
         knowledge. Be concise but complete. Format your answer in clear paragraphs."
    )
}

fn ok_response<T: Serialize>(body: T) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        SYNAPSE_STATUS_HEADER,
        HeaderValue::from_static(SYNAPSE_STATUS_OK),
    );
    (StatusCode::OK, headers, Json(body)).into_response()
}
