//! Cross-cutting, shared constants.

use std::time::Duration;

/// Response header carrying the request outcome (`ok`, `invalid_request`, ...).
pub const SYNAPSE_STATUS_HEADER: &str = "x-synapse-status";

pub const SYNAPSE_STATUS_OK: &str = "ok";

/// DuckDuckGo Instant Answer API endpoint (no credential required).
pub const DEFAULT_SEARCH_URL: &str = "https://api.duckduckgo.com/";

/// Gemini `generateContent` endpoint.
pub const DEFAULT_GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Upper bound on a single search call. Exceeding it degrades to an empty snippet.
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound on a single generation or scoring call.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// How many related-topic entries contribute to the context snippet.
pub const MAX_RELATED_TOPICS: usize = 5;

/// Per-dimension rubric maximum. Four dimensions, so totals land in 0..=100.
pub const MAX_DIMENSION_SCORE: i64 = 25;
