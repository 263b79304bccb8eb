//! Conversational recommendation endpoint.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::search::recommend;
use crate::state::AppState;

/// Request body for POST /api/chat.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// Accepted for forward compatibility with client payloads; currently
    /// unused by the recommender.
    #[serde(default)]
    pub user_preferences: Option<serde_json::Value>,
}

/// Response body for POST /api/chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub context: ChatContext,
}

/// Conversation context the client can use for follow-up rendering.
#[derive(Debug, Serialize)]
pub struct ChatContext {
    /// Names of the top matches (at most five).
    pub products: Vec<String>,
    pub categories: Vec<String>,
    pub colors: Vec<String>,
}

/// POST /api/chat
///
/// Compose a natural-language recommendation from the catalog. An empty
/// message gets the fallback reply rather than an error.
#[instrument(skip(state, request))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let snapshot = state.catalog().snapshot();
    let recommendation = recommend(&snapshot, &request.message);

    Json(ChatResponse {
        success: true,
        response: recommendation.text,
        context: ChatContext {
            products: recommendation.product_names,
            categories: recommendation.categories,
            colors: recommendation.colors,
        },
    })
}
