//! Chat endpoint: `POST /api/chat`.
//!
//! Takes `{ "message", "prompt" }`, primes the model with the persona prompt,
//! and returns the reply as `{ "resposta": ... }`.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use mentor_types::chat::{ChatReply, ChatRequest, MISSING_FIELDS_MESSAGE};

use crate::http::error::AppError;
use crate::state::AppState;

/// Handle one chat turn.
///
/// An unparseable body is treated like a missing field: 400 with the
/// validation message, and no upstream call.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected chat body");
        AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())
    })?;

    let (prompt, message) = request.validated()?;
    let resposta = state.chat_service.reply(prompt, message).await?;

    Ok(Json(ChatReply { resposta }))
}
