use std::sync::Arc;

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppPath;
use crate::features::chats::dtos::ChatResponseDto;
use crate::features::chats::services::ChatService;
use crate::shared::types::ApiErrorResponse;

/// Get a chat by id
#[utoipa::path(
    get,
    path = "/chats/{chatID}",
    params(
        ("chatID" = Uuid, Path, description = "Chat id")
    ),
    responses(
        (status = 200, description = "Chat details", body = ChatResponseDto),
        (status = 400, description = "Malformed chat id", body = ApiErrorResponse),
        (status = 404, description = "Chat not found", body = ApiErrorResponse)
    ),
    tag = "chats"
)]
pub async fn get_chat(
    State(service): State<Arc<ChatService>>,
    AppPath(chat_id): AppPath<Uuid>,
) -> Result<Json<ChatResponseDto>> {
    let chat = service.get_chat(chat_id).await?;
    Ok(Json(chat))
}
