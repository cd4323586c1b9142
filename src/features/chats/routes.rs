use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::chats::handlers;
use crate::features::chats::services::ChatService;
use crate::shared::routing::RouteRegistry;

pub const GET_CHAT: &str = "get-chat";

pub const GET_CHAT_TEMPLATE: &str = "/chats/{chatID}";

/// Register the names of the chat routes for URL reversal
pub fn register(registry: &mut RouteRegistry) {
    registry.register(GET_CHAT, GET_CHAT_TEMPLATE);
}

/// Create routes for the chats feature
pub fn routes(service: Arc<ChatService>) -> Router {
    Router::new()
        .route(GET_CHAT_TEMPLATE, get(handlers::get_chat))
        .with_state(service)
}
