use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};

use crate::features::chats::{routes as chats_routes, ChatService};
use crate::features::geo::{routes as geo_routes, GeoService};
use crate::modules::storage::Storages;
use crate::shared::routing::RouteRegistry;

/// Services shared by every request
#[derive(Clone)]
pub struct AppServices {
    pub geo_service: Arc<GeoService>,
    pub chat_service: Arc<ChatService>,
}

impl AppServices {
    pub fn new(storages: Storages, routes: Arc<RouteRegistry>) -> Self {
        let chat_service = Arc::new(ChatService::new(storages.chats));
        let geo_service = Arc::new(GeoService::new(
            storages.geo,
            Arc::clone(&chat_service),
            routes,
        ));

        Self {
            geo_service,
            chat_service,
        }
    }
}

/// Registry holding the names of every route the service exposes
pub fn route_registry() -> RouteRegistry {
    let mut registry = RouteRegistry::new();
    geo_routes::register(&mut registry);
    chats_routes::register(&mut registry);
    registry
}

/// Simple health check endpoint (no storage access)
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "health"
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// API routes without documentation or middleware layers
pub fn api_routes(services: AppServices) -> Router {
    Router::new()
        .merge(geo_routes::routes(services.geo_service))
        .merge(chats_routes::routes(services.chat_service))
        .route("/health", get(health_check))
}
