use utoipa::{Modify, OpenApi};

use crate::core::app;
use crate::features::chats::{dtos as chats_dtos, handlers as chats_handlers};
use crate::features::geo::{dtos as geo_dtos, handlers as geo_handlers};
use crate::shared::types::{ApiErrorResponse, FieldError};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Geo
        geo_handlers::create_point,
        geo_handlers::get_points_in_area,
        // Chats
        chats_handlers::get_chat,
        // Health
        app::health_check,
    ),
    components(
        schemas(
            // Shared
            ApiErrorResponse,
            FieldError,
            // Geo
            geo_dtos::CreatePointDto,
            geo_dtos::PointResponseDto,
            // Chats
            chats_dtos::ChatResponseDto,
        )
    ),
    tags(
        (name = "geo", description = "Geo points and area lookup"),
        (name = "chats", description = "Chats anchored at points"),
        (name = "health", description = "Liveness probe"),
    ),
    info(
        title = "Geochats API",
        version = "0.1.0",
        description = "Location-anchored chats and geo point lookup",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
