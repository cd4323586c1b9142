use std::sync::Arc;

use validator::Validate;

use crate::core::error::Result;
use crate::features::chats::routes::GET_CHAT;
use crate::features::chats::ChatService;
use crate::features::geo::dtos::{CreatePointDto, PointResponseDto};
use crate::features::geo::models::Area;
use crate::modules::storage::GeoStorage;
use crate::shared::routing::RouteRegistry;

/// Outcome of creating a point
#[derive(Debug, Clone)]
pub struct CreatedPoint {
    pub point: PointResponseDto,
    /// URL of the chat attached to the point
    pub location: String,
}

/// Service for geo points
pub struct GeoService {
    storage: Arc<dyn GeoStorage>,
    chat_service: Arc<ChatService>,
    routes: Arc<RouteRegistry>,
}

impl GeoService {
    pub fn new(
        storage: Arc<dyn GeoStorage>,
        chat_service: Arc<ChatService>,
        routes: Arc<RouteRegistry>,
    ) -> Self {
        Self {
            storage,
            chat_service,
            routes,
        }
    }

    /// Create a point and the default chat attached to it.
    ///
    /// The two writes are not transactional: if the chat write fails the
    /// point stays persisted without a chat and the error is returned.
    pub async fn create_point(&self, dto: CreatePointDto) -> Result<CreatedPoint> {
        let new_point = dto.into_new_point()?;

        let point = self.storage.add_point(new_point).await?;
        tracing::info!(
            "Point created: id={}, latitude={}, longitude={}",
            point.id,
            point.geo.latitude,
            point.geo.longitude
        );

        let chat = match self.chat_service.create_default_for_point(point.id).await {
            Ok(chat) => chat,
            Err(e) => {
                tracing::warn!("Point {} persisted without a chat: {}", point.id, e);
                return Err(e);
            }
        };

        let chat_id = chat.id.to_string();
        let location = self.routes.url_for(GET_CHAT, &[("chatID", &chat_id)])?;

        Ok(CreatedPoint {
            point: point.into(),
            location,
        })
    }

    /// Points inside `area`, in storage order
    pub async fn points_in_area(&self, area: Area) -> Result<Vec<PointResponseDto>> {
        area.validate()?;

        let points = self.storage.get_points_in_area(&area).await?;
        tracing::debug!("Area query {:?} matched {} points", area, points.len());

        Ok(points.into_iter().map(Into::into).collect())
    }
}
