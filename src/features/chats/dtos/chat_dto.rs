use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Response DTO for chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseDto {
    pub id: Uuid,
    #[schema(example = "No name")]
    pub title: String,
    pub point_id: Uuid,
    pub created_at: DateTime<Utc>,
}
