use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::chats::dtos::ChatResponseDto;
use crate::features::chats::models::{Chat, NewChat};
use crate::modules::storage::ChatStorage;
use crate::shared::constants::DEFAULT_CHAT_TITLE;

/// Service for chats anchored at points
pub struct ChatService {
    storage: Arc<dyn ChatStorage>,
}

impl ChatService {
    pub fn new(storage: Arc<dyn ChatStorage>) -> Self {
        Self { storage }
    }

    /// Create the default chat attached to a freshly created point
    pub async fn create_default_for_point(&self, point_id: Uuid) -> Result<Chat> {
        let chat = NewChat {
            title: DEFAULT_CHAT_TITLE.to_string(),
            point_id,
        };
        chat.validate()?;

        let chat = self.storage.add_chat(chat).await?;

        tracing::info!("Chat created: id={}, point_id={}", chat.id, chat.point_id);

        Ok(chat)
    }

    pub async fn get_chat(&self, id: Uuid) -> Result<ChatResponseDto> {
        self.storage
            .get_chat(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Chat {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::geo::models::{Geo, NewPoint};
    use crate::modules::storage::{GeoStorage, MemoryStorage};

    #[tokio::test]
    async fn test_create_default_for_point() {
        let store = Arc::new(MemoryStorage::new());
        let point = store
            .add_point(NewPoint {
                geo: Geo::new(1.0, 1.0),
            })
            .await
            .unwrap();
        let service = ChatService::new(store.clone());

        let chat = service.create_default_for_point(point.id).await.unwrap();

        assert_eq!(chat.title, "No name");
        assert_eq!(chat.point_id, point.id);
        assert_eq!(service.get_chat(chat.id).await.unwrap().id, chat.id);
    }

    #[tokio::test]
    async fn test_get_chat_not_found() {
        let service = ChatService::new(Arc::new(MemoryStorage::new()));
        assert!(matches!(
            service.get_chat(Uuid::now_v7()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_create_for_missing_point_surfaces_storage_error() {
        let service = ChatService::new(Arc::new(MemoryStorage::new()));
        assert!(matches!(
            service.create_default_for_point(Uuid::now_v7()).await,
            Err(AppError::Storage(_))
        ));
    }
}
