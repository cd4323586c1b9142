use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ChatStorage, GeoStorage, StorageError};
use crate::features::chats::models::{Chat, NewChat};
use crate::features::geo::models::{Area, NewPoint, Point};

/// In-process store for points and chats.
///
/// Points keep insertion order, which is the order area queries return.
/// Adding a chat for an unknown point is rejected like the foreign key in
/// the postgres schema.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    points: RwLock<Vec<Point>>,
    chats: RwLock<HashMap<Uuid, Chat>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn point_count(&self) -> usize {
        self.points.read().await.len()
    }

    #[cfg(test)]
    pub async fn chats_for_point(&self, point_id: Uuid) -> Vec<Chat> {
        self.chats
            .read()
            .await
            .values()
            .filter(|c| c.point_id == point_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl GeoStorage for MemoryStorage {
    async fn add_point(&self, point: NewPoint) -> Result<Point, StorageError> {
        let point = Point {
            id: Uuid::now_v7(),
            geo: point.geo,
        };
        self.points.write().await.push(point.clone());
        Ok(point)
    }

    async fn get_points_in_area(&self, area: &Area) -> Result<Vec<Point>, StorageError> {
        Ok(self
            .points
            .read()
            .await
            .iter()
            .filter(|p| area.contains(&p.geo))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ChatStorage for MemoryStorage {
    async fn add_chat(&self, chat: NewChat) -> Result<Chat, StorageError> {
        let point_exists = self
            .points
            .read()
            .await
            .iter()
            .any(|p| p.id == chat.point_id);
        if !point_exists {
            return Err(StorageError::Constraint(format!(
                "point {} does not exist",
                chat.point_id
            )));
        }

        let chat = Chat {
            id: Uuid::now_v7(),
            title: chat.title,
            point_id: chat.point_id,
            created_at: Utc::now(),
        };
        self.chats.write().await.insert(chat.id, chat.clone());
        Ok(chat)
    }

    async fn get_chat(&self, id: Uuid) -> Result<Option<Chat>, StorageError> {
        Ok(self.chats.read().await.get(&id).cloned())
    }
}
