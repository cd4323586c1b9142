//! Storage adapters for points and chats
//!
//! Handlers and services only see the [`GeoStorage`] and [`ChatStorage`]
//! traits. Two adapters implement them: PostgreSQL (sqlx) for deployments and
//! an in-process store for development and tests.

mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::features::chats::models::{Chat, NewChat};
use crate::features::geo::models::{Area, NewPoint, Point};

pub use memory::MemoryStorage;
pub use postgres::{PgChatStorage, PgGeoStorage};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistence and bounding-box lookup for points
#[async_trait]
pub trait GeoStorage: Send + Sync {
    /// Persist a point and return it with its assigned id
    async fn add_point(&self, point: NewPoint) -> Result<Point, StorageError>;

    /// Points whose coordinates fall inside `area` (inclusive)
    async fn get_points_in_area(&self, area: &Area) -> Result<Vec<Point>, StorageError>;
}

/// Persistence for chats
#[async_trait]
pub trait ChatStorage: Send + Sync {
    /// Persist a chat and return it with its assigned id
    async fn add_chat(&self, chat: NewChat) -> Result<Chat, StorageError>;

    async fn get_chat(&self, id: Uuid) -> Result<Option<Chat>, StorageError>;
}

/// The storage handles shared by every request
#[derive(Clone)]
pub struct Storages {
    pub geo: Arc<dyn GeoStorage>,
    pub chats: Arc<dyn ChatStorage>,
}

impl Storages {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            geo: Arc::new(PgGeoStorage::new(pool.clone())),
            chats: Arc::new(PgChatStorage::new(pool)),
        }
    }

    /// Both stores backed by one in-process [`MemoryStorage`]
    pub fn memory() -> Self {
        let store = Arc::new(MemoryStorage::new());
        Self {
            geo: store.clone(),
            chats: store,
        }
    }
}
