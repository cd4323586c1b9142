use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{ChatStorage, GeoStorage, StorageError};
use crate::features::chats::models::{Chat, NewChat};
use crate::features::geo::models::{Area, Geo, NewPoint, Point};

#[derive(Debug, FromRow)]
struct PointRow {
    id: Uuid,
    latitude: f64,
    longitude: f64,
}

impl From<PointRow> for Point {
    fn from(r: PointRow) -> Self {
        Self {
            id: r.id,
            geo: Geo::new(r.latitude, r.longitude),
        }
    }
}

#[derive(Debug, FromRow)]
struct ChatRow {
    id: Uuid,
    title: String,
    point_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<ChatRow> for Chat {
    fn from(r: ChatRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            point_id: r.point_id,
            created_at: r.created_at,
        }
    }
}

/// Points table backed by PostgreSQL
pub struct PgGeoStorage {
    pool: PgPool,
}

impl PgGeoStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GeoStorage for PgGeoStorage {
    async fn add_point(&self, point: NewPoint) -> Result<Point, StorageError> {
        let row = sqlx::query_as::<_, PointRow>(
            r#"
            INSERT INTO points (id, latitude, longitude)
            VALUES ($1, $2, $3)
            RETURNING id, latitude, longitude
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(point.geo.latitude)
        .bind(point.geo.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert point: {:?}", e);
            StorageError::Database(e)
        })?;

        Ok(row.into())
    }

    async fn get_points_in_area(&self, area: &Area) -> Result<Vec<Point>, StorageError> {
        let rows = sqlx::query_as::<_, PointRow>(
            r#"
            SELECT id, latitude, longitude
            FROM points
            WHERE latitude BETWEEN $1 AND $2
              AND longitude BETWEEN $3 AND $4
            ORDER BY created_at, id
            "#,
        )
        .bind(area.min_latitude())
        .bind(area.max_latitude())
        .bind(area.min_longitude())
        .bind(area.max_longitude())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to query points in area {:?}: {:?}", area, e);
            StorageError::Database(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// Chats table backed by PostgreSQL
pub struct PgChatStorage {
    pool: PgPool,
}

impl PgChatStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatStorage for PgChatStorage {
    async fn add_chat(&self, chat: NewChat) -> Result<Chat, StorageError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            INSERT INTO chats (id, title, point_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, point_id, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&chat.title)
        .bind(chat.point_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                StorageError::Constraint(format!("point {} does not exist", chat.point_id))
            }
            e => {
                tracing::error!("Failed to insert chat: {:?}", e);
                StorageError::Database(e)
            }
        })?;

        Ok(row.into())
    }

    async fn get_chat(&self, id: Uuid) -> Result<Option<Chat>, StorageError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            SELECT id, title, point_id, created_at
            FROM chats
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }
}
