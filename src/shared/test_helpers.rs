use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use uuid::Uuid;

use crate::core::app::{api_routes, route_registry, AppServices};
use crate::features::chats::models::{Chat, NewChat};
use crate::features::chats::ChatService;
use crate::features::geo::models::{Area, NewPoint, Point};
use crate::features::geo::GeoService;
use crate::modules::storage::{
    ChatStorage, GeoStorage, MemoryStorage, StorageError, Storages,
};
use crate::shared::routing::RouteRegistry;

/// Chat storage whose writes always fail
pub struct FailingChatStorage;

#[async_trait]
impl ChatStorage for FailingChatStorage {
    async fn add_chat(&self, _chat: NewChat) -> Result<Chat, StorageError> {
        Err(StorageError::Unavailable("chat store is down".to_string()))
    }

    async fn get_chat(&self, _id: Uuid) -> Result<Option<Chat>, StorageError> {
        Err(StorageError::Unavailable("chat store is down".to_string()))
    }
}

/// Geo storage that fails every call
pub struct FailingGeoStorage;

#[async_trait]
impl GeoStorage for FailingGeoStorage {
    async fn add_point(&self, _point: NewPoint) -> Result<Point, StorageError> {
        Err(StorageError::Unavailable("geo store is down".to_string()))
    }

    async fn get_points_in_area(&self, _area: &Area) -> Result<Vec<Point>, StorageError> {
        Err(StorageError::Unavailable("geo store is down".to_string()))
    }
}

/// Services wired to an in-memory store the test can inspect
pub struct TestContext {
    pub store: Arc<MemoryStorage>,
    pub geo_service: Arc<GeoService>,
    pub chat_service: Arc<ChatService>,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStorage::new());
        Self::build(store.clone(), store.clone(), store, route_registry())
    }

    pub fn with_chat_storage(chats: Arc<dyn ChatStorage>) -> Self {
        let store = Arc::new(MemoryStorage::new());
        Self::build(store.clone(), store, chats, route_registry())
    }

    pub fn with_geo_storage(geo: Arc<dyn GeoStorage>) -> Self {
        let store = Arc::new(MemoryStorage::new());
        Self::build(store.clone(), geo, store, route_registry())
    }

    pub fn with_routes(routes: RouteRegistry) -> Self {
        let store = Arc::new(MemoryStorage::new());
        Self::build(store.clone(), store.clone(), store, routes)
    }

    fn build(
        store: Arc<MemoryStorage>,
        geo: Arc<dyn GeoStorage>,
        chats: Arc<dyn ChatStorage>,
        routes: RouteRegistry,
    ) -> Self {
        let services = AppServices::new(Storages { geo, chats }, Arc::new(routes));
        Self {
            store,
            geo_service: services.geo_service,
            chat_service: services.chat_service,
        }
    }

    pub fn services(&self) -> AppServices {
        AppServices {
            geo_service: Arc::clone(&self.geo_service),
            chat_service: Arc::clone(&self.chat_service),
        }
    }

    /// HTTP test server over the API routes
    pub fn server(&self) -> TestServer {
        TestServer::new(api_routes(self.services())).unwrap()
    }
}
