use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::geo::handlers;
use crate::features::geo::services::GeoService;
use crate::shared::routing::RouteRegistry;

pub const POST_GEO: &str = "post-geo";
pub const GET_GEO: &str = "get-geo";

pub const POST_GEO_TEMPLATE: &str = "/geo";
pub const GET_GEO_TEMPLATE: &str = "/geo/{latitude},{longitude},{latitudeDelta},{longitudeDelta}";

/// Register the names of the geo routes for URL reversal
pub fn register(registry: &mut RouteRegistry) {
    registry
        .register(POST_GEO, POST_GEO_TEMPLATE)
        .register(GET_GEO, GET_GEO_TEMPLATE);
}

/// Create routes for the geo feature
///
/// The four area components share one path segment, so the router captures
/// the whole segment and the handler splits it.
pub fn routes(service: Arc<GeoService>) -> Router {
    Router::new()
        .route(POST_GEO_TEMPLATE, post(handlers::create_point))
        .route("/geo/{area}", get(handlers::get_points_in_area))
        .with_state(service)
}
