use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::geo::dtos::{CreatePointDto, PointResponseDto};
use crate::features::geo::models::Area;
use crate::features::geo::services::GeoService;
use crate::shared::types::ApiErrorResponse;

/// Create a point
///
/// Persists the point, then creates a chat titled "No name" anchored to it.
/// The `Location` header points at that chat.
#[utoipa::path(
    post,
    path = "/geo",
    request_body = CreatePointDto,
    responses(
        (status = 201, description = "Point created", body = PointResponseDto,
            headers(("location" = String, description = "URL of the chat attached to the point"))),
        (status = 400, description = "Malformed body or validation error", body = ApiErrorResponse),
        (status = 500, description = "Storage failure", body = ApiErrorResponse)
    ),
    tag = "geo"
)]
pub async fn create_point(
    State(service): State<Arc<GeoService>>,
    AppJson(dto): AppJson<CreatePointDto>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<PointResponseDto>)> {
    let created = service.create_point(dto).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, created.location)],
        Json(created.point),
    ))
}

/// List points inside an area
#[utoipa::path(
    get,
    path = "/geo/{latitude},{longitude},{latitudeDelta},{longitudeDelta}",
    params(
        ("latitude" = f64, Path, description = "Center latitude (-90..90)"),
        ("longitude" = f64, Path, description = "Center longitude (-180..180)"),
        ("latitudeDelta" = f64, Path, description = "Half height of the box, >= 0"),
        ("longitudeDelta" = f64, Path, description = "Half width of the box, >= 0")
    ),
    responses(
        (status = 200, description = "Points inside the area", body = Vec<PointResponseDto>),
        (status = 400, description = "Non-numeric component or validation error", body = ApiErrorResponse),
        (status = 404, description = "Path does not have four components", body = ApiErrorResponse),
        (status = 500, description = "Storage failure", body = ApiErrorResponse)
    ),
    tag = "geo"
)]
pub async fn get_points_in_area(
    State(service): State<Arc<GeoService>>,
    AppPath(segment): AppPath<String>,
) -> Result<Json<Vec<PointResponseDto>>> {
    let area = Area::from_path_segment(&segment)?;
    let points = service.points_in_area(area).await?;
    Ok(Json(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::chats::dtos::ChatResponseDto;
    use crate::shared::test_helpers::{FailingChatStorage, FailingGeoStorage, TestContext};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_create_point_returns_created_with_location() {
        let ctx = TestContext::new();
        let server = ctx.server();

        let response = server
            .post("/geo")
            .json(&json!({"latitude": 10, "longitude": 20}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        let id = body["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());
        assert_eq!(
            body,
            json!({"id": id, "latitude": 10.0, "longitude": 20.0})
        );

        let location = response.header(header::LOCATION);
        let location = location.to_str().unwrap();
        assert!(location.starts_with("/chats/"));

        // The Location header resolves to the default chat of the new point
        let chat = server.get(location).await;
        chat.assert_status(StatusCode::OK);
        let chat: ChatResponseDto = chat.json();
        assert_eq!(chat.title, "No name");
        assert_eq!(chat.point_id.to_string(), id);
    }

    #[tokio::test]
    async fn test_create_point_out_of_range_is_validation_error() {
        let ctx = TestContext::new();
        let server = ctx.server();

        for body in [
            json!({"latitude": 90.5, "longitude": 0}),
            json!({"latitude": 0, "longitude": -180.5}),
        ] {
            let response = server.post("/geo").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert_eq!(body["message"], "Validation failed");
            assert_eq!(body["errors"].as_array().unwrap().len(), 1);
        }

        assert_eq!(ctx.store.point_count().await, 0);
    }

    #[tokio::test]
    async fn test_create_point_missing_fields_lists_each_field() {
        let ctx = TestContext::new();
        let server = ctx.server();

        let response = server.post("/geo").json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(
            body["errors"],
            json!([
                {"field": "latitude", "message": "Latitude is required"},
                {"field": "longitude", "message": "Longitude is required"}
            ])
        );
    }

    #[tokio::test]
    async fn test_create_point_malformed_json_is_bad_request() {
        let ctx = TestContext::new();
        let server = ctx.server();

        let response = server
            .post("/geo")
            .json(&json!({"latitude": "ten", "longitude": 20}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON data"));

        let response = server.post("/geo").text("{\"latitude\": ").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        assert_eq!(ctx.store.point_count().await, 0);
    }

    #[tokio::test]
    async fn test_create_point_chat_failure_is_opaque_server_error() {
        let ctx = TestContext::with_chat_storage(Arc::new(FailingChatStorage));
        let server = ctx.server();

        let response = server
            .post("/geo")
            .json(&json!({"latitude": 10, "longitude": 20}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["message"], "Storage error occurred");
        // Not rolled back
        assert_eq!(ctx.store.point_count().await, 1);
    }

    #[tokio::test]
    async fn test_get_points_in_area_returns_only_points_inside() {
        let ctx = TestContext::new();
        let server = ctx.server();

        for (latitude, longitude) in [(10.5, 20.5), (50.0, 50.0)] {
            server
                .post("/geo")
                .json(&json!({"latitude": latitude, "longitude": longitude}))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server.get("/geo/10,20,1,1").await;

        response.assert_status(StatusCode::OK);
        let points: Vec<PointResponseDto> = response.json();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].latitude, 10.5);
        assert_eq!(points[0].longitude, 20.5);
    }

    #[tokio::test]
    async fn test_get_points_in_area_inclusive_edges_and_fixture_set() {
        let ctx = TestContext::new();
        let server = ctx.server();

        let fixtures = [
            (0.0, 0.0, true),
            (2.0, 3.0, true),
            (-2.0, -3.0, true),
            (2.0001, 0.0, false),
            (0.0, -3.0001, false),
            (45.0, 90.0, false),
        ];
        for (latitude, longitude, _) in fixtures {
            server
                .post("/geo")
                .json(&json!({"latitude": latitude, "longitude": longitude}))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let points: Vec<PointResponseDto> = server.get("/geo/0,0,2,3").await.json();

        let expected: Vec<(f64, f64)> = fixtures
            .iter()
            .filter(|(_, _, inside)| *inside)
            .map(|(lat, lng, _)| (*lat, *lng))
            .collect();
        let actual: Vec<(f64, f64)> = points.iter().map(|p| (p.latitude, p.longitude)).collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_get_points_in_area_empty_result_is_empty_array() {
        let ctx = TestContext::new();
        let server = ctx.server();

        let response = server.get("/geo/-33.86,151.2,0.5,0.5").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[tokio::test]
    async fn test_get_points_in_area_negative_delta_is_validation_error() {
        let ctx = TestContext::with_geo_storage(Arc::new(FailingGeoStorage));
        let server = ctx.server();

        // A storage call would turn into a 500, so a 400 proves none happened
        for (path, field) in [
            ("/geo/10,20,-1,1", "latitudeDelta"),
            ("/geo/10,20,1,-1", "longitudeDelta"),
            ("/geo/91,20,1,1", "center.latitude"),
        ] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert_eq!(body["errors"][0]["field"], field, "{path}");
        }
    }

    #[tokio::test]
    async fn test_get_points_in_area_non_numeric_is_bad_request() {
        let ctx = TestContext::new();
        let server = ctx.server();

        let response = server.get("/geo/abc,0,1,1").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid latitude: 'abc' is not a number");
    }

    #[tokio::test]
    async fn test_get_points_in_area_wrong_arity_is_not_found() {
        let ctx = TestContext::new();
        let server = ctx.server();

        server
            .get("/geo/1,2,3")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_points_in_area_storage_failure_is_opaque() {
        let ctx = TestContext::with_geo_storage(Arc::new(FailingGeoStorage));
        let server = ctx.server();

        let response = server.get("/geo/10,20,1,1").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["message"], "Storage error occurred");
    }
}
