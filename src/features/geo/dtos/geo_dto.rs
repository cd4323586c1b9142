use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::geo::models::{Geo, NewPoint};

/// Request DTO for creating a point
///
/// Both coordinates are optional at the serde level so that a missing field
/// is reported as a field validation error rather than a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePointDto {
    #[validate(
        required(message = "Latitude is required"),
        range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90")
    )]
    #[schema(minimum = -90.0, maximum = 90.0, example = 10.0)]
    pub latitude: Option<f64>,

    #[validate(
        required(message = "Longitude is required"),
        range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180")
    )]
    #[schema(minimum = -180.0, maximum = 180.0, example = 20.0)]
    pub longitude: Option<f64>,
}

impl CreatePointDto {
    /// Validate the request and turn it into an unpersisted point
    pub fn into_new_point(self) -> Result<NewPoint> {
        self.validate()?;

        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(NewPoint {
                geo: Geo::new(latitude, longitude),
            }),
            // `required` already rejected this case
            _ => Err(AppError::Internal(
                "validated point is missing a coordinate".to_string(),
            )),
        }
    }
}

/// Response DTO for a persisted point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointResponseDto {
    pub id: Uuid,
    #[schema(example = 10.0)]
    pub latitude: f64,
    #[schema(example = 20.0)]
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(value: serde_json::Value) -> CreatePointDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_into_new_point() {
        let point = dto(json!({"latitude": 10, "longitude": 20}))
            .into_new_point()
            .unwrap();
        assert_eq!(point.geo, Geo::new(10.0, 20.0));
    }

    #[test]
    fn test_missing_fields_are_required_errors() {
        match dto(json!({})).into_new_point() {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].field, "latitude");
                assert_eq!(errors[0].message, "Latitude is required");
                assert_eq!(errors[1].field, "longitude");
                assert_eq!(errors[1].message, "Longitude is required");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_coordinates() {
        match dto(json!({"latitude": -90.01, "longitude": 180})).into_new_point() {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "latitude");
                assert_eq!(errors[0].message, "Latitude must be between -90 and 90");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_null_is_treated_as_missing() {
        assert!(matches!(
            dto(json!({"latitude": null, "longitude": 1})).into_new_point(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_point_response_serializes_camel_case() {
        let id = Uuid::now_v7();
        let body = serde_json::to_value(PointResponseDto {
            id,
            latitude: 10.0,
            longitude: 20.0,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"id": id.to_string(), "latitude": 10.0, "longitude": 20.0})
        );
    }
}
