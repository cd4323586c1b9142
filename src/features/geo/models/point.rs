use uuid::Uuid;
use validator::Validate;

use crate::features::geo::dtos::PointResponseDto;

/// A WGS84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct Geo {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

/// A point that has not been persisted yet and therefore has no id
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct NewPoint {
    #[validate(nested)]
    pub geo: Geo,
}

/// A persisted point
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub id: Uuid,
    pub geo: Geo,
}

impl Geo {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Point> for PointResponseDto {
    fn from(p: Point) -> Self {
        Self {
            id: p.id,
            latitude: p.geo.latitude,
            longitude: p.geo.longitude,
        }
    }
}
