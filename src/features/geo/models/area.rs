use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::geo::models::Geo;

/// Query rectangle: a center plus per-axis half extents.
///
/// Matching is inclusive on every edge and does not wrap around the
/// antimeridian or the poles.
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct Area {
    #[validate(nested)]
    pub center: Geo,

    #[validate(range(min = 0.0, message = "Latitude delta must be non-negative"))]
    pub latitude_delta: f64,

    #[validate(range(min = 0.0, message = "Longitude delta must be non-negative"))]
    pub longitude_delta: f64,
}

/// Names of the comma separated components of the area path segment
const AREA_COMPONENTS: [&str; 4] = ["latitude", "longitude", "latitudeDelta", "longitudeDelta"];

impl Area {
    /// Parse `{latitude},{longitude},{latitudeDelta},{longitudeDelta}`.
    ///
    /// A segment without exactly four components is not an area route and
    /// yields `NotFound`; a component that is not a finite number yields
    /// `BadRequest`. Range checks are left to `validate`.
    pub fn from_path_segment(segment: &str) -> Result<Self> {
        let parts: Vec<&str> = segment.split(',').collect();
        if parts.len() != AREA_COMPONENTS.len() {
            return Err(AppError::NotFound(format!(
                "No route matches /geo/{}",
                segment
            )));
        }

        let mut values = [0.0_f64; 4];
        for ((value, raw), name) in values.iter_mut().zip(&parts).zip(AREA_COMPONENTS) {
            *value = parse_component(name, raw)?;
        }
        let [latitude, longitude, latitude_delta, longitude_delta] = values;

        Ok(Self {
            center: Geo::new(latitude, longitude),
            latitude_delta,
            longitude_delta,
        })
    }

    pub fn min_latitude(&self) -> f64 {
        self.center.latitude - self.latitude_delta
    }

    pub fn max_latitude(&self) -> f64 {
        self.center.latitude + self.latitude_delta
    }

    pub fn min_longitude(&self) -> f64 {
        self.center.longitude - self.longitude_delta
    }

    pub fn max_longitude(&self) -> f64 {
        self.center.longitude + self.longitude_delta
    }

    pub fn contains(&self, geo: &Geo) -> bool {
        (self.min_latitude()..=self.max_latitude()).contains(&geo.latitude)
            && (self.min_longitude()..=self.max_longitude()).contains(&geo.longitude)
    }
}

fn parse_component(name: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {}: '{}' is not a number", name, raw)))
}
