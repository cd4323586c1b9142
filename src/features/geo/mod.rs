//! Geo points feature.
//!
//! Points are coordinates clients drop on the map; each new point gets a
//! default chat anchored to it. Points are looked up by bounding box.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Name | Description |
//! |--------|----------|------|-------------|
//! | POST | `/geo` | `post-geo` | Create a point and its default chat |
//! | GET | `/geo/{latitude},{longitude},{latitudeDelta},{longitudeDelta}` | `get-geo` | Points inside an area |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::GeoService;
