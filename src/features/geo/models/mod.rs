mod area;
mod point;

pub use area::Area;
pub use point::{Geo, NewPoint, Point};
