mod distance;
mod engine;
mod error;

pub use distance::{link_distance_km, Geodesic, Wgs84};
pub use engine::{adjusted_weight, recommend, score_device, working_point, Candidate, WorkingPoint};
pub use error::RecommendError;
