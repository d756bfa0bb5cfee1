use super::error::RecommendError;
use crate::links::Site;

// WGS-84 ellipsoid, km
const WGS84_A: f64 = 6378.137;
const WGS84_F: f64 = 1.0 / 298.257_223_563;
const MEAN_RADIUS_KM: f64 = 6371.0088;

const MAX_ITERATIONS: usize = 200;
const CONVERGENCE: f64 = 1e-12;

/// Distance between two sites, in kilometres.
pub trait Geodesic {
    fn distance_km(&self, a: &Site, b: &Site) -> Result<f64, RecommendError>;
}

/// Ellipsoidal distance (Vincenty inverse formula).
#[derive(Debug, Clone, Copy, Default)]
pub struct Wgs84;

impl Geodesic for Wgs84 {
    fn distance_km(&self, a: &Site, b: &Site) -> Result<f64, RecommendError> {
        let (lat1, lon1) = coordinates(a)?;
        let (lat2, lon2) = coordinates(b)?;
        Ok(vincenty_km(lat1, lon1, lat2, lon2)
            .unwrap_or_else(|| haversine_km(lat1, lon1, lat2, lon2)))
    }
}

/// Link distance as used for scoring: geodesic, rounded to 2 decimals.
pub fn link_distance_km(
    geodesic: &dyn Geodesic,
    a: &Site,
    b: &Site,
) -> Result<f64, RecommendError> {
    geodesic.distance_km(a, b).map(round2)
}

fn coordinates(site: &Site) -> Result<(f64, f64), RecommendError> {
    let err = |reason: String| RecommendError::Coordinates {
        site: site.name.clone(),
        reason,
    };

    let lat: f64 = site
        .latitude
        .parse()
        .map_err(|_| err(format!("latitude '{}' is not a number", site.latitude)))?;
    let lon: f64 = site
        .longitude
        .parse()
        .map_err(|_| err(format!("longitude '{}' is not a number", site.longitude)))?;

    if !lat.is_finite() || lat.abs() > 90.0 {
        return Err(err(format!("latitude {} is out of range", lat)));
    }
    if !lon.is_finite() {
        return Err(err(format!("longitude {} is out of range", lon)));
    }
    Ok((lat, lon))
}

/// `None` when the iteration does not converge (nearly antipodal points).
fn vincenty_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Option<f64> {
    let b = WGS84_A * (1.0 - WGS84_F);
    let l = (lon2 - lon1).to_radians();
    let u1 = ((1.0 - WGS84_F) * lat1.to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * lat2.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            return Some(0.0);
        }
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos2_alpha = 1.0 - sin_alpha * sin_alpha;
        // Equatorial line: cos2_alpha == 0
        let cos_2sm = if cos2_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos2_alpha
        } else {
            0.0
        };
        let c = WGS84_F / 16.0 * cos2_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos2_alpha));

        let prev = lambda;
        lambda = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sm + c * cos_sigma * (-1.0 + 2.0 * cos_2sm * cos_2sm)));

        if (lambda - prev).abs() < CONVERGENCE {
            let u_sq = cos2_alpha * (WGS84_A * WGS84_A - b * b) / (b * b);
            let big_a =
                1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sm
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sm * cos_2sm)
                            - big_b / 6.0
                                * cos_2sm
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sm * cos_2sm)));
            return Some(b * big_a * (sigma - delta_sigma));
        }
    }
    None
}

fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    2.0 * MEAN_RADIUS_KM * h.sqrt().asin()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
