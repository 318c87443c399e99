//! Great-circle distance for order discovery.
//!
//! Discovery keeps only candidate orders whose store lies within a fixed
//! radius of the observer. Either endpoint lacking coordinates yields the
//! "unreachable" sentinel (`f64::INFINITY`), which no finite radius ever
//! includes — so entities that failed geocoding simply never appear in
//! radius-filtered results.

use serde::{Deserialize, Serialize};

use crate::constants::EARTH_RADIUS_METERS;

/// A WGS-84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Haversine distance in meters between two optional coordinate pairs.
///
/// Returns `f64::INFINITY` when either endpoint is absent.
#[must_use]
pub fn distance(a: Option<Coordinates>, b: Option<Coordinates>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return f64::INFINITY;
    };

    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Whether two points are within `radius_meters` of each other.
/// Absent coordinates are never within any finite radius.
#[must_use]
pub fn within(a: Option<Coordinates>, b: Option<Coordinates>, radius_meters: f64) -> bool {
    distance(a, b) <= radius_meters
}
