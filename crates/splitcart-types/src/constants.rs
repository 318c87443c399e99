//! System-wide constants and defaults.

/// Default window an order stays open for matching, in minutes.
pub const DEFAULT_EXPIRY_MINUTES: i64 = 30;

/// Radius within which order discovery returns candidates, in meters.
pub const DISCOVERY_RADIUS_METERS: f64 = 300.0;

/// Mean Earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
