//! WGS84 to UTM planar projection.
//!
//! Checkpoint sets are regional, so Euclidean distance on a common UTM
//! plane approximates ground distance to well under a percent at far
//! lower cost than geodesic evaluation.

use crate::error::ProjectionError;

/// UTM latitude band limits; the polar caps are not projectable.
const MIN_LATITUDE: f64 = -80.0;
const MAX_LATITUDE: f64 = 84.0;

/// A point on the UTM plane, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub easting: f64,
    pub northing: f64,
    pub zone: u8,
}

impl ProjectedPoint {
    /// Planar Euclidean distance to another point on the same plane.
    pub fn distance(&self, other: &ProjectedPoint) -> f64 {
        let de = self.easting - other.easting;
        let dn = self.northing - other.northing;
        (de * de + dn * dn).sqrt()
    }
}

/// Projects a WGS84 coordinate into its natural UTM zone.
pub fn project(lat: f64, lng: f64) -> Result<ProjectedPoint, ProjectionError> {
    let zone = natural_zone(lat, lng)?;
    project_to_zone(lat, lng, zone)
}

/// Projects a WGS84 coordinate into an explicit UTM zone.
///
/// Used to keep a whole checkpoint set on one plane when it straddles a
/// zone boundary.
pub fn project_to_zone(lat: f64, lng: f64, zone: u8) -> Result<ProjectedPoint, ProjectionError> {
    validate_wgs84(lat, lng)?;
    let (northing, easting, _convergence) = utm::to_utm_wgs84(lat, lng, zone);
    Ok(ProjectedPoint {
        easting,
        northing,
        zone,
    })
}

/// The UTM zone number the coordinate naturally falls in.
pub fn natural_zone(lat: f64, lng: f64) -> Result<u8, ProjectionError> {
    validate_wgs84(lat, lng)?;
    Ok(utm::lat_lon_to_zone_number(lat, lng))
}

/// Rejects coordinates outside geographic bounds or inside the polar
/// exclusion band.
pub fn validate_wgs84(lat: f64, lng: f64) -> Result<(), ProjectionError> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(ProjectionError::InvalidCoordinate { lat, lng });
    }
    Ok(())
}

/// Whether two zone numbers are the same or adjacent (zone 60 wraps
/// around to zone 1).
pub fn zones_adjacent(a: u8, b: u8) -> bool {
    let diff = a.abs_diff(b);
    diff <= 1 || diff == 59
}
