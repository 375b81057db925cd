//! Pairwise ground-distance matrices.
//!
//! The canonical builder projects every waypoint onto a common UTM
//! plane and measures Euclidean distance there. A great-circle builder
//! is kept as an alternative backend with no projection preconditions;
//! it also serves as the accuracy reference for the projected one.

use tracing::debug;

use crate::error::ProjectionError;
use crate::projection;
use crate::traits::Waypoint;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Square, symmetric matrix of ground distances in whole meters.
///
/// `distance(i, j)` is the floored distance between waypoints `i` and
/// `j` of the sequence the matrix was built from. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    distances: Vec<Vec<i32>>,
}

impl DistanceMatrix {
    /// Builds the matrix over a common UTM plane.
    ///
    /// All points are projected into the first point's natural zone so
    /// the whole set shares one plane; sets spanning non-adjacent zones
    /// are rejected with [`ProjectionError::ZoneMismatch`].
    pub fn projected<W: Waypoint>(waypoints: &[W]) -> Result<Self, ProjectionError> {
        debug!(
            "building projected distance matrix for {} waypoints",
            waypoints.len()
        );

        let Some(first) = waypoints.first() else {
            return Ok(Self {
                distances: Vec::new(),
            });
        };

        let (lat, lng) = first.location();
        let zone = projection::natural_zone(lat, lng)?;

        let mut points = Vec::with_capacity(waypoints.len());
        for waypoint in waypoints {
            let (lat, lng) = waypoint.location();
            let natural = projection::natural_zone(lat, lng)?;
            if !projection::zones_adjacent(zone, natural) {
                return Err(ProjectionError::ZoneMismatch { a: zone, b: natural });
            }
            points.push(projection::project_to_zone(lat, lng, zone)?);
        }

        Ok(Self::build(points.len(), |i, j| points[i].distance(&points[j])))
    }

    /// Builds the matrix from great-circle distances.
    pub fn great_circle<W: Waypoint>(waypoints: &[W]) -> Self {
        debug!(
            "building great-circle distance matrix for {} waypoints",
            waypoints.len()
        );
        Self::build(waypoints.len(), |i, j| {
            haversine_m(waypoints[i].location(), waypoints[j].location())
        })
    }

    fn build(n: usize, distance: impl Fn(usize, usize) -> f64) -> Self {
        let mut distances = vec![vec![0; n]; n];
        for i in 0..n {
            for j in i + 1..n {
                let meters = distance(i, j).floor() as i32;
                distances[i][j] = meters;
                distances[j][i] = meters;
            }
        }
        Self { distances }
    }

    /// Wraps pre-computed rows, e.g. from an external matrix source.
    ///
    /// Rows must form a square matrix; symmetry is the caller's
    /// responsibility.
    pub fn from_rows(distances: Vec<Vec<i32>>) -> Self {
        debug_assert!(distances.iter().all(|row| row.len() == distances.len()));
        Self { distances }
    }

    /// Number of waypoints the matrix covers.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance in meters between waypoints `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> i32 {
        self.distances[i][j]
    }

    /// Raw rows, for diagnostics.
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.distances
    }
}

/// Great-circle distance in meters between two (lat, lng) pairs.
fn haversine_m(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    // Central Uppsala, a few hundred meters to a few kilometers apart.
    const POINTS: &[(f64, f64)] = &[
        (59.8586, 17.6389),
        (59.8601, 17.6447),
        (59.8498, 17.6412),
        (59.8660, 17.6230),
    ];

    #[test]
    fn test_projected_matrix_symmetric_zero_diagonal() {
        let matrix = DistanceMatrix::projected(POINTS).unwrap();
        assert_eq!(matrix.len(), POINTS.len());
        for i in 0..matrix.len() {
            assert_eq!(matrix.distance(i, i), 0, "Diagonal should be zero");
            for j in 0..matrix.len() {
                assert_eq!(
                    matrix.distance(i, j),
                    matrix.distance(j, i),
                    "Matrix should be symmetric"
                );
                assert!(matrix.distance(i, j) >= 0);
            }
        }
    }

    #[test]
    fn test_great_circle_matrix_symmetric_zero_diagonal() {
        let matrix = DistanceMatrix::great_circle(POINTS);
        for i in 0..matrix.len() {
            assert_eq!(matrix.distance(i, i), 0);
            for j in 0..matrix.len() {
                assert_eq!(matrix.distance(i, j), matrix.distance(j, i));
            }
        }
    }

    #[test]
    fn test_projected_tracks_great_circle_within_a_few_percent() {
        let projected = DistanceMatrix::projected(POINTS).unwrap();
        let reference = DistanceMatrix::great_circle(POINTS);
        for i in 0..POINTS.len() {
            for j in 0..POINTS.len() {
                if i == j {
                    continue;
                }
                let p = f64::from(projected.distance(i, j));
                let r = f64::from(reference.distance(i, j));
                let relative = (p - r).abs() / r;
                assert!(
                    relative < 0.03,
                    "pair ({i}, {j}): projected {p} m vs great-circle {r} m"
                );
            }
        }
    }

    #[test]
    fn test_known_distance_floored_to_meters() {
        // Uppsala cathedral to the castle, roughly 600 m apart.
        let points = [(59.8586, 17.6324), (59.8536, 17.6355)];
        let matrix = DistanceMatrix::projected(&points).unwrap();
        let d = matrix.distance(0, 1);
        assert!((450..700).contains(&d), "got {d} m");
    }

    #[test]
    fn test_single_waypoint_is_zero_matrix() {
        let matrix = DistanceMatrix::projected(&[(59.86, 17.64)]).unwrap();
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.distance(0, 0), 0);
    }

    #[test]
    fn test_empty_input_is_empty_matrix() {
        let matrix = DistanceMatrix::projected::<(f64, f64)>(&[]).unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_adjacent_zone_set_shares_first_points_zone() {
        // Either side of the 12E boundary between zones 32 and 33.
        let points = [(57.0, 11.9), (57.0, 12.1)];
        let matrix = DistanceMatrix::projected(&points).unwrap();
        let d = f64::from(matrix.distance(0, 1));
        // ~0.2 degrees of longitude at 57N is roughly 12 km.
        assert!((10_000.0..14_000.0).contains(&d), "got {d} m");
    }

    #[test]
    fn test_non_adjacent_zones_rejected() {
        // Stockholm and Lisbon are nowhere near one UTM plane.
        let points = [(59.33, 18.07), (38.72, -9.14)];
        let err = DistanceMatrix::projected(&points).unwrap_err();
        assert!(matches!(err, ProjectionError::ZoneMismatch { .. }));
    }

    #[test]
    fn test_invalid_coordinate_propagates() {
        let points = [(59.33, 18.07), (89.0, 18.07)];
        let err = DistanceMatrix::projected(&points).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidCoordinate { .. }));
    }
}
