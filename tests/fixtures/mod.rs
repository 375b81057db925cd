//! Test fixtures for checkpoint-planner.
//!
//! Synthetic checkpoint sets with known geometry, so tour-length
//! assertions can be derived by hand or by brute force.

use checkpoint_planner::models::Checkpoint;

/// Builds a checkpoint at the given coordinate with the rest of the
/// record filled in with plausible defaults.
pub fn checkpoint(id: i64, number: u32, lat: f64, lng: f64) -> Checkpoint {
    Checkpoint {
        id,
        external_id: None,
        number,
        level: 1,
        lat,
        lng,
        registration: None,
        short_description: format!("Checkpoint {number}"),
        long_description: None,
        link_address: None,
        link_description: None,
    }
}

/// Four corners of a roughly 570 m by 670 m rectangle plus one point
/// just inside its southern edge.
///
/// The optimal closed tour walks the perimeter and picks the interior
/// point up between the two southern corners; anything else pays for
/// an extra crossing.
pub fn quadrilateral_with_interior() -> Vec<Checkpoint> {
    vec![
        checkpoint(1, 1, 59.0000, 18.000),
        checkpoint(2, 2, 59.0000, 18.010),
        checkpoint(3, 3, 59.0060, 18.010),
        checkpoint(4, 4, 59.0060, 18.000),
        checkpoint(5, 5, 59.0005, 18.005),
    ]
}

/// `n` checkpoints evenly spaced on a circle of roughly 1 km radius.
///
/// For a ring, the optimal tour is the ring itself, so the optimum is
/// the sum of consecutive chord lengths.
pub fn ring(n: u32) -> Vec<Checkpoint> {
    let center: (f64, f64) = (59.002, 18.005);
    let lat_radius = 0.009;
    let lng_radius = lat_radius / center.0.to_radians().cos();

    (0..n)
        .map(|k| {
            let angle = f64::from(k) / f64::from(n) * std::f64::consts::TAU;
            checkpoint(
                i64::from(k) + 1,
                k + 1,
                center.0 + lat_radius * angle.sin(),
                center.1 + lng_radius * angle.cos(),
            )
        })
        .collect()
}
