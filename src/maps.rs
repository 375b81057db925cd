//! Google Maps direction links for an ordered checkpoint list.

use reqwest::Url;

use crate::models::Checkpoint;

const BASE_URL: &str = "https://www.google.com/maps/dir/";

/// Google Maps accepts at most 10 waypoints per directions link.
pub const WAYPOINT_LIMIT: usize = 10;

/// Yields one walking-directions URL per group of up to
/// [`WAYPOINT_LIMIT`] checkpoints, in input order.
///
/// Groups are disjoint, so consecutive links share no endpoint. Pass
/// the optimized order; the links then read top to bottom like the
/// printed route.
pub fn directions_urls(checkpoints: &[Checkpoint]) -> impl Iterator<Item = Url> + '_ {
    checkpoints.chunks(WAYPOINT_LIMIT).map(directions_url)
}

fn directions_url(group: &[Checkpoint]) -> Url {
    // chunks() never yields an empty slice.
    let first = &group[0];
    let last = &group[group.len() - 1];
    let via: &[Checkpoint] = if group.len() > 1 {
        &group[1..group.len() - 1]
    } else {
        &[]
    };

    let params = [
        ("api", "1".to_string()),
        ("travelmode", "walking".to_string()),
        ("origin", coordinate(first)),
        ("origin_place_id", label(first)),
        ("destination", coordinate(last)),
        ("destination_place_id", label(last)),
        ("waypoints", join(via, coordinate)),
        ("waypoint_place_ids", join(via, label)),
    ];

    Url::parse_with_params(BASE_URL, &params).expect("base URL is statically valid")
}

fn coordinate(checkpoint: &Checkpoint) -> String {
    format!("{},{}", checkpoint.lat, checkpoint.lng)
}

fn label(checkpoint: &Checkpoint) -> String {
    format!("{}: {}", checkpoint.number, checkpoint.short_description)
}

fn join(checkpoints: &[Checkpoint], render: fn(&Checkpoint) -> String) -> String {
    checkpoints
        .iter()
        .map(render)
        .collect::<Vec<_>>()
        .join("|")
}
