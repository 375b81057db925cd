//! Typed records for the two checkpoint-service resources.
//!
//! These are plain immutable data carriers. Deserialization rejects
//! missing required fields; coordinate range checks happen in the API
//! client so a bad record fails the run before any optimization starts.

use serde::Deserialize;

use crate::traits::Waypoint;

/// A single control point to visit.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Checkpoint {
    pub id: i64,
    #[serde(default)]
    pub external_id: Option<serde_json::Value>,
    pub number: u32,
    pub level: u32,
    pub lat: f64,
    pub lng: f64,
    /// Free-form registration metadata; shape varies by project.
    #[serde(default)]
    pub registration: Option<serde_json::Value>,
    pub short_description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub link_address: Option<String>,
    #[serde(default)]
    pub link_description: Option<String>,
}

impl Waypoint for Checkpoint {
    fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// A contest area offering checkpoints. Resolves a human-readable name
/// to the id the checkpoint resource is keyed by.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Location {
    pub id: i64,
    #[serde(default)]
    pub external_id: Option<i64>,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub projects: Vec<Project>,
}

impl Waypoint for Location {
    fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Contest period metadata attached to a location.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub start_date: String,
    pub finish_date: String,
    pub contract_start_date: String,
    pub contract_finish_date: String,
}
