//! Crate error types.

use thiserror::Error;

/// Errors produced while planning a checkpoint tour.
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no unique location named '{query}'")]
    LookupNotFound {
        query: String,
        /// Every name the service offers, for the retry hint.
        available: Vec<String>,
    },

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error("no feasible tour found")]
    NoSolution,

    #[error("'{location}' has no checkpoints left to visit")]
    NoCheckpoints { location: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the planar projection.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("coordinate ({lat}, {lng}) is outside the projectable range")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("checkpoints span non-adjacent projection zones {a} and {b}")]
    ZoneMismatch { a: u8, b: u8 },
}
