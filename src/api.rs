//! Blocking HTTP client for the checkpoint service.

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::cache::{CacheConfig, HttpCache};
use crate::error::Error;
use crate::models::{Checkpoint, Location};
use crate::projection;

/// Public API root of the checkpoint service.
pub const DEFAULT_BASE_URL: &str = "https://www.orientering.se/api/v1";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Response cache; `None` hits the network every time.
    pub cache: Option<CacheConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            cache: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    client: reqwest::blocking::Client,
    cache: Option<HttpCache>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        let cache = config.cache.clone().map(HttpCache::new);

        Ok(Self {
            config,
            client,
            cache,
        })
    }

    /// Fetches every location the service offers.
    pub fn locations(&self) -> Result<Vec<Location>, Error> {
        let url = format!("{}/locations/", self.config.base_url);
        let locations: Vec<Location> = self.get_json("locations", &url)?;
        for location in &locations {
            projection::validate_wgs84(location.latitude, location.longitude)?;
        }
        Ok(locations)
    }

    /// Fetches the checkpoints of one location.
    pub fn checkpoints(&self, location_id: i64) -> Result<Vec<Checkpoint>, Error> {
        let url = format!(
            "{}/locations/{}/checkpoints/",
            self.config.base_url, location_id
        );
        let key = format!("checkpoints-{location_id}");
        let checkpoints: Vec<Checkpoint> = self.get_json(&key, &url)?;
        for checkpoint in &checkpoints {
            projection::validate_wgs84(checkpoint.lat, checkpoint.lng)?;
        }
        Ok(checkpoints)
    }

    /// Fetches `url` as text and deserializes it, consulting the cache
    /// first when one is configured. Bodies are cached only after they
    /// parse, and a failed cache write never fails the fetch.
    fn get_json<T: DeserializeOwned>(&self, key: &str, url: &str) -> Result<T, Error> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.load(key) {
                debug!("serving '{key}' from cache");
                return Ok(serde_json::from_str(&body)?);
            }
        }

        info!("GET {url}");
        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .text()?;
        let parsed = serde_json::from_str(&body)?;

        if let Some(cache) = &self.cache {
            if let Err(err) = cache.store(key, &body) {
                warn!("failed to cache '{key}': {err}");
            }
        }

        Ok(parsed)
    }
}

/// Resolves a location name to a single record.
///
/// Matching is case-insensitive but exact: the whole name must equal
/// the query, so "Alp" never matches "Alpha". Zero matches and several
/// matches are both lookup failures; the available names ride along
/// for the retry hint.
pub fn resolve_location<'a>(locations: &'a [Location], query: &str) -> Result<&'a Location, Error> {
    let wanted = query.to_lowercase();
    let mut matches = locations
        .iter()
        .filter(|location| location.name.to_lowercase() == wanted);

    match (matches.next(), matches.next()) {
        (Some(location), None) => Ok(location),
        _ => Err(Error::LookupNotFound {
            query: query.to_string(),
            available: locations
                .iter()
                .map(|location| location.name.clone())
                .collect(),
        }),
    }
}
