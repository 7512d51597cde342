// Request validation for the instance endpoints
// Each check returns on the first fault it finds

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::catalog::{Catalog, Region};
use crate::utils::response_handler::ApiError;

pub const MAX_REGIONS: usize = 2;

pub const EMBEDDED_SEPARATOR: &str = "Not Found";
pub const MISSING_ID: &str = "Missing id parameter";
pub const MALFORMED_ID: &str = "Id parameter malformed";
pub const FAILED_TO_READ_BODY: &str = "Failed to read body";
pub const NAME_EXISTS: &str = "Name already exists";
pub const NO_REGION: &str = "No region provided";
pub const TOO_MANY_REGIONS: &str = "Too many regions provided";
pub const INVALID_REGION: &str = "Invalid region provided";

/// Parses the path segment following `/instances/` as a signed 64-bit id.
///
/// Negative ids are well formed; they simply never match a catalog entry.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    if raw.contains('/') {
        return Err(ApiError::BadRequest(EMBEDDED_SEPARATOR));
    }

    if raw.is_empty() {
        return Err(ApiError::BadRequest(MISSING_ID));
    }

    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest(MALFORMED_ID))
}

pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|err| {
        warn!("Failed to decode request body: {}", err);
        ApiError::BadRequest(FAILED_TO_READ_BODY)
    })
}

/// Checks cardinality first, then membership
pub fn validate_regions(regions: &[String]) -> Result<Vec<Region>, ApiError> {
    if regions.is_empty() {
        return Err(ApiError::BadRequest(NO_REGION));
    }

    if regions.len() > MAX_REGIONS {
        return Err(ApiError::BadRequest(TOO_MANY_REGIONS));
    }

    regions
        .iter()
        .map(|region| Region::parse(region).ok_or(ApiError::BadRequest(INVALID_REGION)))
        .collect()
}

/// Name uniqueness precedes the region checks
pub fn validate_create(catalog: &Catalog, name: &str, regions: &[String]) -> Result<Vec<Region>, ApiError> {
    if catalog.name_taken(name) {
        return Err(ApiError::BadRequest(NAME_EXISTS));
    }

    validate_regions(regions)
}
