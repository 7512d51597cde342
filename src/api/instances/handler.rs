// Instance handlers
// Writes are validated and acknowledged but never applied to the catalog

use serde::Deserialize;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Response,
};
use tracing::{info, instrument, warn};

use crate::catalog::{Identity, Instance, Region};
use crate::config::state::AppState;
use crate::utils::response_handler::{json_response, ApiError};
use super::validation::{decode_body, parse_id, validate_create, validate_regions, MALFORMED_ID};

#[derive(Debug, Default, Deserialize)]
pub struct CreateInstanceRequest {
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Regions")]
    pub regions: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateInstanceRequest {
    #[serde(default, alias = "Regions")]
    pub regions: Option<Vec<String>>,
}

impl CreateInstanceRequest {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn regions(&self) -> &[String] {
        self.regions.as_deref().unwrap_or_default()
    }
}

impl UpdateInstanceRequest {
    pub fn regions(&self) -> &[String] {
        self.regions.as_deref().unwrap_or_default()
    }
}

/// Resolves the `{id}` segment; a segment axum cannot decode counts as malformed
fn instance_id(path: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    let Path(raw_id) = path.map_err(|rejection| {
        warn!("Failed to extract id segment: {}", rejection);
        ApiError::BadRequest(MALFORMED_ID)
    })?;

    parse_id(&raw_id)
}

fn region_list(regions: &[Region]) -> String {
    regions
        .iter()
        .map(Region::to_string)
        .collect::<Vec<String>>()
        .join(",")
}

/// Lists `{id, name}` of every instance in catalog order
#[instrument(name = "list_instances", skip(state))]
pub async fn list_instances_handler(
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let identities: Vec<&Identity> = state.catalog.identities();
    info!("Listing {} instances", identities.len());

    json_response(&identities)
}

/// Returns the full record of one instance
#[instrument(name = "get_instance", skip(state, path))]
pub async fn get_instance_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let id: i64 = instance_id(path)?;
    let instance: &Instance = state.catalog.find(id).ok_or(ApiError::NotFound)?;

    json_response(instance)
}

#[instrument(name = "create_instance", skip(state, body))]
pub async fn create_instance_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let request: CreateInstanceRequest = decode_body(&body)?;
    let regions: Vec<Region> = validate_create(&state.catalog, request.name(), request.regions())?;

    info!("Accepted creation of '{}' in [{}]", request.name(), region_list(&regions));
    Ok(StatusCode::OK)
}

/// Replaces the region list of an instance. Existence is checked before the body is read.
#[instrument(name = "update_instance", skip(state, path, body))]
pub async fn update_instance_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let id: i64 = instance_id(path)?;

    if state.catalog.find(id).is_none() {
        return Err(ApiError::NotFound);
    }

    let request: UpdateInstanceRequest = decode_body(&body)?;
    let regions: Vec<Region> = validate_regions(request.regions())?;

    info!("Accepted region update of instance {} to [{}]", id, region_list(&regions));
    Ok(StatusCode::OK)
}

#[instrument(name = "delete_instance", skip(state, path))]
pub async fn delete_instance_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id: i64 = instance_id(path)?;

    if state.catalog.find(id).is_none() {
        return Err(ApiError::NotFound);
    }

    info!("Accepted deletion of instance {}", id);
    Ok(StatusCode::OK)
}
