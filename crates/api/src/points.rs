// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Depot point and structure operations.

use cocagne_domain::parse_point_id;
use cocagne_persistence::{DepotPointRow, Persistence};
use tracing::info;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    CreateDepotPointResponse, CreateStructureRequest, CreateStructureResponse, DepotPointInfo,
    DepotPointRequest, StructureInfo,
};
use crate::tours::require_tour;

fn point_info(row: DepotPointRow) -> DepotPointInfo {
    DepotPointInfo {
        point_id: row.point_id,
        nom: row.nom,
        adresse: row.adresse,
        latitude: row.latitude,
        longitude: row.longitude,
        structure_id: row.structure_id,
    }
}

/// Creates a depot point.
///
/// # Errors
///
/// Returns an error if the name is empty or persistence fails.
pub fn create_depot_point(
    persistence: &mut Persistence,
    request: DepotPointRequest,
) -> Result<CreateDepotPointResponse, ApiError> {
    validate_point_fields(&request)?;

    let point_id = persistence.create_depot_point(
        request.nom.trim(),
        request.adresse.trim(),
        request.latitude,
        request.longitude,
        request.structure_id,
    )?;

    info!(point_id, "Depot point created via API");

    Ok(CreateDepotPointResponse {
        point_id,
        message: String::from("Point de dépôt créé"),
    })
}

/// Retrieves a depot point by its textual ID.
///
/// # Errors
///
/// Returns an error if the ID is invalid, the point does not exist, or
/// persistence fails.
pub fn get_depot_point(
    persistence: &mut Persistence,
    raw_point_id: &str,
) -> Result<DepotPointInfo, ApiError> {
    let point_id = parse_point_id(raw_point_id).map_err(translate_domain_error)?;

    persistence
        .get_depot_point(point_id)?
        .map(point_info)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Depot point"),
            message: format!("Depot point {point_id} does not exist"),
        })
}

/// Lists all depot points, ordered by name.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_depot_points(persistence: &mut Persistence) -> Result<Vec<DepotPointInfo>, ApiError> {
    let rows = persistence.list_depot_points()?;
    Ok(rows.into_iter().map(point_info).collect())
}

/// Lists the depot points not yet assigned to a tour, ordered by name.
///
/// # Errors
///
/// Returns an error if the ID is invalid, the tour does not exist, or
/// persistence fails.
pub fn list_available_points(
    persistence: &mut Persistence,
    raw_tour_id: &str,
) -> Result<Vec<DepotPointInfo>, ApiError> {
    let tour = require_tour(persistence, raw_tour_id)?;
    let rows = persistence.list_available_points(tour.tournee_id)?;
    Ok(rows.into_iter().map(point_info).collect())
}

/// Updates a depot point.
///
/// # Errors
///
/// Returns an error if the ID is invalid, the point does not exist, the
/// fields are invalid, or persistence fails.
pub fn update_depot_point(
    persistence: &mut Persistence,
    raw_point_id: &str,
    request: DepotPointRequest,
) -> Result<DepotPointInfo, ApiError> {
    let point_id = parse_point_id(raw_point_id).map_err(translate_domain_error)?;
    validate_point_fields(&request)?;

    let updated = persistence.update_depot_point(
        point_id,
        request.nom.trim(),
        request.adresse.trim(),
        request.latitude,
        request.longitude,
        request.structure_id,
    )?;
    if updated == 0 {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Depot point"),
            message: format!("Depot point {point_id} does not exist"),
        });
    }

    info!(point_id, "Depot point updated via API");

    Ok(DepotPointInfo {
        point_id,
        nom: request.nom.trim().to_string(),
        adresse: request.adresse.trim().to_string(),
        latitude: request.latitude,
        longitude: request.longitude,
        structure_id: request.structure_id,
    })
}

/// Deletes a depot point and its membership rows.
///
/// # Errors
///
/// Returns an error if the ID is invalid, the point does not exist, or
/// persistence fails.
pub fn delete_depot_point(
    persistence: &mut Persistence,
    raw_point_id: &str,
) -> Result<(), ApiError> {
    let point_id = parse_point_id(raw_point_id).map_err(translate_domain_error)?;

    let deleted = persistence.delete_depot_point(point_id)?;
    if deleted == 0 {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Depot point"),
            message: format!("Depot point {point_id} does not exist"),
        });
    }

    info!(point_id, "Depot point deleted via API");
    Ok(())
}

/// Creates a structure.
///
/// # Errors
///
/// Returns an error if the name is empty or persistence fails.
pub fn create_structure(
    persistence: &mut Persistence,
    request: CreateStructureRequest,
) -> Result<CreateStructureResponse, ApiError> {
    if request.nom.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("nom"),
            message: String::from("Structure name must not be empty"),
        });
    }

    let structure_id = persistence.create_structure(request.nom.trim())?;

    Ok(CreateStructureResponse {
        structure_id,
        message: String::from("Structure créée"),
    })
}

/// Lists all structures, ordered by name.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_structures(persistence: &mut Persistence) -> Result<Vec<StructureInfo>, ApiError> {
    let rows = persistence.list_structures()?;
    Ok(rows
        .into_iter()
        .map(|row| StructureInfo {
            structure_id: row.structure_id,
            nom: row.nom,
        })
        .collect())
}

fn validate_point_fields(request: &DepotPointRequest) -> Result<(), ApiError> {
    if request.nom.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("nom"),
            message: String::from("Depot point name must not be empty"),
        });
    }
    if request.adresse.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("adresse"),
            message: String::from("Depot point address must not be empty"),
        });
    }
    if !(-90.0..=90.0).contains(&request.latitude) {
        return Err(ApiError::InvalidInput {
            field: String::from("latitude"),
            message: format!("Latitude {} is out of range", request.latitude),
        });
    }
    if !(-180.0..=180.0).contains(&request.longitude) {
        return Err(ApiError::InvalidInput {
            field: String::from("longitude"),
            message: format!("Longitude {} is out of range", request.longitude),
        });
    }
    Ok(())
}
