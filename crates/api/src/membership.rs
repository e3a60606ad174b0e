// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tour membership operations: listing, adding, removing, and moving
//! depot points within a tour.

use cocagne_domain::parse_point_id;
use cocagne_persistence::Persistence;
use tracing::info;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AddTourPointRequest, AddTourPointResponse, RemoveTourPointResponse, ReorderTourPointRequest,
    ReorderTourPointResponse, TourPointInfo,
};
use crate::tours::require_tour;

/// Lists the depot points of a tour in delivery order.
///
/// A tour with no points reports "not found" rather than an empty list,
/// matching what the planning screens expect.
///
/// # Errors
///
/// Returns an error if the ID is invalid, the tour does not exist or has
/// no points, or persistence fails.
pub fn list_tour_points(
    persistence: &mut Persistence,
    raw_tour_id: &str,
) -> Result<Vec<TourPointInfo>, ApiError> {
    let tour = require_tour(persistence, raw_tour_id)?;

    let members = persistence.list_tour_points(tour.tournee_id)?;
    if members.is_empty() {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Depot points"),
            message: format!("No depot points found for tour {}", tour.tournee_id),
        });
    }

    Ok(members
        .into_iter()
        .map(|(point, numero_ordre)| TourPointInfo {
            point_id: point.point_id,
            nom: point.nom,
            adresse: point.adresse,
            latitude: point.latitude,
            longitude: point.longitude,
            numero_ordre,
        })
        .collect())
}

/// Adds a depot point to a tour.
///
/// Idempotent: adding a point already on the tour changes nothing and
/// reports `added: false`. When no position is given the point takes
/// position 0; positions stay sparse and other members are never
/// renumbered.
///
/// # Errors
///
/// Returns an error if an ID is invalid, the tour or point does not
/// exist, or persistence fails.
pub fn add_tour_point(
    persistence: &mut Persistence,
    raw_tour_id: &str,
    request: AddTourPointRequest,
) -> Result<AddTourPointResponse, ApiError> {
    let tour = require_tour(persistence, raw_tour_id)?;
    let point_id =
        parse_point_id(&request.point_id.to_string()).map_err(translate_domain_error)?;

    persistence
        .get_depot_point(point_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Depot point"),
            message: format!("Depot point {point_id} does not exist"),
        })?;

    let position = request.numero_ordre.unwrap_or(0);

    let added = persistence.add_tour_point(tour.tournee_id, point_id, position)?;

    info!(
        tour_id = tour.tournee_id,
        point_id, added, "Tour membership add requested"
    );

    Ok(AddTourPointResponse {
        added,
        message: if added {
            String::from("Point ajouté à la tournée")
        } else {
            String::from("Point déjà présent sur la tournée")
        },
    })
}

/// Removes a depot point from a tour.
///
/// Removing a point that is not on the tour is a no-op reported as
/// `removed: false`.
///
/// # Errors
///
/// Returns an error if an ID is invalid, the tour does not exist, or
/// persistence fails.
pub fn remove_tour_point(
    persistence: &mut Persistence,
    raw_tour_id: &str,
    raw_point_id: &str,
) -> Result<RemoveTourPointResponse, ApiError> {
    let tour = require_tour(persistence, raw_tour_id)?;
    let point_id = parse_point_id(raw_point_id).map_err(translate_domain_error)?;

    let removed = persistence.remove_tour_point(tour.tournee_id, point_id)? > 0;

    info!(
        tour_id = tour.tournee_id,
        point_id, removed, "Tour membership removal requested"
    );

    Ok(RemoveTourPointResponse {
        removed,
        message: if removed {
            String::from("Point retiré de la tournée")
        } else {
            String::from("Point absent de la tournée")
        },
    })
}

/// Moves a depot point to a new position within a tour.
///
/// # Errors
///
/// Returns an error if an ID is invalid, the tour does not exist, the
/// point is not on the tour, or persistence fails.
pub fn reorder_tour_point(
    persistence: &mut Persistence,
    raw_tour_id: &str,
    request: ReorderTourPointRequest,
) -> Result<ReorderTourPointResponse, ApiError> {
    let tour = require_tour(persistence, raw_tour_id)?;
    let point_id =
        parse_point_id(&request.point_id.to_string()).map_err(translate_domain_error)?;

    let updated =
        persistence.set_tour_point_position(tour.tournee_id, point_id, request.numero_ordre)?;
    if updated == 0 {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Depot point"),
            message: format!(
                "Depot point {point_id} is not on tour {}",
                tour.tournee_id
            ),
        });
    }

    info!(
        tour_id = tour.tournee_id,
        point_id,
        position = request.numero_ordre,
        "Tour membership reordered"
    );

    Ok(ReorderTourPointResponse {
        message: String::from("Ordre mis à jour"),
    })
}
