// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tour creation, listing, and lookup.

use cocagne_domain::{TourStatus, parse_iso_date, parse_tour_id};
use cocagne_persistence::{Persistence, TourRow};
use tracing::info;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{CreateTourRequest, CreateTourResponse, TourDatesInfo, TourInfo};

pub(crate) fn tour_info(row: &TourRow) -> TourInfo {
    TourInfo {
        tournee_id: row.tournee_id,
        jour_preparation: row.jour_preparation.clone(),
        jour_livraison: row.jour_livraison.clone(),
        statut_tournee: row.statut.clone(),
    }
}

/// Looks up a tour by its textual ID, resolving missing tours to 404.
pub(crate) fn require_tour(
    persistence: &mut Persistence,
    raw_tour_id: &str,
) -> Result<TourRow, ApiError> {
    let tour_id = parse_tour_id(raw_tour_id).map_err(translate_domain_error)?;

    persistence
        .get_tour(tour_id)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Tour"),
            message: format!("Tour {tour_id} does not exist"),
        })
}

/// Creates a tour.
///
/// Dates, when present, must be valid ISO-8601 and the preparation date
/// must fall strictly before the delivery date.
///
/// # Errors
///
/// Returns an error if a date is malformed, the date order is violated,
/// or persistence fails.
pub fn create_tour(
    persistence: &mut Persistence,
    request: CreateTourRequest,
) -> Result<CreateTourResponse, ApiError> {
    let preparation = request
        .jour_preparation
        .as_deref()
        .map(parse_iso_date)
        .transpose()
        .map_err(translate_domain_error)?;
    let delivery = request
        .jour_livraison
        .as_deref()
        .map(parse_iso_date)
        .transpose()
        .map_err(translate_domain_error)?;

    if let (Some(preparation), Some(delivery)) = (preparation, delivery)
        && preparation >= delivery
    {
        return Err(translate_domain_error(
            cocagne_domain::DomainError::PreparationNotBeforeDelivery {
                preparation,
                delivery,
            },
        ));
    }

    let status = request
        .statut_tournee
        .as_deref()
        .map_or(TourStatus::Preparee, TourStatus::from_label);

    let tournee_id = persistence.create_tour(
        request.jour_preparation.as_deref(),
        request.jour_livraison.as_deref(),
        status.as_label(),
    )?;

    info!(tournee_id, "Tour created via API");

    Ok(CreateTourResponse {
        tournee_id,
        message: String::from("Tournée créée"),
    })
}

/// Lists all tours.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_tours(persistence: &mut Persistence) -> Result<Vec<TourInfo>, ApiError> {
    let rows = persistence.list_tours()?;
    Ok(rows.iter().map(tour_info).collect())
}

/// Lists the planned dates of every tour, for the planning overview.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_tour_dates(persistence: &mut Persistence) -> Result<Vec<TourDatesInfo>, ApiError> {
    let rows = persistence.list_tour_dates()?;
    Ok(rows
        .into_iter()
        .map(
            |(tournee_id, jour_preparation, jour_livraison)| TourDatesInfo {
                tournee_id,
                jour_preparation,
                jour_livraison,
            },
        )
        .collect())
}

/// Deletes a tour and its membership rows.
///
/// # Errors
///
/// Returns an error if the ID is invalid, the tour does not exist, or
/// persistence fails.
pub fn delete_tour(persistence: &mut Persistence, raw_tour_id: &str) -> Result<(), ApiError> {
    let tour = require_tour(persistence, raw_tour_id)?;
    persistence.delete_tour(tour.tournee_id)?;
    info!(tour_id = tour.tournee_id, "Tour deleted via API");
    Ok(())
}
