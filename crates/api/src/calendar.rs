// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tour calendar record operations and the shared calendar.

use cocagne_domain::{CalendarPatch, TourStatus, format_iso_date, parse_iso_date};
use cocagne_persistence::{CALENDAR_KIND_HOLIDAY, CALENDAR_KIND_OPEN_WEEK, Persistence};
use time::Date;
use tracing::info;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AddCalendarDateRequest, AddCalendarDateResponse, ClearTourCalendarResponse, TourInfo,
    UpdateTourCalendarRequest, UpdateTourCalendarResponse,
};
use crate::tours::{require_tour, tour_info};

/// Retrieves the calendar record of a tour.
///
/// # Errors
///
/// Returns an error if the ID is invalid, the tour does not exist, or
/// persistence fails.
pub fn get_tour_calendar(
    persistence: &mut Persistence,
    raw_tour_id: &str,
) -> Result<TourInfo, ApiError> {
    let tour = require_tour(persistence, raw_tour_id)?;
    Ok(tour_info(&tour))
}

/// Applies a partial update to the calendar record of a tour.
///
/// The patch must carry at least one field. Fields absent from the patch
/// keep their stored values, and the effective preparation date must stay
/// strictly before the effective delivery date.
///
/// # Errors
///
/// Returns an error if the ID is invalid, the tour does not exist, the
/// patch is empty or violates the date ordering, or persistence fails.
pub fn update_tour_calendar(
    persistence: &mut Persistence,
    raw_tour_id: &str,
    request: UpdateTourCalendarRequest,
) -> Result<UpdateTourCalendarResponse, ApiError> {
    let tour = require_tour(persistence, raw_tour_id)?;

    let patch = CalendarPatch {
        preparation_date: request
            .jour_preparation
            .as_deref()
            .map(parse_iso_date)
            .transpose()
            .map_err(translate_domain_error)?,
        delivery_date: request
            .jour_livraison
            .as_deref()
            .map(parse_iso_date)
            .transpose()
            .map_err(translate_domain_error)?,
        status: request.statut_tournee.as_deref().map(TourStatus::from_label),
    };

    let stored_preparation = parse_stored_date(tour.jour_preparation.as_deref())?;
    let stored_delivery = parse_stored_date(tour.jour_livraison.as_deref())?;

    patch
        .validate_against(stored_preparation, stored_delivery)
        .map_err(translate_domain_error)?;

    // Merge the patch with the stored record, then write all fields at once.
    let merged_preparation = patch
        .preparation_date
        .map_or(tour.jour_preparation.clone(), |d| Some(format_iso_date(d)));
    let merged_delivery = patch
        .delivery_date
        .map_or(tour.jour_livraison.clone(), |d| Some(format_iso_date(d)));
    let merged_status = patch
        .status
        .map_or(tour.statut.clone(), |s| s.as_label().to_string());

    persistence.update_tour_calendar(
        tour.tournee_id,
        merged_preparation.as_deref(),
        merged_delivery.as_deref(),
        &merged_status,
    )?;

    info!(tour_id = tour.tournee_id, "Tour calendar updated via API");

    Ok(UpdateTourCalendarResponse {
        tournee: TourInfo {
            tournee_id: tour.tournee_id,
            jour_preparation: merged_preparation,
            jour_livraison: merged_delivery,
            statut_tournee: merged_status,
        },
        message: String::from("Calendrier mis à jour"),
    })
}

/// Clears the calendar record of a tour and resets its status.
///
/// # Errors
///
/// Returns an error if the ID is invalid, the tour does not exist, or
/// persistence fails.
pub fn clear_tour_calendar(
    persistence: &mut Persistence,
    raw_tour_id: &str,
) -> Result<ClearTourCalendarResponse, ApiError> {
    let tour = require_tour(persistence, raw_tour_id)?;

    persistence.clear_tour_calendar(tour.tournee_id, TourStatus::Preparee.as_label())?;

    info!(tour_id = tour.tournee_id, "Tour calendar cleared via API");

    Ok(ClearTourCalendarResponse {
        tournee_id: tour.tournee_id,
        message: String::from("Calendrier réinitialisé"),
    })
}

/// Lists the open-week marker dates of the shared calendar.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_open_weeks(persistence: &mut Persistence) -> Result<Vec<String>, ApiError> {
    Ok(persistence.list_calendar_dates(CALENDAR_KIND_OPEN_WEEK)?)
}

/// Lists the holiday dates of the shared calendar.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn list_holidays(persistence: &mut Persistence) -> Result<Vec<String>, ApiError> {
    Ok(persistence.list_calendar_dates(CALENDAR_KIND_HOLIDAY)?)
}

/// Records a date in the shared calendar.
///
/// # Errors
///
/// Returns an error if the date is malformed, the kind is unknown, or
/// persistence fails.
pub fn add_calendar_date(
    persistence: &mut Persistence,
    request: AddCalendarDateRequest,
) -> Result<AddCalendarDateResponse, ApiError> {
    let date = parse_iso_date(&request.date).map_err(translate_domain_error)?;

    if request.kind != CALENDAR_KIND_OPEN_WEEK && request.kind != CALENDAR_KIND_HOLIDAY {
        return Err(ApiError::InvalidInput {
            field: String::from("type"),
            message: format!(
                "Unknown calendar kind '{}'. Expected '{CALENDAR_KIND_OPEN_WEEK}' or '{CALENDAR_KIND_HOLIDAY}'",
                request.kind
            ),
        });
    }

    let entry_id = persistence.add_calendar_date(&format_iso_date(date), &request.kind)?;

    Ok(AddCalendarDateResponse {
        entry_id,
        message: String::from("Date enregistrée"),
    })
}

/// Loads the shared calendar as parsed dates for the eligibility rules.
///
/// # Errors
///
/// Returns an error if a stored date fails to parse or persistence fails.
pub(crate) fn load_reference_dates(
    persistence: &mut Persistence,
) -> Result<(Vec<Date>, Vec<Date>), ApiError> {
    let holidays = persistence
        .list_calendar_dates(CALENDAR_KIND_HOLIDAY)?
        .iter()
        .map(|d| parse_iso_date(d))
        .collect::<Result<Vec<Date>, _>>()
        .map_err(translate_domain_error)?;

    let open_weeks = persistence
        .list_calendar_dates(CALENDAR_KIND_OPEN_WEEK)?
        .iter()
        .map(|d| parse_iso_date(d))
        .collect::<Result<Vec<Date>, _>>()
        .map_err(translate_domain_error)?;

    Ok((holidays, open_weeks))
}

fn parse_stored_date(value: Option<&str>) -> Result<Option<Date>, ApiError> {
    value
        .map(parse_iso_date)
        .transpose()
        .map_err(|e| ApiError::Internal {
            message: format!("Stored date is malformed: {e}"),
        })
}
