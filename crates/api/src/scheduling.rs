// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delivery date proposals for a tour.

use cocagne_domain::{
    StopReason, format_iso_date, generate_proposed_dates, parse_iso_date, validate_frequency,
};
use cocagne_persistence::Persistence;
use time::{Date, OffsetDateTime};
use tracing::info;

use crate::calendar::load_reference_dates;
use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{ProposeDatesRequest, ProposeDatesResponse};
use crate::tours::require_tour;

/// Generates proposed delivery dates for a tour.
///
/// Candidates are spaced exactly `frequence` days apart from the start
/// date and checked against the shared calendar. When the request carries
/// no start date the run starts from the current day. Dates already
/// committed to any tour are excluded, so two tours never get the same
/// proposal.
///
/// # Errors
///
/// Returns an error if the tour does not exist, the start date or
/// frequency is invalid, or persistence fails.
pub fn propose_delivery_dates(
    persistence: &mut Persistence,
    raw_tour_id: &str,
    request: ProposeDatesRequest,
) -> Result<ProposeDatesResponse, ApiError> {
    let tour = require_tour(persistence, raw_tour_id)?;

    let start = match request.date_debut.as_deref() {
        Some(raw) => parse_iso_date(raw).map_err(translate_domain_error)?,
        None => OffsetDateTime::now_utc().date(),
    };
    let frequency = validate_frequency(request.frequence).map_err(translate_domain_error)?;

    let (holidays, open_weeks) = load_reference_dates(persistence)?;
    let excluded = load_planned_dates(persistence)?;

    let proposals = generate_proposed_dates(start, frequency, &holidays, &open_weeks, &excluded)
        .map_err(translate_domain_error)?;

    info!(
        tour_id = tour.tournee_id,
        proposed = proposals.dates.len(),
        "Delivery date proposals generated"
    );

    Ok(ProposeDatesResponse {
        dates: proposals.dates.iter().copied().map(format_iso_date).collect(),
        epuise: proposals.is_exhausted(),
        motif_arret: stop_reason_label(proposals.stop_reason).to_string(),
    })
}

/// Collects every date already committed to a tour calendar.
///
/// Both preparation and delivery dates count: a day spent preparing one
/// tour is not offered as a delivery day for another.
fn load_planned_dates(persistence: &mut Persistence) -> Result<Vec<Date>, ApiError> {
    let mut planned = Vec::new();
    for (_, preparation, delivery) in persistence.list_tour_dates()? {
        if let Some(date) = preparation {
            planned.push(parse_iso_date(&date).map_err(translate_domain_error)?);
        }
        if let Some(date) = delivery {
            planned.push(parse_iso_date(&date).map_err(translate_domain_error)?);
        }
    }
    Ok(planned)
}

const fn stop_reason_label(reason: StopReason) -> &'static str {
    match reason {
        StopReason::HorizonReached => "horizon",
        StopReason::CapReached => "plafond",
        StopReason::ConsecutiveMisses => "echecs_consecutifs",
    }
}
