// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.
//!
//! Field names follow the stored French vocabulary (`jour_preparation`,
//! `numero_ordre`, ...) so payloads read the same as the database and the
//! planning sheets the growers already use.

use serde::{Deserialize, Serialize};

/// A tour as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourInfo {
    /// The tour ID.
    pub tournee_id: i64,
    /// The preparation date (ISO-8601), if planned.
    pub jour_preparation: Option<String>,
    /// The delivery date (ISO-8601), if planned.
    pub jour_livraison: Option<String>,
    /// The tour status label.
    pub statut_tournee: String,
}

/// Request to create a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTourRequest {
    /// Optional preparation date (ISO-8601).
    pub jour_preparation: Option<String>,
    /// Optional delivery date (ISO-8601).
    pub jour_livraison: Option<String>,
    /// Optional initial status label; defaults to `préparée`.
    pub statut_tournee: Option<String>,
}

/// Response after creating a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTourResponse {
    /// The generated tour ID.
    pub tournee_id: i64,
    /// A success message.
    pub message: String,
}

/// Request to update the calendar record of a tour.
///
/// At least one field must be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTourCalendarRequest {
    /// New preparation date (ISO-8601).
    pub jour_preparation: Option<String>,
    /// New delivery date (ISO-8601).
    pub jour_livraison: Option<String>,
    /// New status label.
    pub statut_tournee: Option<String>,
}

/// Response after updating a tour calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTourCalendarResponse {
    /// The tour after the update.
    pub tournee: TourInfo,
    /// A success message.
    pub message: String,
}

/// Response after clearing a tour calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearTourCalendarResponse {
    /// The tour ID.
    pub tournee_id: i64,
    /// A success message.
    pub message: String,
}

/// Planned dates of one tour, for the planning overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourDatesInfo {
    /// The tour ID.
    pub tournee_id: i64,
    /// The preparation date (ISO-8601), if planned.
    pub jour_preparation: Option<String>,
    /// The delivery date (ISO-8601), if planned.
    pub jour_livraison: Option<String>,
}

/// A depot point as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepotPointInfo {
    /// The depot point ID.
    pub point_id: i64,
    /// The point name.
    pub nom: String,
    /// The street address.
    pub adresse: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// The owning structure, if any.
    pub structure_id: Option<i64>,
}

/// A depot point on a tour, with its delivery position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourPointInfo {
    /// The depot point ID.
    pub point_id: i64,
    /// The point name.
    pub nom: String,
    /// The street address.
    pub adresse: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// The position of the point within the tour.
    pub numero_ordre: i32,
}

/// Request to add a depot point to a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTourPointRequest {
    /// The depot point ID.
    pub point_id: i64,
    /// Optional position; defaults to 0.
    pub numero_ordre: Option<i32>,
}

/// Response after adding a depot point to a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTourPointResponse {
    /// `true` when a membership row was created, `false` when the point
    /// was already on the tour.
    pub added: bool,
    /// A success message.
    pub message: String,
}

/// Response after removing a depot point from a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveTourPointResponse {
    /// `true` when a membership row was deleted.
    pub removed: bool,
    /// A success message.
    pub message: String,
}

/// Request to move a depot point within a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderTourPointRequest {
    /// The depot point ID.
    pub point_id: i64,
    /// The new position.
    pub numero_ordre: i32,
}

/// Response after moving a depot point within a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderTourPointResponse {
    /// A success message.
    pub message: String,
}

/// Request to create or update a depot point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepotPointRequest {
    /// The point name.
    pub nom: String,
    /// The street address.
    pub adresse: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// The owning structure, if any.
    pub structure_id: Option<i64>,
}

/// Response after creating a depot point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDepotPointResponse {
    /// The generated point ID.
    pub point_id: i64,
    /// A success message.
    pub message: String,
}

/// Request to generate proposed delivery dates for a tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposeDatesRequest {
    /// Optional first candidate date (ISO-8601); defaults to the current
    /// day.
    pub date_debut: Option<String>,
    /// Candidate spacing in days (7 = weekly, 14 = bi-weekly, 30 = monthly).
    pub frequence: u32,
}

/// Response carrying the proposed delivery dates of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposeDatesResponse {
    /// Accepted candidate dates (ISO-8601), ascending.
    pub dates: Vec<String>,
    /// `true` when the run gave up without finding any eligible date.
    pub epuise: bool,
    /// Why the run stopped: `horizon`, `plafond`, or `echecs_consecutifs`.
    pub motif_arret: String,
}

/// Request to record a shared calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCalendarDateRequest {
    /// The date (ISO-8601).
    pub date: String,
    /// The entry kind: `ouverture` or `ferie`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Response after recording a shared calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCalendarDateResponse {
    /// The generated entry ID.
    pub entry_id: i64,
    /// A success message.
    pub message: String,
}

/// A structure (producer organisation) as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureInfo {
    /// The structure ID.
    pub structure_id: i64,
    /// The structure name.
    pub nom: String,
}

/// Request to create a structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStructureRequest {
    /// The structure name.
    pub nom: String,
}

/// Response after creating a structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStructureResponse {
    /// The generated structure ID.
    pub structure_id: i64,
    /// A success message.
    pub message: String,
}
