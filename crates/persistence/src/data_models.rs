// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs mapping the planner tables to Rust types.
//!
//! These are storage-shaped: dates stay as ISO-8601 text and statuses as
//! their stored labels. Conversion to domain types happens at the API
//! boundary, not here.

use diesel::prelude::*;

use crate::diesel_schema::{calendrier, points_depot, structures, tournee_points, tournees};

/// A tour row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
#[diesel(table_name = tournees)]
pub struct TourRow {
    pub tournee_id: i64,
    pub jour_preparation: Option<String>,
    pub jour_livraison: Option<String>,
    pub statut: String,
}

/// Insertable form of a tour.
#[derive(Debug, Insertable)]
#[diesel(table_name = tournees)]
pub struct NewTourRow<'a> {
    pub jour_preparation: Option<&'a str>,
    pub jour_livraison: Option<&'a str>,
    pub statut: &'a str,
}

/// A depot point row as stored.
#[derive(Debug, Clone, PartialEq, Queryable)]
#[diesel(table_name = points_depot)]
pub struct DepotPointRow {
    pub point_id: i64,
    pub nom: String,
    pub adresse: String,
    pub latitude: f64,
    pub longitude: f64,
    pub structure_id: Option<i64>,
}

/// Insertable form of a depot point.
#[derive(Debug, Insertable)]
#[diesel(table_name = points_depot)]
pub struct NewDepotPointRow<'a> {
    pub nom: &'a str,
    pub adresse: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub structure_id: Option<i64>,
}

/// Insertable form of a tour membership row.
#[derive(Debug, Insertable)]
#[diesel(table_name = tournee_points)]
pub struct NewTourPointRow<'a> {
    pub tournee_id: i64,
    pub point_id: i64,
    pub numero_ordre: i32,
    pub statut: &'a str,
}

/// Insertable form of a calendar entry.
#[derive(Debug, Insertable)]
#[diesel(table_name = calendrier)]
pub struct NewCalendarRow<'a> {
    pub date: &'a str,
    pub kind: &'a str,
}

/// A structure (producer organisation) row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
#[diesel(table_name = structures)]
pub struct StructureRow {
    pub structure_id: i64,
    pub nom: String,
}

/// Insertable form of a structure.
#[derive(Debug, Insertable)]
#[diesel(table_name = structures)]
pub struct NewStructureRow<'a> {
    pub nom: &'a str,
}

/// Calendar entry kind for dates marking weeks open for delivery.
pub const CALENDAR_KIND_OPEN_WEEK: &str = "ouverture";

/// Calendar entry kind for public holidays.
pub const CALENDAR_KIND_HOLIDAY: &str = "ferie";

/// Default status for a newly created membership row.
pub const TOUR_POINT_STATUS_ACTIVE: &str = "actif";
