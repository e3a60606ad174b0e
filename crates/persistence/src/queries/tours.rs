// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tour queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::TourRow;
use crate::diesel_schema::tournees;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a tour by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `tour_id` - The tour ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the tour is not found.
pub fn get_tour(conn: &mut _, tour_id: i64) -> Result<Option<TourRow>, PersistenceError> {
    debug!("Looking up tour by ID: {}", tour_id);

    tournees::table
        .filter(tournees::tournee_id.eq(tour_id))
        .first::<TourRow>(conn)
        .optional()
        .map_err(Into::into)
}
}

backend_fn! {
/// Lists all tours, ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_tours(conn: &mut _) -> Result<Vec<TourRow>, PersistenceError> {
    tournees::table
        .order(tournees::tournee_id.asc())
        .load::<TourRow>(conn)
        .map_err(Into::into)
}
}

backend_fn! {
/// Lists the preparation and delivery dates of every tour.
///
/// Used to build the planning overview and to exclude already-planned
/// dates from proposal runs.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_tour_dates(
    conn: &mut _,
) -> Result<Vec<(i64, Option<String>, Option<String>)>, PersistenceError> {
    tournees::table
        .order(tournees::tournee_id.asc())
        .select((
            tournees::tournee_id,
            tournees::jour_preparation,
            tournees::jour_livraison,
        ))
        .load::<(i64, Option<String>, Option<String>)>(conn)
        .map_err(Into::into)
}
}
