// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tour mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::NewTourRow;
use crate::diesel_schema::{tournee_points, tournees};
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new tour.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `preparation_date` - Optional preparation date (ISO-8601 text)
/// * `delivery_date` - Optional delivery date (ISO-8601 text)
/// * `status` - The stored status label
///
/// # Errors
///
/// Returns an error if the tour cannot be created.
pub fn create_tour(
    conn: &mut _,
    preparation_date: Option<&str>,
    delivery_date: Option<&str>,
    status: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(tournees::table)
        .values(NewTourRow {
            jour_preparation: preparation_date,
            jour_livraison: delivery_date,
            statut: status,
        })
        .execute(conn)?;

    let tour_id: i64 = conn.get_last_insert_rowid()?;

    info!(tour_id, "Tour created");
    Ok(tour_id)
}
}

backend_fn! {
/// Overwrites the calendar fields of a tour.
///
/// Callers merge the incoming patch with the stored record first; this
/// mutation writes the merged values in a single statement.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `tour_id` - The tour ID
/// * `preparation_date` - The merged preparation date
/// * `delivery_date` - The merged delivery date
/// * `status` - The merged status label
///
/// # Returns
///
/// The number of rows updated (0 when the tour does not exist).
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_tour_calendar(
    conn: &mut _,
    tour_id: i64,
    preparation_date: Option<&str>,
    delivery_date: Option<&str>,
    status: &str,
) -> Result<usize, PersistenceError> {
    let updated = diesel::update(tournees::table)
        .filter(tournees::tournee_id.eq(tour_id))
        .set((
            tournees::jour_preparation.eq(preparation_date),
            tournees::jour_livraison.eq(delivery_date),
            tournees::statut.eq(status),
        ))
        .execute(conn)?;

    info!(tour_id, updated, "Tour calendar updated");
    Ok(updated)
}
}

backend_fn! {
/// Clears the calendar fields of a tour and resets its status.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `tour_id` - The tour ID
/// * `status` - The status label to reset to
///
/// # Returns
///
/// The number of rows updated (0 when the tour does not exist).
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn clear_tour_calendar(
    conn: &mut _,
    tour_id: i64,
    status: &str,
) -> Result<usize, PersistenceError> {
    let cleared = diesel::update(tournees::table)
        .filter(tournees::tournee_id.eq(tour_id))
        .set((
            tournees::jour_preparation.eq(None::<&str>),
            tournees::jour_livraison.eq(None::<&str>),
            tournees::statut.eq(status),
        ))
        .execute(conn)?;

    info!(tour_id, "Tour calendar cleared");
    Ok(cleared)
}
}

backend_fn! {
/// Deletes a tour and its membership rows.
///
/// Membership rows reference the tour, so both deletes run in one
/// transaction.
///
/// # Returns
///
/// The number of tour rows deleted (0 when the tour does not exist).
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_tour(conn: &mut _, tour_id: i64) -> Result<usize, PersistenceError> {
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        diesel::delete(tournee_points::table)
            .filter(tournee_points::tournee_id.eq(tour_id))
            .execute(conn)?;

        let deleted = diesel::delete(tournees::table)
            .filter(tournees::tournee_id.eq(tour_id))
            .execute(conn)?;

        info!(tour_id, deleted, "Tour deleted");
        Ok(deleted)
    })
}
}
