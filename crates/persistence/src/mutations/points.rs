// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Depot point and structure mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{NewDepotPointRow, NewStructureRow};
use crate::diesel_schema::{points_depot, structures, tournee_points};
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new depot point.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The point name
/// * `address` - The street address
/// * `latitude` - Latitude in decimal degrees
/// * `longitude` - Longitude in decimal degrees
/// * `structure_id` - Optional owning structure
///
/// # Errors
///
/// Returns an error if the point cannot be created.
pub fn create_depot_point(
    conn: &mut _,
    name: &str,
    address: &str,
    latitude: f64,
    longitude: f64,
    structure_id: Option<i64>,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(points_depot::table)
        .values(NewDepotPointRow {
            nom: name,
            adresse: address,
            latitude,
            longitude,
            structure_id,
        })
        .execute(conn)?;

    let point_id: i64 = conn.get_last_insert_rowid()?;

    info!(point_id, "Depot point created");
    Ok(point_id)
}
}

backend_fn! {
/// Updates a depot point.
///
/// # Returns
///
/// The number of rows updated (0 when the point does not exist).
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_depot_point(
    conn: &mut _,
    point_id: i64,
    name: &str,
    address: &str,
    latitude: f64,
    longitude: f64,
    structure_id: Option<i64>,
) -> Result<usize, PersistenceError> {
    let updated = diesel::update(points_depot::table)
        .filter(points_depot::point_id.eq(point_id))
        .set((
            points_depot::nom.eq(name),
            points_depot::adresse.eq(address),
            points_depot::latitude.eq(latitude),
            points_depot::longitude.eq(longitude),
            points_depot::structure_id.eq(structure_id),
        ))
        .execute(conn)?;

    info!(point_id, updated, "Depot point updated");
    Ok(updated)
}
}

backend_fn! {
/// Deletes a depot point and its membership rows.
///
/// Membership rows reference the point, so both deletes run in one
/// transaction.
///
/// # Returns
///
/// The number of point rows deleted (0 when the point does not exist).
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_depot_point(conn: &mut _, point_id: i64) -> Result<usize, PersistenceError> {
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        diesel::delete(tournee_points::table)
            .filter(tournee_points::point_id.eq(point_id))
            .execute(conn)?;

        let deleted = diesel::delete(points_depot::table)
            .filter(points_depot::point_id.eq(point_id))
            .execute(conn)?;

        info!(point_id, deleted, "Depot point deleted");
        Ok(deleted)
    })
}
}

backend_fn! {
/// Creates a new structure.
///
/// # Errors
///
/// Returns an error if the structure cannot be created.
pub fn create_structure(conn: &mut _, name: &str) -> Result<i64, PersistenceError> {
    diesel::insert_into(structures::table)
        .values(NewStructureRow { nom: name })
        .execute(conn)?;

    let structure_id: i64 = conn.get_last_insert_rowid()?;

    info!(structure_id, "Structure created");
    Ok(structure_id)
}
}
