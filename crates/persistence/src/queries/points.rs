// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Depot point and structure queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{DepotPointRow, StructureRow};
use crate::diesel_schema::{points_depot, structures, tournee_points};
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a depot point by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `point_id` - The depot point ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the point is not found.
pub fn get_depot_point(
    conn: &mut _,
    point_id: i64,
) -> Result<Option<DepotPointRow>, PersistenceError> {
    debug!("Looking up depot point by ID: {}", point_id);

    points_depot::table
        .filter(points_depot::point_id.eq(point_id))
        .first::<DepotPointRow>(conn)
        .optional()
        .map_err(Into::into)
}
}

backend_fn! {
/// Lists all depot points, ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_depot_points(conn: &mut _) -> Result<Vec<DepotPointRow>, PersistenceError> {
    points_depot::table
        .order(points_depot::nom.asc())
        .load::<DepotPointRow>(conn)
        .map_err(Into::into)
}
}

backend_fn! {
/// Lists the depot points not yet assigned to a tour, ordered by name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `tour_id` - The tour whose membership excludes points from the result
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_available_points(
    conn: &mut _,
    tour_id: i64,
) -> Result<Vec<DepotPointRow>, PersistenceError> {
    let assigned = tournee_points::table
        .filter(tournee_points::tournee_id.eq(tour_id))
        .select(tournee_points::point_id);

    points_depot::table
        .filter(points_depot::point_id.ne_all(assigned))
        .order(points_depot::nom.asc())
        .load::<DepotPointRow>(conn)
        .map_err(Into::into)
}
}

backend_fn! {
/// Lists all structures, ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_structures(conn: &mut _) -> Result<Vec<StructureRow>, PersistenceError> {
    structures::table
        .order(structures::nom.asc())
        .load::<StructureRow>(conn)
        .map_err(Into::into)
}
}
