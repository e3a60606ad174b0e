// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tour membership queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::DepotPointRow;
use crate::diesel_schema::{points_depot, tournee_points};
use crate::error::PersistenceError;

backend_fn! {
/// Lists the depot points of a tour in delivery order.
///
/// Ordering is by `numero_ordre` ascending; rows sharing a position fall
/// back to insertion order (the membership row ID), so ties stay stable.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `tour_id` - The tour whose membership to list
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_tour_points(
    conn: &mut _,
    tour_id: i64,
) -> Result<Vec<(DepotPointRow, i32)>, PersistenceError> {
    debug!("Listing depot points for tour ID: {}", tour_id);

    tournee_points::table
        .inner_join(points_depot::table)
        .filter(tournee_points::tournee_id.eq(tour_id))
        .order((tournee_points::numero_ordre.asc(), tournee_points::id.asc()))
        .select((points_depot::all_columns, tournee_points::numero_ordre))
        .load::<(DepotPointRow, i32)>(conn)
        .map_err(Into::into)
}
}
