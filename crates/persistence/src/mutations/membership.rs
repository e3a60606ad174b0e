// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tour membership mutations.
//!
//! Adding a point to a tour is idempotent: a pair that already exists is
//! reported back as "not inserted" and nothing changes. The check and the
//! insert run inside one transaction, and the unique index on
//! `(tournee_id, point_id)` backstops concurrent writers.

use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::data_models::{NewTourPointRow, TOUR_POINT_STATUS_ACTIVE};
use crate::diesel_schema::tournee_points;
use crate::error::PersistenceError;

backend_fn! {
/// Adds a depot point to a tour at the given position.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `tour_id` - The tour ID
/// * `point_id` - The depot point ID
/// * `position` - The `numero_ordre` for the new membership row
///
/// # Returns
///
/// `Ok(true)` when a row was inserted, `Ok(false)` when the pair already
/// existed and the call was a no-op.
///
/// # Errors
///
/// Returns an error if the database write fails.
pub fn add_tour_point(
    conn: &mut _,
    tour_id: i64,
    point_id: i64,
    position: i32,
) -> Result<bool, PersistenceError> {
    conn.transaction::<bool, PersistenceError, _>(|conn| {
        let existing: i64 = tournee_points::table
            .filter(tournee_points::tournee_id.eq(tour_id))
            .filter(tournee_points::point_id.eq(point_id))
            .count()
            .get_result(conn)?;

        if existing > 0 {
            debug!(tour_id, point_id, "Point already on tour, nothing to add");
            return Ok(false);
        }

        let inserted = diesel::insert_into(tournee_points::table)
            .values(NewTourPointRow {
                tournee_id: tour_id,
                point_id,
                numero_ordre: position,
                statut: TOUR_POINT_STATUS_ACTIVE,
            })
            .execute(conn);

        match inserted {
            Ok(_) => {
                info!(tour_id, point_id, position, "Point added to tour");
                Ok(true)
            }
            // A concurrent writer beat us to the pair; same no-op outcome.
            Err(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _,
            )) => Ok(false),
            Err(e) => Err(PersistenceError::from(e)),
        }
    })
}
}

backend_fn! {
/// Removes a depot point from a tour.
///
/// # Returns
///
/// The number of membership rows deleted (0 when the pair did not exist).
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn remove_tour_point(
    conn: &mut _,
    tour_id: i64,
    point_id: i64,
) -> Result<usize, PersistenceError> {
    let removed = diesel::delete(tournee_points::table)
        .filter(tournee_points::tournee_id.eq(tour_id))
        .filter(tournee_points::point_id.eq(point_id))
        .execute(conn)?;

    info!(tour_id, point_id, removed, "Point removed from tour");
    Ok(removed)
}
}

backend_fn! {
/// Moves a depot point to a new position within a tour.
///
/// Positions are sparse; callers may reuse a `numero_ordre` already held
/// by another row, in which case listing falls back to insertion order
/// for the tied rows.
///
/// # Returns
///
/// The number of membership rows updated (0 when the pair did not exist).
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn set_tour_point_position(
    conn: &mut _,
    tour_id: i64,
    point_id: i64,
    position: i32,
) -> Result<usize, PersistenceError> {
    let updated = diesel::update(tournee_points::table)
        .filter(tournee_points::tournee_id.eq(tour_id))
        .filter(tournee_points::point_id.eq(point_id))
        .set(tournee_points::numero_ordre.eq(position))
        .execute(conn)?;

    info!(tour_id, point_id, position, "Point position updated");
    Ok(updated)
}
}
