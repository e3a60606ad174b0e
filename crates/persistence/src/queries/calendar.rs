// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared calendar queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::diesel_schema::calendrier;
use crate::error::PersistenceError;

backend_fn! {
/// Lists the stored dates of a given calendar kind, ascending.
///
/// Dates are stored as ISO-8601 text, so lexical ordering is
/// chronological.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `kind` - The calendar kind (`ouverture` or `ferie`)
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_calendar_dates(conn: &mut _, kind: &str) -> Result<Vec<String>, PersistenceError> {
    calendrier::table
        .filter(calendrier::kind.eq(kind))
        .order(calendrier::date.asc())
        .select(calendrier::date)
        .load::<String>(conn)
        .map_err(Into::into)
}
}
