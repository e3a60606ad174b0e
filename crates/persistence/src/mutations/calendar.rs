// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared calendar mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::NewCalendarRow;
use crate::diesel_schema::calendrier;
use crate::error::PersistenceError;

backend_fn! {
/// Records a calendar date of the given kind.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `date` - The date as ISO-8601 text
/// * `kind` - The calendar kind (`ouverture` or `ferie`)
///
/// # Errors
///
/// Returns an error if the entry cannot be created.
pub fn add_calendar_date(conn: &mut _, date: &str, kind: &str) -> Result<i64, PersistenceError> {
    diesel::insert_into(calendrier::table)
        .values(NewCalendarRow { date, kind })
        .execute(conn)?;

    let entry_id: i64 = conn.get_last_insert_rowid()?;

    info!(entry_id, kind, "Calendar date recorded");
    Ok(entry_id)
}
}
