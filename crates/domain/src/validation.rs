// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Input validation and ISO-8601 date conversion helpers.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Storage format for calendar dates: `YYYY-MM-DD`.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a tour identifier from its textual form.
///
/// # Errors
///
/// Returns [`DomainError::InvalidTourId`] when the value is empty,
/// non-numeric, or not positive.
pub fn parse_tour_id(value: &str) -> Result<i64, DomainError> {
    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(DomainError::InvalidTourId(value.to_string())),
    }
}

/// Parses a depot point identifier from its textual form.
///
/// # Errors
///
/// Returns [`DomainError::InvalidPointId`] when the value is empty,
/// non-numeric, or not positive.
pub fn parse_point_id(value: &str) -> Result<i64, DomainError> {
    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(DomainError::InvalidPointId(value.to_string())),
    }
}

/// Validates a delivery frequency.
///
/// # Errors
///
/// Returns [`DomainError::InvalidFrequency`] when the frequency is zero.
pub const fn validate_frequency(days: u32) -> Result<u32, DomainError> {
    if days == 0 {
        Err(DomainError::InvalidFrequency { days })
    } else {
        Ok(days)
    }
}

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns [`DomainError::DateParseError`] with the offending string when
/// parsing fails.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a calendar date as ISO-8601 (`YYYY-MM-DD`).
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
