// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delivery-date eligibility rules.
//!
//! A calendar date is a legal delivery date when:
//! - its week (weeks start on Sunday, per the organization's convention)
//!   matches the week of at least one open-week entry, and
//! - it does not fall on a holiday.
//!
//! ## Invariants
//!
//! - Week comparison normalizes both dates to their week-start Sunday and
//!   compares the Sundays for exact equality, never elapsed time.
//! - Holiday comparison is exact calendar-day equality (year, month, day),
//!   so timezone and DST drift cannot misclassify a date.
//! - All functions here are pure; reference data is always passed in
//!   explicitly, never cached at module level.

use crate::error::DomainError;
use time::{Date, Duration};

/// Default lookahead bound for [`next_valid_date`], in days.
///
/// The search is explicitly bounded: with no eligible date in the next
/// calendar year the search reports exhaustion instead of scanning forever.
pub const DEFAULT_LOOKAHEAD_DAYS: u16 = 366;

/// Returns the Sunday starting the week containing `date`.
#[must_use]
pub fn week_start(date: Date) -> Date {
    let offset = i64::from(date.weekday().number_days_from_sunday());
    // Offset is at most 6 days; saturate rather than wrap at the calendar
    // boundary.
    date.checked_sub(Duration::days(offset)).unwrap_or(date)
}

/// Returns `true` if both dates fall in the same Sunday-started week.
#[must_use]
pub fn same_week(a: Date, b: Date) -> bool {
    week_start(a) == week_start(b)
}

/// Decides whether `date` is a legal delivery date.
///
/// Eligible iff the date's week matches the week of at least one entry in
/// `open_weeks` (week equality, not exact date equality) and the date
/// equals no entry in `holidays`.
#[must_use]
pub fn is_valid_delivery_date(date: Date, holidays: &[Date], open_weeks: &[Date]) -> bool {
    let in_open_week = open_weeks.iter().any(|week| same_week(date, *week));
    let is_holiday = holidays.contains(&date);

    in_open_week && !is_holiday
}

/// Returns the earliest eligible delivery date strictly after `date`.
///
/// Advances one calendar day at a time, up to `lookahead_days` days past
/// `date`.
///
/// # Errors
///
/// Returns [`DomainError::NoEligibleDate`] when no eligible date exists
/// within the bound, or [`DomainError::DateArithmeticOverflow`] if the
/// calendar range is exceeded.
pub fn next_valid_date(
    date: Date,
    holidays: &[Date],
    open_weeks: &[Date],
    lookahead_days: u16,
) -> Result<Date, DomainError> {
    let mut candidate = date;

    for _ in 0..lookahead_days {
        candidate = candidate.checked_add(Duration::days(1)).ok_or_else(|| {
            DomainError::DateArithmeticOverflow {
                operation: format!("searching for the next delivery date after {date}"),
            }
        })?;

        if is_valid_delivery_date(candidate, holidays, open_weeks) {
            return Ok(candidate);
        }
    }

    Err(DomainError::NoEligibleDate {
        after: date,
        lookahead_days,
    })
}
