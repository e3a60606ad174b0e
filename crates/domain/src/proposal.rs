// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delivery-date proposal generation.
//!
//! Starting from a chosen date, candidates are spaced exactly
//! `frequency_days` apart. Each candidate is tested as-is against the
//! eligibility rules and the set of already-planned dates; the generator
//! never searches around a rejected candidate for a nearby eligible day.
//!
//! ## Termination
//!
//! The run is bounded three ways and stops at whichever bound is hit first:
//!
//! - one year of horizon from the start date,
//! - an output cap of 52 accepted dates,
//! - 10 consecutive rejected candidates.
//!
//! The consecutive-miss cutoff trades completeness for a bounded response
//! time: a run can come back empty even though eligible dates exist further
//! out. That is the documented contract, reported via [`StopReason`], not a
//! defect to compensate for.

use crate::delivery_date::is_valid_delivery_date;
use crate::error::DomainError;
use time::{Date, Duration};

/// Horizon bound: candidates more than one year past the start are not
/// considered.
pub const PROPOSAL_HORIZON_DAYS: i64 = 365;

/// Output cap: at most one proposal per week of the horizon.
pub const PROPOSAL_OUTPUT_CAP: usize = 52;

/// Consecutive-miss cutoff before the run gives up.
pub const PROPOSAL_MISS_CUTOFF: u32 = 10;

/// Why a proposal run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The one-year horizon was reached.
    HorizonReached,
    /// The output cap of accepted dates was reached.
    CapReached,
    /// Too many candidates were rejected in a row.
    ConsecutiveMisses,
}

/// The outcome of one proposal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateProposals {
    /// Accepted candidate dates, in ascending order.
    pub dates: Vec<Date>,
    /// The bound that ended the run.
    pub stop_reason: StopReason,
}

impl DateProposals {
    /// Returns `true` when the run gave up without finding any eligible
    /// date within its bounds.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.dates.is_empty() && self.stop_reason == StopReason::ConsecutiveMisses
    }
}

/// Generates candidate delivery dates for a tour.
///
/// # Arguments
///
/// * `start` - The first candidate date
/// * `frequency_days` - Candidate spacing (7 = weekly, 14 = bi-weekly, ...)
/// * `holidays` - Dates on which no delivery may occur
/// * `open_weeks` - Dates marking weeks during which deliveries are allowed
/// * `excluded` - Dates already committed to a tour calendar
///
/// # Errors
///
/// Returns [`DomainError::InvalidFrequency`] for a zero frequency, or
/// [`DomainError::DateArithmeticOverflow`] if the calendar range is
/// exceeded while stepping.
pub fn generate_proposed_dates(
    start: Date,
    frequency_days: u32,
    holidays: &[Date],
    open_weeks: &[Date],
    excluded: &[Date],
) -> Result<DateProposals, DomainError> {
    if frequency_days == 0 {
        return Err(DomainError::InvalidFrequency {
            days: frequency_days,
        });
    }

    let horizon = start
        .checked_add(Duration::days(PROPOSAL_HORIZON_DAYS))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("computing the proposal horizon from {start}"),
        })?;

    let step = Duration::days(i64::from(frequency_days));
    let mut dates: Vec<Date> = Vec::new();
    let mut candidate = start;
    let mut consecutive_misses: u32 = 0;

    loop {
        if candidate > horizon {
            return Ok(DateProposals {
                dates,
                stop_reason: StopReason::HorizonReached,
            });
        }

        let accepted = is_valid_delivery_date(candidate, holidays, open_weeks)
            && !excluded.contains(&candidate);

        if accepted {
            dates.push(candidate);
            consecutive_misses = 0;

            if dates.len() >= PROPOSAL_OUTPUT_CAP {
                return Ok(DateProposals {
                    dates,
                    stop_reason: StopReason::CapReached,
                });
            }
        } else {
            consecutive_misses += 1;

            if consecutive_misses >= PROPOSAL_MISS_CUTOFF {
                return Ok(DateProposals {
                    dates,
                    stop_reason: StopReason::ConsecutiveMisses,
                });
            }
        }

        candidate =
            candidate
                .checked_add(step)
                .ok_or_else(|| DomainError::DateArithmeticOverflow {
                    operation: format!("advancing {frequency_days} days past {candidate}"),
                })?;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::Month;

    fn date(year: i32, month: Month, day: u8) -> Date {
        Date::from_calendar_date(year, month, day).unwrap()
    }

    /// Every Sunday of the year following `start`, so that every weekly
    /// candidate lands in an open week.
    fn open_every_week(start: Date) -> Vec<Date> {
        let mut weeks = Vec::new();
        let mut sunday = crate::delivery_date::week_start(start);
        for _ in 0..54 {
            weeks.push(sunday);
            sunday = sunday.checked_add(Duration::days(7)).unwrap();
        }
        weeks
    }

    #[test]
    fn test_zero_frequency_is_rejected() {
        let result = generate_proposed_dates(date(2024, Month::March, 4), 0, &[], &[], &[]);
        assert_eq!(result, Err(DomainError::InvalidFrequency { days: 0 }));
    }

    #[test]
    fn test_weekly_run_caps_at_52_results() {
        let start = date(2024, Month::March, 4);
        let open_weeks = open_every_week(start);

        let proposals = generate_proposed_dates(start, 7, &[], &open_weeks, &[]).unwrap();

        assert_eq!(proposals.dates.len(), PROPOSAL_OUTPUT_CAP);
        assert_eq!(proposals.stop_reason, StopReason::CapReached);
        assert_eq!(proposals.dates[0], start);
        // Ascending, exactly seven days apart.
        for pair in proposals.dates.windows(2) {
            assert_eq!(pair[1], pair[0].checked_add(Duration::days(7)).unwrap());
        }
    }

    #[test]
    fn test_holiday_candidate_is_skipped_not_searched_around() {
        // Weekly candidates land on Mondays; one Monday is a holiday. The
        // run must drop that exact date and keep every other weekly
        // candidate, without proposing a substitute day in that week.
        let start = date(2024, Month::December, 2);
        let open_weeks = open_every_week(start);
        let holiday = date(2024, Month::December, 23);
        let holidays = vec![holiday];

        let proposals = generate_proposed_dates(start, 7, &holidays, &open_weeks, &[]).unwrap();

        assert!(!proposals.dates.contains(&holiday));
        assert!(proposals.dates.contains(&date(2024, Month::December, 16)));
        assert!(proposals.dates.contains(&date(2024, Month::December, 30)));
        assert_eq!(proposals.dates.len(), PROPOSAL_OUTPUT_CAP - 1);
    }

    #[test]
    fn test_already_planned_dates_are_excluded() {
        let start = date(2024, Month::March, 4);
        let open_weeks = open_every_week(start);
        let planned = vec![date(2024, Month::March, 11)];

        let proposals = generate_proposed_dates(start, 7, &[], &open_weeks, &planned).unwrap();

        assert!(!proposals.dates.contains(&planned[0]));
        assert!(proposals.dates.contains(&date(2024, Month::March, 4)));
        assert!(proposals.dates.contains(&date(2024, Month::March, 18)));
    }

    #[test]
    fn test_consecutive_misses_end_the_run_empty() {
        // No open weeks: every candidate misses, so the run stops after the
        // cutoff and reports exhaustion instead of scanning the full year.
        let start = date(2024, Month::March, 4);

        let proposals = generate_proposed_dates(start, 7, &[], &[], &[]).unwrap();

        assert!(proposals.dates.is_empty());
        assert_eq!(proposals.stop_reason, StopReason::ConsecutiveMisses);
        assert!(proposals.is_exhausted());
    }

    #[test]
    fn test_partial_results_survive_a_miss_streak() {
        // Open weeks only at the start: two accepted dates, then the miss
        // cutoff ends the run with the partial results intact.
        let start = date(2024, Month::March, 4);
        let open_weeks = vec![
            crate::delivery_date::week_start(start),
            crate::delivery_date::week_start(date(2024, Month::March, 11)),
        ];

        let proposals = generate_proposed_dates(start, 7, &[], &open_weeks, &[]).unwrap();

        assert_eq!(
            proposals.dates,
            vec![date(2024, Month::March, 4), date(2024, Month::March, 11)]
        );
        assert_eq!(proposals.stop_reason, StopReason::ConsecutiveMisses);
        assert!(!proposals.is_exhausted());
    }

    #[test]
    fn test_monthly_frequency_reaches_the_horizon() {
        // 30-day spacing with every week open: 13 candidates fit in the
        // horizon, so the run ends by horizon rather than by cap.
        let start = date(2024, Month::March, 4);
        let mut open_weeks = Vec::new();
        let mut sunday = crate::delivery_date::week_start(start);
        for _ in 0..56 {
            open_weeks.push(sunday);
            sunday = sunday.checked_add(Duration::days(7)).unwrap();
        }

        let proposals = generate_proposed_dates(start, 30, &[], &open_weeks, &[]).unwrap();

        assert_eq!(proposals.stop_reason, StopReason::HorizonReached);
        assert_eq!(proposals.dates.len(), 13);
    }
}
