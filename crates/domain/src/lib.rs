// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Planning rules for the Cocagne delivery planner.
//!
//! Pure domain logic: date eligibility against the shared calendar,
//! calendar patch validation, and bounded delivery-date proposal
//! generation. No I/O and no storage types live here.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod delivery_date;
mod error;
mod proposal;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use delivery_date::{
    DEFAULT_LOOKAHEAD_DAYS, is_valid_delivery_date, next_valid_date, same_week, week_start,
};
pub use error::DomainError;
pub use proposal::{
    DateProposals, PROPOSAL_HORIZON_DAYS, PROPOSAL_MISS_CUTOFF, PROPOSAL_OUTPUT_CAP, StopReason,
    generate_proposed_dates,
};

// Re-export public types
pub use types::{CalendarPatch, TourStatus};
pub use validation::{
    format_iso_date, parse_iso_date, parse_point_id, parse_tour_id, validate_frequency,
};
