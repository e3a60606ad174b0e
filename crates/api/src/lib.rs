// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Cocagne delivery planner.
//!
//! This crate sits between the HTTP server and the domain/persistence
//! layers. It parses textual identifiers, validates payloads against the
//! domain rules, translates errors into the API contract, and shapes
//! responses. Handlers take a mutable [`cocagne_persistence::Persistence`]
//! and never touch HTTP types; the server crate owns routing and status
//! codes.

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

mod calendar;
mod error;
mod membership;
mod points;
mod request_response;
mod scheduling;
mod tours;

#[cfg(test)]
mod tests;

pub use calendar::{
    add_calendar_date, clear_tour_calendar, get_tour_calendar, list_holidays, list_open_weeks,
    update_tour_calendar,
};
pub use error::{ApiError, translate_domain_error};
pub use membership::{add_tour_point, list_tour_points, remove_tour_point, reorder_tour_point};
pub use points::{
    create_depot_point, create_structure, delete_depot_point, get_depot_point,
    list_available_points, list_depot_points, list_structures, update_depot_point,
};
pub use request_response::{
    AddCalendarDateRequest, AddCalendarDateResponse, AddTourPointRequest, AddTourPointResponse,
    ClearTourCalendarResponse, CreateDepotPointResponse, CreateStructureRequest,
    CreateStructureResponse, CreateTourRequest, CreateTourResponse, DepotPointInfo,
    DepotPointRequest, ProposeDatesRequest, ProposeDatesResponse, RemoveTourPointResponse,
    ReorderTourPointRequest, ReorderTourPointResponse, StructureInfo, TourDatesInfo, TourInfo,
    TourPointInfo, UpdateTourCalendarRequest, UpdateTourCalendarResponse,
};
pub use scheduling::propose_delivery_dates;
pub use tours::{create_tour, delete_tour, list_tour_dates, list_tours};
