// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

#![allow(clippy::unwrap_used)]

use cocagne_persistence::{CALENDAR_KIND_HOLIDAY, CALENDAR_KIND_OPEN_WEEK, Persistence};

use crate::request_response::{CreateTourRequest, DepotPointRequest};
use crate::{create_depot_point, create_tour};

pub fn fresh_db() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_empty_tour(db: &mut Persistence) -> i64 {
    create_tour(
        db,
        CreateTourRequest {
            jour_preparation: None,
            jour_livraison: None,
            statut_tournee: None,
        },
    )
    .unwrap()
    .tournee_id
}

pub fn create_planned_tour(db: &mut Persistence, preparation: &str, delivery: &str) -> i64 {
    create_tour(
        db,
        CreateTourRequest {
            jour_preparation: Some(preparation.to_string()),
            jour_livraison: Some(delivery.to_string()),
            statut_tournee: Some(String::from("planifiée")),
        },
    )
    .unwrap()
    .tournee_id
}

pub fn create_point(db: &mut Persistence, name: &str) -> i64 {
    create_depot_point(
        db,
        DepotPointRequest {
            nom: name.to_string(),
            adresse: String::from("1 rue du Marché"),
            latitude: 46.2,
            longitude: 6.1,
            structure_id: None,
        },
    )
    .unwrap()
    .point_id
}

/// Marks every week of 2025 as open, starting from the first Sunday.
pub fn open_all_of_2025(db: &mut Persistence) {
    let mut month = 1;
    let mut day = 5; // 2025-01-05 is a Sunday
    for _ in 0..52 {
        db.add_calendar_date(
            &format!("2025-{month:02}-{day:02}"),
            CALENDAR_KIND_OPEN_WEEK,
        )
        .unwrap();
        day += 7;
        let days_in_month = match month {
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        };
        if day > days_in_month {
            day -= days_in_month;
            month += 1;
        }
        if month > 12 {
            break;
        }
    }
}

pub fn add_holiday(db: &mut Persistence, date: &str) {
    db.add_calendar_date(date, CALENDAR_KIND_HOLIDAY).unwrap();
}
