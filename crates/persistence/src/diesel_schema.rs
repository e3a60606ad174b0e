// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel schema definitions for the planner tables.
//!
//! Dates are stored as ISO-8601 text (`YYYY-MM-DD`) so that both backends
//! share one representation and lexical ordering matches chronological
//! ordering.

use diesel::prelude::*;

table! {
    structures (structure_id) {
        structure_id -> BigInt,
        nom -> Text,
    }
}

table! {
    tournees (tournee_id) {
        tournee_id -> BigInt,
        jour_preparation -> Nullable<Text>,
        jour_livraison -> Nullable<Text>,
        statut -> Text,
    }
}

table! {
    points_depot (point_id) {
        point_id -> BigInt,
        nom -> Text,
        adresse -> Text,
        latitude -> Double,
        longitude -> Double,
        structure_id -> Nullable<BigInt>,
    }
}

table! {
    tournee_points (id) {
        id -> BigInt,
        tournee_id -> BigInt,
        point_id -> BigInt,
        numero_ordre -> Integer,
        statut -> Text,
    }
}

table! {
    calendrier (entry_id) {
        entry_id -> BigInt,
        date -> Text,
        kind -> Text,
    }
}

joinable!(tournee_points -> tournees (tournee_id));
joinable!(tournee_points -> points_depot (point_id));
joinable!(points_depot -> structures (structure_id));

allow_tables_to_appear_in_same_query!(
    structures,
    tournees,
    points_depot,
    tournee_points,
    calendrier,
);
