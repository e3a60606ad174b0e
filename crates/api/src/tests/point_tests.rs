// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used)]

use crate::error::ApiError;
use crate::request_response::{AddTourPointRequest, CreateStructureRequest, DepotPointRequest};
use crate::tests::helpers::{create_empty_tour, create_point, fresh_db};
use crate::{
    add_tour_point, create_depot_point, create_structure, delete_depot_point, get_depot_point,
    list_available_points, list_depot_points, list_structures, update_depot_point,
};

#[test]
fn test_create_and_get_point() {
    let mut db = fresh_db();
    let point_id = create_point(&mut db, "Ferme du Lac");

    let point = get_depot_point(&mut db, &point_id.to_string()).unwrap();
    assert_eq!(point.nom, "Ferme du Lac");
    assert_eq!(point.adresse, "1 rue du Marché");
}

#[test]
fn test_create_point_rejects_blank_name() {
    let mut db = fresh_db();
    let result = create_depot_point(
        &mut db,
        DepotPointRequest {
            nom: String::from("   "),
            adresse: String::from("1 rue du Marché"),
            latitude: 46.2,
            longitude: 6.1,
            structure_id: None,
        },
    );
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_create_point_rejects_out_of_range_coordinates() {
    let mut db = fresh_db();
    let result = create_depot_point(
        &mut db,
        DepotPointRequest {
            nom: String::from("Ferme du Lac"),
            adresse: String::from("1 rue du Marché"),
            latitude: 120.0,
            longitude: 6.1,
            structure_id: None,
        },
    );
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_points_are_listed_by_name() {
    let mut db = fresh_db();
    create_point(&mut db, "Zola");
    create_point(&mut db, "Amandiers");

    let points = list_depot_points(&mut db).unwrap();
    let names: Vec<&str> = points.iter().map(|p| p.nom.as_str()).collect();
    assert_eq!(names, vec!["Amandiers", "Zola"]);
}

#[test]
fn test_available_points_excludes_members() {
    let mut db = fresh_db();
    let tour_id = create_empty_tour(&mut db);
    let assigned = create_point(&mut db, "Marché Couvert");
    let free = create_point(&mut db, "Épicerie Centrale");

    add_tour_point(
        &mut db,
        &tour_id.to_string(),
        AddTourPointRequest {
            point_id: assigned,
            numero_ordre: Some(1),
        },
    )
    .unwrap();

    let available = list_available_points(&mut db, &tour_id.to_string()).unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].point_id, free);
}

#[test]
fn test_update_missing_point_reports_not_found() {
    let mut db = fresh_db();
    let result = update_depot_point(
        &mut db,
        "42",
        DepotPointRequest {
            nom: String::from("Ferme du Lac"),
            adresse: String::from("1 rue du Marché"),
            latitude: 46.2,
            longitude: 6.1,
            structure_id: None,
        },
    );
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_delete_point() {
    let mut db = fresh_db();
    let point_id = create_point(&mut db, "Ferme du Lac");

    delete_depot_point(&mut db, &point_id.to_string()).unwrap();
    let result = get_depot_point(&mut db, &point_id.to_string());
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_structures_round_trip() {
    let mut db = fresh_db();
    create_structure(
        &mut db,
        CreateStructureRequest {
            nom: String::from("Jardins de Cocagne"),
        },
    )
    .unwrap();

    let structures = list_structures(&mut db).unwrap();
    assert_eq!(structures.len(), 1);
    assert_eq!(structures[0].nom, "Jardins de Cocagne");
}
