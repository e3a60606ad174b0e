// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used)]

use crate::{CalendarPatch, DomainError, TourStatus};
use crate::{format_iso_date, parse_iso_date, parse_point_id, parse_tour_id, validate_frequency};
use time::{Date, Month};

fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

#[test]
fn test_parse_tour_id_accepts_positive_integers() {
    assert_eq!(parse_tour_id("42").unwrap(), 42);
    assert_eq!(parse_tour_id(" 7 ").unwrap(), 7);
}

#[test]
fn test_parse_tour_id_rejects_garbage() {
    assert!(matches!(
        parse_tour_id("abc"),
        Err(DomainError::InvalidTourId(_))
    ));
    assert!(matches!(
        parse_tour_id(""),
        Err(DomainError::InvalidTourId(_))
    ));
    assert!(matches!(
        parse_tour_id("0"),
        Err(DomainError::InvalidTourId(_))
    ));
    assert!(matches!(
        parse_tour_id("-3"),
        Err(DomainError::InvalidTourId(_))
    ));
}

#[test]
fn test_parse_point_id_rejects_garbage() {
    assert!(matches!(
        parse_point_id("12.5"),
        Err(DomainError::InvalidPointId(_))
    ));
    assert_eq!(parse_point_id("12").unwrap(), 12);
}

#[test]
fn test_validate_frequency() {
    assert_eq!(validate_frequency(7).unwrap(), 7);
    assert_eq!(
        validate_frequency(0),
        Err(DomainError::InvalidFrequency { days: 0 })
    );
}

#[test]
fn test_iso_date_round_trip() {
    let parsed = parse_iso_date("2025-03-10").unwrap();
    assert_eq!(parsed, date(2025, Month::March, 10));
    assert_eq!(format_iso_date(parsed), "2025-03-10");
}

#[test]
fn test_iso_date_rejects_malformed_input() {
    assert!(matches!(
        parse_iso_date("10/03/2025"),
        Err(DomainError::DateParseError { .. })
    ));
    assert!(matches!(
        parse_iso_date("2025-13-01"),
        Err(DomainError::DateParseError { .. })
    ));
}

#[test]
fn test_status_labels_round_trip() {
    assert_eq!(TourStatus::from_label("préparée"), TourStatus::Preparee);
    assert_eq!(TourStatus::from_label("planifiée"), TourStatus::Planifiee);
    assert_eq!(TourStatus::from_label("modifiée"), TourStatus::Modifiee);
    assert_eq!(TourStatus::Planifiee.as_label(), "planifiée");
}

#[test]
fn test_unknown_status_label_is_preserved() {
    let status = TourStatus::from_label("en attente");
    assert_eq!(status, TourStatus::Other(String::from("en attente")));
    assert_eq!(status.as_label(), "en attente");
}

#[test]
fn test_empty_patch_is_rejected() {
    let patch = CalendarPatch::default();
    assert_eq!(
        patch.validate_against(None, None),
        Err(DomainError::EmptyCalendarPatch)
    );
}

#[test]
fn test_patch_with_preparation_after_delivery_is_rejected() {
    let patch = CalendarPatch {
        preparation_date: Some(date(2025, Month::March, 10)),
        delivery_date: Some(date(2025, Month::March, 5)),
        status: None,
    };
    assert_eq!(
        patch.validate_against(None, None),
        Err(DomainError::PreparationNotBeforeDelivery {
            preparation: date(2025, Month::March, 10),
            delivery: date(2025, Month::March, 5),
        })
    );
}

#[test]
fn test_patch_with_equal_dates_is_rejected() {
    let patch = CalendarPatch {
        preparation_date: Some(date(2025, Month::March, 5)),
        delivery_date: Some(date(2025, Month::March, 5)),
        status: None,
    };
    assert!(matches!(
        patch.validate_against(None, None),
        Err(DomainError::PreparationNotBeforeDelivery { .. })
    ));
}

#[test]
fn test_partial_patch_is_checked_against_stored_dates() {
    // Only the preparation date moves; the stored delivery date still
    // constrains it.
    let patch = CalendarPatch {
        preparation_date: Some(date(2025, Month::March, 12)),
        delivery_date: None,
        status: None,
    };
    assert!(matches!(
        patch.validate_against(
            Some(date(2025, Month::March, 3)),
            Some(date(2025, Month::March, 10))
        ),
        Err(DomainError::PreparationNotBeforeDelivery { .. })
    ));

    let patch = CalendarPatch {
        preparation_date: Some(date(2025, Month::March, 8)),
        delivery_date: None,
        status: None,
    };
    assert!(
        patch
            .validate_against(
                Some(date(2025, Month::March, 3)),
                Some(date(2025, Month::March, 10))
            )
            .is_ok()
    );
}

#[test]
fn test_status_only_patch_is_valid() {
    let patch = CalendarPatch {
        preparation_date: None,
        delivery_date: None,
        status: Some(TourStatus::Modifiee),
    };
    assert!(patch.validate_against(None, None).is_ok());
}
