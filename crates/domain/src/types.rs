// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Core domain types for the delivery planner.
//!
//! Dates are calendar dates only; the planner never reasons about times
//! of day.

use crate::error::DomainError;
use time::Date;

/// Status of a delivery tour.
///
/// The known statuses form a closed set, but operators have historically
/// entered free text, so unknown labels round-trip through [`Self::Other`]
/// rather than being rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourStatus {
    /// The tour has been prepared but not yet scheduled.
    Preparee,
    /// The tour has delivery dates committed to the calendar.
    Planifiee,
    /// The tour's calendar was modified after planning.
    Modifiee,
    /// Any other operator-entered label.
    Other(String),
}

impl TourStatus {
    /// Parses a status label. Never fails: unknown labels become
    /// [`Self::Other`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "préparée" => Self::Preparee,
            "planifiée" => Self::Planifiee,
            "modifiée" => Self::Modifiee,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the storage label for this status.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            Self::Preparee => "préparée",
            Self::Planifiee => "planifiée",
            Self::Modifiee => "modifiée",
            Self::Other(label) => label,
        }
    }
}

impl std::fmt::Display for TourStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// A partial update to a tour's calendar record.
///
/// Absent fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarPatch {
    /// New preparation date, if updating.
    pub preparation_date: Option<Date>,
    /// New delivery date, if updating.
    pub delivery_date: Option<Date>,
    /// New status label, if updating.
    pub status: Option<TourStatus>,
}

impl CalendarPatch {
    /// Returns `true` if the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.preparation_date.is_none() && self.delivery_date.is_none() && self.status.is_none()
    }

    /// Validates this patch against the tour's currently stored dates.
    ///
    /// The effective pair (patched value where supplied, stored value
    /// otherwise) must keep preparation strictly before delivery whenever
    /// both are set.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCalendarPatch`] for an all-absent patch,
    /// or [`DomainError::PreparationNotBeforeDelivery`] when the effective
    /// dates violate the ordering invariant.
    pub fn validate_against(
        &self,
        current_preparation: Option<Date>,
        current_delivery: Option<Date>,
    ) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::EmptyCalendarPatch);
        }

        let preparation = self.preparation_date.or(current_preparation);
        let delivery = self.delivery_date.or(current_delivery);

        if let (Some(preparation), Some(delivery)) = (preparation, delivery)
            && preparation >= delivery
        {
            return Err(DomainError::PreparationNotBeforeDelivery {
                preparation,
                delivery,
            });
        }

        Ok(())
    }
}
