// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Tour identifier is missing or not a positive integer.
    InvalidTourId(String),
    /// Depot point identifier is missing or not a positive integer.
    InvalidPointId(String),
    /// Delivery frequency must be at least one day.
    InvalidFrequency {
        /// The rejected frequency value, in days.
        days: u32,
    },
    /// A calendar update was requested with no fields to apply.
    EmptyCalendarPatch,
    /// Preparation date must be strictly before delivery date.
    PreparationNotBeforeDelivery {
        /// The effective preparation date.
        preparation: time::Date,
        /// The effective delivery date.
        delivery: time::Date,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// No eligible delivery date exists within the bounded lookahead.
    NoEligibleDate {
        /// The date the search started strictly after.
        after: time::Date,
        /// The lookahead bound, in days.
        lookahead_days: u16,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTourId(value) => {
                write!(f, "Invalid tour id: '{value}'. Must be a positive integer")
            }
            Self::InvalidPointId(value) => {
                write!(
                    f,
                    "Invalid depot point id: '{value}'. Must be a positive integer"
                )
            }
            Self::InvalidFrequency { days } => {
                write!(
                    f,
                    "Invalid delivery frequency: {days} days. Must be at least 1"
                )
            }
            Self::EmptyCalendarPatch => {
                write!(
                    f,
                    "At least one of preparation date, delivery date or status must be provided"
                )
            }
            Self::PreparationNotBeforeDelivery {
                preparation,
                delivery,
            } => {
                write!(
                    f,
                    "Preparation date {preparation} must be strictly before delivery date {delivery}"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::NoEligibleDate {
                after,
                lookahead_days,
            } => {
                write!(
                    f,
                    "No eligible delivery date within {lookahead_days} days after {after}"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
