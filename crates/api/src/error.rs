// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cocagne_domain::DomainError;
use cocagne_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent
/// the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTourId(value) => ApiError::InvalidInput {
            field: String::from("tournee_id"),
            message: format!("'{value}' is not a valid tour identifier"),
        },
        DomainError::InvalidPointId(value) => ApiError::InvalidInput {
            field: String::from("point_id"),
            message: format!("'{value}' is not a valid depot point identifier"),
        },
        DomainError::InvalidFrequency { days } => ApiError::InvalidInput {
            field: String::from("frequence"),
            message: format!("Invalid delivery frequency: {days}. Must be greater than 0"),
        },
        DomainError::EmptyCalendarPatch => ApiError::InvalidInput {
            field: String::from("body"),
            message: String::from(
                "At least one of jour_preparation, jour_livraison, or statut_tournee is required",
            ),
        },
        DomainError::PreparationNotBeforeDelivery {
            preparation,
            delivery,
        } => ApiError::DomainRuleViolation {
            rule: String::from("preparation_before_delivery"),
            message: format!(
                "Preparation date {preparation} must be strictly before delivery date {delivery}"
            ),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::NoEligibleDate {
            after,
            lookahead_days,
        } => ApiError::DomainRuleViolation {
            rule: String::from("no_eligible_date"),
            message: format!("No eligible delivery date within {lookahead_days} days of {after}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound(message) => Self::ResourceNotFound {
                resource_type: String::from("Record"),
                message,
            },
            _ => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}
