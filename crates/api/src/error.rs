// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cinema_tickets::CoreError;
use cinema_tickets_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A purchase rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The payment service failed.
    PaymentFailed {
        /// The error reported by the payment service.
        message: String,
    },
    /// The seat reservation service failed after payment was taken.
    SeatReservationFailed {
        /// The error reported by the seat reservation service.
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
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Purchase rule violation ({rule}): {message}")
            }
            Self::PaymentFailed { message } => write!(f, "Payment failed: {message}"),
            Self::SeatReservationFailed { message } => {
                write!(f, "Seat reservation failed: {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTicketType(_) => ApiError::InvalidInput {
            field: String::from("ticket_type"),
            message: err.to_string(),
        },
        DomainError::InvalidTicketCount { .. } => ApiError::InvalidInput {
            field: String::from("number_of_tickets"),
            message: err.to_string(),
        },
        DomainError::InvalidAccountId(_)
        | DomainError::NoTicketsRequested
        | DomainError::ExceededMaximumTickets { .. }
        | DomainError::AdultTicketRequired { .. } => ApiError::DomainRuleViolation {
            rule: String::from(err.reason()),
            message: err.to_string(),
        },
        DomainError::InvalidPurchaseRules(_) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::InvalidPurchase(domain_err) => translate_domain_error(domain_err),
        CoreError::PaymentFailed(inner) => ApiError::PaymentFailed {
            message: inner.to_string(),
        },
        CoreError::SeatReservationFailed(inner) => ApiError::SeatReservationFailed {
            message: inner.to_string(),
        },
    }
}
