// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion of untrusted purchase payloads into domain requests.

use cinema_tickets_domain::{DomainError, TicketType, TicketTypeRequest};
use num_traits::ToPrimitive;
use thiserror::Error;

use crate::error::ApiError;
use crate::request_response::TicketTypeRequestDto;

/// Rule tag for account ids the domain never gets to see.
const INVALID_ACCOUNT_ID_RULE: &str = DomainError::InvalidAccountId(0).reason();

/// Errors raised while reading a single ticket type request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PurchaseRequestError {
    /// The count has a fractional part.
    #[error("Number of tickets must be a whole number, got {0}")]
    NonIntegerCount(String),

    /// The count is too large to be represented.
    #[error("Number of tickets is out of range: {0}")]
    CountOutOfRange(String),

    /// The ticket type or count was rejected by the domain.
    #[error(transparent)]
    Ticket(#[from] DomainError),
}

impl PurchaseRequestError {
    /// Returns the name of the request field that was invalid.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Ticket(DomainError::InvalidTicketType(_)) => "ticket_type",
            _ => "number_of_tickets",
        }
    }
}

/// Converts a raw JSON number into an integer.
///
/// Whole-valued floats such as `3.0` are accepted.
fn integer_from_number(number: &serde_json::Number) -> Result<i64, PurchaseRequestError> {
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }

    if number.is_u64() {
        return Err(PurchaseRequestError::CountOutOfRange(number.to_string()));
    }

    let value: f64 = number
        .as_f64()
        .ok_or_else(|| PurchaseRequestError::NonIntegerCount(number.to_string()))?;
    if value.fract() != 0.0 {
        return Err(PurchaseRequestError::NonIntegerCount(number.to_string()));
    }
    value
        .to_i64()
        .ok_or_else(|| PurchaseRequestError::CountOutOfRange(number.to_string()))
}

/// Reads the account id of a purchase from its raw JSON value.
///
/// Anything other than a whole number is rejected under the same rule as a
/// non-positive id. The sign is checked later by the domain.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` with rule `invalid_account_id` if
/// the value is not a whole number in the `i64` range.
pub fn parse_account_id(value: &serde_json::Value) -> Result<i64, ApiError> {
    let account_id: Option<i64> = match value {
        serde_json::Value::Number(number) => integer_from_number(number).ok(),
        _ => None,
    };

    account_id.ok_or_else(|| {
        tracing::warn!(account_id = %value, "Rejected non-integer account id");
        ApiError::DomainRuleViolation {
            rule: String::from(INVALID_ACCOUNT_ID_RULE),
            message: format!("Invalid account id: {value}. Must be a positive integer"),
        }
    })
}

/// Parses a single ticket type request DTO.
///
/// # Errors
///
/// Returns an error if:
/// - The ticket type is unknown
/// - The count is not a whole number
/// - The count is negative or out of range
pub fn parse_ticket_type_request(
    dto: &TicketTypeRequestDto,
) -> Result<TicketTypeRequest, PurchaseRequestError> {
    // An unknown type is reported before a bad count
    let ticket_type: TicketType = dto.ticket_type.parse()?;
    let count: i64 = integer_from_number(&dto.number_of_tickets).inspect_err(|err| {
        if matches!(err, PurchaseRequestError::CountOutOfRange(_)) {
            tracing::warn!(ticket_type = %ticket_type, "Ticket count out of range");
        }
    })?;
    Ok(TicketTypeRequest::with_count(ticket_type, count)?)
}

/// Parses every ticket type request DTO of a purchase.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` naming the first invalid entry.
pub fn parse_ticket_type_requests(
    dtos: &[TicketTypeRequestDto],
) -> Result<Vec<TicketTypeRequest>, ApiError> {
    dtos.iter()
        .enumerate()
        .map(|(index, dto)| {
            parse_ticket_type_request(dto).map_err(|err| ApiError::InvalidInput {
                field: format!("ticket_type_requests[{index}].{}", err.field()),
                message: err.to_string(),
            })
        })
        .collect()
}
