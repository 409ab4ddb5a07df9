// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The category of attendee a ticket is bought for.
///
/// The set is closed: pricing and seating rules are defined per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// An adult attendee.
    Adult,
    /// A child attendee.
    Child,
    /// An infant, seated on an adult's lap.
    Infant,
}

impl TicketType {
    /// Every ticket type, in display order.
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Converts this ticket type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }

    /// Returns whether a ticket of this type needs its own seat.
    ///
    /// Infants sit on an adult's lap and are never allocated a seat.
    #[must_use]
    pub const fn occupies_seat(&self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl FromStr for TicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            _ => Err(DomainError::InvalidTicketType(s.to_string())),
        }
    }
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request for a number of tickets of a single type.
///
/// Fields are private so a request cannot change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    number_of_tickets: u32,
}

impl TicketTypeRequest {
    /// Creates a new ticket type request.
    ///
    /// # Arguments
    ///
    /// * `ticket_type` - The ticket type being requested
    /// * `number_of_tickets` - How many tickets of that type
    #[must_use]
    pub const fn new(ticket_type: TicketType, number_of_tickets: u32) -> Self {
        Self {
            ticket_type,
            number_of_tickets,
        }
    }

    /// Creates a ticket type request from untrusted raw values.
    ///
    /// # Arguments
    ///
    /// * `ticket_type` - The ticket type name (`ADULT`, `CHILD` or `INFANT`)
    /// * `number_of_tickets` - The requested count
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ticket type is not recognized
    /// - The count is negative or larger than `u32::MAX`
    pub fn parse(ticket_type: &str, number_of_tickets: i64) -> Result<Self, DomainError> {
        Self::with_count(ticket_type.parse()?, number_of_tickets)
    }

    /// Creates a ticket type request for a known type from an untrusted count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTicketCount` if the count is negative or
    /// larger than `u32::MAX`.
    pub fn with_count(
        ticket_type: TicketType,
        number_of_tickets: i64,
    ) -> Result<Self, DomainError> {
        let count: u32 =
            u32::try_from(number_of_tickets).map_err(|_| DomainError::InvalidTicketCount {
                ticket_type,
                count: number_of_tickets,
            })?;
        Ok(Self::new(ticket_type, count))
    }

    /// Returns the ticket type.
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Returns the number of tickets requested.
    #[must_use]
    pub const fn number_of_tickets(&self) -> u32 {
        self.number_of_tickets
    }
}

/// Identifies the account a purchase is charged to.
///
/// Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(u64);

impl AccountId {
    /// Creates an account identifier from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAccountId` if the value is zero or negative.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        match u64::try_from(value) {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(DomainError::InvalidAccountId(value)),
        }
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
