// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::TicketType;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Ticket type string is not one of the known ticket types.
    InvalidTicketType(String),
    /// Ticket count is negative or does not fit the supported range.
    InvalidTicketCount {
        /// The ticket type the count was supplied for.
        ticket_type: TicketType,
        /// The rejected count.
        count: i64,
    },
    /// Account identifier is not a positive integer.
    InvalidAccountId(i64),
    /// The purchase contains no tickets at all.
    NoTicketsRequested,
    /// The purchase exceeds the maximum number of tickets allowed.
    ExceededMaximumTickets {
        /// The total number of tickets requested.
        requested: u64,
        /// The configured maximum.
        max: u32,
    },
    /// The purchase does not contain enough adult tickets.
    AdultTicketRequired {
        /// The number of adult tickets requested.
        adult_tickets: u64,
        /// The configured minimum.
        min: u32,
    },
    /// Purchase rules are inconsistent.
    InvalidPurchaseRules(String),
}

impl DomainError {
    /// Returns a stable tag identifying which rule or input check failed.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidTicketType(_) => "invalid_ticket_type",
            Self::InvalidTicketCount { .. } => "invalid_ticket_count",
            Self::InvalidAccountId(_) => "invalid_account_id",
            Self::NoTicketsRequested => "zero_total_tickets",
            Self::ExceededMaximumTickets { .. } => "exceeded_max_tickets",
            Self::AdultTicketRequired { .. } => "adult_required",
            Self::InvalidPurchaseRules(_) => "invalid_purchase_rules",
        }
    }

    /// Returns whether this error describes a malformed ticket request.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidTicketType(_) | Self::InvalidTicketCount { .. }
        )
    }

    /// Returns whether this error describes a purchase that breaks a business rule.
    #[must_use]
    pub const fn is_invalid_purchase(&self) -> bool {
        matches!(
            self,
            Self::InvalidAccountId(_)
                | Self::NoTicketsRequested
                | Self::ExceededMaximumTickets { .. }
                | Self::AdultTicketRequired { .. }
        )
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTicketType(value) => write!(
                f,
                "Invalid ticket type: '{value}'. Must be one of ADULT, CHILD or INFANT"
            ),
            Self::InvalidTicketCount { ticket_type, count } => write!(
                f,
                "Invalid number of {ticket_type} tickets: {count}. Must be a non-negative integer"
            ),
            Self::InvalidAccountId(account_id) => write!(
                f,
                "Invalid account id: {account_id}. Must be greater than 0"
            ),
            Self::NoTicketsRequested => {
                write!(f, "At least one ticket must be purchased")
            }
            Self::ExceededMaximumTickets { requested, max } => write!(
                f,
                "Exceeded maximum number of tickets per purchase: requested {requested}, maximum is {max}"
            ),
            Self::AdultTicketRequired { adult_tickets, min } => write!(
                f,
                "At least {min} adult ticket(s) required, but {adult_tickets} requested"
            ),
            Self::InvalidPurchaseRules(msg) => write!(f, "Invalid purchase rules: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
