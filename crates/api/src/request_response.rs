// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use cinema_tickets_domain::TicketType;
use serde::{Deserialize, Serialize};

/// One entry of a purchase request, as received from a client.
///
/// Values are untrusted. The count is kept as a raw JSON number so that
/// fractional and out-of-range counts can be reported as invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequestDto {
    /// The ticket type name (`ADULT`, `CHILD` or `INFANT`).
    pub ticket_type: String,
    /// The number of tickets of this type.
    pub number_of_tickets: serde_json::Number,
}

/// API request to purchase, or quote, a set of tickets.
///
/// The account id is kept as a raw JSON value so that strings and fractions
/// are reported under the account id rule instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTicketsRequest {
    /// The account to charge.
    pub account_id: serde_json::Value,
    /// The tickets to buy.
    pub ticket_type_requests: Vec<TicketTypeRequestDto>,
}

/// API response for a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTicketsResponse {
    /// The account that was charged.
    pub account_id: u64,
    /// The total number of tickets bought, infants included.
    pub total_tickets: u64,
    /// The amount charged, in integer currency units.
    pub total_amount: u64,
    /// The number of seats reserved.
    pub seats_reserved: u64,
    /// A success message.
    pub message: String,
}

/// API response describing what a purchase would cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotePurchaseResponse {
    /// The account that would be charged.
    pub account_id: u64,
    /// The number of adult tickets.
    pub adult_tickets: u64,
    /// The number of child tickets.
    pub child_tickets: u64,
    /// The number of infant tickets.
    pub infant_tickets: u64,
    /// The total number of tickets.
    pub total_tickets: u64,
    /// The amount that would be charged.
    pub total_amount: u64,
    /// The number of seats that would be reserved.
    pub seats_to_reserve: u64,
}

/// Price and seating information for one ticket type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPriceInfo {
    /// The ticket type.
    pub ticket_type: TicketType,
    /// The price of one ticket.
    pub price: u32,
    /// Whether the ticket needs a seat.
    pub occupies_seat: bool,
}

/// API response describing the purchase rules in force.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPurchaseRulesResponse {
    /// Maximum number of tickets per purchase.
    pub max_tickets_per_purchase: u32,
    /// Minimum number of adult tickets per purchase.
    pub min_adult_tickets: u32,
    /// Price of each ticket type.
    pub prices: Vec<TicketPriceInfo>,
}
