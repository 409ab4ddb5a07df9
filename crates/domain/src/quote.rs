// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pricing and seat calculation for validated purchases.
//!
//! Everything here is a pure function of the request and the rules.

use crate::error::DomainError;
use crate::rules::{PriceTable, PurchaseRules};
use crate::tally::TicketTally;
use crate::types::{AccountId, TicketType, TicketTypeRequest};
use crate::validation::validate_purchase;

/// The validated outcome of a purchase, before any payment or reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseQuote {
    /// The account to charge.
    pub account_id: AccountId,
    /// The aggregated ticket counts.
    pub tally: TicketTally,
    /// The amount to charge, in integer currency units.
    pub total_amount: u64,
    /// The number of seats to reserve.
    pub seats_to_reserve: u64,
}

/// Calculates the amount to pay for a set of tickets.
#[must_use]
pub fn calculate_total_amount(tally: &TicketTally, prices: &PriceTable) -> u64 {
    TicketType::ALL.iter().fold(0, |total, ticket_type| {
        let price: u64 = u64::from(prices.price_of(*ticket_type));
        total.saturating_add(tally.count_of(*ticket_type).saturating_mul(price))
    })
}

/// Calculates how many seats a set of tickets needs.
///
/// Infant tickets do not take a seat.
#[must_use]
pub fn calculate_seats_to_reserve(tally: &TicketTally) -> u64 {
    TicketType::ALL
        .iter()
        .filter(|ticket_type| ticket_type.occupies_seat())
        .fold(0, |seats, ticket_type| {
            seats.saturating_add(tally.count_of(*ticket_type))
        })
}

/// Validates a purchase request and computes what it would cost.
///
/// # Arguments
///
/// * `rules` - The purchase rules to apply
/// * `account_id` - The raw account identifier
/// * `requests` - The ticket type requests, in any order
///
/// # Returns
///
/// * `Ok(PurchaseQuote)` with the amount to charge and seats to reserve
/// * `Err(DomainError)` if the account id or any purchase rule is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The account id is not positive
/// - No tickets are requested
/// - The maximum ticket count is exceeded
/// - Too few adult tickets are requested
pub fn quote_purchase(
    rules: &PurchaseRules,
    account_id: i64,
    requests: &[TicketTypeRequest],
) -> Result<PurchaseQuote, DomainError> {
    let account_id: AccountId = AccountId::new(account_id)?;
    let tally: TicketTally = TicketTally::from_requests(requests);

    validate_purchase(&tally, rules)?;

    Ok(PurchaseQuote {
        account_id,
        tally,
        total_amount: calculate_total_amount(&tally, rules.prices()),
        seats_to_reserve: calculate_seats_to_reserve(&tally),
    })
}
