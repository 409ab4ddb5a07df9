// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::rules::PurchaseRules;
use crate::tally::TicketTally;

/// Validates that the total ticket count is within the allowed range.
///
/// # Arguments
///
/// * `tally` - The aggregated ticket counts
/// * `rules` - The purchase rules to check against
///
/// # Returns
///
/// * `Ok(())` if the total is between 1 and the configured maximum
/// * `Err(DomainError)` otherwise
///
/// # Errors
///
/// Returns an error if:
/// - No tickets are requested
/// - More tickets than `max_tickets_per_purchase` are requested
pub fn validate_ticket_count(tally: &TicketTally, rules: &PurchaseRules) -> Result<(), DomainError> {
    let total: u64 = tally.total();

    // Rule: a purchase must contain at least one ticket
    if total == 0 {
        return Err(DomainError::NoTicketsRequested);
    }

    // Rule: a purchase may not exceed the maximum ticket count
    let max: u32 = rules.max_tickets_per_purchase();
    if total > u64::from(max) {
        return Err(DomainError::ExceededMaximumTickets {
            requested: total,
            max,
        });
    }

    Ok(())
}

/// Validates that enough adult tickets are present.
///
/// Child and infant tickets cannot be bought without an adult, so a single
/// minimum on adult tickets covers every child-only or infant-only mix.
///
/// # Errors
///
/// Returns `DomainError::AdultTicketRequired` if fewer than
/// `min_adult_tickets` adult tickets are requested.
pub fn validate_adult_presence(
    tally: &TicketTally,
    rules: &PurchaseRules,
) -> Result<(), DomainError> {
    let min: u32 = rules.min_adult_tickets();
    if tally.adult < u64::from(min) {
        return Err(DomainError::AdultTicketRequired {
            adult_tickets: tally.adult,
            min,
        });
    }
    Ok(())
}

/// Validates a purchase against all ticket rules.
///
/// Checks run in a fixed order so the reported error is deterministic:
/// ticket count first, then adult presence.
///
/// # Errors
///
/// Returns the first rule violation found.
pub fn validate_purchase(tally: &TicketTally, rules: &PurchaseRules) -> Result<(), DomainError> {
    validate_ticket_count(tally, rules)?;
    validate_adult_presence(tally, rules)?;
    Ok(())
}
