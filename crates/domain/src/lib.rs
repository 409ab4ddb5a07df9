// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod quote;
mod rules;
mod tally;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use quote::{
    PurchaseQuote, calculate_seats_to_reserve, calculate_total_amount, quote_purchase,
};
pub use rules::{MAX_TICKETS_PER_PURCHASE, MIN_ADULT_TICKETS_REQUIRED, PriceTable, PurchaseRules};
pub use tally::TicketTally;
pub use types::{AccountId, TicketType, TicketTypeRequest};
pub use validation::{validate_adult_presence, validate_purchase, validate_ticket_count};
