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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod purchase_request;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{get_purchase_rules, purchase_tickets, quote_purchase};
pub use purchase_request::{
    PurchaseRequestError, parse_account_id, parse_ticket_type_request, parse_ticket_type_requests,
};
pub use request_response::{
    GetPurchaseRulesResponse, PurchaseTicketsRequest, PurchaseTicketsResponse,
    QuotePurchaseResponse, TicketPriceInfo, TicketTypeRequestDto,
};
