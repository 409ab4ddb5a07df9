// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for purchase operations.

use cinema_tickets::{SeatReservationService, TicketPaymentService, TicketService};
use cinema_tickets_domain::{PurchaseQuote, PurchaseRules, TicketType, TicketTypeRequest};

use crate::error::{ApiError, translate_core_error};
use crate::purchase_request::{parse_account_id, parse_ticket_type_requests};
use crate::request_response::{
    GetPurchaseRulesResponse, PurchaseTicketsRequest, PurchaseTicketsResponse,
    QuotePurchaseResponse, TicketPriceInfo,
};

/// Purchases tickets.
///
/// The request is parsed into domain values, then handed to the ticket
/// service which validates it, takes payment and reserves seats.
///
/// # Arguments
///
/// * `service` - The ticket service
/// * `request` - The purchase request
///
/// # Returns
///
/// * `Ok(PurchaseTicketsResponse)` on success
/// * `Err(ApiError)` if the request is malformed, breaks a purchase rule,
///   or an external service fails
///
/// # Errors
///
/// Returns an error if:
/// - The account id is not a whole number
/// - A ticket type or count is malformed
/// - The purchase breaks a purchase rule
/// - Payment or seat reservation fails
pub fn purchase_tickets<P, R>(
    service: &TicketService<P, R>,
    request: &PurchaseTicketsRequest,
) -> Result<PurchaseTicketsResponse, ApiError>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    let account_id: i64 = parse_account_id(&request.account_id)?;
    let ticket_type_requests: Vec<TicketTypeRequest> =
        parse_ticket_type_requests(&request.ticket_type_requests)?;

    let quote: PurchaseQuote = service
        .purchase_tickets(account_id, &ticket_type_requests)
        .map_err(translate_core_error)?;

    Ok(PurchaseTicketsResponse {
        account_id: quote.account_id.value(),
        total_tickets: quote.tally.total(),
        total_amount: quote.total_amount,
        seats_reserved: quote.seats_to_reserve,
        message: format!(
            "Purchased {} ticket(s) for account {}",
            quote.tally.total(),
            quote.account_id
        ),
    })
}

/// Computes what a purchase would cost without charging or reserving.
///
/// # Errors
///
/// Returns an error if:
/// - A ticket type or count is malformed
/// - The purchase breaks a purchase rule
pub fn quote_purchase<P, R>(
    service: &TicketService<P, R>,
    request: &PurchaseTicketsRequest,
) -> Result<QuotePurchaseResponse, ApiError>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    let account_id: i64 = parse_account_id(&request.account_id)?;
    let ticket_type_requests: Vec<TicketTypeRequest> =
        parse_ticket_type_requests(&request.ticket_type_requests)?;

    let quote: PurchaseQuote = service
        .quote_purchase(account_id, &ticket_type_requests)
        .map_err(translate_core_error)?;

    Ok(QuotePurchaseResponse {
        account_id: quote.account_id.value(),
        adult_tickets: quote.tally.adult,
        child_tickets: quote.tally.child,
        infant_tickets: quote.tally.infant,
        total_tickets: quote.tally.total(),
        total_amount: quote.total_amount,
        seats_to_reserve: quote.seats_to_reserve,
    })
}

/// Describes the purchase rules a service enforces.
#[must_use]
pub fn get_purchase_rules<P, R>(service: &TicketService<P, R>) -> GetPurchaseRulesResponse
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    let rules: &PurchaseRules = service.rules();

    GetPurchaseRulesResponse {
        max_tickets_per_purchase: rules.max_tickets_per_purchase(),
        min_adult_tickets: rules.min_adult_tickets(),
        prices: TicketType::ALL
            .iter()
            .map(|ticket_type| TicketPriceInfo {
                ticket_type: *ticket_type,
                price: rules.prices().price_of(*ticket_type),
                occupies_seat: ticket_type.occupies_seat(),
            })
            .collect(),
    }
}
