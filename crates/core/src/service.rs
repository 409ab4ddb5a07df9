// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collaborators::{SeatReservationService, TicketPaymentService};
use crate::error::CoreError;
use cinema_tickets_domain::{PurchaseQuote, PurchaseRules, TicketTypeRequest, quote_purchase};
use tracing::{debug, error, info, warn};

/// Validates ticket purchases and drives payment and seat reservation.
///
/// The service holds no mutable state. Every call is independent, so a
/// single instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct TicketService<P, R> {
    rules: PurchaseRules,
    payment_service: P,
    seat_reservation_service: R,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService,
    R: SeatReservationService,
{
    /// Creates a ticket service using the default purchase rules.
    ///
    /// # Arguments
    ///
    /// * `payment_service` - The service used to charge accounts
    /// * `seat_reservation_service` - The service used to reserve seats
    #[must_use]
    pub fn new(payment_service: P, seat_reservation_service: R) -> Self {
        Self::with_rules(
            PurchaseRules::default(),
            payment_service,
            seat_reservation_service,
        )
    }

    /// Creates a ticket service with custom purchase rules.
    #[must_use]
    pub const fn with_rules(
        rules: PurchaseRules,
        payment_service: P,
        seat_reservation_service: R,
    ) -> Self {
        Self {
            rules,
            payment_service,
            seat_reservation_service,
        }
    }

    /// Returns the purchase rules this service enforces.
    #[must_use]
    pub const fn rules(&self) -> &PurchaseRules {
        &self.rules
    }

    /// Validates a purchase and computes its cost without charging or reserving.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPurchase` if the account id or any
    /// purchase rule is invalid.
    pub fn quote_purchase(
        &self,
        account_id: i64,
        ticket_type_requests: &[TicketTypeRequest],
    ) -> Result<PurchaseQuote, CoreError> {
        let quote: PurchaseQuote = quote_purchase(&self.rules, account_id, ticket_type_requests)?;

        debug!(
            account_id = %quote.account_id,
            total_tickets = quote.tally.total(),
            total_amount = quote.total_amount,
            seats_to_reserve = quote.seats_to_reserve,
            "Purchase validated"
        );

        Ok(quote)
    }

    /// Purchases tickets for an account.
    ///
    /// The purchase is validated first. Only a valid purchase reaches the
    /// external services: payment is taken, then seats are reserved. A
    /// failed payment means no reservation is attempted. A failed
    /// reservation does not refund the payment.
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account to charge, must be positive
    /// * `ticket_type_requests` - The tickets to buy, in any order
    ///
    /// # Returns
    ///
    /// * `Ok(PurchaseQuote)` describing what was charged and reserved
    /// * `Err(CoreError)` if the purchase was rejected or a service failed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The purchase breaks a domain rule (`CoreError::InvalidPurchase`)
    /// - The payment service fails (`CoreError::PaymentFailed`)
    /// - The seat reservation service fails (`CoreError::SeatReservationFailed`)
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        ticket_type_requests: &[TicketTypeRequest],
    ) -> Result<PurchaseQuote, CoreError> {
        let quote: PurchaseQuote = self
            .quote_purchase(account_id, ticket_type_requests)
            .inspect_err(|err| {
                warn!(account_id, error = %err, "Ticket purchase rejected");
            })?;

        self.payment_service
            .make_payment(quote.account_id, quote.total_amount)
            .map_err(|err| {
                warn!(
                    account_id = %quote.account_id,
                    total_amount = quote.total_amount,
                    error = %err,
                    "Payment failed"
                );
                CoreError::PaymentFailed(err)
            })?;

        self.seat_reservation_service
            .reserve_seat(quote.account_id, quote.seats_to_reserve)
            .map_err(|err| {
                // Payment has already been taken at this point
                error!(
                    account_id = %quote.account_id,
                    total_amount = quote.total_amount,
                    seats_to_reserve = quote.seats_to_reserve,
                    error = %err,
                    "Seat reservation failed after payment"
                );
                CoreError::SeatReservationFailed(err)
            })?;

        info!(
            account_id = %quote.account_id,
            total_amount = quote.total_amount,
            seats_reserved = quote.seats_to_reserve,
            "Tickets purchased"
        );

        Ok(quote)
    }
}
