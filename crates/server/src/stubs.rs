// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stand-ins for the third-party payment and seat booking services.
//!
//! Both always succeed and only record the call in the log.

use cinema_tickets::{SeatReservationService, ServiceError, TicketPaymentService};
use cinema_tickets_domain::AccountId;
use tracing::info;

/// Payment service that logs the charge and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPaymentService;

impl TicketPaymentService for LoggingPaymentService {
    fn make_payment(
        &self,
        account_id: AccountId,
        total_amount_to_pay: u64,
    ) -> Result<(), ServiceError> {
        info!(
            account_id = %account_id,
            amount = total_amount_to_pay,
            "Payment taken"
        );
        Ok(())
    }
}

/// Seat reservation service that logs the reservation and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u64,
    ) -> Result<(), ServiceError> {
        info!(
            account_id = %account_id,
            seats = total_seats_to_allocate,
            "Seats reserved"
        );
        Ok(())
    }
}
