// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contracts for the external services a purchase drives.
//!
//! Implementations are provided by the surrounding system. Both services
//! are trusted: a successful call means the effect happened exactly once.

use cinema_tickets_domain::AccountId;

/// Error raised by an external service, passed through to the caller as-is.
pub type ServiceError = Box<dyn std::error::Error + Send + Sync>;

/// Charges an account for a ticket purchase.
pub trait TicketPaymentService: Send + Sync {
    /// Charges `total_amount_to_pay` to the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the payment could not be taken.
    fn make_payment(
        &self,
        account_id: AccountId,
        total_amount_to_pay: u64,
    ) -> Result<(), ServiceError>;
}

/// Reserves seats for a ticket purchase.
pub trait SeatReservationService: Send + Sync {
    /// Reserves `total_seats_to_allocate` seats for the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the seats could not be reserved.
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u64,
    ) -> Result<(), ServiceError>;
}
