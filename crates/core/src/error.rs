// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collaborators::ServiceError;
use cinema_tickets_domain::DomainError;

/// Errors that can occur while purchasing tickets.
#[derive(Debug)]
pub enum CoreError {
    /// The purchase was rejected by a domain rule. Nothing was charged or reserved.
    InvalidPurchase(DomainError),
    /// The payment service failed. No seats were reserved.
    PaymentFailed(ServiceError),
    /// The seat reservation service failed after the payment was taken.
    SeatReservationFailed(ServiceError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPurchase(err) => write!(f, "Invalid purchase: {err}"),
            Self::PaymentFailed(err) => write!(f, "Payment failed: {err}"),
            Self::SeatReservationFailed(err) => write!(f, "Seat reservation failed: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPurchase(err) => Some(err),
            Self::PaymentFailed(err) | Self::SeatReservationFailed(err) => Some(&**err),
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::InvalidPurchase(err)
    }
}
