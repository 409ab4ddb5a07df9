// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use cinema_tickets::{SeatReservationService, ServiceError, TicketPaymentService, TicketService};
use cinema_tickets_domain::AccountId;

use crate::{PurchaseTicketsRequest, TicketTypeRequestDto};

/// A service stub that succeeds, or fails with the given message.
pub struct StubService {
    failure: Option<&'static str>,
}

impl StubService {
    pub const fn succeeding() -> Self {
        Self { failure: None }
    }

    pub const fn failing(message: &'static str) -> Self {
        Self {
            failure: Some(message),
        }
    }

    fn outcome(&self) -> Result<(), ServiceError> {
        match self.failure {
            Some(message) => Err(message.into()),
            None => Ok(()),
        }
    }
}

impl TicketPaymentService for StubService {
    fn make_payment(&self, _account_id: AccountId, _amount: u64) -> Result<(), ServiceError> {
        self.outcome()
    }
}

impl SeatReservationService for StubService {
    fn reserve_seat(&self, _account_id: AccountId, _seats: u64) -> Result<(), ServiceError> {
        self.outcome()
    }
}

pub type TestTicketService = TicketService<StubService, StubService>;

pub fn create_test_service() -> TestTicketService {
    TicketService::new(StubService::succeeding(), StubService::succeeding())
}

pub fn dto(ticket_type: &str, number_of_tickets: i64) -> TicketTypeRequestDto {
    TicketTypeRequestDto {
        ticket_type: ticket_type.to_string(),
        number_of_tickets: serde_json::Number::from(number_of_tickets),
    }
}

pub fn create_test_request(
    account_id: i64,
    ticket_type_requests: Vec<TicketTypeRequestDto>,
) -> PurchaseTicketsRequest {
    PurchaseTicketsRequest {
        account_id: serde_json::Value::from(account_id),
        ticket_type_requests,
    }
}

pub fn create_family_request() -> PurchaseTicketsRequest {
    create_test_request(
        123,
        vec![dto("ADULT", 2), dto("CHILD", 3), dto("INFANT", 1)],
    )
}
