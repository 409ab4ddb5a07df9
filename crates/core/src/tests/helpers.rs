// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::{Arc, Mutex};

use cinema_tickets_domain::{AccountId, PurchaseRules, TicketType, TicketTypeRequest};

use crate::{SeatReservationService, ServiceError, TicketPaymentService, TicketService};

/// A call made to one of the external services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Payment { account_id: u64, amount: u64 },
    Reservation { account_id: u64, seats: u64 },
}

/// A failure raised by a stub service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubFailure(pub &'static str);

impl std::fmt::Display for StubFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for StubFailure {}

/// Call log shared by both recording services so ordering can be checked.
pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub struct RecordingPaymentService {
    log: CallLog,
    failure: Option<StubFailure>,
}

impl TicketPaymentService for RecordingPaymentService {
    fn make_payment(
        &self,
        account_id: AccountId,
        total_amount_to_pay: u64,
    ) -> Result<(), ServiceError> {
        self.log.lock().unwrap().push(Call::Payment {
            account_id: account_id.value(),
            amount: total_amount_to_pay,
        });
        match &self.failure {
            Some(failure) => Err(Box::new(failure.clone())),
            None => Ok(()),
        }
    }
}

pub struct RecordingSeatReservationService {
    log: CallLog,
    failure: Option<StubFailure>,
}

impl SeatReservationService for RecordingSeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        total_seats_to_allocate: u64,
    ) -> Result<(), ServiceError> {
        self.log.lock().unwrap().push(Call::Reservation {
            account_id: account_id.value(),
            seats: total_seats_to_allocate,
        });
        match &self.failure {
            Some(failure) => Err(Box::new(failure.clone())),
            None => Ok(()),
        }
    }
}

pub type TestTicketService = TicketService<RecordingPaymentService, RecordingSeatReservationService>;

pub fn create_test_service_with(
    rules: PurchaseRules,
    payment_failure: Option<StubFailure>,
    reservation_failure: Option<StubFailure>,
) -> (TestTicketService, CallLog) {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let payment: RecordingPaymentService = RecordingPaymentService {
        log: Arc::clone(&log),
        failure: payment_failure,
    };
    let reservation: RecordingSeatReservationService = RecordingSeatReservationService {
        log: Arc::clone(&log),
        failure: reservation_failure,
    };
    (TicketService::with_rules(rules, payment, reservation), log)
}

pub fn create_test_service() -> (TestTicketService, CallLog) {
    create_test_service_with(PurchaseRules::default(), None, None)
}

pub fn recorded_calls(log: &CallLog) -> Vec<Call> {
    log.lock().unwrap().clone()
}

pub const fn adult(count: u32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Adult, count)
}

pub const fn child(count: u32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Child, count)
}

pub const fn infant(count: u32) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Infant, count)
}
