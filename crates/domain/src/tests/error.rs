// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, TicketType};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidTicketType(String::from("VIP"));
    assert_eq!(
        format!("{err}"),
        "Invalid ticket type: 'VIP'. Must be one of ADULT, CHILD or INFANT"
    );

    let err: DomainError = DomainError::InvalidTicketCount {
        ticket_type: TicketType::Child,
        count: -2,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid number of CHILD tickets: -2. Must be a non-negative integer"
    );

    let err: DomainError = DomainError::InvalidAccountId(0);
    assert_eq!(
        format!("{err}"),
        "Invalid account id: 0. Must be greater than 0"
    );

    let err: DomainError = DomainError::NoTicketsRequested;
    assert_eq!(format!("{err}"), "At least one ticket must be purchased");

    let err: DomainError = DomainError::ExceededMaximumTickets {
        requested: 25,
        max: 20,
    };
    assert_eq!(
        format!("{err}"),
        "Exceeded maximum number of tickets per purchase: requested 25, maximum is 20"
    );

    let err: DomainError = DomainError::AdultTicketRequired {
        adult_tickets: 0,
        min: 1,
    };
    assert_eq!(
        format!("{err}"),
        "At least 1 adult ticket(s) required, but 0 requested"
    );

    let err: DomainError = DomainError::InvalidPurchaseRules(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid purchase rules: test");
}

#[test]
fn test_domain_error_reasons() {
    assert_eq!(
        DomainError::NoTicketsRequested.reason(),
        "zero_total_tickets"
    );
    assert_eq!(
        DomainError::ExceededMaximumTickets {
            requested: 21,
            max: 20
        }
        .reason(),
        "exceeded_max_tickets"
    );
    assert_eq!(
        DomainError::AdultTicketRequired {
            adult_tickets: 0,
            min: 1
        }
        .reason(),
        "adult_required"
    );
    assert_eq!(
        DomainError::InvalidAccountId(-1).reason(),
        "invalid_account_id"
    );
}

#[test]
fn test_domain_error_classification() {
    assert!(DomainError::InvalidTicketType(String::from("X")).is_invalid_input());
    assert!(
        DomainError::InvalidTicketCount {
            ticket_type: TicketType::Adult,
            count: -1
        }
        .is_invalid_input()
    );
    assert!(!DomainError::InvalidTicketType(String::from("X")).is_invalid_purchase());

    assert!(DomainError::NoTicketsRequested.is_invalid_purchase());
    assert!(DomainError::InvalidAccountId(0).is_invalid_purchase());
    assert!(!DomainError::NoTicketsRequested.is_invalid_input());

    let rules_err: DomainError = DomainError::InvalidPurchaseRules(String::from("x"));
    assert!(!rules_err.is_invalid_input());
    assert!(!rules_err.is_invalid_purchase());
}
