// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, PriceTable, PurchaseQuote, PurchaseRules, TicketTally, TicketType,
    TicketTypeRequest, calculate_seats_to_reserve, calculate_total_amount, quote_purchase,
};

fn family_requests() -> Vec<TicketTypeRequest> {
    vec![
        TicketTypeRequest::new(TicketType::Adult, 2),
        TicketTypeRequest::new(TicketType::Child, 3),
        TicketTypeRequest::new(TicketType::Infant, 1),
    ]
}

#[test]
fn test_calculate_total_amount_uses_price_table() {
    let tally: TicketTally = TicketTally::from_requests(&family_requests());
    assert_eq!(calculate_total_amount(&tally, &PriceTable::default()), 70);
    assert_eq!(calculate_total_amount(&tally, &PriceTable::new(25, 12, 3)), 89);
}

#[test]
fn test_calculate_seats_excludes_infants() {
    let tally: TicketTally = TicketTally::from_requests(&family_requests());
    assert_eq!(calculate_seats_to_reserve(&tally), 5);
}

#[test]
fn test_quote_purchase_for_family() {
    let quote: PurchaseQuote =
        quote_purchase(&PurchaseRules::default(), 123, &family_requests()).unwrap();

    assert_eq!(quote.account_id.value(), 123);
    assert_eq!(quote.total_amount, 70);
    assert_eq!(quote.seats_to_reserve, 5);
    assert_eq!(quote.tally.total(), 6);
}

#[test]
fn test_quote_purchase_ignores_request_order() {
    let mut reversed: Vec<TicketTypeRequest> = family_requests();
    reversed.reverse();

    let forward: PurchaseQuote =
        quote_purchase(&PurchaseRules::default(), 1, &family_requests()).unwrap();
    let backward: PurchaseQuote =
        quote_purchase(&PurchaseRules::default(), 1, &reversed).unwrap();

    assert_eq!(forward, backward);
}

#[test]
fn test_quote_purchase_rejects_invalid_account_before_counting() {
    let result: Result<PurchaseQuote, DomainError> =
        quote_purchase(&PurchaseRules::default(), 0, &[]);
    assert_eq!(result, Err(DomainError::InvalidAccountId(0)));
}

#[test]
fn test_quote_purchase_rejects_zero_tickets() {
    let result: Result<PurchaseQuote, DomainError> = quote_purchase(
        &PurchaseRules::default(),
        1,
        &[TicketTypeRequest::new(TicketType::Child, 0)],
    );
    assert_eq!(result, Err(DomainError::NoTicketsRequested));
}

#[test]
fn test_quote_purchase_rejects_empty_request_list() {
    let result: Result<PurchaseQuote, DomainError> =
        quote_purchase(&PurchaseRules::default(), 1, &[]);
    assert_eq!(result, Err(DomainError::NoTicketsRequested));
}

#[test]
fn test_quote_purchase_rejects_adult_overflow() {
    let result: Result<PurchaseQuote, DomainError> = quote_purchase(
        &PurchaseRules::default(),
        1,
        &[TicketTypeRequest::new(TicketType::Adult, 25)],
    );
    assert!(matches!(
        result,
        Err(DomainError::ExceededMaximumTickets { requested: 25, max: 20 })
    ));
}

#[test]
fn test_quote_purchase_matches_formula_over_small_grid() {
    let rules: PurchaseRules = PurchaseRules::default();

    for adult in 1..=20_u32 {
        for child in 0..=(20 - adult) {
            for infant in 0..=(20 - adult - child) {
                let requests: [TicketTypeRequest; 3] = [
                    TicketTypeRequest::new(TicketType::Infant, infant),
                    TicketTypeRequest::new(TicketType::Adult, adult),
                    TicketTypeRequest::new(TicketType::Child, child),
                ];
                let quote: PurchaseQuote = quote_purchase(&rules, 42, &requests).unwrap();

                assert_eq!(
                    quote.total_amount,
                    u64::from(adult * 20 + child * 10),
                    "adult={adult} child={child} infant={infant}"
                );
                assert_eq!(quote.seats_to_reserve, u64::from(adult + child));
            }
        }
    }
}
