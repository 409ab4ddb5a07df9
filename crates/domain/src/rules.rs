// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Configurable purchase limits and ticket prices.

use crate::error::DomainError;
use crate::types::TicketType;
use serde::{Deserialize, Serialize};

/// Default maximum number of tickets in a single purchase.
pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Default minimum number of adult tickets in a single purchase.
pub const MIN_ADULT_TICKETS_REQUIRED: u32 = 1;

/// Price of a single ticket per ticket type, in integer currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Price of an adult ticket.
    pub adult: u32,
    /// Price of a child ticket.
    pub child: u32,
    /// Price of an infant ticket.
    pub infant: u32,
}

impl PriceTable {
    /// Creates a new price table.
    #[must_use]
    pub const fn new(adult: u32, child: u32, infant: u32) -> Self {
        Self {
            adult,
            child,
            infant,
        }
    }

    /// Returns the price of one ticket of the given type.
    #[must_use]
    pub const fn price_of(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::new(20, 10, 0)
    }
}

/// The limits and prices a purchase is checked and priced against.
///
/// Only constructed through [`PurchaseRules::new`] or the default, so the
/// limits are always consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseRules {
    max_tickets_per_purchase: u32,
    min_adult_tickets: u32,
    prices: PriceTable,
}

impl PurchaseRules {
    /// Creates a validated set of purchase rules.
    ///
    /// # Arguments
    ///
    /// * `max_tickets_per_purchase` - Upper bound on the total ticket count
    /// * `min_adult_tickets` - Lower bound on the adult ticket count
    /// * `prices` - The per-type price table
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPurchaseRules` if:
    /// - `max_tickets_per_purchase` is zero
    /// - `min_adult_tickets` is greater than `max_tickets_per_purchase`
    pub fn new(
        max_tickets_per_purchase: u32,
        min_adult_tickets: u32,
        prices: PriceTable,
    ) -> Result<Self, DomainError> {
        if max_tickets_per_purchase == 0 {
            return Err(DomainError::InvalidPurchaseRules(String::from(
                "Maximum tickets per purchase must be greater than 0",
            )));
        }

        if min_adult_tickets > max_tickets_per_purchase {
            return Err(DomainError::InvalidPurchaseRules(format!(
                "Minimum adult tickets ({min_adult_tickets}) cannot exceed maximum tickets per purchase ({max_tickets_per_purchase})"
            )));
        }

        Ok(Self {
            max_tickets_per_purchase,
            min_adult_tickets,
            prices,
        })
    }

    /// Returns the maximum number of tickets in one purchase.
    #[must_use]
    pub const fn max_tickets_per_purchase(&self) -> u32 {
        self.max_tickets_per_purchase
    }

    /// Returns the minimum number of adult tickets in one purchase.
    #[must_use]
    pub const fn min_adult_tickets(&self) -> u32 {
        self.min_adult_tickets
    }

    /// Returns the price table.
    #[must_use]
    pub const fn prices(&self) -> &PriceTable {
        &self.prices
    }
}

impl Default for PurchaseRules {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: MAX_TICKETS_PER_PURCHASE,
            min_adult_tickets: MIN_ADULT_TICKETS_REQUIRED,
            prices: PriceTable::default(),
        }
    }
}
