// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{TicketType, TicketTypeRequest};
use serde::Serialize;

/// Ticket counts of a purchase, aggregated per ticket type.
///
/// The order of the original requests does not matter; only the summed
/// count per type is kept. Sums saturate at `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TicketTally {
    /// Number of adult tickets.
    pub adult: u64,
    /// Number of child tickets.
    pub child: u64,
    /// Number of infant tickets.
    pub infant: u64,
}

impl TicketTally {
    /// Aggregates a list of ticket type requests.
    #[must_use]
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut tally, request| {
            let count: u64 = u64::from(request.number_of_tickets());
            let slot: &mut u64 = match request.ticket_type() {
                TicketType::Adult => &mut tally.adult,
                TicketType::Child => &mut tally.child,
                TicketType::Infant => &mut tally.infant,
            };
            *slot = slot.saturating_add(count);
            tally
        })
    }

    /// Returns the count for one ticket type.
    #[must_use]
    pub const fn count_of(&self, ticket_type: TicketType) -> u64 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    /// Returns the total number of tickets across all types.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.adult
            .saturating_add(self.child)
            .saturating_add(self.infant)
    }
}
