// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Read-only queries over a [`FlightIndex`](crate::FlightIndex).
//!
//! Every query borrows the index and returns freshly built values; none of
//! them mutate it, so they can run in any order against the same index.

pub mod fares;
pub mod fleet;
pub mod schedule;
pub mod traffic;

pub use fares::{average_ticket_price, cheapest_flight_by_airline, FareAverage};
pub use fleet::{top_n_aircraft, DEFAULT_TOP_N};
pub use schedule::overnight_flights;
pub use traffic::{total_duration_by_airline, total_passengers_by_airline};

/// Case-insensitive carrier comparison without allocating.
pub(crate) fn same_carrier(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
