// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::FlightIndex;

/// Flights whose arrival day digits differ from their departure day digits,
/// in index order. Only the two-character day field is compared, so a flight
/// landing on the same day of the next month is not reported.
pub fn overnight_flights(index: &FlightIndex) -> Vec<String> {
    index
        .iter()
        .filter(|(_, record)| record.is_overnight())
        .map(|(flight, _)| flight.to_string())
        .collect()
}
