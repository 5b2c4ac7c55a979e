// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use super::same_carrier;
use crate::FlightIndex;
use log::warn;
use std::collections::{BTreeMap, HashSet};

/// Passenger totals per requested carrier, keyed by the lowercase carrier.
/// Carriers totalling zero passengers are left out, as are carriers whose
/// total overflows `i64`.
pub fn total_passengers_by_airline<S: AsRef<str>>(
    index: &FlightIndex,
    carriers: &[S],
) -> BTreeMap<String, i64> {
    let mut totals = BTreeMap::new();

    for carrier in carriers {
        let carrier = carrier.as_ref();
        let total = index
            .records()
            .filter(|r| same_carrier(carrier, &r.airline))
            .try_fold(0i64, |acc, r| acc.checked_add(r.passenger_count));

        match total {
            Some(0) => {}
            Some(total) => {
                totals.insert(carrier.to_lowercase(), total);
            }
            None => warn!("Passenger total overflowed — carrier={}", carrier),
        }
    }

    totals
}

/// Minutes flown per carrier on flights that both depart from and arrive at
/// one of `airports`. Every carrier in the index gets an entry, 0 when none
/// of its flights qualify.
pub fn total_duration_by_airline<S: AsRef<str>>(
    index: &FlightIndex,
    airports: &[S],
) -> BTreeMap<String, i64> {
    let airports: HashSet<String> = airports
        .iter()
        .map(|a| a.as_ref().trim().to_uppercase())
        .collect();

    let mut durations = BTreeMap::new();

    for record in index.records() {
        let total = durations.entry(record.airline.to_lowercase()).or_insert(0);

        if airports.contains(&record.departure_airport.to_uppercase())
            && airports.contains(&record.arrival_airport.to_uppercase())
        {
            *total += record.flight_duration_minutes;
        }
    }

    durations
}
