// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use super::same_carrier;
use crate::FlightIndex;
use log::warn;
use serde::Serialize;
use std::collections::BTreeMap;

/// Average fare for one requested carrier.
///
/// Serializes as the plain number returned by [`FareAverage::value`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "f64")]
pub enum FareAverage {
    /// Mean ticket price, rounded to two decimals.
    Average(f64),
    /// The carrier has no flights in the index.
    NoFlights,
    /// Computing this carrier's average failed; other carriers are unaffected.
    Failed,
}

impl FareAverage {
    /// `0` for carriers without flights and `-1` for failures.
    pub fn value(self) -> f64 {
        match self {
            FareAverage::Average(v) => v,
            FareAverage::NoFlights => 0.0,
            FareAverage::Failed => -1.0,
        }
    }
}

impl From<FareAverage> for f64 {
    fn from(avg: FareAverage) -> Self {
        avg.value()
    }
}

/// Average ticket price per carrier, positionally aligned with `carriers`.
pub fn average_ticket_price<S: AsRef<str>>(index: &FlightIndex, carriers: &[S]) -> Vec<FareAverage> {
    carriers
        .iter()
        .map(|carrier| {
            let carrier = carrier.as_ref();
            average_for(index, carrier).unwrap_or_else(|| {
                warn!("Average fare overflowed — carrier={}", carrier);
                FareAverage::Failed
            })
        })
        .collect()
}

fn average_for(index: &FlightIndex, carrier: &str) -> Option<FareAverage> {
    let mut sum: i64 = 0;
    let mut count: u64 = 0;

    for record in index.records() {
        if same_carrier(carrier, &record.airline) {
            sum = sum.checked_add(record.avg_ticket_price)?;
            count += 1;
        }
    }

    if count == 0 {
        return Some(FareAverage::NoFlights);
    }
    let mean = sum as f64 / count as f64;
    Some(FareAverage::Average((mean * 100.0).round() / 100.0))
}

/// Cheapest flight identifier per carrier. On equal prices the flight seen
/// first keeps its place.
pub fn cheapest_flight_by_airline(index: &FlightIndex) -> BTreeMap<String, String> {
    let mut cheapest: BTreeMap<&str, (i64, &str)> = BTreeMap::new();

    for (flight, record) in index.iter() {
        let price = record.avg_ticket_price;
        cheapest
            .entry(record.airline.as_str())
            .and_modify(|best| {
                if price < best.0 {
                    *best = (price, flight);
                }
            })
            .or_insert((price, flight));
    }

    cheapest
        .into_iter()
        .map(|(airline, (_, flight))| (airline.to_string(), flight.to_string()))
        .collect()
}
