// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::{FlightError, FlightIndex};
use std::collections::HashMap;

pub const DEFAULT_TOP_N: i64 = 3;

/// The `n` aircraft with the most flights, busiest first.
///
/// Aircraft with equal counts keep the order in which they first appear in
/// the index. `n` must lie between 0 and the number of distinct aircraft.
pub fn top_n_aircraft(index: &FlightIndex, n: i64) -> Result<Vec<String>, FlightError> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for record in index.records() {
        let aircraft = record.aircraft.as_str();
        match slots.get(aircraft) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(aircraft, counts.len());
                counts.push((aircraft, 1));
            }
        }
    }

    let n = usize::try_from(n)
        .ok()
        .filter(|&n| n <= counts.len())
        .ok_or_else(|| {
            FlightError::InvalidArgument(format!(
                "n={} must be between 0 and {} (distinct aircraft)",
                n,
                counts.len()
            ))
        })?;

    // Stable: ties stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(counts
        .into_iter()
        .take(n)
        .map(|(aircraft, _)| aircraft.to_string())
        .collect())
}
