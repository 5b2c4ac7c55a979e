// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::record::{FlightRecord, COL_FLIGHT_NUMBER};
use crate::FlightError;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const HEADER_MARKER: &str = "flightnumber";

/// Flight records keyed by lowercase flight identifier.
///
/// Iteration follows the order in which identifiers first appeared in the
/// source file. The index is never modified after loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightIndex {
    flights: Vec<(String, FlightRecord)>,
    positions: HashMap<String, usize>,
}

impl FlightIndex {
    /// Loads and indexes a flight data file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FlightError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FlightError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let index = Self::parse(file)?;
        info!(
            "Loaded flight index — path={} flights={}",
            path.display(),
            index.len()
        );
        Ok(index)
    }

    pub fn parse<R: Read>(reader: R) -> Result<Self, FlightError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false) // header rows are recognized by their first field instead
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut index = Self::default();

        for result in rdr.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let flight_number = row.get(COL_FLIGHT_NUMBER).unwrap_or("");
            if flight_number.is_empty() {
                debug!("Skipping blank row — line={}", line);
                continue;
            }
            if flight_number.eq_ignore_ascii_case(HEADER_MARKER) {
                debug!("Skipping header row — line={}", line);
                continue;
            }

            let key = flight_number.to_lowercase();
            if index.positions.contains_key(&key) {
                // First occurrence wins; the duplicate is not even parsed.
                warn!(
                    "Ignoring duplicate flight identifier — flight={} line={}",
                    key, line
                );
                continue;
            }

            let record = FlightRecord::from_row(&row, line)?;
            index.positions.insert(key.clone(), index.flights.len());
            index.flights.push((key, record));
        }

        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Looks up a flight; the identifier is matched case-insensitively.
    pub fn get(&self, flight: &str) -> Option<&FlightRecord> {
        self.positions
            .get(&flight.to_lowercase())
            .map(|&i| &self.flights[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlightRecord)> {
        self.flights.iter().map(|(id, rec)| (id.as_str(), rec))
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.flights.iter().map(|(id, _)| id.as_str())
    }

    pub fn records(&self) -> impl Iterator<Item = &FlightRecord> {
        self.flights.iter().map(|(_, rec)| rec)
    }
}
