// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::analysis::{self, FareAverage, DEFAULT_TOP_N};
use crate::FlightIndex;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Inputs for a full report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Carriers for the fare and passenger queries
    #[serde(default)]
    pub carriers: Vec<String>,
    /// Airports bounding the duration query
    #[serde(default)]
    pub airports: Vec<String>,
    #[serde(default = "default_top_n")]
    pub top_n: i64,
}

fn default_top_n() -> i64 {
    DEFAULT_TOP_N
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            carriers: Vec::new(),
            airports: Vec::new(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl ReportConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read report config {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse report config {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize report config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write report config {}", path.display()))
    }
}

/// Results of every query against one index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightReport {
    pub flight_count: usize,
    pub carriers: Vec<String>,
    pub average_ticket_price: Vec<FareAverage>,
    pub total_passengers: BTreeMap<String, i64>,
    pub overnight_flights: Vec<String>,
    /// Error message instead of a ranking when `top_n` is out of range
    pub top_aircraft: Result<Vec<String>, String>,
    pub total_duration: BTreeMap<String, i64>,
    pub cheapest_flights: BTreeMap<String, String>,
}

impl FlightReport {
    pub fn build(index: &FlightIndex, config: &ReportConfig) -> Self {
        Self {
            flight_count: index.len(),
            carriers: config.carriers.clone(),
            average_ticket_price: analysis::average_ticket_price(index, &config.carriers),
            total_passengers: analysis::total_passengers_by_airline(index, &config.carriers),
            overnight_flights: analysis::overnight_flights(index),
            top_aircraft: analysis::top_n_aircraft(index, config.top_n)
                .map_err(|e| e.to_string()),
            total_duration: analysis::total_duration_by_airline(index, &config.airports),
            cheapest_flights: analysis::cheapest_flight_by_airline(index),
        }
    }
}

impl fmt::Display for FlightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==Flight Report==")?;
        writeln!(f, "Flights: {}", self.flight_count)?;

        writeln!(f, "Average ticket price:")?;
        for (carrier, avg) in self.carriers.iter().zip(&self.average_ticket_price) {
            writeln!(f, "  {}: {:.2}", carrier, avg.value())?;
        }

        writeln!(f, "Total passengers:")?;
        for (carrier, total) in &self.total_passengers {
            writeln!(f, "  {}: {}", carrier, total)?;
        }

        writeln!(f, "Overnight flights: {}", self.overnight_flights.join(", "))?;

        match &self.top_aircraft {
            Ok(aircraft) => writeln!(f, "Top aircraft: {}", aircraft.join(", "))?,
            Err(e) => writeln!(f, "Top aircraft: unavailable ({})", e)?,
        }

        writeln!(f, "Total duration (minutes):")?;
        for (airline, minutes) in &self.total_duration {
            writeln!(f, "  {}: {}", airline, minutes)?;
        }

        writeln!(f, "Cheapest flights:")?;
        for (airline, flight) in &self.cheapest_flights {
            writeln!(f, "  {}: {}", airline, flight)?;
        }

        Ok(())
    }
}
