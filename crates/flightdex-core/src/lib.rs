// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod analysis;
pub mod index;
pub mod record;
pub mod report;

pub use analysis::{
    average_ticket_price, cheapest_flight_by_airline, overnight_flights, top_n_aircraft,
    total_duration_by_airline, total_passengers_by_airline, FareAverage, DEFAULT_TOP_N,
};
pub use index::FlightIndex;
pub use record::FlightRecord;
pub use report::{FlightReport, ReportConfig};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlightError {
    #[error("Flight data file not found or unreadable: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Line {line}: invalid {field} value {value:?}")]
    Parse {
        line: u64,
        field: &'static str,
        value: String,
    },
    #[error("Line {line}: expected {} fields, found {found}", record::FIELD_COUNT)]
    MissingFields { line: u64, found: usize },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Coarse classification of a [`FlightError`], for callers that branch on
/// the failure category rather than the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Parse,
    InvalidArgument,
    Io,
}

impl FlightError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlightError::NotFound { .. } => ErrorKind::NotFound,
            FlightError::Parse { .. } | FlightError::MissingFields { .. } => ErrorKind::Parse,
            FlightError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            FlightError::Csv(_) => ErrorKind::Io,
        }
    }
}
