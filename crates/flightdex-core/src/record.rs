// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::FlightError;
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Number of positional columns in a flight row.
pub const FIELD_COUNT: usize = 10;

// Column positions:
// 0: Flight number
// 1: Departure airport
// 2: Arrival airport
// 3: Departure time (HH:MM:SS.DD)
// 4: Arrival time (HH:MM:SS.DD)
// 5: Airline
// 6: Duration (H:MM)
// 7: Average ticket price
// 8: Aircraft
// 9: Passenger count
pub const COL_FLIGHT_NUMBER: usize = 0;
const COL_DEP_AIRPORT: usize = 1;
const COL_ARR_AIRPORT: usize = 2;
const COL_DEP_TIME: usize = 3;
const COL_ARR_TIME: usize = 4;
const COL_AIRLINE: usize = 5;
const COL_DURATION: usize = 6;
const COL_TICKET_PRICE: usize = 7;
const COL_AIRCRAFT: usize = 8;
const COL_PASSENGERS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub aircraft: String,
    pub airline: String,
    pub arrival_airport: String,
    pub arrival_time: String,
    pub avg_ticket_price: i64,
    pub departure_airport: String,
    pub departure_time: String,
    pub flight_duration_minutes: i64,
    pub passenger_count: i64,
}

impl FlightRecord {
    /// Builds a record from one data row. `line` is only used for error reporting.
    pub fn from_row(row: &StringRecord, line: u64) -> Result<Self, FlightError> {
        if row.len() < FIELD_COUNT {
            return Err(FlightError::MissingFields {
                line,
                found: row.len(),
            });
        }

        Ok(Self {
            aircraft: row[COL_AIRCRAFT].to_lowercase(),
            airline: row[COL_AIRLINE].to_lowercase(),
            arrival_airport: row[COL_ARR_AIRPORT].to_lowercase(),
            arrival_time: row[COL_ARR_TIME].to_string(),
            avg_ticket_price: parse_int(&row[COL_TICKET_PRICE], "avgTicketPrice", line)?,
            departure_airport: row[COL_DEP_AIRPORT].to_lowercase(),
            departure_time: row[COL_DEP_TIME].to_string(),
            flight_duration_minutes: parse_duration(&row[COL_DURATION], line)?,
            passenger_count: parse_int(&row[COL_PASSENGERS], "passengerCount", line)?,
        })
    }

    /// True when the departure and arrival day digits differ.
    pub fn is_overnight(&self) -> bool {
        day_digits(&self.departure_time) != day_digits(&self.arrival_time)
    }
}

fn parse_int(value: &str, field: &'static str, line: u64) -> Result<i64, FlightError> {
    value.parse::<i64>().map_err(|_| FlightError::Parse {
        line,
        field,
        value: value.to_string(),
    })
}

/// Decodes an `H:MM` duration into minutes.
///
/// Only the first character is read as hours and characters 2-3 as minutes,
/// so durations of ten hours or more are not representable: `10:15` reads
/// its minutes from `0:` and is rejected.
pub fn parse_duration(value: &str, line: u64) -> Result<i64, FlightError> {
    let invalid = || FlightError::Parse {
        line,
        field: "duration",
        value: value.to_string(),
    };

    let hours = value
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .ok_or_else(invalid)? as i64;
    let minutes = char_slice(value, 2, 2)
        .parse::<i64>()
        .map_err(|_| invalid())?;

    Ok(hours * 60 + minutes)
}

/// The `DD` day pair of an `HH:MM:SS.DD` time: the two characters after the
/// `.` at offset 8, i.e. char offsets 9-10. Shorter strings yield a shorter
/// (possibly empty) slice.
pub fn day_digits(time: &str) -> &str {
    char_slice(time, 9, 2)
}

fn char_slice(s: &str, start: usize, len: usize) -> &str {
    let mut bounds = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .skip(start);
    let Some(from) = bounds.next() else {
        return "";
    };
    let to = bounds.nth(len - 1).unwrap_or(s.len());
    &s[from..to]
}
