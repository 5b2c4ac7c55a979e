// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz
//
// End-to-end query checks against a loaded file. Logging is routed through
// simplelog's TestLogger so load diagnostics show up with --nocapture.

use flightdex_core::{
    average_ticket_price, cheapest_flight_by_airline, overnight_flights, top_n_aircraft,
    total_duration_by_airline, total_passengers_by_airline, ErrorKind, FareAverage, FlightIndex,
    FlightReport, ReportConfig,
};
use simplelog::{Config, LevelFilter, TestLogger};
use std::fs;

const FLIGHTS: &str = "\
flightNumber,departureAirport,arrivalAirport,departureTime,arrivalTime,airline,duration,avgTicketPrice,aircraft,passengerCount
AA01,JFK,LAX,08:00:00.15,11:30:00.15,American,5:30,320,B737,160
DL20,ATL,JFK,22:10:00.15,00:40:00.16,Delta,2:30,210,A321,190
UA31,ORD,SFO,06:00:00.15,10:20:00.15,United,4:20,180,B737,150
DL21,JFK,ATL,07:00:00.16,09:25:00.16,Delta,2:25,190,A321,185
AA02,LAX,JFK,23:30:00.16,07:45:00.17,American,5:15,305,B777,280
UA32,SFO,ORD,12:00:00.16,18:05:00.16,United,4:05,180,B737,140
AS40,SEA,SFO,09:00:00.16,11:05:00.16,Alaska,2:05,0,E175,0
AA01,JFK,LAX,08:00:00.15,11:30:00.15,American,5:30,1,B737,1
";

fn load() -> FlightIndex {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flights.csv");
    fs::write(&path, FLIGHTS).unwrap();
    FlightIndex::load(&path).unwrap()
}

#[test]
fn test_average_ticket_price() {
    let index = load();
    let avgs = average_ticket_price(&index, &["delta", "AMERICAN", "lufthansa"]);
    assert_eq!(
        avgs,
        vec![
            FareAverage::Average(200.0),
            FareAverage::Average(312.5),
            FareAverage::NoFlights,
        ]
    );
}

#[test]
fn test_total_passengers() {
    let index = load();
    let totals = total_passengers_by_airline(&index, &["Delta", "united", "alaska"]);

    assert_eq!(totals.len(), 2);
    assert_eq!(totals["delta"], 375);
    assert_eq!(totals["united"], 290);
    assert!(!totals.contains_key("alaska"));
}

#[test]
fn test_overnight() {
    let index = load();
    assert_eq!(overnight_flights(&index), vec!["dl20", "aa02"]);
}

#[test]
fn test_top_aircraft() {
    let index = load();
    assert_eq!(top_n_aircraft(&index, 2).unwrap(), vec!["b737", "a321"]);
    assert_eq!(top_n_aircraft(&index, 4).unwrap().len(), 4);
    assert_eq!(
        top_n_aircraft(&index, 5).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn test_total_duration() {
    let index = load();
    let totals = total_duration_by_airline(&index, &["jfk", "lax", "atl"]);

    assert_eq!(totals.len(), 4);
    assert_eq!(totals["american"], 645);
    assert_eq!(totals["delta"], 295);
    assert_eq!(totals["united"], 0);
    assert_eq!(totals["alaska"], 0);
}

#[test]
fn test_cheapest() {
    let index = load();
    let cheapest = cheapest_flight_by_airline(&index);

    assert_eq!(cheapest["american"], "aa02");
    assert_eq!(cheapest["delta"], "dl21");
    assert_eq!(cheapest["united"], "ua31");
    assert_eq!(cheapest["alaska"], "as40");
}

#[test]
fn test_report_json() {
    let index = load();
    let config = ReportConfig {
        carriers: vec!["united".to_string()],
        airports: vec!["SFO".to_string(), "ORD".to_string()],
        top_n: 1,
    };
    let report = FlightReport::build(&index, &config);
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["flight_count"], 7);
    assert_eq!(json["average_ticket_price"][0], 180.0);
    assert_eq!(json["top_aircraft"]["Ok"][0], "b737");
    assert_eq!(json["total_duration"]["united"], 505);
}
