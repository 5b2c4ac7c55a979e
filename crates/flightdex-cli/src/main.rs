// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flightdex_core::{analysis, FlightIndex, FlightReport, ReportConfig, DEFAULT_TOP_N};
use log::LevelFilter;
use serde::Serialize;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the flight data file
    #[arg(short, long, env = "FLIGHTDEX_DATA", global = true)]
    data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Average ticket price for each carrier
    AvgPrice {
        #[arg(required = true)]
        carriers: Vec<String>,
    },
    /// Total passengers per carrier
    Passengers {
        #[arg(required = true)]
        carriers: Vec<String>,
    },
    /// Flights arriving on a different day than they depart
    Overnight,
    /// Aircraft with the most flights
    TopAircraft {
        #[arg(short, default_value_t = DEFAULT_TOP_N, allow_negative_numbers = true)]
        n: i64,
    },
    /// Minutes flown per carrier between the given airports
    Duration {
        #[arg(required = true)]
        airports: Vec<String>,
    },
    /// Cheapest flight per carrier
    Cheapest,
    /// Run every query using a report config
    Report {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write a default report config
    InitConfig { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Commands::InitConfig { path } = &cli.command {
        ReportConfig::default().save(path)?;
        println!("Wrote default report config to {}", path.display());
        return Ok(());
    }

    let data = cli.data.as_ref().ok_or_else(|| {
        anyhow::anyhow!("No flight data file given. Please specify with --data or FLIGHTDEX_DATA.")
    })?;
    let index = FlightIndex::load(data)
        .with_context(|| format!("Could not load flight data from {}", data.display()))?;

    run(&cli.command, &index, cli.json)
}

fn run(command: &Commands, index: &FlightIndex, json: bool) -> Result<()> {
    match command {
        Commands::AvgPrice { carriers } => {
            let avgs = analysis::average_ticket_price(index, carriers);
            if json {
                print_json(&avgs)?;
            } else {
                for (carrier, avg) in carriers.iter().zip(&avgs) {
                    println!("{}: {:.2}", carrier, avg.value());
                }
            }
        }
        Commands::Passengers { carriers } => {
            let totals = analysis::total_passengers_by_airline(index, carriers);
            print_map(&totals, json)?;
        }
        Commands::Overnight => {
            let flights = analysis::overnight_flights(index);
            print_list(&flights, json)?;
        }
        Commands::TopAircraft { n } => {
            let aircraft = analysis::top_n_aircraft(index, *n)?;
            print_list(&aircraft, json)?;
        }
        Commands::Duration { airports } => {
            let totals = analysis::total_duration_by_airline(index, airports);
            print_map(&totals, json)?;
        }
        Commands::Cheapest => {
            let cheapest = analysis::cheapest_flight_by_airline(index);
            print_map(&cheapest, json)?;
        }
        Commands::Report { config } => {
            let config = match config {
                Some(path) => ReportConfig::load(path)?,
                None => ReportConfig::default(),
            };
            let report = FlightReport::build(index, &config);
            if json {
                print_json(&report)?;
            } else {
                print!("{}", report);
            }
        }
        // Written before any data is loaded.
        Commands::InitConfig { .. } => {}
    }

    Ok(())
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = log_level(verbose, quiet);
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_list(items: &[String], json: bool) -> Result<()> {
    if json {
        return print_json(items);
    }
    for item in items {
        println!("{}", item);
    }
    Ok(())
}

fn print_map<V: Display + Serialize>(map: &BTreeMap<String, V>, json: bool) -> Result<()> {
    if json {
        return print_json(map);
    }
    for (key, value) in map {
        println!("{}: {}", key, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_aircraft_accepts_negative_n() {
        let cli = Cli::try_parse_from(["flightdex", "--data", "f.csv", "top-aircraft", "-n", "-2"])
            .unwrap();
        assert!(matches!(cli.command, Commands::TopAircraft { n: -2 }));
    }

    #[test]
    fn test_data_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["flightdex", "overnight", "--data", "f.csv"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("f.csv")));
        assert!(matches!(cli.command, Commands::Overnight));
    }

    #[test]
    fn test_quiet_and_verbose_levels() {
        let cli = Cli::try_parse_from(["flightdex", "cheapest", "--quiet"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(log_level(cli.verbose, cli.quiet), LevelFilter::Error);

        assert_eq!(log_level(0, false), LevelFilter::Warn);
        assert_eq!(log_level(2, false), LevelFilter::Debug);
        assert!(Cli::try_parse_from(["flightdex", "cheapest", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_top_aircraft_defaults_to_three() {
        let cli = Cli::try_parse_from(["flightdex", "top-aircraft"]).unwrap();
        assert!(matches!(cli.command, Commands::TopAircraft { n: 3 }));
    }

    #[test]
    fn test_non_integer_n_is_rejected() {
        assert!(Cli::try_parse_from(["flightdex", "top-aircraft", "-n", "three"]).is_err());
    }

    #[test]
    fn test_avg_price_requires_carriers() {
        assert!(Cli::try_parse_from(["flightdex", "avg-price"]).is_err());
        let cli = Cli::try_parse_from(["flightdex", "--json", "avg-price", "delta", "united"])
            .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::AvgPrice { carriers } => assert_eq!(carriers, vec!["delta", "united"]),
            _ => panic!("Wrong command"),
        }
    }
}
