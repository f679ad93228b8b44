// src/cli.rs
use std::env;

use crate::config::Config;
use crate::config::consts::TOP_STATES_PRINTED;
use crate::core::ApiClient;
use crate::error::FetchError;
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunSummary};
use crate::summary::{EraSummary, StateSummary};

const RULE: &str = "============================================================";

/// Entry point for the binary: config from env (+ `.env`), fetch, export, report.
pub fn run() -> Result<(), FetchError> {
    if parse_cli()? {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => logd!("Loaded {}", path.display()),
        Err(e) if e.not_found() => logd!("No .env file; using process environment"),
        Err(e) => logw!("Could not read .env: {e}"),
    }
    let cfg = Config::from_env()?;

    println!("{RULE}");
    println!("PHISH.NET DATA FETCHER FOR POWER BI");
    println!("{RULE}");
    println!();

    let client = ApiClient::new(&cfg)?;
    let summary = runner::run(&cfg, &client, &mut ConsoleProgress)?;

    print_report(&summary);
    Ok(())
}

/// No positional args. Returns true when help was asked for.
fn parse_cli() -> Result<bool, FetchError> {
    let mut help = false;
    for a in env::args().skip(1) {
        match a.as_str() {
            "-h" | "--help" => help = true,
            _ => return Err(FetchError::UnknownArg(a)),
        }
    }
    Ok(help)
}

fn print_report(summary: &RunSummary) {
    println!();
    println!("{RULE}");
    println!("DATA FETCH COMPLETE!");
    println!("{RULE}");
    println!("Total Shows: {}", summary.total_shows);
    println!("Total Venues: {}", summary.total_venues);
    println!("Total Songs: {}", summary.total_songs);
    println!("Total Setlist Records: {}", summary.total_setlist_records);
    println!("Year Range: {}", summary.year_range);
    println!("\nOutput file: {}", summary.output.display());
    println!();
    println!("Shows by Era:");
    print!("{}", era_table(&summary.eras));
    println!();
    println!("Top {TOP_STATES_PRINTED} States by Shows:");
    print!("{}", state_table(&summary.states, TOP_STATES_PRINTED));
    println!();
    println!("Ready to import into Power BI!");
    println!("{RULE}");
}

pub fn era_table(eras: &[EraSummary]) -> String {
    let mut out = format!(
        "{:>8} {:>10} {:>9} {:>7} {:>15}\n",
        "Era", "TotalShows", "StartYear", "EndYear", "AvgShowsPerYear"
    );
    for e in eras {
        out.push_str(&format!(
            "{:>8} {:>10} {:>9} {:>7} {:>15.6}\n",
            e.era.label(), e.total_shows, e.start_year, e.end_year, e.avg_shows_per_year
        ));
    }
    out
}

pub fn state_table(states: &[StateSummary], limit: usize) -> String {
    let mut out = format!("{:>5} {:>10} {:>12}\n", "State", "TotalShows", "UniqueVenues");
    for s in states.iter().take(limit) {
        out.push_str(&format!("{:>5} {:>10} {:>12}\n", s.state, s.total_shows, s.unique_venues));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::era::Era;

    #[test]
    fn era_table_lists_each_era() {
        let eras = vec![EraSummary {
            era: Era::Three,
            total_shows: 24,
            start_year: 2019,
            end_year: 2020,
            avg_shows_per_year: 12.0,
        }];
        let text = era_table(&eras);
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().nth(1).unwrap().contains("3.0"));
        assert!(text.contains("12.000000"));
    }

    #[test]
    fn state_table_respects_limit() {
        let states: Vec<StateSummary> = (0..15)
            .map(|i| StateSummary { state: format!("S{i}"), total_shows: 15 - i, unique_venues: 1 })
            .collect();
        let text = state_table(&states, 10);
        assert_eq!(text.lines().count(), 11);
    }
}
