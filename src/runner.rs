// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::{Config, consts::*},
    core::Fetch,
    data::DataSet,
    error::FetchError,
    file::{self, Sheet},
    process,
    progress::Progress,
    scrape,
    specs::{SetlistEntry, Show, Song, Venue},
    summary::{self, EraSummary, Metadata, StateSummary},
};

/// Flattened tables for one run.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub shows: Vec<Show>,
    pub venues: Vec<Venue>,
    pub songs: Vec<Song>,
    /// `None` when setlist fetching is switched off; the sheet is then omitted.
    pub setlists: Option<Vec<SetlistEntry>>,
}

/// Summary of what was produced.
pub struct RunSummary {
    pub output: PathBuf,
    pub total_shows: usize,
    pub total_venues: usize,
    pub total_songs: usize,
    pub total_setlist_records: usize,
    pub year_range: String,
    pub eras: Vec<EraSummary>,
    pub states: Vec<StateSummary>,
}

/// Fetch → flatten → aggregate → export.
///
/// Per-request failures only shrink the data. The run aborts, before any file
/// is written, only when no shows came back at all.
pub fn run(cfg: &Config, src: &dyn Fetch, progress: &mut dyn Progress) -> Result<RunSummary, FetchError> {
    let raw_shows = scrape::collect_shows(src, cfg, progress);
    let raw_venues = scrape::collect_venues(src, progress);
    let raw_songs = scrape::collect_songs(src, progress);

    if raw_shows.is_empty() {
        loge!("No show data received; nothing to export");
        return Err(FetchError::NoShows);
    }

    let shows = process::shows(raw_shows, progress);
    if shows.is_empty() {
        loge!("Every show record was malformed; nothing to export");
        return Err(FetchError::NoShows);
    }

    let setlists = if cfg.fetch_setlists {
        let records = scrape::collect_setlists(src, &shows, cfg, progress);
        Some(process::setlists(records, progress))
    } else {
        logf!("Setlist fetching disabled; skipping {SHEET_SETLISTS}");
        None
    };

    let catalog = Catalog {
        shows,
        venues: process::venues(raw_venues, progress),
        songs: process::songs(raw_songs, progress),
        setlists,
    };

    progress.log("Generating summary statistics...");
    let fetched_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let sheets = build_sheets(&catalog, &fetched_at);

    progress.log(&format!("Creating Excel file: {}", cfg.output.display()));
    file::write_workbook(&cfg.output, &sheets)?;
    progress.log("Excel file created successfully!");

    Ok(RunSummary {
        output: cfg.output.clone(),
        total_shows: catalog.shows.len(),
        total_venues: catalog.venues.len(),
        total_songs: catalog.songs.len(),
        total_setlist_records: catalog.setlists.as_ref().map_or(0, Vec::len),
        year_range: summary::year_range(&catalog.shows),
        eras: summary::by_era(&catalog.shows),
        states: summary::by_state(&catalog.shows),
    })
}

/// Every output sheet, in workbook order.
pub fn build_sheets(catalog: &Catalog, fetched_at: &str) -> Vec<Sheet> {
    let setlist_count = catalog.setlists.as_ref().map_or(0, Vec::len);
    let metadata = Metadata {
        data_source: s!(DATA_SOURCE),
        fetch_date: s!(fetched_at),
        total_shows: catalog.shows.len(),
        total_venues: catalog.venues.len(),
        total_songs: catalog.songs.len(),
        total_setlist_records: setlist_count,
        year_range: summary::year_range(&catalog.shows),
    };

    let mut sheets = vec![
        Sheet::new(SHEET_SHOWS, DataSet::from_records(&catalog.shows)),
        Sheet::new(SHEET_VENUES, DataSet::from_records(&catalog.venues)),
        Sheet::new(SHEET_SONGS, DataSet::from_records(&catalog.songs)),
    ];
    if let Some(setlists) = &catalog.setlists {
        sheets.push(Sheet::new(SHEET_SETLISTS, DataSet::from_records(setlists)));
    }
    sheets.extend([
        Sheet::new(SHEET_ERAS, DataSet::from_records(&summary::by_era(&catalog.shows))),
        Sheet::new(SHEET_STATES, DataSet::from_records(&summary::by_state(&catalog.shows))),
        Sheet::new(SHEET_YEARS, DataSet::from_records(&summary::by_year(&catalog.shows))),
        Sheet::new(SHEET_TOP_SONGS, DataSet::from_records(&summary::top_songs(&catalog.songs, TOP_SONGS))),
        Sheet::new(SHEET_METADATA, DataSet::from_records(&[metadata])),
    ]);
    sheets
}
