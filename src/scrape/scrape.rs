// src/scrape/scrape.rs
use std::{thread, time::Duration};

use serde_json::Value;

use crate::{
    config::{Config, consts::PROGRESS_EVERY},
    core::{Fetch, net::records},
    progress::{Progress, progress_line},
    specs::{self, SetlistRecord, Show},
};

fn pause(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d); // be polite
    }
}

/// One request per year in the configured range, concatenated in year order.
/// A year without data adds nothing; the loop always runs to the end.
pub fn collect_shows(src: &dyn Fetch, cfg: &Config, progress: &mut dyn Progress) -> Vec<Value> {
    progress.log("Fetching all shows...");

    let mut all = Vec::new();
    for (i, year) in cfg.years().enumerate() {
        if i > 0 {
            pause(cfg.pause);
        }
        progress.log(&format!("  Fetching {year}..."));

        let shows = records(src.get_json(&specs::shows::endpoint(year), &[]));
        logd!("{year}: {} shows", shows.len());
        all.extend(shows);
    }

    progress.log(&format!("Total shows fetched: {}", all.len()));
    all
}

pub fn collect_venues(src: &dyn Fetch, progress: &mut dyn Progress) -> Vec<Value> {
    progress.log("Fetching all venues...");
    let venues = records(src.get_json(specs::venues::ENDPOINT, &[]));
    progress.log(&format!("Total venues fetched: {}", venues.len()));
    venues
}

pub fn collect_songs(src: &dyn Fetch, progress: &mut dyn Progress) -> Vec<Value> {
    progress.log("Fetching all songs...");
    let songs = records(src.get_json(specs::songs::ENDPOINT, &[]));
    progress.log(&format!("Total songs fetched: {}", songs.len()));
    songs
}

/// One request per show, keyed by show date, flattened as it goes.
/// Shows without a date are skipped without a request.
pub fn collect_setlists(
    src: &dyn Fetch,
    shows: &[Show],
    cfg: &Config,
    progress: &mut dyn Progress,
) -> Vec<SetlistRecord> {
    progress.log("Fetching setlists for all shows...");

    let total = shows.len();

    let mut all = Vec::new();
    let mut requested = 0usize;
    for (idx, show) in shows.iter().enumerate() {
        let done = idx + 1;
        if done % PROGRESS_EVERY == 0 || done == total {
            progress.log(&progress_line(done, total, "shows"));
        }

        let Some(date) = show.show_date.as_deref().filter(|d| !d.trim().is_empty()) else {
            logw!("Show {:?} has no date; skipping setlist", show.show_id);
            continue;
        };

        if requested > 0 {
            pause(cfg.pause);
        }
        requested += 1;

        let payload = src.get_json(&specs::setlists::endpoint(date), &[]);
        all.extend(specs::setlists::flatten(payload, show.show_id, date));
    }

    progress.log(&format!("Total setlist records fetched: {}", all.len()));
    all
}
