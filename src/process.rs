// src/process.rs
// Raw records → typed tables, plus the cross-record rules:
// song de-duplication and dense setlist numbering.

use std::collections::HashSet;

use serde_json::Value;

use crate::progress::Progress;
use crate::specs::{self, SetlistEntry, SetlistRecord, Show, Song, Venue};

pub fn shows(raw: Vec<Value>, progress: &mut dyn Progress) -> Vec<Show> {
    progress.log("Processing shows data...");
    raw.into_iter().filter_map(specs::shows::parse).collect()
}

pub fn venues(raw: Vec<Value>, progress: &mut dyn Progress) -> Vec<Venue> {
    progress.log("Processing venues data...");
    raw.into_iter().filter_map(specs::venues::parse).collect()
}

/// Flatten and drop repeated song ids, keeping the first occurrence in feed order.
/// Records without an id share one key, so only the first of those survives too.
pub fn songs(raw: Vec<Value>, progress: &mut dyn Progress) -> Vec<Song> {
    progress.log("Processing songs data...");

    let parsed: Vec<Song> = raw.into_iter().filter_map(specs::songs::parse).collect();
    let before = parsed.len();

    let mut seen: HashSet<Option<i64>> = HashSet::with_capacity(before);
    let kept: Vec<Song> = parsed.into_iter().filter(|s| seen.insert(s.song_id)).collect();

    let removed = before - kept.len();
    if removed > 0 {
        progress.log(&format!("  Removed {removed} duplicate songs (kept first occurrence)"));
    }
    kept
}

/// Drop records without a song id, then number the survivors from 1.
pub fn setlists(records: Vec<SetlistRecord>, progress: &mut dyn Progress) -> Vec<SetlistEntry> {
    progress.log("Processing setlists data...");

    if records.is_empty() {
        progress.log("  No setlist records to process");
        return Vec::new();
    }

    let before = records.len();
    let entries: Vec<SetlistEntry> = records
        .into_iter()
        .filter(|r| r.song_id.is_some())
        .zip(1u64..)
        .filter_map(|(r, id)| r.into_entry(id))
        .collect();

    let dropped = before - entries.len();
    if dropped > 0 {
        logd!("Dropped {dropped} setlist records without a song id");
    }

    let unique_shows: HashSet<Option<i64>> = entries.iter().map(|e| e.show_id).collect();
    let unique_songs: HashSet<i64> = entries.iter().map(|e| e.song_id).collect();
    progress.log(&format!("  Total setlist records: {}", entries.len()));
    progress.log(&format!("  Unique shows: {}", unique_shows.len()));
    progress.log(&format!("  Unique songs: {}", unique_songs.len()));

    entries
}
