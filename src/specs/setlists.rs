// src/specs/setlists.rs
//! Record *spec* for Setlists.
//!
//! Endpoint: `setlists/showdate/{date}.json`, one request per show. The
//! response is a flat list, one element per performed song.
//!
//! Flattening yields `SetlistRecord`s tagged with the requesting show's id and
//! date. A record may lack a song id; `process::setlists` drops those and only
//! then numbers the survivors as `SetlistEntry`s.
//!
//! Columns: SetlistID, ShowID, ShowDate, SongID, SetNumber, SongPosition, SongNotes.

use serde::Deserialize;
use serde_json::Value;

use crate::config::consts::DEFAULT_SET;
use crate::core::coerce;
use crate::data::{Cell, Tabular};

pub fn endpoint(show_date: &str) -> String {
    format!("setlists/showdate/{show_date}.json")
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSetlistSong {
    songid: Option<Value>,
    set: Option<Value>,
    position: Option<Value>,
    footnote: Option<Value>,
}

/// One performed song before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct SetlistRecord {
    pub show_id: Option<i64>,
    pub show_date: String,
    pub song_id: Option<i64>,
    pub set_label: String,
    pub position: i64,
    pub note: String,
}

/// A validated setlist row with its dense surrogate id.
#[derive(Clone, Debug, PartialEq)]
pub struct SetlistEntry {
    pub setlist_id: u64,
    pub show_id: Option<i64>,
    pub show_date: String,
    pub song_id: i64,
    pub set_label: String,
    pub position: i64,
    pub note: String,
}

impl SetlistRecord {
    /// `None` when there is no song id to keep.
    pub fn into_entry(self, setlist_id: u64) -> Option<SetlistEntry> {
        Some(SetlistEntry {
            setlist_id,
            show_id: self.show_id,
            show_date: self.show_date,
            song_id: self.song_id?,
            set_label: self.set_label,
            position: self.position,
            note: self.note,
        })
    }
}

/// Flatten one show's setlist payload. Non-list payloads yield nothing.
pub fn flatten(payload: Option<Value>, show_id: Option<i64>, show_date: &str) -> Vec<SetlistRecord> {
    let items = match payload {
        Some(Value::Array(items)) => items,
        _ => return Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| {
            let r: RawSetlistSong = serde_json::from_value(item)
                .map_err(|e| logd!("Skipping malformed setlist item ({show_date}): {e}"))
                .ok()?;
            Some(SetlistRecord {
                show_id,
                show_date: s!(show_date),
                song_id: coerce::int(r.songid.as_ref()),
                set_label: coerce::text_or(r.set.as_ref(), DEFAULT_SET),
                position: coerce::int_or(r.position.as_ref(), 0),
                note: coerce::text_or(r.footnote.as_ref(), ""),
            })
        })
        .collect()
}

impl Tabular for SetlistEntry {
    const HEADERS: &'static [&'static str] = &[
        "SetlistID", "ShowID", "ShowDate", "SongID", "SetNumber", "SongPosition", "SongNotes",
    ];

    fn row(&self) -> Vec<Cell> {
        cells![
            self.setlist_id,
            self.show_id,
            &self.show_date,
            self.song_id,
            &self.set_label,
            self.position,
            &self.note,
        ]
    }
}
