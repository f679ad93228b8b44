// src/specs/songs.rs
//! Record *spec* for Songs.
//!
//! Endpoint: `songs.json`. The feed can repeat a song id; de-duplication
//! happens in `process::songs`, not here.
//! Columns: SongID, SongName, Slug, Debut, TimesPlayed, LastPlayed, Gap.

use serde::Deserialize;
use serde_json::Value;

use crate::core::coerce;
use crate::data::{Cell, Tabular};

pub const ENDPOINT: &str = "songs.json";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSong {
    songid: Option<Value>,
    song: Option<Value>,
    slug: Option<Value>,
    debut: Option<Value>,
    times_played: Option<Value>,
    last_played: Option<Value>,
    gap: Option<Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Song {
    pub song_id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub debut: Option<String>,
    pub times_played: i64,
    pub last_played: Option<String>,
    pub gap: i64,
}

pub fn parse(raw: Value) -> Option<Song> {
    let r: RawSong = serde_json::from_value(raw)
        .map_err(|e| logd!("Skipping malformed song record: {e}"))
        .ok()?;

    Some(Song {
        song_id: coerce::int(r.songid.as_ref()),
        name: coerce::text(r.song.as_ref()),
        slug: coerce::text(r.slug.as_ref()),
        debut: coerce::text(r.debut.as_ref()),
        times_played: coerce::int_or(r.times_played.as_ref(), 0),
        last_played: coerce::text(r.last_played.as_ref()),
        gap: coerce::int_or(r.gap.as_ref(), 0),
    })
}

impl Tabular for Song {
    const HEADERS: &'static [&'static str] =
        &["SongID", "SongName", "Slug", "Debut", "TimesPlayed", "LastPlayed", "Gap"];

    fn row(&self) -> Vec<Cell> {
        cells![
            self.song_id,
            self.name.clone(),
            self.slug.clone(),
            self.debut.clone(),
            self.times_played,
            self.last_played.clone(),
            self.gap,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_counts_from_strings() {
        let s = parse(json!({
            "songid": "2",
            "song": "You Enjoy Myself",
            "slug": "you-enjoy-myself",
            "debut": "1986-02-03",
            "times_played": "618",
            "last_played": "2024-08-30",
            "gap": "3"
        }))
        .unwrap();
        assert_eq!(s.song_id, Some(2));
        assert_eq!(s.times_played, 618);
        assert_eq!(s.gap, 3);
        assert_eq!(s.slug.as_deref(), Some("you-enjoy-myself"));
    }

    #[test]
    fn missing_counts_default_to_zero() {
        let s = parse(json!({ "songid": 9, "song": "Fluffhead" })).unwrap();
        assert_eq!(s.times_played, 0);
        assert_eq!(s.gap, 0);
        assert_eq!(s.debut, None);
    }
}
