// src/summary.rs
//! Summary tables derived from the flattened shows and songs.
//!
//! Every grouping is order-insensitive in its input; output order is fixed:
//! eras chronologically, states by show count (descending, ties by name),
//! years ascending, songs by play count (descending, ties in feed order).

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::core::coerce::is_blank;
use crate::data::{Cell, Tabular};
use crate::era::Era;
use crate::specs::{Show, Song};

#[derive(Clone, Debug, PartialEq)]
pub struct EraSummary {
    pub era: Era,
    pub total_shows: usize,
    pub start_year: i32,
    pub end_year: i32,
    pub avg_shows_per_year: f64,
}

pub fn by_era(shows: &[Show]) -> Vec<EraSummary> {
    let mut groups: BTreeMap<Era, (usize, i32, i32)> = BTreeMap::new();
    for show in shows {
        let g = groups.entry(show.era).or_insert((0, show.year, show.year));
        g.0 += 1;
        g.1 = g.1.min(show.year);
        g.2 = g.2.max(show.year);
    }

    groups
        .into_iter()
        .map(|(era, (total, start, end))| EraSummary {
            era,
            total_shows: total,
            start_year: start,
            end_year: end,
            avg_shows_per_year: total as f64 / (end as f64 - start as f64 + 1.0),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateSummary {
    pub state: String,
    pub total_shows: usize,
    pub unique_venues: usize,
}

/// Shows with a missing or blank state are left out entirely.
/// Unique venues counts distinct, non-missing venue names.
pub fn by_state(shows: &[Show]) -> Vec<StateSummary> {
    let mut groups: HashMap<&str, (usize, HashSet<&str>)> = HashMap::new();
    for show in shows {
        if is_blank(&show.state) {
            continue;
        }
        let state = show.state.as_deref().unwrap_or_default();
        let g = groups.entry(state).or_default();
        g.0 += 1;
        if let Some(venue) = show.venue_name.as_deref() {
            g.1.insert(venue);
        }
    }

    let mut out: Vec<StateSummary> = groups
        .into_iter()
        .map(|(state, (total, venues))| StateSummary {
            state: s!(state),
            total_shows: total,
            unique_venues: venues.len(),
        })
        .collect();
    out.sort_by(|a, b| b.total_shows.cmp(&a.total_shows).then_with(|| a.state.cmp(&b.state)));
    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearTrend {
    pub year: i32,
    pub show_count: usize,
}

pub fn by_year(shows: &[Show]) -> Vec<YearTrend> {
    let mut groups: BTreeMap<i32, usize> = BTreeMap::new();
    for show in shows {
        *groups.entry(show.year).or_default() += 1;
    }
    groups
        .into_iter()
        .map(|(year, show_count)| YearTrend { year, show_count })
        .collect()
}

/// A song row in the top-N layout (no slug column).
#[derive(Clone, Debug, PartialEq)]
pub struct TopSong(pub Song);

pub fn top_songs(songs: &[Song], n: usize) -> Vec<TopSong> {
    let mut ranked: Vec<&Song> = songs.iter().collect();
    // stable: equal counts keep feed order
    ranked.sort_by(|a, b| b.times_played.cmp(&a.times_played));
    ranked.into_iter().take(n).cloned().map(TopSong).collect()
}

/// `"{min}-{max}"` over show years; empty when there are no shows.
pub fn year_range(shows: &[Show]) -> String {
    let min = shows.iter().map(|s| s.year).min();
    let max = shows.iter().map(|s| s.year).max();
    match (min, max) {
        (Some(lo), Some(hi)) => format!("{lo}-{hi}"),
        _ => s!(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Metadata {
    pub data_source: String,
    pub fetch_date: String,
    pub total_shows: usize,
    pub total_venues: usize,
    pub total_songs: usize,
    pub total_setlist_records: usize,
    pub year_range: String,
}

impl Tabular for EraSummary {
    const HEADERS: &'static [&'static str] =
        &["Era", "TotalShows", "StartYear", "EndYear", "AvgShowsPerYear"];
    fn row(&self) -> Vec<Cell> {
        cells![self.era.label(), self.total_shows, self.start_year, self.end_year, self.avg_shows_per_year]
    }
}

impl Tabular for StateSummary {
    const HEADERS: &'static [&'static str] = &["State", "TotalShows", "UniqueVenues"];
    fn row(&self) -> Vec<Cell> {
        cells![&self.state, self.total_shows, self.unique_venues]
    }
}

impl Tabular for YearTrend {
    const HEADERS: &'static [&'static str] = &["Year", "ShowCount"];
    fn row(&self) -> Vec<Cell> {
        cells![self.year, self.show_count]
    }
}

impl Tabular for TopSong {
    const HEADERS: &'static [&'static str] =
        &["SongID", "SongName", "TimesPlayed", "Debut", "LastPlayed", "Gap"];
    fn row(&self) -> Vec<Cell> {
        let s = &self.0;
        cells![s.song_id, s.name.clone(), s.times_played, s.debut.clone(), s.last_played.clone(), s.gap]
    }
}

impl Tabular for Metadata {
    const HEADERS: &'static [&'static str] = &[
        "DataSource", "FetchDate", "TotalShows", "TotalVenues", "TotalSongs",
        "TotalSetlistRecords", "YearRange",
    ];
    fn row(&self) -> Vec<Cell> {
        cells![
            &self.data_source,
            &self.fetch_date,
            self.total_shows,
            self.total_venues,
            self.total_songs,
            self.total_setlist_records,
            &self.year_range,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(year: i32, state: Option<&str>, venue: Option<&str>) -> Show {
        Show {
            show_id: Some(year as i64),
            show_date: None,
            year,
            venue_id: None,
            venue_name: venue.map(String::from),
            city: None,
            state: state.map(String::from),
            country: None,
            artist: s!("Phish"),
            tour_name: None,
            rating: None,
            review_count: 0,
            era: Era::from_year(year),
        }
    }

    fn song(id: i64, plays: i64) -> Song {
        Song {
            song_id: Some(id),
            name: Some(format!("Song {id}")),
            slug: None,
            debut: None,
            times_played: plays,
            last_played: None,
            gap: 0,
        }
    }

    #[test]
    fn era_counts_and_average() {
        let shows = vec![
            show(1995, None, None),
            show(1997, None, None),
            show(1997, None, None),
            show(2001, None, None),
            show(2019, None, None),
            show(0, None, None),
        ];
        let eras = by_era(&shows);
        let labels: Vec<&str> = eras.iter().map(|e| e.era.label()).collect();
        assert_eq!(labels, ["1.0", "Hiatus 1", "3.0", "Unknown"]);

        let one = &eras[0];
        assert_eq!((one.total_shows, one.start_year, one.end_year), (3, 1995, 1997));
        assert!((one.avg_shows_per_year - 1.0).abs() < 1e-12);

        let hiatus = &eras[1];
        assert_eq!(hiatus.total_shows, 1);
        assert!((hiatus.avg_shows_per_year - 1.0).abs() < 1e-12);
    }

    #[test]
    fn state_summary_skips_blank_and_sorts() {
        let shows = vec![
            show(2020, Some("VT"), Some("Sugarbush")),
            show(2020, Some("NY"), Some("MSG")),
            show(2020, Some("NY"), Some("MSG")),
            show(2020, Some("NY"), Some("SPAC")),
            show(2020, Some(""), Some("Somewhere")),
            show(2020, Some("  "), None),
            show(2020, None, None),
            show(2020, Some("CA"), None),
        ];
        let states = by_state(&shows);
        assert_eq!(
            states,
            vec![
                StateSummary { state: s!("NY"), total_shows: 3, unique_venues: 2 },
                StateSummary { state: s!("CA"), total_shows: 1, unique_venues: 0 },
                StateSummary { state: s!("VT"), total_shows: 1, unique_venues: 1 },
            ]
        );
    }

    #[test]
    fn yearly_trend_ascending() {
        let shows = vec![show(2021, None, None), show(1999, None, None), show(2021, None, None)];
        assert_eq!(
            by_year(&shows),
            vec![YearTrend { year: 1999, show_count: 1 }, YearTrend { year: 2021, show_count: 2 }]
        );
    }

    #[test]
    fn top_songs_descending_and_capped() {
        let songs: Vec<Song> = (1..=60).map(|i| song(i, i * 10)).collect();
        let top = top_songs(&songs, 50);
        assert_eq!(top.len(), 50);
        assert_eq!(top[0].0.song_id, Some(60));
        assert_eq!(top[49].0.song_id, Some(11));
    }

    #[test]
    fn top_songs_ties_keep_feed_order() {
        let songs = vec![song(1, 5), song(2, 9), song(3, 5)];
        let ids: Vec<Option<i64>> = top_songs(&songs, 50).iter().map(|t| t.0.song_id).collect();
        assert_eq!(ids, vec![Some(2), Some(1), Some(3)]);
    }

    #[test]
    fn year_range_text() {
        assert_eq!(year_range(&[show(1983, None, None), show(2024, None, None)]), "1983-2024");
        assert_eq!(year_range(&[]), "");
    }
}
