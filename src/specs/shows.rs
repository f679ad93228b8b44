// src/specs/shows.rs
//! Record *spec* for Shows.
//!
//! Endpoint: `shows/showyear/{year}.json`, one request per year.
//!
//! Columns: ShowID, ShowDate, Year, VenueID, VenueName, City, State, Country,
//! Artist, TourName, Rating, ReviewCount, Era.
//!
//! Defaults: Artist → "Phish" (the `artist` field, else `artist_name`),
//! ReviewCount → 0, Year → 0 when not numeric. Era is derived, never read.

use serde::Deserialize;
use serde_json::Value;

use crate::config::consts::DEFAULT_ARTIST;
use crate::core::coerce;
use crate::data::{Cell, Tabular};
use crate::era::Era;

pub fn endpoint(year: i32) -> String {
    format!("shows/showyear/{year}.json")
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawShow {
    showid: Option<Value>,
    showdate: Option<Value>,
    showyear: Option<Value>,
    venueid: Option<Value>,
    venue: Option<Value>,
    city: Option<Value>,
    state: Option<Value>,
    country: Option<Value>,
    artist: Option<Value>,
    artist_name: Option<Value>,
    tour_name: Option<Value>,
    rating: Option<Value>,
    reviews_count: Option<Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Show {
    pub show_id: Option<i64>,
    pub show_date: Option<String>,
    pub year: i32,
    pub venue_id: Option<i64>,
    pub venue_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub artist: String,
    pub tour_name: Option<String>,
    pub rating: Option<f64>,
    pub review_count: i64,
    pub era: Era,
}

/// Flatten one raw show. `None` if the record is not an object.
pub fn parse(raw: Value) -> Option<Show> {
    let r: RawShow = match serde_json::from_value(raw) {
        Ok(r) => r,
        Err(e) => {
            logd!("Skipping malformed show record: {e}");
            return None;
        }
    };

    let year = coerce::year(r.showyear.as_ref());
    let artist = coerce::text(r.artist.as_ref())
        .or_else(|| coerce::text(r.artist_name.as_ref()))
        .unwrap_or_else(|| s!(DEFAULT_ARTIST));

    Some(Show {
        show_id: coerce::int(r.showid.as_ref()),
        show_date: coerce::text(r.showdate.as_ref()),
        year,
        venue_id: coerce::int(r.venueid.as_ref()),
        venue_name: coerce::text(r.venue.as_ref()),
        city: coerce::text(r.city.as_ref()),
        state: coerce::text(r.state.as_ref()),
        country: coerce::text(r.country.as_ref()),
        artist,
        tour_name: coerce::text(r.tour_name.as_ref()),
        rating: coerce::float(r.rating.as_ref()),
        review_count: coerce::int_or(r.reviews_count.as_ref(), 0),
        era: Era::from_year(year),
    })
}

impl Tabular for Show {
    const HEADERS: &'static [&'static str] = &[
        "ShowID", "ShowDate", "Year", "VenueID", "VenueName", "City", "State",
        "Country", "Artist", "TourName", "Rating", "ReviewCount", "Era",
    ];

    fn row(&self) -> Vec<Cell> {
        cells![
            self.show_id,
            self.show_date.clone(),
            self.year,
            self.venue_id,
            self.venue_name.clone(),
            self.city.clone(),
            self.state.clone(),
            self.country.clone(),
            &self.artist,
            self.tour_name.clone(),
            self.rating,
            self.review_count,
            self.era.label(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_full_record() {
        let raw = json!({
            "showid": "1252698446",
            "showdate": "1997-11-22",
            "showyear": "1997",
            "venueid": 157,
            "venue": "Hampton Coliseum",
            "city": "Hampton",
            "state": "VA",
            "country": "USA",
            "artist_name": "Phish",
            "tour_name": "1997 Fall Tour",
            "rating": "4.62",
            "reviews_count": 31
        });
        let show = parse(raw).unwrap();
        assert_eq!(show.show_id, Some(1252698446));
        assert_eq!(show.year, 1997);
        assert_eq!(show.venue_id, Some(157));
        assert_eq!(show.venue_name.as_deref(), Some("Hampton Coliseum"));
        assert_eq!(show.rating, Some(4.62));
        assert_eq!(show.review_count, 31);
        assert_eq!(show.era, Era::One);
    }

    #[test]
    fn defaults_for_missing_fields() {
        let show = parse(json!({ "showid": 1, "showyear": "TBD" })).unwrap();
        assert_eq!(show.year, 0);
        assert_eq!(show.era, Era::Unknown);
        assert_eq!(show.artist, "Phish");
        assert_eq!(show.review_count, 0);
        assert_eq!(show.state, None);
        assert_eq!(show.rating, None);
    }

    #[test]
    fn explicit_artist_wins() {
        let show = parse(json!({ "artist": "Trey Anastasio Band", "artist_name": "Phish" })).unwrap();
        assert_eq!(show.artist, "Trey Anastasio Band");
    }

    #[test]
    fn non_object_is_skipped() {
        assert!(parse(json!("nope")).is_none());
        assert!(parse(json!(12)).is_none());
    }

    #[test]
    fn row_matches_headers() {
        let show = parse(json!({ "showid": 5, "showyear": 2021, "state": "VT" })).unwrap();
        let row = show.row();
        assert_eq!(row.len(), Show::HEADERS.len());
        assert_eq!(row[0], Cell::Int(5));
        assert_eq!(row[6], Cell::Text(s!("VT")));
        assert_eq!(row[12], Cell::Text(s!("4.0")));
    }

    #[test]
    fn endpoint_path() {
        assert_eq!(endpoint(1983), "shows/showyear/1983.json");
    }
}
