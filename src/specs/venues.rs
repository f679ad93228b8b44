// src/specs/venues.rs
//! Record *spec* for Venues.
//!
//! Endpoint: `venues.json` (single unparameterized request).
//! Columns: VenueID, VenueName, City, State, Country, PastShowsCount.
//! The name comes from `venuename`, falling back to `venue`.

use serde::Deserialize;
use serde_json::Value;

use crate::core::coerce;
use crate::data::{Cell, Tabular};

pub const ENDPOINT: &str = "venues.json";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawVenue {
    venueid: Option<Value>,
    venuename: Option<Value>,
    venue: Option<Value>,
    city: Option<Value>,
    state: Option<Value>,
    country: Option<Value>,
    past_shows: Option<Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Venue {
    pub venue_id: Option<i64>,
    pub venue_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub past_shows: i64,
}

pub fn parse(raw: Value) -> Option<Venue> {
    let r: RawVenue = serde_json::from_value(raw)
        .map_err(|e| logd!("Skipping malformed venue record: {e}"))
        .ok()?;

    Some(Venue {
        venue_id: coerce::int(r.venueid.as_ref()),
        venue_name: coerce::text(r.venuename.as_ref()).or_else(|| coerce::text(r.venue.as_ref())),
        city: coerce::text(r.city.as_ref()),
        state: coerce::text(r.state.as_ref()),
        country: coerce::text(r.country.as_ref()),
        past_shows: coerce::int_or(r.past_shows.as_ref(), 0),
    })
}

impl Tabular for Venue {
    const HEADERS: &'static [&'static str] =
        &["VenueID", "VenueName", "City", "State", "Country", "PastShowsCount"];

    fn row(&self) -> Vec<Cell> {
        cells![
            self.venue_id,
            self.venue_name.clone(),
            self.city.clone(),
            self.state.clone(),
            self.country.clone(),
            self.past_shows,
        ]
    }
}
