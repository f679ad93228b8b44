// src/scrape/mod.rs
mod scrape;

pub use scrape::collect_setlists;
pub use scrape::collect_shows;
pub use scrape::collect_songs;
pub use scrape::collect_venues;
