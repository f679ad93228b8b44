// src/specs/mod.rs
//! # Endpoint “specs” module
//!
//! This module hosts the **per-endpoint record specifications** for the Phish.net
//! v5 API. Each spec focuses on a single endpoint and encodes *which fields the
//! payload carries* and *how to flatten one raw record into a fixed row*.
//!
//! ## What lives here
//! - **Endpoint paths** (`shows/showyear/{year}.json`, `venues.json`, …).
//! - **Raw record shapes** (`serde` structs whose fields stay `serde_json::Value`,
//!   because the API mixes numbers and numeric strings).
//! - **Pure flattening**: raw record → typed row, with the documented defaults
//!   for absent fields (`core::coerce` does the tolerant reads).
//! - **Column schemas** via `data::Tabular`.
//!
//! ## What does **not** live here
//! - **Networking, pacing, progress** – that's `scrape::collect_*`.
//! - **Cross-record rules** (song de-duplication, setlist ids) – that's `process`.
//! - **Summaries and workbook styling** – `summary` and `file`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_* → core::net::Fetch::get_json(specs::<x>::endpoint(..))
//!                            ↘ specs::<x>::parse(raw) per record
//!        → process::* → summary::* → file::write_workbook
//! ```
//!
//! ## Conventions & invariants
//! - A record that is not a JSON object is skipped, never fatal.
//! - Identifiers are opaque integers; a missing id stays missing (`None`).
//! - Years coerce to `0` when absent or non-numeric.
pub mod setlists;
pub mod shows;
pub mod songs;
pub mod venues;

pub use setlists::{SetlistEntry, SetlistRecord};
pub use shows::Show;
pub use songs::Song;
pub use venues::Venue;
