// src/core/mod.rs

pub mod coerce;
pub mod net;

pub use net::{ApiClient, Fetch};
