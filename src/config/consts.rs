// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://api.phish.net/v5";
pub const API_KEY_ENV: &str = "PHISHNET_API_KEY";
pub const API_KEY_PARAM: &str = "apikey";
pub const USER_AGENT: &str = "phishnet_fetch/0.2";
pub const TIMEOUT_SECS: u64 = 30;
pub const DATA_SOURCE: &str = "Phish.net API v5";

// Env overrides
pub const BASE_URL_ENV: &str = "PHISHNET_BASE_URL";
pub const OUTPUT_ENV: &str = "PHISHNET_OUTPUT";
pub const PAUSE_ENV: &str = "PHISHNET_PAUSE_MS";
pub const SETLISTS_ENV: &str = "PHISHNET_SETLISTS";
pub const FIRST_YEAR_ENV: &str = "PHISHNET_FIRST_YEAR";
pub const LAST_YEAR_ENV: &str = "PHISHNET_LAST_YEAR";

// Scrape
pub const FIRST_YEAR: i32 = 1983;
pub const LAST_YEAR: i32 = 2025;
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite
pub const PROGRESS_EVERY: usize = 100;

// Flatten defaults
pub const DEFAULT_ARTIST: &str = "Phish";
pub const DEFAULT_SET: &str = "Unknown";

// Export
pub const DEFAULT_OUT_FILE: &str = "Phish_Complete_Data_API.xlsx";
pub const HEADER_FILL: u32 = 0x00ADB5;
pub const HEADER_FONT_SIZE: f64 = 11.0;
pub const COLUMN_PAD: usize = 2;
/// Excel's per-cell text limit, in characters.
pub const MAX_CELL_CHARS: usize = 32_767;
pub const MAX_COLUMN_WIDTH: usize = 50;
pub const TOP_SONGS: usize = 50;
pub const TOP_STATES_PRINTED: usize = 10;

// Sheet names
pub const SHEET_SHOWS: &str = "Fact_Shows";
pub const SHEET_VENUES: &str = "Dim_Venues";
pub const SHEET_SONGS: &str = "Dim_Songs";
pub const SHEET_SETLISTS: &str = "Fact_Setlists";
pub const SHEET_ERAS: &str = "Fact_Era_Summary";
pub const SHEET_STATES: &str = "Fact_State_Summary";
pub const SHEET_YEARS: &str = "Fact_Year_Trend";
pub const SHEET_TOP_SONGS: &str = "Top_50_Songs";
pub const SHEET_METADATA: &str = "Metadata";
