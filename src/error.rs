// src/error.rs
use thiserror::Error;

/// Fatal conditions for a run. Per-request failures never surface here;
/// the client logs them and hands back "no data" instead.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("PHISHNET_API_KEY is not set. Create a .env file with your API key (see .env.example)")]
    MissingApiKey,

    #[error("Invalid value for {name}: {value:?}")]
    InvalidSetting { name: &'static str, value: String },

    #[error("HTTP client setup failed: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to fetch shows data")]
    NoShows,

    #[error("Workbook export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown arg: {0}")]
    UnknownArg(String),
}
