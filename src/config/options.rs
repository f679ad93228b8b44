// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::error::FetchError;

/// Everything a run needs, sourced once at startup and passed down explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub first_year: i32,
    pub last_year: i32,
    pub pause: Duration,
    pub fetch_setlists: bool,
    pub output: PathBuf,
}

impl Config {
    /// Defaults for everything except the credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: s!(BASE_URL),
            first_year: FIRST_YEAR,
            last_year: LAST_YEAR,
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            fetch_setlists: true,
            output: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }

    /// Read from the process environment (after `.env`, if the caller loaded one).
    pub fn from_env() -> Result<Self, FetchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key → value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FetchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get(API_KEY_ENV).ok_or(FetchError::MissingApiKey)?;
        let mut cfg = Config::new(api_key);

        if let Some(url) = get(BASE_URL_ENV) {
            cfg.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(out) = get(OUTPUT_ENV) {
            cfg.output = PathBuf::from(out);
        }
        if let Some(ms) = get(PAUSE_ENV) {
            let ms: u64 = parse_setting(PAUSE_ENV, &ms)?;
            cfg.pause = Duration::from_millis(ms);
        }
        if let Some(flag) = get(SETLISTS_ENV) {
            cfg.fetch_setlists = parse_flag(SETLISTS_ENV, &flag)?;
        }
        if let Some(y) = get(FIRST_YEAR_ENV) {
            cfg.first_year = parse_setting(FIRST_YEAR_ENV, &y)?;
        }
        if let Some(y) = get(LAST_YEAR_ENV) {
            cfg.last_year = parse_setting(LAST_YEAR_ENV, &y)?;
        }
        if cfg.first_year > cfg.last_year {
            return Err(FetchError::InvalidSetting {
                name: FIRST_YEAR_ENV,
                value: format!("{} > {}", cfg.first_year, cfg.last_year),
            });
        }

        Ok(cfg)
    }

    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.first_year..=self.last_year
    }
}

fn parse_setting<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, FetchError> {
    value.parse().map_err(|_| FetchError::InvalidSetting { name, value: s!(value) })
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, FetchError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(FetchError::InvalidSetting { name, value: s!(value) }),
    }
}
